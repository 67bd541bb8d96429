//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde handles the
//! whole boundary; fields the backend may omit carry serde defaults
//! instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account kind, as the backend spells it on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A rider booking trips for themselves.
    #[default]
    User,
    /// A partner company operating vehicles on the platform.
    Company,
    /// Platform staff with access to the admin dashboard.
    Admin,
}

impl Role {
    /// Wire/form value for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }

    /// Parse a wire/form value. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "company" => Some(Role::Company),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// An authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account kind; decides which gated routes are reachable.
    pub role: Role,
    /// Whether onboarding finished. Gates most authenticated routes.
    #[serde(default)]
    pub profile_completed: bool,
}

/// Successful response from `POST /api/auth/login|register|google`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// The identity the token belongs to.
    pub user: User,
}

/// Request body for `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Company details submitted from the partner onboarding step.
#[derive(Clone, Debug, Serialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub registration_number: String,
    pub phone: String,
}

/// Response from `POST /api/profile/update-company`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdateResponse {
    pub success: bool,
    /// The updated identity record, with `profile_completed` reflecting
    /// the backend's decision.
    pub user: User,
}
