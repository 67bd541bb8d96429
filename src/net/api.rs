//! REST calls against the booking backend's auth and profile endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, AuthError>`; callers write failures
//! into session state instead of panicking, so a rejected login degrades
//! to an inline message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{AuthResponse, CompanyProfile, ProfileUpdateResponse, RegisterRequest, Role};
#[cfg(any(test, feature = "hydrate"))]
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{}/api/auth/login", config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{}/api/auth/register", config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn google_endpoint() -> String {
    format!("{}/api/auth/google", config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn update_company_endpoint() -> String {
    format!("{}/api/profile/update-company", config::api_base())
}

/// Error body shape the backend uses for rejections.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
    AuthError::from_status(status, message)
}

#[cfg(feature = "hydrate")]
async fn post_auth(url: &str, payload: &serde_json::Value) -> Result<AuthResponse, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

/// Exchange email/password credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// `AuthError::Credential` when the backend rejects the credentials,
/// `AuthError::Network` when it is unreachable.
pub async fn login(email: &str, password: &str, role: Role) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "role": role });
        post_auth(&login_endpoint(), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, role);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Create a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(request).map_err(|e| AuthError::Network(e.to_string()))?;
        post_auth(&register_endpoint(), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Exchange a Google credential for a session via `POST /api/auth/google`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn login_google(credential: &str, role: Role) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "credential": credential, "role": role });
        post_auth(&google_endpoint(), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, role);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Submit partner company details via `POST /api/profile/update-company`.
///
/// Bearer-authenticated with the session token.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn update_company_profile(
    token: &str,
    profile: &CompanyProfile,
) -> Result<ProfileUpdateResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&update_company_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .json(profile)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<ProfileUpdateResponse>()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}
