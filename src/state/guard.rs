//! Route-gating decisions derived from session state.
//!
//! DESIGN
//! ======
//! Each guard is a pure function of `(user, loading)` returning a tagged
//! decision, so the authorization rules are testable without a router.
//! Loading is checked first and is terminal for that render: no redirect
//! is decided while the persisted session is still being restored, even
//! if a user is already known. Guards never fail; unauthorized access
//! always resolves to a redirect.
//!
//! These gates are a UX convenience only. Authorization is enforced by
//! the backend; the client-supplied role is not a security boundary.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Role, User};

/// What a guard tells the router to do for the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; block the route behind a spinner.
    Spinner,
    /// Send the visitor elsewhere.
    Redirect(&'static str),
    /// Let the nested routes render.
    Render,
}

/// Gate for authenticated routes (`/trips`, `/account`).
///
/// Accounts that still owe onboarding are detoured to the completion
/// step before they can reach anything else.
pub fn decide_private(user: Option<&User>, loading: bool) -> RouteDecision {
    if loading {
        return RouteDecision::Spinner;
    }
    match user {
        None => RouteDecision::Redirect("/login"),
        Some(user) if !user.profile_completed => RouteDecision::Redirect("/complete-profile"),
        Some(_) => RouteDecision::Render,
    }
}

/// Gate for the onboarding step itself (`/complete-profile`).
///
/// Mirror image of [`decide_private`]: once onboarding is done the step
/// is no longer reachable.
pub fn decide_profile_completion(user: Option<&User>, loading: bool) -> RouteDecision {
    if loading {
        return RouteDecision::Spinner;
    }
    match user {
        None => RouteDecision::Redirect("/login"),
        Some(user) if user.profile_completed => RouteDecision::Redirect("/"),
        Some(_) => RouteDecision::Render,
    }
}

/// Gate for the admin dashboard (`/admin`).
///
/// Anonymous and non-admin visitors land on the home page, not the login
/// form. Admins pass regardless of `profile_completed`; that exception
/// is deliberate.
pub fn decide_admin(user: Option<&User>, loading: bool) -> RouteDecision {
    if loading {
        return RouteDecision::Spinner;
    }
    match user {
        None => RouteDecision::Redirect("/"),
        Some(user) if user.role != Role::Admin => RouteDecision::Redirect("/"),
        Some(_) => RouteDecision::Render,
    }
}
