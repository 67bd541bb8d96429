//! Route-level authorization gates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each gate wraps a nested route tree: it maps the current session to a
//! `RouteDecision` (the pure logic lives in `state::guard`) and renders a
//! spinner, a redirect, or the nested outlet. Guards re-evaluate on every
//! session change, so a logout from anywhere bounces the visitor off a
//! gated page without any extra wiring.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::spinner::Spinner;
use crate::state::guard::{RouteDecision, decide_admin, decide_private, decide_profile_completion};
use crate::state::session::SessionStore;

fn apply(decision: RouteDecision) -> AnyView {
    match decision {
        RouteDecision::Spinner => view! { <Spinner/> }.into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path.to_owned()/> }.into_any(),
        RouteDecision::Render => view! { <Outlet/> }.into_any(),
    }
}

/// Gate for routes that require a signed-in, onboarded account.
#[component]
pub fn PrivateRoute() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || {
        let state = session.state();
        apply(decide_private(state.user.as_ref(), state.loading))
    }
}

/// Gate for the onboarding step; only reachable while onboarding is owed.
#[component]
pub fn ProfileCompletionRoute() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || {
        let state = session.state();
        apply(decide_profile_completion(state.user.as_ref(), state.loading))
    }
}

/// Gate for the admin dashboard.
#[component]
pub fn AdminRoute() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || {
        let state = session.state();
        apply(decide_admin(state.user.as_ref(), state.loading))
    }
}
