//! Landing route for the Google OAuth redirect leg.
//!
//! The backend sends the visitor back here with `?credential=...&role=...`;
//! the credential is exchanged for a session and injected into the store.
//! Failures fall back to the login page with the error left in session
//! state for inline display there.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::spinner::Spinner;
use crate::net::types::Role;
use crate::state::session::SessionStore;

#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    // One-shot exchange; query-map updates must not replay it.
    let attempted = RwSignal::new(false);
    Effect::new(move || {
        if attempted.get() {
            return;
        }
        let params = query.get();
        let Some(credential) = params.get("credential") else {
            return;
        };
        let role = params
            .get("role")
            .as_deref()
            .and_then(Role::parse)
            .unwrap_or_default();
        attempted.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.login_with_google(&credential, role).await;
                let state = session.state_untracked();
                let target = crate::state::session::post_auth_target(&state).unwrap_or("/login");
                navigate(target, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, role, &navigate);
        }
    });

    view! {
        <div class="oauth-page">
            <Spinner/>
            <p class="oauth-page__note">"Signing you in..."</p>
        </div>
    }
}
