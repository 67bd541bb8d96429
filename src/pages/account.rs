//! Account page showing the signed-in identity.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Reached through `PrivateRoute`, so a user is present whenever this
/// renders; the unwrap-free fallbacks below only cover the brief window
/// around logout before the guard redirects.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let on_logout = move |_| session.logout();

    let field = move |pick: fn(&crate::net::types::User) -> String| {
        session.state().user.as_ref().map(pick).unwrap_or_default()
    };

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>
            <dl class="account-page__details">
                <dt>"Name"</dt>
                <dd>{move || field(|u| u.name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{move || field(|u| u.email.clone())}</dd>
                <dt>"Account type"</dt>
                <dd>{move || field(|u| u.role.as_str().to_owned())}</dd>
            </dl>
            <button class="account-page__logout" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
