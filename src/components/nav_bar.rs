//! Top navigation with session-aware links.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionStore;

/// Site header. Anonymous visitors get login/register entries;
/// authenticated ones get their account links and a logout action.
/// Logging out from a gated page is safe: the route guard re-evaluates
/// and redirects.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let on_logout = move |_| session.logout();
    let is_admin = move || {
        session
            .state()
            .user
            .is_some_and(|u| u.role == Role::Admin)
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Privyde"</a>
            <nav class="nav-bar__links">
                <a href="/services">"Services"</a>
                <a href="/faq">"FAQ"</a>
                <Show
                    when=move || session.state().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Log in"</a>
                            <a class="nav-bar__cta" href="/register">"Register"</a>
                        }
                    }
                >
                    <a href="/trips">"Trips"</a>
                    <a href="/account">"Account"</a>
                    <Show when=is_admin>
                        <a href="/admin">"Admin"</a>
                    </Show>
                    <button class="nav-bar__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </nav>
        </header>
    }
}
