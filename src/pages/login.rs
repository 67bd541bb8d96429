//! Login page with email/password credentials and Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::net::error::AuthError;
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::validate::validate_login;

/// URL that hands the visitor to the backend's Google OAuth leg. The
/// backend redirects back to `/auth/google` with the credential.
fn google_start_url(base: &str, role: Role) -> String {
    format!("{base}/api/auth/google/start?role={}", role.as_str())
}

/// Class for the rider/partner toggle buttons shared with the register page.
pub(crate) fn role_tab_class(active: bool) -> &'static str {
    if active {
        "auth-card__role auth-card__role--active"
    } else {
        "auth-card__role"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                session.report(&AuthError::Validation(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session
                    .login(&email_value, &password_value, role.get_untracked())
                    .await;
                let state = session.state_untracked();
                if let Some(target) = crate::state::session::post_auth_target(&state) {
                    navigate(target, leptos_router::NavigateOptions::default());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <div class="auth-card__roles">
                    <button
                        type="button"
                        class=move || role_tab_class(role.get() == Role::User)
                        on:click=move |_| role.set(Role::User)
                    >
                        "Rider"
                    </button>
                    <button
                        type="button"
                        class=move || role_tab_class(role.get() == Role::Company)
                        on:click=move |_| role.set(Role::Company)
                    >
                        "Partner"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || session.state().error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || session.state().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=|| !config::google_client_id().is_empty()>
                    <div class="auth-divider"></div>
                    <a
                        class="auth-button auth-button--google"
                        rel="external"
                        href=move || google_start_url(config::api_base(), role.get())
                    >
                        "Continue with Google"
                    </a>
                </Show>
                <p class="auth-card__footer">
                    "New to Privyde? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
