//! Registration page for rider and partner-company accounts.
//!
//! Company accounts are created in two steps: this form opens the
//! account, then the profile-completion route collects company details.
//! The guard on that route enforces the detour, so this page only has to
//! navigate to wherever the fresh session belongs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::AuthError;
use crate::net::types::{RegisterRequest, Role};
use crate::pages::login::role_tab_class;
use crate::state::session::SessionStore;
use crate::util::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_registration(&name.get(), &email.get(), &password.get(), &confirm.get())
            {
                Ok(values) => values,
                Err(message) => {
                    session.report(&AuthError::Validation(message.to_owned()));
                    return;
                }
            };
        let request = RegisterRequest {
            email: email_value,
            password: password_value,
            name: name_value,
            role: role.get_untracked(),
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.register(request).await;
                let state = session.state_untracked();
                if let Some(target) = crate::state::session::post_auth_target(&state) {
                    navigate(target, leptos_router::NavigateOptions::default());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <div class="auth-card__roles">
                    <button
                        type="button"
                        class=move || role_tab_class(role.get() == Role::User)
                        on:click=move |_| role.set(Role::User)
                    >
                        "Ride with us"
                    </button>
                    <button
                        type="button"
                        class=move || role_tab_class(role.get() == Role::Company)
                        on:click=move |_| role.set(Role::Company)
                    >
                        "Drive with us"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder=move || {
                            if role.get() == Role::Company { "Contact name" } else { "Full name" }
                        }
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Repeat password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || session.state().error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || session.state().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || role.get() == Role::Company>
                    <p class="auth-card__hint">
                        "After registering we ask for your company details before the first booking."
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
