//! Partner onboarding step: collect company details before first booking.
//!
//! Reached through `ProfileCompletionRoute`, so a session is guaranteed
//! present and still owing onboarding. The backend decides when the
//! profile counts as complete; the updated identity it returns replaces
//! the session user, which in turn unlocks the private routes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::AuthError;
use crate::net::types::CompanyProfile;
use crate::state::session::SessionStore;
use crate::util::validate::validate_company_profile;

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let company_name = RwSignal::new(String::new());
    let registration_number = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (company_value, registration_value, phone_value) = match validate_company_profile(
            &company_name.get(),
            &registration_number.get(),
            &phone.get(),
        ) {
            Ok(values) => values,
            Err(message) => {
                session.report(&AuthError::Validation(message.to_owned()));
                return;
            }
        };
        let Some(token) = session.state_untracked().token else {
            return;
        };
        let profile = CompanyProfile {
            company_name: company_value,
            registration_number: registration_value,
            phone: phone_value,
        };
        busy.set(true);
        session.clear_error();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_company_profile(&token, &profile).await {
                    Ok(resp) if resp.success => {
                        session.set_session(resp.user, token);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Ok(_) => {
                        // Backend answered 200 with success=false.
                        session.report(&AuthError::Credential {
                            status: 200,
                            message: "Could not save your profile. Try again.".to_owned(),
                        });
                    }
                    Err(err) => session.report(&err),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, profile, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Complete your company profile"</h1>
                <p class="auth-card__subtitle">
                    "We need a few details before your fleet can take bookings."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Company name"
                        prop:value=move || company_name.get()
                        on:input=move |ev| company_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Registration number"
                        prop:value=move || registration_number.get()
                        on:input=move |ev| registration_number.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Contact phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Save and continue"
                    </button>
                </form>
                <Show when=move || session.state().error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || session.state().error.unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
