//! Loading placeholder shown while the session is resolving.

use leptos::prelude::*;

/// Centered spinner used by the route guards and async pages.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
