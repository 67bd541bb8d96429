//! Trips page listing the rider's upcoming and past bookings.

use leptos::prelude::*;

/// Booking history shell. The booking flow itself starts from the
/// services pages; until a trip exists this renders the empty state.
#[component]
pub fn TripsPage() -> impl IntoView {
    view! {
        <div class="trips-page">
            <h1>"Your trips"</h1>
            <div class="trips-page__empty">
                <p>"No trips yet."</p>
                <a class="trips-page__cta" href="/services">"Book your first ride"</a>
            </div>
        </div>
    }
}
