//! Marketing landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Your chauffeur, wherever you are"</h1>
                <p class="home-hero__subtitle">
                    "Professional drivers, fixed prices, and a global network of partners."
                </p>
                <div class="home-hero__actions">
                    <a class="home-hero__cta" href="/register">"Get started"</a>
                    <a class="home-hero__secondary" href="/services">"Explore services"</a>
                </div>
            </section>
            <section class="home-teasers">
                <div class="home-teaser">
                    <h3>"Airport transfers"</h3>
                    <p>"Flight tracking and free waiting time on every pickup."</p>
                </div>
                <div class="home-teaser">
                    <h3>"City-to-city"</h3>
                    <p>"Door-to-door rides between cities at a fixed price."</p>
                </div>
                <div class="home-teaser">
                    <h3>"Hourly hire"</h3>
                    <p>"A chauffeur on standby for as long as you need one."</p>
                </div>
            </section>
            <section class="home-partner">
                <h2>"Own a fleet?"</h2>
                <p>"Join as a partner and put your vehicles to work on our network."</p>
                <a class="home-partner__cta" href="/register">"Drive with us"</a>
            </section>
        </div>
    }
}
