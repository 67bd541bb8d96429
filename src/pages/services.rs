//! Service descriptions for the chauffeur offerings.

use leptos::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
    detail: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Airport transfers",
        description: "Meet-and-greet pickups with flight tracking.",
        detail: "Your chauffeur monitors the flight and adjusts the pickup time; \
                 60 minutes of waiting are always included.",
    },
    Service {
        title: "City-to-city rides",
        description: "Fixed-price intercity travel, door to door.",
        detail: "Popular routes are priced up front with no surge. Work, rest, or \
                 take a call while your chauffeur drives.",
    },
    Service {
        title: "Hourly and full-day hire",
        description: "A chauffeur and car on standby, by the hour.",
        detail: "Roadshows, events, or errands across town: keep the same car and \
                 driver for as long as you book them.",
    },
    Service {
        title: "Executive vans",
        description: "Group travel with the same service standard.",
        detail: "Up to seven passengers with luggage, for delegations, crews, and \
                 family trips.",
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services-page">
            <h1>"Services"</h1>
            <div class="services-page__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="service-card">
                                <h3>{service.title}</h3>
                                <p class="service-card__description">{service.description}</p>
                                <p class="service-card__detail">{service.detail}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
