//! Admin dashboard shell with URL-mirrored section navigation.
//!
//! DESIGN
//! ======
//! The active section lives in the `?section=` query parameter, not in
//! component state, so sections are deep-linkable and survive reloads.
//! Unknown or absent values fall back to the overview.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config;

/// Dashboard sections, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminSection {
    #[default]
    Overview,
    Bookings,
    Partners,
    Users,
    Settings,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Overview,
        AdminSection::Bookings,
        AdminSection::Partners,
        AdminSection::Users,
        AdminSection::Settings,
    ];

    /// Query-parameter value for this section.
    pub fn as_query(self) -> &'static str {
        match self {
            AdminSection::Overview => "overview",
            AdminSection::Bookings => "bookings",
            AdminSection::Partners => "partners",
            AdminSection::Users => "users",
            AdminSection::Settings => "settings",
        }
    }

    /// Resolve a `?section=` value; anything unknown is the overview.
    pub fn from_query(value: Option<&str>) -> AdminSection {
        match value {
            Some("bookings") => AdminSection::Bookings,
            Some("partners") => AdminSection::Partners,
            Some("users") => AdminSection::Users,
            Some("settings") => AdminSection::Settings,
            _ => AdminSection::Overview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminSection::Overview => "Overview",
            AdminSection::Bookings => "Bookings",
            AdminSection::Partners => "Partners",
            AdminSection::Users => "Users",
            AdminSection::Settings => "Settings",
        }
    }
}

/// Link target that keeps the section in the URL. The overview is the
/// bare `/admin` path so the canonical entry stays clean.
fn section_href(section: AdminSection) -> String {
    match section {
        AdminSection::Overview => "/admin".to_owned(),
        section => format!("/admin?section={}", section.as_query()),
    }
}

fn section_link_class(active: bool) -> &'static str {
    if active {
        "admin-page__link admin-page__link--active"
    } else {
        "admin-page__link"
    }
}

/// Human-readable status for a build-time integration key.
fn integration_status(value: &str) -> &'static str {
    if value.is_empty() { "Not configured" } else { "Configured" }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let query = use_query_map();
    let active = move || AdminSection::from_query(query.get().get("section").as_deref());

    view! {
        <div class="admin-page">
            <aside class="admin-page__nav">
                <h2>"Dashboard"</h2>
                {AdminSection::ALL
                    .iter()
                    .map(|section| {
                        let section = *section;
                        view! {
                            <a
                                class=move || section_link_class(active() == section)
                                href=section_href(section)
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </aside>
            <section class="admin-page__content">
                {move || match active() {
                    AdminSection::Overview => view! {
                        <div class="admin-panel">
                            <h1>"Overview"</h1>
                            <div class="admin-panel__tiles">
                                <div class="admin-tile">
                                    <span class="admin-tile__value">"0"</span>
                                    <span class="admin-tile__label">"Open bookings"</span>
                                </div>
                                <div class="admin-tile">
                                    <span class="admin-tile__value">"0"</span>
                                    <span class="admin-tile__label">"Pending partners"</span>
                                </div>
                                <div class="admin-tile">
                                    <span class="admin-tile__value">"0"</span>
                                    <span class="admin-tile__label">"New riders this week"</span>
                                </div>
                            </div>
                        </div>
                    }.into_any(),
                    AdminSection::Bookings => view! {
                        <div class="admin-panel">
                            <h1>"Bookings"</h1>
                            <p class="admin-panel__empty">"No bookings to review."</p>
                        </div>
                    }.into_any(),
                    AdminSection::Partners => view! {
                        <div class="admin-panel">
                            <h1>"Partners"</h1>
                            <p class="admin-panel__empty">"No partner applications waiting."</p>
                        </div>
                    }.into_any(),
                    AdminSection::Users => view! {
                        <div class="admin-panel">
                            <h1>"Users"</h1>
                            <p class="admin-panel__empty">"User search will appear here."</p>
                        </div>
                    }.into_any(),
                    AdminSection::Settings => view! {
                        <div class="admin-panel">
                            <h1>"Settings"</h1>
                            <dl class="admin-panel__settings">
                                <dt>"Google sign-in"</dt>
                                <dd>{integration_status(config::google_client_id())}</dd>
                                <dt>"Stripe payments"</dt>
                                <dd>{integration_status(config::stripe_publishable_key())}</dd>
                                <dt>"API endpoint"</dt>
                                <dd>
                                    {if config::api_base().is_empty() {
                                        "Same origin".to_owned()
                                    } else {
                                        config::api_base().to_owned()
                                    }}
                                </dd>
                            </dl>
                        </div>
                    }.into_any(),
                }}
            </section>
        </div>
    }
}
