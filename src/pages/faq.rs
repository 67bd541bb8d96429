//! Frequently asked questions.

use leptos::prelude::*;

const FAQS: [(&str, &str); 5] = [
    (
        "How far in advance do I need to book?",
        "Rides can be booked up to the pickup time, subject to availability; we \
         recommend booking at least an hour ahead in busy cities.",
    ),
    (
        "What happens if my flight is delayed?",
        "Airport pickups include flight tracking. Your chauffeur adjusts to the \
         actual arrival time at no extra cost.",
    ),
    (
        "Can I cancel a booking?",
        "Yes, free of charge up to one hour before pickup for standard rides.",
    ),
    (
        "Which payment methods do you accept?",
        "All major credit and debit cards, processed securely at checkout.",
    ),
    (
        "How do I join as a partner company?",
        "Register a partner account, complete your company profile, and our team \
         reviews the application, usually within two business days.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="faq-page">
            <h1>"Frequently asked questions"</h1>
            <dl class="faq-page__list">
                {FAQS
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <dt>{*question}</dt>
                            <dd>{*answer}</dd>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
    }
}
