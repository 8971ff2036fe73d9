//! Public landing page.

use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    (
        "You are our #1 priority",
        "Need to talk to a representative? You can get in touch through our 24/7 chat or through a phone call in less than 5 minutes.",
    ),
    (
        "More savings means higher rates",
        "The more you save with us, the higher your interest rate will be!",
    ),
    (
        "Security you can trust",
        "We use top of the line encryption to make sure your data and money is always safe.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <div class="hero">
                <section class="hero-content">
                    <h2 class="sr-only">"Promoted Content"</h2>
                    <p class="subtitle">"No fees."</p>
                    <p class="subtitle">"No minimum deposit."</p>
                    <p class="subtitle">"High interest rates."</p>
                    <p class="text">"Open a savings account with Argent Bank today!"</p>
                </section>
            </div>
            <section class="features">
                <h2 class="sr-only">"Features"</h2>
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature-item">
                                <h3 class="feature-item-title">{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
