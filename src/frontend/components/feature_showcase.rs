use leptos::prelude::*;

use super::FeatureCard;
use crate::models::{FEATURE_LIST, FeatureEntry};

/// Grid of feature cards, one per entry, in the order given.
#[component]
pub fn FeatureShowcase(
    #[prop(default = FEATURE_LIST)] features: &'static [FeatureEntry],
) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="row">
                    {features
                        .iter()
                        .copied()
                        .map(|entry| view! { <FeatureCard entry=entry/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
