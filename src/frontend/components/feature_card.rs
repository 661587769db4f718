use leptos::prelude::*;

use super::RichText;
use crate::models::{CardAnimation, FeatureEntry, SiteConfig};

/// `mouseenter` handler of a card.
pub fn start_animation(animation: RwSignal<CardAnimation>) {
    animation.update(|state| *state = state.pointer_enter());
}

/// `animationend` handler of a card icon.
pub fn finish_animation(animation: RwSignal<CardAnimation>) {
    animation.update(|state| *state = state.animation_end());
}

/// A single feature card. Hovering the card plays the jello animation on
/// its icon; the class is dropped again on `animationend` so the next hover
/// retriggers it.
#[component]
pub fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let animation = RwSignal::new(CardAnimation::default());
    let alt = entry.plain_description();

    view! {
        <div
            class="col col--4 feature"
            on:mouseenter=move |_| start_animation(animation)
        >
            <div class="text--center">
                <img
                    src=config.url(entry.icon)
                    alt=alt
                    role="img"
                    class="feature-svg animate__animated"
                    class=(CardAnimation::CLASS, move || animation.get().is_animating())
                    on:animationend=move |_| finish_animation(animation)
                />
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{entry.title}</h3>
                <p><RichText segments=entry.description/></p>
            </div>
        </div>
    }
}
