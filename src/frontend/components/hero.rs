use leptos::prelude::*;

use crate::models::{CallToAction, SiteConfig};

/// Hero banner: site title, tagline and the two calls to action.
#[component]
pub fn HomepageHeader() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let [start, github] = config.calls_to_action();

    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{config.title}</h1>
                <p class="hero__subtitle">{config.tagline}</p>
                <div class="buttons">
                    <CtaLink cta=start classes="button button--secondary button--lg"/>
                    <CtaLink cta=github classes="button button--outline button--lg button--spaced"/>
                </div>
            </div>
        </header>
    }
}

#[component]
fn CtaLink(cta: CallToAction, classes: &'static str) -> impl IntoView {
    view! {
        <a
            class=classes
            href=cta.href
            target=cta.target.target_attr()
            rel=cta.target.rel_attr()
        >
            {cta.label}
        </a>
    }
}
