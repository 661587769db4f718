use leptos::prelude::*;

use crate::models::SiteConfig;

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let home = config.url("/");
    let logo = config.url("/img/hudbox-window.svg");
    let docs = config.url(&config.docs_route);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href=home class="navbar__brand">
                    <img class="navbar__logo" src=logo alt=""/>
                    <span class="navbar__title">{config.title}</span>
                </a>
                <div class="navbar__items">
                    <a href=docs class="navbar__link">"Docs"</a>
                    <a
                        href=config.repository_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="navbar__link"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}
