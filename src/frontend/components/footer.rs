use leptos::prelude::*;

use crate::models::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <footer class="footer">
            <div class="container text--center">
                <p class="footer__title">{config.title}</p>
                <p class="footer__tagline">{config.tagline}</p>
                <p class="footer__copyright">"MIT License."</p>
            </div>
        </footer>
    }
}
