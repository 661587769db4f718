//! 404 Not Found page

use leptos::prelude::*;

use crate::models::SiteConfig;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    let home = use_context::<SiteConfig>().unwrap_or_default().url("/");

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Page not found"</p>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href=home class="button button--primary">"Return Home"</a>
        </div>
    }
}
