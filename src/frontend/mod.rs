pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::models::SiteConfig;
use pages::{DocsIntro, LandingPage, NotFound};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing.
///
/// Falls back to the built-in [`SiteConfig`] when the host did not provide
/// one, and re-provides it so every page reads the same values.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<SiteConfig>().unwrap_or_default();
    let title = config.page_title();
    let description = config.description.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/hudbox-site.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/docs/intro") view=DocsIntro/>
            </Routes>
        </Router>
    }
}
