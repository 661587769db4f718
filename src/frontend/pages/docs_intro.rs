//! Getting-started page linked from the hero banner

use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::models::{SiteConfig, WindowConfigSample};

#[component]
pub fn DocsIntro() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let sample = WindowConfigSample::default_file().unwrap_or_default();

    view! {
        <div class="docs">
            <Nav/>
            <article class="container docs__content">
                <h1>"Getting Started"</h1>
                <p>
                    {config.title.clone()}
                    " opens one frameless GTK4 window per entry in its configuration file and loads the given address with WebKitGTK."
                </p>
                <h2>"Configuration"</h2>
                <p>
                    "On first launch a default configuration is written to "
                    <code>"~/.hudbox.json"</code>
                    ". It holds a JSON array; every object describes one window:"
                </p>
                <pre class="docs__code"><code>{sample}</code></pre>
                <ul>
                    <li><code>"opacity"</code>" ranges from 0.0 to 1.0."</li>
                    <li><code>"transparent"</code>" clears the window and page backgrounds."</li>
                    <li><code>"locked"</code>" disables click\u{2011}and\u{2011}drag moving."</li>
                </ul>
                <p>
                    "Source code and releases live on "
                    <a href=config.repository_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    "."
                </p>
            </article>
            <Footer/>
        </div>
    }
}
