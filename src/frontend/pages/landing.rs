use leptos::prelude::*;

use crate::frontend::components::{FeatureShowcase, Footer, HomepageHeader, Nav};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Nav/>
            <HomepageHeader/>
            <main>
                <FeatureShowcase/>
            </main>
            <Footer/>
        </div>
    }
}
