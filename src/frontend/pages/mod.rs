//! Page components for the HudBox site

mod docs_intro;
mod landing;
mod not_found;

pub use docs_intro::DocsIntro;
pub use landing::LandingPage;
pub use not_found::NotFound;
