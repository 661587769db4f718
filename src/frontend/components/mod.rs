//! Reusable UI components for the HudBox site

mod feature_card;
mod feature_showcase;
mod footer;
mod hero;
mod nav;
mod rich_text;

pub use feature_card::{FeatureCard, finish_animation, start_animation};
pub use feature_showcase::FeatureShowcase;
pub use footer::Footer;
pub use hero::HomepageHeader;
pub use nav::Nav;
pub use rich_text::RichText;
