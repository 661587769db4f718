pub use card_animation::*;
pub use feature::*;
pub use site_config::*;
pub use window_sample::*;

mod card_animation;
mod feature;
mod site_config;
mod window_sample;
