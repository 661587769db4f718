pub mod errors;

pub use errors::SiteError;
