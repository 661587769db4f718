pub mod export;
pub mod middleware;
pub mod server;

pub use export::{ExportOptions, export_site, render_landing_document};
pub use middleware::SecurityHeaders;
pub use server::{serve, site_app};
