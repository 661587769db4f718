#[cfg(feature = "ssr")]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};
    use tracing_subscriber::EnvFilter;

    use hudbox_site::common::SiteError;
    use hudbox_site::models::SiteConfig;
    use hudbox_site::web::{self, ExportOptions};

    /// HudBox website - server-side rendering and static export
    #[derive(Parser, Debug)]
    #[command(name = "hudbox-site", version)]
    pub struct Args {
        #[command(subcommand)]
        command: Option<Command>,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Serve the site with server-side rendering (default)
        Serve,
        /// Render the landing page and its assets into a directory
        Export {
            /// Output directory
            #[arg(short, long, default_value = "dist")]
            out: PathBuf,

            /// Directory containing the `img/` icons
            #[arg(long, default_value = "public")]
            assets: PathBuf,

            /// Stylesheet copied next to the page
            #[arg(long, default_value = "style/main.css")]
            stylesheet: PathBuf,

            /// Override the site title
            #[arg(long)]
            title: Option<String>,

            /// Override the site tagline
            #[arg(long)]
            tagline: Option<String>,

            /// Path prefix the exported site is served under
            #[arg(long, default_value = "/")]
            base_url: String,
        },
    }

    fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    pub async fn run() -> Result<(), SiteError> {
        dotenvy::dotenv().ok();
        init_tracing();

        let args = Args::parse();
        match args.command.unwrap_or(Command::Serve) {
            Command::Serve => web::serve().await,
            Command::Export {
                out,
                assets,
                stylesheet,
                title,
                tagline,
                base_url,
            } => {
                let defaults = SiteConfig::default();
                let config = SiteConfig {
                    title: title.unwrap_or(defaults.title.clone()),
                    tagline: tagline.unwrap_or(defaults.tagline.clone()),
                    base_url,
                    ..defaults
                };
                let options = ExportOptions {
                    out_dir: out,
                    assets_dir: assets,
                    stylesheet: Some(stylesheet),
                    config,
                };
                let written = web::export_site(&options)?;
                tracing::info!(files = written.len(), out = %options.out_dir.display(), "export finished");
                Ok(())
            }
        }
    }
}

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> Result<(), hudbox_site::common::SiteError> {
    cli::run().await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // client-side entry point is `hydrate` in lib.rs
}
