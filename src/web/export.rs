use std::fs;
use std::path::{Path, PathBuf};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::common::SiteError;
use crate::frontend::pages::{DocsIntro, LandingPage, NotFound};
use crate::models::SiteConfig;

pub const INDEX_FILE: &str = "index.html";
pub const NOT_FOUND_FILE: &str = "404.html";
pub const STYLESHEET_FILE: &str = "style.css";
pub const ICON_DIR: &str = "img";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Directory holding the `img/` icon folder.
    pub assets_dir: PathBuf,
    pub stylesheet: Option<PathBuf>,
    /// Links and asset paths are resolved against `config.base_url`.
    pub config: SiteConfig,
}

fn render_document<V, F>(config: &SiteConfig, title: String, page: F) -> String
where
    V: IntoView + 'static,
    F: FnOnce() -> V,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(config.clone());
        let description = config.description.clone();
        let stylesheet = config.url(STYLESHEET_FILE);
        let content = page();

        let document = view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name="description" content=description/>
                    <title>{title}</title>
                    <link rel="stylesheet" href=stylesheet/>
                </head>
                <body>{content}</body>
            </html>
        };
        document.to_html()
    })
}

/// Render the landing page as a standalone HTML document.
pub fn render_landing_document(config: &SiteConfig) -> String {
    render_document(config, config.page_title(), || view! { <LandingPage/> })
}

pub fn render_docs_document(config: &SiteConfig) -> String {
    let title = format!("Getting Started | {}", config.title);
    render_document(config, title, || view! { <DocsIntro/> })
}

pub fn render_not_found_document(config: &SiteConfig) -> String {
    let title = format!("Page not found | {}", config.title);
    render_document(config, title, || view! { <NotFound/> })
}

/// Output file serving the site-internal `route`, e.g. `/docs/intro` maps
/// to `docs/intro/index.html`.
pub fn route_file(out_dir: &Path, route: &str) -> PathBuf {
    let route = route.trim_matches('/');
    if route.is_empty() {
        out_dir.join(INDEX_FILE)
    } else {
        out_dir.join(route).join(INDEX_FILE)
    }
}

/// Write the site pages and their assets into `options.out_dir`.
///
/// Returns the paths written: landing page, docs page, 404 page, icons,
/// stylesheet. Nothing is written when an input is missing.
pub fn export_site(options: &ExportOptions) -> Result<Vec<PathBuf>, SiteError> {
    let icon_src = options.assets_dir.join(ICON_DIR);
    if !icon_src.is_dir() {
        return Err(SiteError::MissingAssets(icon_src));
    }
    if let Some(stylesheet) = options.stylesheet.as_ref().filter(|s| !s.is_file()) {
        return Err(SiteError::MissingStylesheet(stylesheet.clone()));
    }

    let config = &options.config;
    let pages = [
        (route_file(&options.out_dir, "/"), render_landing_document(config)),
        (
            route_file(&options.out_dir, &config.docs_route),
            render_docs_document(config),
        ),
        (options.out_dir.join(NOT_FOUND_FILE), render_not_found_document(config)),
    ];

    let mut written = Vec::new();
    for (path, html) in pages {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        tracing::info!(path = %path.display(), "wrote page");
        written.push(path);
    }

    let icon_dst = options.out_dir.join(ICON_DIR);
    fs::create_dir_all(&icon_dst)?;
    written.extend(copy_icons(&icon_src, &icon_dst)?);

    if let Some(stylesheet) = &options.stylesheet {
        let dst = options.out_dir.join(STYLESHEET_FILE);
        fs::copy(stylesheet, &dst)?;
        tracing::info!(path = %dst.display(), "copied stylesheet");
        written.push(dst);
    }

    Ok(written)
}

fn copy_icons(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut entries = fs::read_dir(src)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    let mut copied = Vec::new();
    for path in entries {
        let is_svg = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        let Some(name) = path.file_name().filter(|_| is_svg && path.is_file()) else {
            tracing::debug!(path = %path.display(), "skipping non-icon asset");
            continue;
        };

        let target = dst.join(name);
        fs::copy(&path, &target)?;
        tracing::info!(path = %target.display(), "copied icon");
        copied.push(target);
    }
    Ok(copied)
}
