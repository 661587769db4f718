#![allow(dead_code)]

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use hudbox_site::models::*;

/// Render a view to HTML inside a fresh reactive owner, with `config`
/// provided as the site configuration when given.
pub fn render_html<F, V>(config: Option<SiteConfig>, view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| {
        if let Some(config) = config {
            provide_context(config);
        }
        view().to_html()
    })
}

/// Escape text the way it appears inside an HTML text node.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Text content of the first element whose opening tag contains `marker`,
/// with hydration markers removed.
pub fn inner_text_after(html: &str, marker: &str) -> Option<String> {
    let start = html.find(marker)?;
    let rest = &html[start..];
    let open_end = rest.find('>')? + 1;
    let rest = &rest[open_end..];
    let close = rest.find("</")?;
    Some(rest[..close].replace("<!>", ""))
}

/// True when every needle occurs in `haystack`, in the given order.
pub fn appear_in_order(haystack: &str, needles: &[String]) -> bool {
    let mut offset = 0;
    for needle in needles {
        match haystack[offset..].find(needle.as_str()) {
            Some(pos) => offset += pos + needle.len(),
            None => return false,
        }
    }
    true
}

/// Site-local `href`/`src` values (starting with a single `/`), in order.
pub fn local_targets(html: &str) -> Vec<String> {
    let mut targets = Vec::new();
    for attr in [r#"href=""#, r#"src=""#] {
        let mut rest = html;
        while let Some(start) = rest.find(attr) {
            rest = &rest[start + attr.len()..];
            let Some(end) = rest.find('"') else { break };
            let value = &rest[..end];
            if value.starts_with('/') && !value.starts_with("//") {
                targets.push(value.to_string());
            }
            rest = &rest[end..];
        }
    }
    targets
}

pub const CARD_MARKER: &str = r#"class="col col--4 feature""#;

pub const SAMPLE_FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Alpha",
        icon: "/img/alpha.svg",
        description: &[Markup::Text("First feature.")],
    },
    FeatureEntry {
        title: "Bravo",
        icon: "/img/bravo.svg",
        description: &[Markup::Text("Second feature.")],
    },
    FeatureEntry {
        title: "Charlie",
        icon: "/img/charlie.svg",
        description: &[Markup::Text("Run "), Markup::Code("charlie --now"), Markup::Text(".")],
    },
    FeatureEntry {
        title: "Delta",
        icon: "/img/delta.svg",
        description: &[Markup::Text("Fourth feature.")],
    },
];

/// `n` generated features with titles `Feature 0..n`.
pub fn generated_features(n: usize) -> &'static [FeatureEntry] {
    let entries: Vec<FeatureEntry> = (0..n)
        .map(|i| FeatureEntry {
            title: Box::leak(format!("Feature {i}").into_boxed_str()),
            icon: "/img/generated.svg",
            description: &[Markup::Text("Generated.")],
        })
        .collect();
    Box::leak(entries.into_boxed_slice())
}

pub fn site_config(title: &str, tagline: &str) -> SiteConfig {
    SiteConfig {
        title: title.to_string(),
        tagline: tagline.to_string(),
        ..SiteConfig::default()
    }
}
