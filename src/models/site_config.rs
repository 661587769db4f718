pub const DEFAULT_TITLE: &str = "HudBox";
pub const DEFAULT_TAGLINE: &str = "A frameless GTK4 + WebKitGTK heads-up display for Linux";
pub const DEFAULT_DESCRIPTION: &str = "HudBox is a lightweight GTK4 + WebKitGTK heads\u{2011}up display window for Linux. Load any URL, control opacity, enable transparency, drag to move, and configure via JSON.";
pub const DOCS_ROUTE: &str = "/docs/intro";
pub const REPOSITORY_URL: &str = "https://github.com/swstegall/HudBox";

/// Site-wide values shared by every page, provided through context.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub docs_route: String,
    pub repository_url: String,
    /// Path prefix the site is served under, e.g. `/HudBox/`.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            docs_route: DOCS_ROUTE.to_string(),
            repository_url: REPOSITORY_URL.to_string(),
            base_url: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Document `<title>` for the landing page.
    pub fn page_title(&self) -> String {
        format!("{} \u{2014} GTK4 HUD for Linux", self.title)
    }

    /// Site-internal `path` resolved against `base_url`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Hero buttons, primary first.
    pub fn calls_to_action(&self) -> [CallToAction; 2] {
        [
            CallToAction {
                label: "Get Started",
                href: self.url(&self.docs_route),
                target: LinkTarget::Internal,
            },
            CallToAction {
                label: "View on GitHub",
                href: self.repository_url.clone(),
                target: LinkTarget::External,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LinkTarget {
    Internal,
    External,
}

impl LinkTarget {
    /// Value of the anchor `target` attribute, if any.
    pub fn target_attr(&self) -> Option<&'static str> {
        match self {
            Self::Internal => None,
            Self::External => Some("_blank"),
        }
    }

    pub fn rel_attr(&self) -> Option<&'static str> {
        match self {
            Self::Internal => None,
            Self::External => Some("noopener noreferrer"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: String,
    pub target: LinkTarget,
}
