/// Inline segment of a feature description.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Markup {
    Text(&'static str),
    Code(&'static str),
}

impl Markup {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Text(s) | Self::Code(s) => s,
        }
    }
}

/// One showcased capability on the landing page.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeatureEntry {
    pub title: &'static str,
    /// Site-relative path of the SVG icon.
    pub icon: &'static str,
    pub description: &'static [Markup],
}

impl FeatureEntry {
    /// Description flattened to plain text, used for alt text.
    pub fn plain_description(&self) -> String {
        self.description.iter().map(Markup::as_str).collect()
    }
}

/// Features in display order.
pub const FEATURE_LIST: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Frameless GTK4 Window",
        icon: "/img/hudbox-window.svg",
        description: &[Markup::Text(
            "A minimal, decoration\u{2011}less window ideal for HUDs, dashboards, and overlays on Linux desktops.",
        )],
    },
    FeatureEntry {
        title: "WebKitGTK Inside",
        icon: "/img/hudbox-web.svg",
        description: &[Markup::Text(
            "Load any web address you provide. Combine with transparency for stream overlays or status bars.",
        )],
    },
    FeatureEntry {
        title: "Transparent & Draggable",
        icon: "/img/hudbox-transparency.svg",
        description: &[Markup::Text(
            "Control opacity (0.0\u{2013}1.0), enable full transparency, and click\u{2011}and\u{2011}drag content to move when unlocked.",
        )],
    },
    FeatureEntry {
        title: "JSON Configuration",
        icon: "/img/hudbox-config.svg",
        description: &[
            Markup::Text(
                "Configure one or many windows with a simple JSON file. A default config is auto\u{2011}generated at ",
            ),
            Markup::Code("~/.hudbox.json"),
            Markup::Text(" if missing."),
        ],
    },
];
