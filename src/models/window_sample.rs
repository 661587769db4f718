use serde::{Deserialize, Serialize};

/// One window entry of `~/.hudbox.json`, as shown in the docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfigSample {
    pub title: String,
    pub address: String,
    pub width: u32,
    pub height: u32,
    pub locked: bool,
    pub opacity: f64,
    pub transparent: bool,
}

impl Default for WindowConfigSample {
    fn default() -> Self {
        Self {
            title: "HudBox".to_string(),
            address: "https://swstegall.github.io/HudBox/".to_string(),
            width: 800,
            height: 600,
            locked: false,
            opacity: 0.9,
            transparent: false,
        }
    }
}

impl WindowConfigSample {
    /// The default config file body: a JSON array with a single window.
    pub fn default_file() -> serde_json::Result<String> {
        serde_json::to_string_pretty(&[Self::default()])
    }
}
