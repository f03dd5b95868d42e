//! Engine Configuration

use hinge_widgets::WidgetConfig;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Page configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Widget naming, ARIA deferral and data-layer override
    #[serde(flatten)]
    pub widgets: WidgetConfig,

    /// Document URL when none is given
    pub base_url: String,

    /// Install the fragment-backed deep-link provider
    pub deep_links: bool,

    /// Listen for panel container requests from an authoring host
    pub authoring: bool,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            widgets: WidgetConfig::default(),
            base_url: "https://localhost/".to_string(),
            deep_links: true,
            authoring: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
