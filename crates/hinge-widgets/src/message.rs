//! Authoring messages
//!
//! An editing host drives panel containers over the `cmp.panelcontainer`
//! channel with `{type, id, operation, index}` requests.

use serde::{Deserialize, Serialize};

use crate::{Variant, WidgetConfig, WidgetError};

/// Panel container request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContainerMessage {
    /// `cmp-accordion`, `cmp-tabs` or `cmp-carousel`
    #[serde(rename = "type")]
    pub kind: String,
    /// Matched against the root's `data-cmp-panelcontainer-id`
    pub id: String,
    pub operation: String,
    pub index: usize,
}

impl PanelContainerMessage {
    pub fn navigate(variant: Variant, id: &str, index: usize, config: &WidgetConfig) -> Self {
        Self {
            kind: config.message_type(variant),
            id: id.to_string(),
            operation: "navigate".to_string(),
            index,
        }
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, WidgetError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_navigate(&self) -> bool {
        self.operation == "navigate"
    }

    /// Variant this message addresses
    pub fn variant(&self, config: &WidgetConfig) -> Option<Variant> {
        Variant::ALL
            .into_iter()
            .find(|&v| config.message_type(v) == self.kind)
    }
}
