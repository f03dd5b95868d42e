//! Widget configuration
//!
//! Attribute and class naming is derived from a single namespace
//! (`cmp` by default), so `data-cmp-is`, `data-cmp-hook-tabs` and
//! `cmp-tabs__tab--active` all move together.

use serde::{Deserialize, Serialize};

use crate::Variant;

/// Widget-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Attribute/class namespace
    pub namespace: String,

    /// Delay before `aria-expanded`/`aria-hidden` follow a toggle (ms)
    pub aria_delay_ms: u64,

    /// Force the data layer on or off; `None` reads the body flag
    pub data_layer: Option<bool>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            namespace: "cmp".to_string(),
            aria_delay_ms: 100,
            data_layer: None,
        }
    }
}

impl WidgetConfig {
    /// `data-<ns>-<suffix>`
    pub fn data_attr(&self, suffix: &str) -> String {
        format!("data-{}-{}", self.namespace, suffix)
    }

    /// Activation marker, e.g. `data-cmp-is`
    pub fn activation_attr(&self) -> String {
        self.data_attr("is")
    }

    /// Hook marker for a variant, e.g. `data-cmp-hook-accordion`
    pub fn hook_attr(&self, variant: Variant) -> String {
        self.data_attr(&format!("hook-{}", variant.name()))
    }

    /// Root class for a variant, e.g. `cmp-carousel`
    pub fn root_class(&self, variant: Variant) -> String {
        format!("{}-{}", self.namespace, variant.name())
    }

    /// BEM modifier class, e.g. `cmp-tabs__tab--active`
    pub fn state_class(&self, variant: Variant, element: &str, modifier: &str) -> String {
        format!("{}__{}--{}", self.root_class(variant), element, modifier)
    }

    /// Body flag enabling the data layer
    pub fn data_layer_flag(&self) -> String {
        self.data_attr("data-layer-enabled")
    }

    /// Authoring channel name
    pub fn panel_container_channel(&self) -> String {
        format!("{}.panelcontainer", self.namespace)
    }

    /// Authoring message type for a variant, e.g. `cmp-tabs`
    pub fn message_type(&self, variant: Variant) -> String {
        self.root_class(variant)
    }
}
