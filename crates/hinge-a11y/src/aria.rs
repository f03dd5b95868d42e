//! ARIA Support
//!
//! The subset of ARIA states disclosure widgets maintain.

use hinge_dom::{Document, NodeId};

/// ARIA state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Expanded(bool),
    Hidden(bool),
    Selected(bool),
    Live(LiveRegionMode),
}

/// Live region mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveRegionMode {
    Off,
    Polite,
}

impl LiveRegionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
        }
    }
}

impl AriaState {
    /// Attribute carrying this state
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Expanded(_) => "aria-expanded",
            Self::Hidden(_) => "aria-hidden",
            Self::Selected(_) => "aria-selected",
            Self::Live(_) => "aria-live",
        }
    }

    /// Serialized attribute value
    pub fn attribute_value(&self) -> &'static str {
        match self {
            Self::Expanded(b) | Self::Hidden(b) | Self::Selected(b) => {
                if *b { "true" } else { "false" }
            }
            Self::Live(mode) => mode.as_str(),
        }
    }
}

/// Write `state` onto `node`
pub fn apply_state(doc: &mut Document, node: NodeId, state: &AriaState) {
    doc.set_attribute(node, state.attribute_name(), state.attribute_value());
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_dom::Url;

    #[test]
    fn test_attribute_mapping() {
        assert_eq!(AriaState::Expanded(true).attribute_name(), "aria-expanded");
        assert_eq!(AriaState::Hidden(false).attribute_value(), "false");
        assert_eq!(AriaState::Live(LiveRegionMode::Polite).attribute_value(), "polite");
    }

    #[test]
    fn test_apply_state() {
        let mut doc = Document::new(Url::parse("https://example.com/").unwrap());
        let button = doc.tree_mut().create_element("button");
        apply_state(&mut doc, button, &AriaState::Selected(true));
        assert_eq!(doc.get_attribute(button, "aria-selected"), Some("true"));
    }
}
