//! Focus Management
//!
//! Roving tab index for tab lists and indicator lists.

use hinge_dom::{Document, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex="0"`
    Focusable,
    /// `tabindex="-1"`
    NotFocusable,
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n >= 0 => Self::Focusable,
            _ => Self::NotFocusable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focusable => "0",
            Self::NotFocusable => "-1",
        }
    }

    /// Focusable only when `active`
    pub fn roving(active: bool) -> Self {
        if active { Self::Focusable } else { Self::NotFocusable }
    }

    pub fn apply(self, doc: &mut Document, node: NodeId) {
        doc.set_attribute(node, "tabindex", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TabIndex::parse("0"), TabIndex::Focusable);
        assert_eq!(TabIndex::parse("3"), TabIndex::Focusable);
        assert_eq!(TabIndex::parse("-1"), TabIndex::NotFocusable);
        assert_eq!(TabIndex::parse("x"), TabIndex::NotFocusable);
    }

    #[test]
    fn test_roving() {
        assert_eq!(TabIndex::roving(true).as_str(), "0");
        assert_eq!(TabIndex::roving(false).as_str(), "-1");
    }
}
