//! Hinge DOM - Document Object Model
//!
//! Arena-allocated DOM tree with just enough of the platform surface
//! (attributes, class tokens, dataset, mutation records, history and
//! interaction state) for headless widgets to run against.

mod attributes;
mod classlist;
mod dataset;
mod document;
mod dom_events;
mod error;
mod history;
mod node;
mod observer;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use dataset::{to_camel_case, to_kebab_case, DOMStringMap};
pub use document::Document;
pub use dom_events::{DomEvent, DomEventType, Key};
pub use error::DomError;
pub use history::{HistoryEntry, HistoryManager};
pub use node::{ElementData, Node, NodeData};
pub use observer::{MutationObserver, MutationObserverInit, MutationRecord, MutationType};
pub use tree::DomTree;

/// Re-exported so callers can build locations without a direct `url` dependency.
pub use url::Url;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn to_option(self) -> Option<NodeId> {
        if self.is_valid() { Some(self) } else { None }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
