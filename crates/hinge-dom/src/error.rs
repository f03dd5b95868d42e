//! DOM errors

use crate::NodeId;

/// Errors raised by tree and document operations
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no such node: {0}")]
    InvalidNode(NodeId),

    #[error("cannot insert {child} under {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
