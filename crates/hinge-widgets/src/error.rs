//! Widget errors
//!
//! Interaction paths never fail: missing hooks and absent collaborators
//! degrade to no-ops. Errors only surface for malformed external input.

/// Errors raised while decoding external input
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("malformed message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    #[error("unknown widget variant: {0}")]
    UnknownVariant(String),
}
