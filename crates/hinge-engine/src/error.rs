//! Engine errors

use hinge_dom::DomError;
use hinge_html::ParseError;
use hinge_widgets::WidgetError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to parse HTML: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no element with id {0:?}")]
    NoSuchElement(String),
}
