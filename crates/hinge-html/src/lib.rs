//! Hinge HTML Parser
//!
//! HTML5 parsing built on html5ever, converted into `hinge-dom` trees.

mod parser;

pub use parser::HtmlParser;

/// Parse an HTML string into a document at `about:blank`
pub fn parse(html: &str) -> Result<hinge_dom::Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dom(#[from] hinge_dom::DomError),
}
