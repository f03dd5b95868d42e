//! Hinge Engine
//!
//! Headless runtime for declarative disclosure widgets (accordion, tabs,
//! carousel). A [`Page`] owns the document, a virtual clock and the
//! widget registry, and plays the part of the browser: it delivers
//! clicks, keys, hover, focus and fragment navigation, runs due timers
//! and flushes mutation records after every operation.
//!
//! # Example
//! ```rust,ignore
//! use hinge_engine::{Config, Page};
//!
//! let mut page = Page::from_html(html, Config::default())?;
//! page.ready();
//! page.click(page.element("tab-2")?);
//! page.advance(5000);
//! ```

mod config;
mod error;
mod logging;
mod page;

pub use config::Config;
pub use error::EngineError;
pub use logging::init_tracing;
pub use page::Page;

// Re-export sub-crates for advanced usage
pub use hinge_dom as dom;
pub use hinge_html as html;
pub use hinge_runtime as runtime;
pub use hinge_widgets as widgets;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
