//! Hinge Accessibility
//!
//! Features:
//! - ARIA states written as `aria-*` attributes
//! - Roving tab index
//! - Live-region politeness
//! - List keyboard navigation (arrows, Home/End, Enter/Space)

pub mod aria;
pub mod focus;
pub mod keyboard;

pub use aria::{apply_state, AriaState, LiveRegionMode};
pub use focus::TabIndex;
pub use keyboard::ListAction;
