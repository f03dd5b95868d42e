//! Hinge Widgets
//!
//! Disclosure widgets driven by declarative markup:
//! - **Accordion**: zero or more expanded items, optional single expansion
//! - **Tabs**: exactly one selected tab
//! - **Carousel**: exactly one visible slide, optional autoplay
//!
//! Widgets are discovered by the [`WidgetRegistry`], which also routes
//! events, timer tasks and authoring messages to the instance they
//! belong to.

pub mod accordion;
pub mod arena;
pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod context;
pub mod data_layer;
pub mod deep_link;
pub mod disclosure;
pub mod hooks;
pub mod message;
pub mod options;
pub mod registry;
pub mod state;
pub mod tabs;
pub mod widget;

mod error;

pub use accordion::Accordion;
pub use autoplay::{Autoplay, PlayState};
pub use carousel::Carousel;
pub use config::WidgetConfig;
pub use context::{Services, WidgetContext, WidgetTask};
pub use data_layer::{DataLayer, DataLayerEvent, EventSink};
pub use deep_link::{DeepLinkProvider, FragmentLinks, LinkTarget};
pub use error::WidgetError;
pub use hooks::{HookEntry, HookMap};
pub use message::PanelContainerMessage;
pub use options::{Properties, PropertySchema, PropertyValue, RawOptions};
pub use registry::{MutationSummary, WidgetRegistry};
pub use state::{DisclosureState, ExpansionPolicy, Phase, Transition};
pub use tabs::Tabs;
pub use widget::{Item, Variant, Widget, WidgetId};
