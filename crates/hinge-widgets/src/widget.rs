//! Widget instances

use std::fmt;

use hinge_dom::{DomEvent, NodeId};

use crate::arena::GenIndex;
use crate::{Accordion, Carousel, RawOptions, Tabs, WidgetContext, WidgetError};

/// Handle of a live widget; stale once the widget is disposed
pub type WidgetId = GenIndex;

/// Widget variant, named by the activation attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Accordion,
    Tabs,
    Carousel,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Self::Accordion, Self::Tabs, Self::Carousel];

    pub fn name(self) -> &'static str {
        match self {
            Self::Accordion => "accordion",
            Self::Tabs => "tabs",
            Self::Carousel => "carousel",
        }
    }

    pub fn parse(name: &str) -> Result<Self, WidgetError> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name.trim())
            .ok_or_else(|| WidgetError::UnknownVariant(name.to_string()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One togglable item, captured at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    /// The item hook (accordion item, tab, carousel slide)
    pub element: NodeId,
    /// Button, tab or indicator
    pub trigger: Option<NodeId>,
    /// Accordion panel or tab panel
    pub panel: Option<NodeId>,
    /// The region whose visibility follows the item's state: the panel
    /// for variants with a panel role, else the item itself
    pub content: Option<NodeId>,
    pub data_layer_id: Option<String>,
}

/// A live widget instance
#[derive(Debug)]
pub enum Widget {
    Accordion(Accordion),
    Tabs(Tabs),
    Carousel(Carousel),
}

impl Widget {
    pub fn new(ctx: &mut WidgetContext<'_>, id: WidgetId, root: NodeId, variant: Variant, options: &RawOptions) -> Self {
        match variant {
            Variant::Accordion => Self::Accordion(Accordion::new(ctx, id, root, options)),
            Variant::Tabs => Self::Tabs(Tabs::new(ctx, id, root)),
            Variant::Carousel => Self::Carousel(Carousel::new(ctx, id, root, options)),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Accordion(_) => Variant::Accordion,
            Self::Tabs(_) => Variant::Tabs,
            Self::Carousel(_) => Variant::Carousel,
        }
    }

    pub fn root(&self) -> NodeId {
        match self {
            Self::Accordion(w) => w.root(),
            Self::Tabs(w) => w.root(),
            Self::Carousel(w) => w.root(),
        }
    }

    pub fn items(&self) -> &[Item] {
        match self {
            Self::Accordion(w) => w.items(),
            Self::Tabs(w) => w.items(),
            Self::Carousel(w) => w.items(),
        }
    }

    /// Active item indices, ascending
    pub fn active_indices(&self) -> Vec<usize> {
        match self {
            Self::Accordion(w) => w.expanded_indices(),
            Self::Tabs(w) => w.active_index().into_iter().collect(),
            Self::Carousel(w) => w.active_index().into_iter().collect(),
        }
    }

    pub fn handle_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        match self {
            Self::Accordion(w) => w.handle_event(ctx, event),
            Self::Tabs(w) => w.handle_event(ctx, event),
            Self::Carousel(w) => w.handle_event(ctx, event),
        }
    }

    pub fn on_hash_change(&mut self, ctx: &mut WidgetContext<'_>) {
        match self {
            Self::Accordion(w) => w.sync_deep_link(ctx),
            Self::Tabs(w) => w.sync_deep_link(ctx),
            Self::Carousel(w) => w.sync_deep_link(ctx),
        }
    }

    /// Authoring `navigate` request
    pub fn navigate_to(&mut self, ctx: &mut WidgetContext<'_>, index: usize) {
        match self {
            Self::Accordion(w) => w.show_only(ctx, index),
            Self::Tabs(w) => w.navigate(ctx, index),
            Self::Carousel(w) => w.navigate(ctx, index, false),
        }
    }

    /// Cancel every timer the instance owns
    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>) {
        match self {
            Self::Accordion(w) => w.dispose(ctx),
            Self::Tabs(w) => w.dispose(ctx),
            Self::Carousel(w) => w.dispose(ctx),
        }
    }

    pub fn as_accordion(&self) -> Option<&Accordion> {
        match self {
            Self::Accordion(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_tabs(&self) -> Option<&Tabs> {
        match self {
            Self::Tabs(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_carousel(&self) -> Option<&Carousel> {
        match self {
            Self::Carousel(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_carousel_mut(&mut self) -> Option<&mut Carousel> {
        match self {
            Self::Carousel(w) => Some(w),
            _ => None,
        }
    }
}
