//! Widget context
//!
//! Everything a widget may touch while handling one event: the document,
//! the page's timers, the optional collaborators and configuration.

use std::fmt;

use hinge_a11y::AriaState;
use hinge_dom::{Document, NodeId};
use hinge_runtime::{EventLoop, TimerId};

use crate::{DataLayerEvent, DeepLinkProvider, EventSink, WidgetConfig, WidgetId};

/// Deferred work owned by a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetTask {
    /// Write an ARIA state after the screen-reader deferral
    Aria { node: NodeId, state: AriaState },
    /// Carousel autoplay interval
    AutoplayTick(WidgetId),
}

/// Optional collaborators
#[derive(Default)]
pub struct Services {
    pub deep_links: Option<Box<dyn DeepLinkProvider>>,
    pub data_layer: Option<Box<dyn EventSink>>,
    /// Set at document ready from the body flag or the config override
    pub data_layer_enabled: bool,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("deep_links", &self.deep_links.is_some())
            .field("data_layer", &self.data_layer.is_some())
            .field("data_layer_enabled", &self.data_layer_enabled)
            .finish()
    }
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deep_links(mut self, provider: impl DeepLinkProvider + 'static) -> Self {
        self.deep_links = Some(Box::new(provider));
        self
    }

    pub fn with_data_layer(mut self, sink: impl EventSink + 'static) -> Self {
        self.data_layer = Some(Box::new(sink));
        self
    }
}

/// Borrowed page state handed to widget operations
pub struct WidgetContext<'a> {
    pub document: &'a mut Document,
    pub timers: &'a mut EventLoop<WidgetTask>,
    pub services: &'a mut Services,
    pub config: &'a WidgetConfig,
}

impl<'a> WidgetContext<'a> {
    pub fn new(
        document: &'a mut Document,
        timers: &'a mut EventLoop<WidgetTask>,
        services: &'a mut Services,
        config: &'a WidgetConfig,
    ) -> Self {
        Self {
            document,
            timers,
            services,
            config,
        }
    }

    /// Schedule `state` onto `node` after the configured ARIA delay
    pub fn defer_aria(&mut self, node: NodeId, state: AriaState) -> TimerId {
        self.timers
            .set_timeout(WidgetTask::Aria { node, state }, self.config.aria_delay_ms)
    }

    pub fn data_layer_enabled(&self) -> bool {
        self.services.data_layer_enabled && self.services.data_layer.is_some()
    }

    /// Push onto the data layer when it is enabled
    pub fn emit(&mut self, event: DataLayerEvent) {
        if !self.services.data_layer_enabled {
            return;
        }
        if let Some(sink) = self.services.data_layer.as_deref_mut() {
            sink.push(event);
        }
    }
}
