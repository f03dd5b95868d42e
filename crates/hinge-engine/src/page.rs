//! Page - A loaded document with live widgets
//!
//! Every public operation runs inside one "task": the widget handlers
//! execute, focus changes they caused are announced, and the mutation
//! queue is flushed so inserted or removed widgets are picked up before
//! the call returns.

use hinge_dom::{Document, DomEvent, Key, NodeId};
use hinge_html::HtmlParser;
use hinge_runtime::{EventLoop, MessageChannel, SubscriptionId};
use hinge_widgets::{
    DeepLinkProvider, EventSink, FragmentLinks, PanelContainerMessage, Services, Widget, WidgetContext,
    WidgetId, WidgetRegistry, WidgetTask,
};

use crate::{Config, EngineError};

/// A loaded page
#[derive(Debug)]
pub struct Page {
    document: Document,
    timers: EventLoop<WidgetTask>,
    registry: WidgetRegistry,
    services: Services,
    channel: MessageChannel,
    subscription: Option<SubscriptionId>,
    parser: HtmlParser,
    config: Config,
    ready: bool,
}

impl Page {
    /// Parse `html` at the configured base URL
    pub fn from_html(html: &str, config: Config) -> Result<Self, EngineError> {
        let url = config.base_url.clone();
        Self::from_html_at(html, &url, config)
    }

    /// Parse `html` at `url`; the URL's fragment is the initial deep link
    pub fn from_html_at(html: &str, url: &str, config: Config) -> Result<Self, EngineError> {
        let parser = HtmlParser::new();
        let document = parser.parse_with_url(html, url)?;

        let mut services = Services::new();
        if config.deep_links {
            services = services.with_deep_links(FragmentLinks::new());
        }

        tracing::info!("Loaded page {}", url);
        Ok(Self {
            document,
            timers: EventLoop::new(),
            registry: WidgetRegistry::new(),
            services,
            channel: MessageChannel::new(),
            subscription: None,
            parser,
            config,
            ready: false,
        })
    }

    /// Replace the deep-link provider
    pub fn with_deep_links(mut self, provider: impl DeepLinkProvider + 'static) -> Self {
        self.services.deep_links = Some(Box::new(provider));
        self
    }

    /// Drop the deep-link provider; hash handling is skipped entirely
    pub fn without_deep_links(mut self) -> Self {
        self.services.deep_links = None;
        self
    }

    /// Attach a data-layer sink
    pub fn with_data_layer(mut self, sink: impl EventSink + 'static) -> Self {
        self.services.data_layer = Some(Box::new(sink));
        self
    }

    /// Run one task against the widgets, then announce focus changes and
    /// flush mutations
    fn with_widgets<R>(&mut self, f: impl FnOnce(&mut WidgetRegistry, &mut WidgetContext<'_>) -> R) -> R {
        let focused_before = self.document.focused();
        let mut ctx = WidgetContext::new(
            &mut self.document,
            &mut self.timers,
            &mut self.services,
            &self.config.widgets,
        );
        let result = f(&mut self.registry, &mut ctx);

        if ctx.document.focused() != focused_before {
            self.registry.focus_moved(&mut ctx, focused_before);
        }
        let summary = self.registry.process_mutations(&mut ctx);
        if !summary.created.is_empty() || !summary.disposed.is_empty() {
            tracing::debug!(
                "mutations: {} widgets created, {} disposed",
                summary.created.len(),
                summary.disposed.len()
            );
        }
        result
    }

    /// DOMContentLoaded: build widgets and start observing. Idempotent.
    pub fn ready(&mut self) -> Vec<WidgetId> {
        if self.ready {
            return Vec::new();
        }
        self.ready = true;
        if self.config.authoring {
            let channel = self.config.widgets.panel_container_channel();
            self.subscription = Some(self.channel.subscribe(&channel));
        }
        let created = self.with_widgets(|registry, ctx| registry.on_document_ready(ctx));
        tracing::info!("{} widgets ready", created.len());
        created
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Flush pending mutations after direct document edits
    pub fn flush(&mut self) {
        self.with_widgets(|_, _| ());
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Dispatch `event` along its path
    pub fn dispatch(&mut self, mut event: DomEvent) -> DomEvent {
        self.with_widgets(|registry, ctx| registry.dispatch(ctx, &mut event));
        event
    }

    pub fn click(&mut self, target: NodeId) -> DomEvent {
        self.dispatch(DomEvent::click(target))
    }

    pub fn key_down(&mut self, target: NodeId, key: Key) -> DomEvent {
        self.dispatch(DomEvent::key_down(target, key))
    }

    /// Press `key` on the focused element, if any
    pub fn press(&mut self, key: Key) -> Option<DomEvent> {
        let target = self.document.focused()?;
        Some(self.key_down(target, key))
    }

    /// Move the pointer over `target` (`None` leaves the page)
    pub fn hover(&mut self, target: Option<NodeId>) {
        self.with_widgets(|registry, ctx| {
            let previous = ctx.document.set_hovered(target);
            registry.hover_moved(ctx, previous);
        });
    }

    pub fn focus(&mut self, target: NodeId) {
        self.with_widgets(|_, ctx| {
            ctx.document.focus(target);
        });
    }

    pub fn blur(&mut self) {
        self.with_widgets(|_, ctx| {
            ctx.document.blur();
        });
    }

    /// Page visibility; hidden pages skip autoplay ticks
    pub fn set_hidden(&mut self, hidden: bool) {
        self.document.set_hidden(hidden);
    }

    // ------------------------------------------------------------------
    // Location
    // ------------------------------------------------------------------

    /// Follow `#fragment`; widgets react to the hashchange.
    ///
    /// Returns false when the fragment was already current.
    pub fn navigate_to_fragment(&mut self, fragment: &str) -> bool {
        if !self.document.push_fragment(fragment) {
            return false;
        }
        self.hash_changed();
        true
    }

    /// History back; a fragment change raises hashchange
    pub fn back(&mut self) -> bool {
        let before = self.document.url().clone();
        if !self.document.history_mut().back() {
            return false;
        }
        if self.document.url().fragment() != before.fragment() {
            self.hash_changed();
        }
        true
    }

    fn hash_changed(&mut self) {
        tracing::debug!("hashchange -> {:?}", self.document.fragment());
        self.with_widgets(|registry, ctx| registry.hash_changed(ctx));
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance the clock by `ms`, running every timer that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&mut self, ms: u64) -> usize {
        let deadline = self.timers.current_time().saturating_add(ms);
        let mut ran = 0;
        while let Some((_, task)) = self.timers.pop_due(deadline) {
            self.with_widgets(|registry, ctx| registry.run_task(ctx, task));
            ran += 1;
        }
        self.timers.advance_to(deadline);
        ran
    }

    /// Current virtual time (ms)
    pub fn now(&self) -> u64 {
        self.timers.current_time()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Parse `html` and append it to `parent`; widgets inside are built
    pub fn insert_html(&mut self, parent: NodeId, html: &str) -> Result<Vec<NodeId>, EngineError> {
        let inserted = self.parser.insert_fragment(&mut self.document, parent, html)?;
        self.flush();
        Ok(inserted)
    }

    /// Detach `node`; widgets rooted inside are disposed
    pub fn remove(&mut self, node: NodeId) -> Result<(), EngineError> {
        self.document.tree_mut().detach(node)?;
        self.flush();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Authoring
    // ------------------------------------------------------------------

    /// Post a panel container request as an authoring host would.
    ///
    /// Returns how many requests a widget handled. Malformed requests
    /// are logged and dropped.
    pub fn post_message(&mut self, data: serde_json::Value) -> usize {
        let channel = self.config.widgets.panel_container_channel();
        self.channel.post(&channel, data);

        let Some(subscription) = self.subscription else {
            return 0;
        };
        let mut handled = 0;
        for message in self.channel.take(subscription) {
            match PanelContainerMessage::from_value(message.data) {
                Ok(request) => {
                    if self.with_widgets(|registry, ctx| registry.handle_message(ctx, &request)) {
                        handled += 1;
                    }
                }
                Err(err) => tracing::warn!("dropping message on {}: {}", message.channel, err),
            }
        }
        handled
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct document access; call [`Page::flush`] after structural edits
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Connected element with `id`
    pub fn element(&self, id: &str) -> Result<NodeId, EngineError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| EngineError::NoSuchElement(id.to_string()))
    }

    /// Widget rooted at the element with `id`
    pub fn widget(&self, id: &str) -> Result<&Widget, EngineError> {
        let root = self.element(id)?;
        self.registry
            .widget_at(root)
            .map(|(_, widget)| widget)
            .ok_or_else(|| EngineError::NoSuchElement(id.to_string()))
    }

    /// Active item indices of the widget rooted at `id`
    pub fn active_indices(&self, id: &str) -> Result<Vec<usize>, EngineError> {
        Ok(self.widget(id)?.active_indices())
    }

    /// Current URL fragment
    pub fn fragment(&self) -> Option<&str> {
        self.document.fragment()
    }
}
