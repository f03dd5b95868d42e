//! Mutation-Driven Bootstrapper
//!
//! Owns every live widget. Widgets are created from elements carrying
//! `data-cmp-is` at document ready and whenever such markup is inserted
//! later; they are disposed when their root leaves the document. Events,
//! timer tasks and authoring messages are routed by lookup.

use std::collections::HashMap;

use hinge_a11y::apply_state;
use hinge_dom::{DomEvent, MutationObserver, MutationObserverInit, NodeId};

use crate::arena::GenArena;
use crate::options::read_options;
use crate::{PanelContainerMessage, Variant, Widget, WidgetContext, WidgetId, WidgetTask};

/// Widgets created and disposed by one mutation checkpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationSummary {
    pub created: Vec<WidgetId>,
    pub disposed: Vec<WidgetId>,
}

/// Registry of live widgets
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: GenArena<Widget>,
    by_root: HashMap<NodeId, WidgetId>,
    observer: MutationObserver,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// DOMContentLoaded: resolve the data-layer flag, build every widget
    /// in the document, then start observing the body
    pub fn on_document_ready(&mut self, ctx: &mut WidgetContext<'_>) -> Vec<WidgetId> {
        let body = ctx.document.body();
        ctx.services.data_layer_enabled = ctx
            .config
            .data_layer
            .unwrap_or_else(|| ctx.document.has_attribute(body, &ctx.config.data_layer_flag()));

        let created = self.scan(ctx, NodeId::ROOT);
        ctx.document.take_mutation_records();

        if body.is_valid() {
            self.observer.observe(body, MutationObserverInit {
                child_list: true,
                subtree: true,
                ..Default::default()
            });
        }
        tracing::debug!("document ready: {} widgets", created.len());
        created
    }

    /// Create widgets for `scope` and its descendants carrying the
    /// activation marker, in document order
    pub fn scan(&mut self, ctx: &mut WidgetContext<'_>, scope: NodeId) -> Vec<WidgetId> {
        let attr = ctx.config.activation_attr();
        let mut candidates = Vec::new();
        if ctx.document.has_attribute(scope, &attr) {
            candidates.push(scope);
        }
        candidates.extend(ctx.document.query_with_attribute(scope, &attr));

        let mut created = Vec::new();
        for root in candidates {
            let Some(name) = ctx.document.get_attribute(root, &attr) else {
                continue;
            };
            match Variant::parse(name) {
                Ok(variant) => created.extend(self.create(ctx, root, variant)),
                Err(err) => tracing::warn!("skipping {}: {}", root, err),
            }
        }
        created
    }

    fn create(&mut self, ctx: &mut WidgetContext<'_>, root: NodeId, variant: Variant) -> Option<WidgetId> {
        if self.by_root.contains_key(&root) {
            return None;
        }
        let options = read_options(ctx.document, root, variant, ctx.config);
        ctx.document.remove_attribute(root, &ctx.config.activation_attr());

        let id = self
            .widgets
            .insert_with(|id| Widget::new(ctx, id, root, variant, &options));
        self.by_root.insert(root, id);
        Some(id)
    }

    /// Mutation checkpoint: dispose widgets whose root left the document,
    /// then build widgets inside newly added subtrees
    pub fn process_mutations(&mut self, ctx: &mut WidgetContext<'_>) -> MutationSummary {
        let records = ctx.document.take_mutation_records();
        let mut summary = MutationSummary::default();
        if records.is_empty() || !self.observer.is_observing() {
            return summary;
        }

        if records.iter().any(|r| !r.removed_nodes.is_empty()) {
            summary.disposed = self.sweep(ctx);
        }

        let relevant = self.observer.filter(ctx.document.tree(), &records);
        for node in relevant.into_iter().flat_map(|r| r.added_nodes) {
            if ctx.document.is_connected(node) {
                let created = self.scan(ctx, node);
                summary.created.extend(created);
            }
        }
        summary
    }

    fn sweep(&mut self, ctx: &mut WidgetContext<'_>) -> Vec<WidgetId> {
        let detached: Vec<WidgetId> = self
            .widgets
            .iter()
            .filter(|(_, w)| !ctx.document.is_connected(w.root()))
            .map(|(id, _)| id)
            .collect();
        for &id in &detached {
            self.dispose(ctx, id);
        }
        detached
    }

    /// Dispose a widget and forget it; its id becomes stale
    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>, id: WidgetId) -> bool {
        let Some(mut widget) = self.widgets.remove(id) else {
            return false;
        };
        widget.dispose(ctx);
        self.by_root.remove(&widget.root());
        tracing::debug!("disposed {} {}", widget.variant(), id);
        true
    }

    /// Deliver `event` to widgets rooted on its path, innermost first
    pub fn dispatch(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        let path: Vec<NodeId> = ctx.document.tree().inclusive_ancestors(event.target).collect();
        tracing::trace!("dispatch {:?} at {}", event.event_type, event.target);

        for node in path {
            if let Some(widget) = self.by_root.get(&node).and_then(|&id| self.widgets.get_mut(id)) {
                widget.handle_event(ctx, event);
                if event.is_propagation_stopped() {
                    break;
                }
            }
            if !event.bubbles() {
                break;
            }
        }
    }

    /// Send mouseenter/mouseleave to widgets the pointer entered or left
    pub fn hover_moved(&mut self, ctx: &mut WidgetContext<'_>, previous: Option<NodeId>) {
        let current = ctx.document.hovered();
        self.boundary_crossed(ctx, previous, current, DomEvent::mouse_enter, DomEvent::mouse_leave);
    }

    /// Send focusin/focusout to widgets focus moved into or out of
    pub fn focus_moved(&mut self, ctx: &mut WidgetContext<'_>, previous: Option<NodeId>) {
        let current = ctx.document.focused();
        self.boundary_crossed(ctx, previous, current, DomEvent::focus_in, DomEvent::focus_out);
    }

    fn boundary_crossed(
        &mut self,
        ctx: &mut WidgetContext<'_>,
        previous: Option<NodeId>,
        current: Option<NodeId>,
        enter: fn(NodeId) -> DomEvent,
        leave: fn(NodeId) -> DomEvent,
    ) {
        for (_, widget) in self.widgets.iter_mut() {
            let root = widget.root();
            let inside = |node: Option<NodeId>| node.is_some_and(|n| ctx.document.contains(root, n));
            let (was, is) = (inside(previous), inside(current));
            if was != is {
                let mut event = if is { enter(root) } else { leave(root) };
                widget.handle_event(ctx, &mut event);
            }
        }
    }

    /// Let every widget follow a fragment change
    pub fn hash_changed(&mut self, ctx: &mut WidgetContext<'_>) {
        for (_, widget) in self.widgets.iter_mut() {
            widget.on_hash_change(ctx);
        }
    }

    /// Run a due timer task
    pub fn run_task(&mut self, ctx: &mut WidgetContext<'_>, task: WidgetTask) {
        match task {
            WidgetTask::Aria { node, state } => apply_state(ctx.document, node, &state),
            WidgetTask::AutoplayTick(id) => match self.widgets.get_mut(id).and_then(Widget::as_carousel_mut) {
                Some(carousel) => carousel.on_autoplay_tick(ctx),
                None => tracing::trace!("dropping autoplay tick for stale widget {}", id),
            },
        }
    }

    /// Route an authoring `navigate` request to the matching container.
    ///
    /// Returns whether any widget handled it.
    pub fn handle_message(&mut self, ctx: &mut WidgetContext<'_>, message: &PanelContainerMessage) -> bool {
        if !message.is_navigate() {
            tracing::trace!("ignoring panel container operation {}", message.operation);
            return false;
        }
        let Some(variant) = message.variant(ctx.config) else {
            return false;
        };
        let attr = ctx.config.data_attr("panelcontainer-id");

        let mut handled = false;
        for (_, widget) in self.widgets.iter_mut() {
            let matches = widget.variant() == variant
                && ctx.document.get_attribute(widget.root(), &attr) == Some(message.id.as_str());
            if matches {
                widget.navigate_to(ctx, message.index);
                handled = true;
            }
        }
        handled
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Widget rooted at `root`
    pub fn widget_at(&self, root: NodeId) -> Option<(WidgetId, &Widget)> {
        let id = *self.by_root.get(&root)?;
        self.widgets.get(id).map(|w| (id, w))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.widgets.iter()
    }

    pub fn ids(&self) -> Vec<WidgetId> {
        self.widgets.ids()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
