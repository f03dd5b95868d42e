//! Shared disclosure plumbing
//!
//! Item capture, deep-link calls, data-layer emission and ARIA deferral
//! are the same for every variant; each variant embeds a [`Disclosure`]
//! and only decides how its state is rendered.

use hinge_a11y::{apply_state, AriaState, TabIndex};
use hinge_dom::{Document, NodeId};
use hinge_runtime::TimerId;

use crate::data_layer::data_layer_id;
use crate::{
    DataLayerEvent, DisclosureState, HookMap, Item, LinkTarget, Transition, Variant, WidgetConfig,
    WidgetContext, WidgetId,
};

/// Hook roles a variant is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub item: &'static str,
    pub trigger: &'static str,
    pub panel: Option<&'static str>,
}

/// Whether ARIA follows immediately or after the screen-reader deferral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaTiming {
    Immediate,
    Deferred,
}

/// State and hooks common to every variant
#[derive(Debug)]
pub struct Disclosure {
    pub id: WidgetId,
    pub root: NodeId,
    pub variant: Variant,
    pub roles: Roles,
    pub hooks: HookMap,
    pub items: Vec<Item>,
    pub state: DisclosureState,
    pub data_layer_id: Option<String>,
    pending_aria: Vec<TimerId>,
}

impl Disclosure {
    /// Capture hooks and items; `state` receives the item count
    pub fn new(
        doc: &Document,
        config: &WidgetConfig,
        id: WidgetId,
        root: NodeId,
        variant: Variant,
        roles: Roles,
        state: impl FnOnce(&Document, &[Item]) -> DisclosureState,
    ) -> Self {
        let hooks = HookMap::collect(doc, root, variant, config);
        let triggers = hooks.all(roles.trigger);
        let panels = roles.panel.map(|r| hooks.all(r)).unwrap_or(&[]);
        let items: Vec<Item> = hooks
            .all(roles.item)
            .iter()
            .enumerate()
            .map(|(index, &element)| {
                let panel = panels.get(index).copied();
                Item {
                    index,
                    element,
                    trigger: triggers.get(index).copied(),
                    panel,
                    content: if roles.panel.is_some() { panel } else { Some(element) },
                    data_layer_id: data_layer_id(doc, element, config),
                }
            })
            .collect();
        let state = state(doc, &items);

        tracing::debug!("{} {} at {}: {} items", variant, id, root, items.len());
        Self {
            id,
            root,
            variant,
            roles,
            data_layer_id: data_layer_id(doc, root, config),
            hooks,
            items,
            state,
            pending_aria: Vec::new(),
        }
    }

    pub fn link_target(&self) -> LinkTarget<'_> {
        LinkTarget {
            root: self.root,
            hooks: &self.hooks,
        }
    }

    /// Item the fragment points at, when a provider is installed
    pub fn resolve_deep_link(&self, ctx: &WidgetContext<'_>) -> Option<usize> {
        let links = ctx.services.deep_links.as_deref()?;
        links.deep_link_item_index(&*ctx.document, &self.link_target(), self.roles.item, self.roles.panel)
    }

    pub fn update_hash(&self, ctx: &mut WidgetContext<'_>, index: usize) {
        if let Some(links) = ctx.services.deep_links.as_deref_mut() {
            links.update_url_hash(ctx.document, &self.link_target(), self.roles.item, index);
        }
    }

    pub fn remove_hash(&self, ctx: &mut WidgetContext<'_>) {
        if let Some(links) = ctx.services.deep_links.as_deref_mut() {
            links.remove_url_hash(ctx.document);
        }
    }

    pub fn scroll_to_anchor(&self, ctx: &mut WidgetContext<'_>) {
        if let Some(links) = ctx.services.deep_links.as_deref_mut() {
            links.scroll_to_anchor(ctx.document);
        }
    }

    /// Push the new shown set, then per-item hide/show events
    pub fn emit_transition(&self, ctx: &mut WidgetContext<'_>, transition: &Transition) {
        if !ctx.data_layer_enabled() || transition.is_empty() {
            return;
        }
        if let Some(component) = &self.data_layer_id {
            let shown = self
                .state
                .active()
                .into_iter()
                .filter_map(|i| self.items[i].data_layer_id.clone())
                .collect();
            ctx.emit(DataLayerEvent::shown_items(component, shown));
        }
        for &i in &transition.hidden {
            if let Some(id) = &self.items[i].data_layer_id {
                ctx.emit(DataLayerEvent::hide(id));
            }
        }
        for &i in &transition.shown {
            if let Some(id) = &self.items[i].data_layer_id {
                ctx.emit(DataLayerEvent::show(id));
            }
        }
    }

    /// Write `state` now or after the ARIA delay
    pub fn set_aria(&mut self, ctx: &mut WidgetContext<'_>, node: NodeId, state: AriaState, timing: AriaTiming) {
        match timing {
            AriaTiming::Immediate => apply_state(ctx.document, node, &state),
            AriaTiming::Deferred => {
                let timers = &*ctx.timers;
                self.pending_aria.retain(|&t| timers.is_pending(t));
                let timer = ctx.defer_aria(node, state);
                self.pending_aria.push(timer);
            }
        }
    }

    /// Render a single-selection state: active class, `aria-selected`
    /// and roving tab index on triggers, `aria-hidden` on content
    pub fn refresh_selection(&self, ctx: &mut WidgetContext<'_>, content: &str, trigger: &str) {
        let content_class = ctx.config.state_class(self.variant, content, "active");
        let trigger_class = ctx.config.state_class(self.variant, trigger, "active");
        let doc = &mut *ctx.document;

        for item in &self.items {
            let active = self.state.is_active(item.index);
            if let Some(node) = item.content {
                if active {
                    doc.add_class(node, &content_class);
                    doc.remove_attribute(node, "aria-hidden");
                } else {
                    doc.remove_class(node, &content_class);
                    apply_state(doc, node, &AriaState::Hidden(true));
                }
            }

            if let Some(t) = item.trigger {
                if active {
                    doc.add_class(t, &trigger_class);
                } else {
                    doc.remove_class(t, &trigger_class);
                }
                apply_state(doc, t, &AriaState::Selected(active));
                TabIndex::roving(active).apply(doc, t);
            }
        }
    }

    /// Index of the item whose trigger is or contains `target`
    pub fn trigger_index(&self, doc: &Document, target: NodeId) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.trigger.is_some_and(|t| doc.contains(t, target)))
            .map(|item| item.index)
    }

    pub fn focus_trigger(&self, ctx: &mut WidgetContext<'_>, index: usize) {
        if let Some(trigger) = self.items.get(index).and_then(|i| i.trigger) {
            ctx.document.focus(trigger);
        }
    }

    /// Cancel pending ARIA deferrals
    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>) {
        for timer in self.pending_aria.drain(..) {
            ctx.timers.clear_timer(timer);
        }
    }
}
