//! Accordion
//!
//! Items expand and collapse independently, or one at a time when
//! `data-cmp-single-expansion` is set. Expansion is marked on the item
//! with `data-cmp-expanded`; ARIA follows after the configured delay.

use hinge_a11y::{AriaState, ListAction};
use hinge_dom::{DomEvent, DomEventType, NodeId};

use crate::disclosure::{AriaTiming, Disclosure, Roles};
use crate::options::{presence, resolve};
use crate::{
    DisclosureState, ExpansionPolicy, Item, Properties, PropertySchema, PropertyValue, RawOptions,
    Transition, Variant, WidgetContext, WidgetId,
};

const ROLES: Roles = Roles {
    item: "item",
    trigger: "button",
    panel: Some("panel"),
};

/// Accordion properties
pub fn schema() -> PropertySchema {
    PropertySchema::new().with("singleExpansion", PropertyValue::Bool(false), Some(presence))
}

/// Accordion instance
#[derive(Debug)]
pub struct Accordion {
    core: Disclosure,
    properties: Properties,
}

impl Accordion {
    pub fn new(ctx: &mut WidgetContext<'_>, id: WidgetId, root: NodeId, options: &RawOptions) -> Self {
        let properties = resolve(options, &schema());
        let policy = if properties.bool("singleExpansion") {
            ExpansionPolicy::Single
        } else {
            ExpansionPolicy::Multiple
        };
        let expanded_attr = ctx.config.data_attr("expanded");
        let core = Disclosure::new(ctx.document, ctx.config, id, root, Variant::Accordion, ROLES, |doc, items| {
            let initial = items
                .iter()
                .filter(|item| doc.has_attribute(item.element, &expanded_attr))
                .map(|item| item.index);
            DisclosureState::new(items.len(), policy, initial)
        });

        let mut accordion = Self { core, properties };
        let closed = accordion.core.state.normalize_single_expansion();
        if !closed.is_empty() {
            tracing::debug!("accordion {}: single expansion closed {:?}", id, closed);
        }
        for index in 0..accordion.core.items.len() {
            accordion.refresh_item(ctx, index, AriaTiming::Immediate);
        }
        accordion.core.state.finish_init();
        accordion.sync_deep_link(ctx);
        accordion
    }

    pub fn id(&self) -> WidgetId {
        self.core.id
    }

    pub fn root(&self) -> NodeId {
        self.core.root
    }

    pub fn items(&self) -> &[Item] {
        &self.core.items
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn state(&self) -> &DisclosureState {
        &self.core.state
    }

    pub fn is_single_expansion(&self) -> bool {
        self.core.state.policy() == ExpansionPolicy::Single
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.core.state.is_active(index)
    }

    pub fn expanded_indices(&self) -> Vec<usize> {
        self.core.state.active()
    }

    /// Flip item `index`, writing the hash. Returns false for a bad index.
    pub fn toggle(&mut self, ctx: &mut WidgetContext<'_>, index: usize) -> bool {
        match self.core.state.toggle(index) {
            Some(transition) => {
                self.apply(ctx, &transition, false);
                true
            }
            None => {
                tracing::debug!("accordion {}: no item {}", self.core.id, index);
                false
            }
        }
    }

    /// Expand `index` and collapse every other item
    pub fn show_only(&mut self, ctx: &mut WidgetContext<'_>, index: usize) {
        match self.core.state.show_only(index) {
            Some(transition) => self.apply(ctx, &transition, true),
            None => tracing::debug!("accordion {}: no item {}", self.core.id, index),
        }
    }

    /// Expand the item the fragment points at, keeping the hash
    pub fn sync_deep_link(&mut self, ctx: &mut WidgetContext<'_>) {
        let Some(index) = self.core.resolve_deep_link(ctx) else {
            return;
        };
        if !self.core.state.is_active(index) {
            if let Some(transition) = self.core.state.set(index, true) {
                self.apply(ctx, &transition, true);
            }
        }
        self.core.scroll_to_anchor(ctx);
    }

    fn apply(&mut self, ctx: &mut WidgetContext<'_>, transition: &Transition, keep_hash: bool) {
        for &index in &transition.hidden {
            if !keep_hash {
                self.core.remove_hash(ctx);
            }
            self.refresh_item(ctx, index, AriaTiming::Deferred);
        }
        for &index in &transition.shown {
            if !keep_hash {
                self.core.update_hash(ctx, index);
            }
            self.refresh_item(ctx, index, AriaTiming::Deferred);
        }
        tracing::debug!("accordion {}: expanded {:?}", self.core.id, self.core.state.active());
        self.core.emit_transition(ctx, transition);
    }

    fn refresh_item(&mut self, ctx: &mut WidgetContext<'_>, index: usize, timing: AriaTiming) {
        let Some(item) = self.core.items.get(index).cloned() else {
            return;
        };
        let expanded = self.core.state.is_active(index);
        let config = ctx.config;
        let doc = &mut *ctx.document;

        doc.toggle_attribute(item.element, &config.data_attr("expanded"), Some(expanded));

        let button_class = config.state_class(Variant::Accordion, "button", "expanded");
        let panel_expanded = config.state_class(Variant::Accordion, "panel", "expanded");
        let panel_hidden = config.state_class(Variant::Accordion, "panel", "hidden");
        if let Some(button) = item.trigger {
            if expanded {
                doc.add_class(button, &button_class);
            } else {
                doc.remove_class(button, &button_class);
            }
        }
        if let Some(panel) = item.panel {
            if expanded {
                doc.remove_class(panel, &panel_hidden);
                doc.add_class(panel, &panel_expanded);
            } else {
                doc.remove_class(panel, &panel_expanded);
                doc.add_class(panel, &panel_hidden);
            }
        }

        if let Some(button) = item.trigger {
            self.core.set_aria(ctx, button, AriaState::Expanded(expanded), timing);
        }
        if let Some(panel) = item.panel {
            self.core.set_aria(ctx, panel, AriaState::Hidden(!expanded), timing);
        }
    }

    pub fn handle_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        let Some(index) = self.core.trigger_index(ctx.document, event.target) else {
            return;
        };
        match event.event_type {
            DomEventType::Click => {
                event.prevent_default();
                self.toggle(ctx, index);
                self.core.focus_trigger(ctx, index);
            }
            DomEventType::KeyDown => {
                let Some(action) = event.key.as_ref().and_then(ListAction::from_key) else {
                    return;
                };
                event.prevent_default();
                match action {
                    ListAction::Activate => {
                        self.toggle(ctx, index);
                        self.core.focus_trigger(ctx, index);
                    }
                    movement => {
                        if let Some(target) = movement.target(index, self.core.items.len()) {
                            self.core.focus_trigger(ctx, target);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>) {
        self.core.dispose(ctx);
    }
}
