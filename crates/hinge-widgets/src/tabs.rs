//! Tabs
//!
//! Exactly one tab is selected. The initially selected tab is the first
//! carrying `cmp-tabs__tab--active`, else the first tab.

use hinge_a11y::ListAction;
use hinge_dom::{DomEvent, DomEventType, NodeId};

use crate::disclosure::{Disclosure, Roles};
use crate::{DisclosureState, ExpansionPolicy, Item, Transition, Variant, WidgetContext, WidgetId};

const ROLES: Roles = Roles {
    item: "tab",
    trigger: "tab",
    panel: Some("tabpanel"),
};

/// Tabs instance
#[derive(Debug)]
pub struct Tabs {
    core: Disclosure,
}

impl Tabs {
    pub fn new(ctx: &mut WidgetContext<'_>, id: WidgetId, root: NodeId) -> Self {
        let active_class = ctx.config.state_class(Variant::Tabs, "tab", "active");
        let core = Disclosure::new(ctx.document, ctx.config, id, root, Variant::Tabs, ROLES, |doc, items| {
            let initial = items
                .iter()
                .filter(|item| doc.has_class(item.element, &active_class))
                .map(|item| item.index);
            DisclosureState::new(items.len(), ExpansionPolicy::ExactlyOne, initial)
        });

        let mut tabs = Self { core };
        tabs.refresh(ctx);
        tabs.core.state.finish_init();
        tabs.sync_deep_link(ctx);
        tabs
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

    pub fn state(&self) -> &DisclosureState {
        &self.core.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.core.state.current()
    }

    /// Select tab `index` without touching focus, hash or data layer
    pub fn navigate(&mut self, ctx: &mut WidgetContext<'_>, index: usize) {
        self.select(ctx, index);
    }

    fn select(&mut self, ctx: &mut WidgetContext<'_>, index: usize) -> Option<Transition> {
        let Some(transition) = self.core.state.select(index) else {
            tracing::debug!("tabs {}: no tab {}", self.core.id, index);
            return None;
        };
        if !transition.is_empty() {
            tracing::debug!("tabs {}: active {}", self.core.id, index);
            self.refresh(ctx);
        }
        Some(transition)
    }

    /// Select and focus tab `index`; user-driven selection also writes the hash
    pub fn navigate_and_focus(&mut self, ctx: &mut WidgetContext<'_>, index: usize, keep_hash: bool) {
        if index >= self.core.items.len() {
            tracing::debug!("tabs {}: no tab {}", self.core.id, index);
            return;
        }
        if !keep_hash {
            self.core.update_hash(ctx, index);
        }
        let Some(transition) = self.select(ctx, index) else {
            return;
        };
        self.core.focus_trigger(ctx, index);
        self.core.emit_transition(ctx, &transition);
    }

    /// Select the tab the fragment points at, keeping the hash
    pub fn sync_deep_link(&mut self, ctx: &mut WidgetContext<'_>) {
        let Some(index) = self.core.resolve_deep_link(ctx) else {
            return;
        };
        if self.active_index() != Some(index) {
            self.navigate_and_focus(ctx, index, true);
        }
        self.core.scroll_to_anchor(ctx);
    }

    fn refresh(&self, ctx: &mut WidgetContext<'_>) {
        self.core.refresh_selection(ctx, "tabpanel", "tab");
    }

    pub fn handle_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        let Some(index) = self.core.trigger_index(ctx.document, event.target) else {
            return;
        };
        match event.event_type {
            DomEventType::Click => self.navigate_and_focus(ctx, index, false),
            DomEventType::KeyDown => {
                let action = event.key.as_ref().and_then(ListAction::from_key);
                let Some(action) = action.filter(|a| *a != ListAction::Activate) else {
                    return;
                };
                event.prevent_default();
                if let Some(target) = action.target(index, self.core.items.len()) {
                    self.navigate_and_focus(ctx, target, false);
                }
            }
            _ => {}
        }
    }

    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>) {
        self.core.dispose(ctx);
    }
}
