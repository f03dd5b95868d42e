//! Carousel
//!
//! Exactly one slide is visible, starting with the first. Previous/next
//! controls and autoplay wrap around; keyboard movement does not.

use hinge_a11y::{apply_state, AriaState, ListAction, LiveRegionMode};
use hinge_dom::{DomEvent, DomEventType, Key, NodeId};

use crate::autoplay::{self, Autoplay};
use crate::disclosure::{Disclosure, Roles};
use crate::options::resolve;
use crate::{DisclosureState, ExpansionPolicy, Item, Properties, RawOptions, Variant, WidgetContext, WidgetId};

const ROLES: Roles = Roles {
    item: "item",
    trigger: "indicator",
    panel: None,
};

/// Carousel instance
#[derive(Debug)]
pub struct Carousel {
    core: Disclosure,
    properties: Properties,
    autoplay: Autoplay,
}

impl Carousel {
    pub fn new(ctx: &mut WidgetContext<'_>, id: WidgetId, root: NodeId, options: &RawOptions) -> Self {
        let properties = resolve(options, &autoplay::schema());
        let core = Disclosure::new(ctx.document, ctx.config, id, root, Variant::Carousel, ROLES, |_, items| {
            DisclosureState::new(items.len(), ExpansionPolicy::ExactlyOne, [])
        });
        let autoplay = Autoplay::from_properties(&properties);

        let mut carousel = Self {
            core,
            properties,
            autoplay,
        };
        carousel.core.refresh_selection(ctx, "item", "indicator");
        carousel.refresh_play_pause(ctx);
        carousel.reset_autoplay(ctx);
        carousel.core.state.finish_init();
        carousel.sync_deep_link(ctx);
        carousel
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

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn state(&self) -> &DisclosureState {
        &self.core.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.core.state.current()
    }

    /// Show slide `index`. Out-of-range indices are ignored.
    pub fn navigate(&mut self, ctx: &mut WidgetContext<'_>, index: usize, keep_hash: bool) {
        let Some(transition) = self.core.state.select(index) else {
            tracing::debug!("carousel {}: no slide {}", self.core.id, index);
            return;
        };
        if !transition.is_empty() {
            tracing::debug!("carousel {}: active {}", self.core.id, index);
            self.core.refresh_selection(ctx, "item", "indicator");
        }
        self.core.emit_transition(ctx, &transition);
        if !keep_hash {
            self.core.update_hash(ctx, index);
        }
        if !ctx.document.is_hovered(self.core.root) {
            self.reset_autoplay(ctx);
        }
    }

    fn navigate_and_focus_indicator(&mut self, ctx: &mut WidgetContext<'_>, index: usize, keep_hash: bool) {
        self.navigate(ctx, index, keep_hash);
        if self.active_index() == Some(index) {
            self.core.focus_trigger(ctx, index);
        }
    }

    /// Advance one slide, wrapping
    pub fn next(&mut self, ctx: &mut WidgetContext<'_>) {
        if let Some(index) = self.core.state.next_index() {
            self.navigate(ctx, index, false);
        }
    }

    /// Go back one slide, wrapping
    pub fn previous(&mut self, ctx: &mut WidgetContext<'_>) {
        if let Some(index) = self.core.state.previous_index() {
            self.navigate(ctx, index, false);
        }
    }

    pub fn pause(&mut self, ctx: &mut WidgetContext<'_>) {
        self.autoplay.pause(ctx.timers);
        self.refresh_play_pause(ctx);
    }

    pub fn play(&mut self, ctx: &mut WidgetContext<'_>) {
        self.autoplay.play();
        if !ctx.document.is_hovered(self.core.root) {
            self.reset_autoplay(ctx);
        }
        self.refresh_play_pause(ctx);
    }

    fn reset_autoplay(&mut self, ctx: &mut WidgetContext<'_>) {
        self.autoplay.reset(ctx.timers, self.core.id);
    }

    /// Interval tick: advance unless hidden or suspended by interaction
    pub fn on_autoplay_tick(&mut self, ctx: &mut WidgetContext<'_>) {
        if !self.autoplay.should_advance(ctx.document, self.core.root) {
            tracing::trace!("carousel {}: tick skipped", self.core.id);
            return;
        }
        let Some(next) = self.core.state.next_index() else {
            return;
        };
        let focus_in_indicators = ctx
            .document
            .focused()
            .is_some_and(|f| self.core.hooks.contains(ctx.document, "indicators", f));
        if focus_in_indicators {
            self.navigate_and_focus_indicator(ctx, next, true);
        } else {
            self.navigate(ctx, next, true);
        }
    }

    /// Show the slide the fragment points at, keeping the hash
    pub fn sync_deep_link(&mut self, ctx: &mut WidgetContext<'_>) {
        let Some(index) = self.core.resolve_deep_link(ctx) else {
            return;
        };
        if self.active_index() != Some(index) {
            self.navigate(ctx, index, true);
        }
        self.core.scroll_to_anchor(ctx);
    }

    fn refresh_play_pause(&self, ctx: &mut WidgetContext<'_>) {
        let paused = self.autoplay.is_paused();
        let disabled_class = ctx.config.state_class(Variant::Carousel, "action", "disabled");
        let doc = &mut *ctx.document;

        let actions = [("pause", paused), ("play", !paused)];
        for (role, disable) in actions {
            let Some(action) = self.core.hooks.single(role) else {
                continue;
            };
            doc.toggle_attribute(action, "disabled", Some(disable));
            if disable {
                doc.add_class(action, &disabled_class);
            } else {
                doc.remove_class(action, &disabled_class);
            }
        }

        if let Some(content) = self.core.hooks.single("content") {
            let mode = if self.autoplay.is_enabled() && !paused {
                LiveRegionMode::Off
            } else {
                LiveRegionMode::Polite
            };
            apply_state(doc, content, &AriaState::Live(mode));
        }
    }

    pub fn handle_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        match event.event_type {
            DomEventType::Click => self.on_click(ctx, event.target),
            DomEventType::KeyDown => self.on_key_down(ctx, event),
            DomEventType::MouseEnter | DomEventType::FocusIn => {
                if self.autoplay.pauses_on_interaction() {
                    self.autoplay.clear(ctx.timers);
                }
            }
            DomEventType::MouseLeave | DomEventType::FocusOut => {
                if self.autoplay.pauses_on_interaction() {
                    self.reset_autoplay(ctx);
                }
            }
            _ => {}
        }
    }

    fn on_click(&mut self, ctx: &mut WidgetContext<'_>, target: NodeId) {
        let hooks = &self.core.hooks;
        if hooks.contains(ctx.document, "previous", target) {
            self.previous(ctx);
        } else if hooks.contains(ctx.document, "next", target) {
            self.next(ctx);
        } else if hooks.contains(ctx.document, "pause", target) {
            self.pause(ctx);
        } else if hooks.contains(ctx.document, "play", target) {
            self.play(ctx);
        } else if let Some(index) = self.core.trigger_index(ctx.document, target) {
            self.navigate_and_focus_indicator(ctx, index, false);
        }
    }

    fn on_key_down(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        let Some(key) = event.key.clone() else {
            return;
        };
        if key == Key::Space {
            self.on_space(ctx, event);
            return;
        }
        let Some(action) = ListAction::from_key(&key).filter(|a| *a != ListAction::Activate) else {
            return;
        };
        // Only the indicator list navigates by key
        let on_indicators = self.core.hooks.contains(ctx.document, "indicators", event.target)
            || self.core.trigger_index(ctx.document, event.target).is_some();
        if !on_indicators {
            return;
        }
        event.prevent_default();
        let Some(current) = self.active_index() else {
            return;
        };
        if let Some(target) = action.target(current, self.core.items.len()) {
            self.navigate_and_focus_indicator(ctx, target, false);
        }
    }

    fn on_space(&mut self, ctx: &mut WidgetContext<'_>, event: &mut DomEvent) {
        let target = event.target;
        let hooks = &self.core.hooks;
        let on_step_control = hooks.single("previous") == Some(target) || hooks.single("next") == Some(target);
        let on_pause = hooks.single("pause") == Some(target);
        let on_play = hooks.single("play") == Some(target);

        if self.autoplay.is_enabled() && !on_step_control {
            event.prevent_default();
            if self.autoplay.is_paused() {
                self.play(ctx);
            } else {
                self.pause(ctx);
            }
        }

        let swap = if on_pause {
            self.core.hooks.single("play")
        } else if on_play {
            self.core.hooks.single("pause")
        } else {
            None
        };
        if let Some(control) = swap {
            ctx.document.focus(control);
        }
    }

    /// Stop autoplay and pending deferrals
    pub fn dispose(&mut self, ctx: &mut WidgetContext<'_>) {
        self.autoplay.clear(ctx.timers);
        self.core.dispose(ctx);
    }
}
