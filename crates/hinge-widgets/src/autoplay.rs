//! Autoplay Controller
//!
//! A recurring [`WidgetTask::AutoplayTick`] advances a carousel. The
//! interval is owned here and always cleared before it is restarted, so
//! at most one tick timer exists per carousel.

use hinge_dom::{Document, NodeId};
use hinge_runtime::{EventLoop, TimerId};

use crate::options::{float, presence};
use crate::{Properties, PropertySchema, PropertyValue, WidgetId, WidgetTask};

/// Default slide delay (ms)
pub const DEFAULT_DELAY_MS: f64 = 5000.0;

/// Longest delay a timer accepts (ms), the signed 32-bit timer limit
pub const MAX_DELAY_MS: u64 = i32::MAX as u64;

/// Play state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

/// Carousel autoplay properties
pub fn schema() -> PropertySchema {
    PropertySchema::new()
        .with("autoplay", PropertyValue::Bool(false), Some(presence))
        .with("delay", PropertyValue::Number(DEFAULT_DELAY_MS), Some(float))
        .with("autopauseDisabled", PropertyValue::Bool(false), Some(presence))
}

/// Autoplay state of one carousel
#[derive(Debug)]
pub struct Autoplay {
    enabled: bool,
    delay_ms: u64,
    autopause_disabled: bool,
    state: PlayState,
    timer: Option<TimerId>,
}

impl Autoplay {
    pub fn new(enabled: bool, delay_ms: u64, autopause_disabled: bool) -> Self {
        Self {
            enabled,
            delay_ms,
            autopause_disabled,
            state: PlayState::Playing,
            timer: None,
        }
    }

    pub fn from_properties(properties: &Properties) -> Self {
        let delay = properties
            .number("delay")
            .filter(|d| !d.is_nan())
            .unwrap_or(DEFAULT_DELAY_MS);
        // Negative delays become 0; larger ones, infinity included, are capped
        Self::new(
            properties.bool("autoplay"),
            delay.clamp(0.0, MAX_DELAY_MS as f64) as u64,
            properties.bool("autopauseDisabled"),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn autopause_disabled(&self) -> bool {
        self.autopause_disabled
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    /// Whether a tick timer is scheduled
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether hover and focus suspend the timer
    pub fn pauses_on_interaction(&self) -> bool {
        self.enabled && !self.autopause_disabled
    }

    /// (Re)start the interval; no-op when disabled or paused
    pub fn reset(&mut self, timers: &mut EventLoop<WidgetTask>, owner: WidgetId) -> bool {
        self.clear(timers);
        if !self.enabled || self.is_paused() {
            return false;
        }
        self.timer = Some(timers.set_interval(WidgetTask::AutoplayTick(owner), self.delay_ms));
        tracing::trace!("autoplay for widget {} every {}ms", owner, self.delay_ms);
        true
    }

    pub fn clear(&mut self, timers: &mut EventLoop<WidgetTask>) {
        if let Some(timer) = self.timer.take() {
            timers.clear_timer(timer);
        }
    }

    pub fn pause(&mut self, timers: &mut EventLoop<WidgetTask>) {
        self.state = PlayState::Paused;
        self.clear(timers);
    }

    /// Mark as playing; the caller restarts the timer unless hovered
    pub fn play(&mut self) {
        self.state = PlayState::Playing;
    }

    /// Whether a due tick should advance the carousel rooted at `root`
    pub fn should_advance(&self, doc: &Document, root: NodeId) -> bool {
        if doc.is_hidden() {
            return false;
        }
        self.autopause_disabled || !(doc.is_hovered(root) || doc.has_focus_within(root))
    }
}
