//! DOM Events
//!
//! Interaction and lifecycle events delivered to widgets.

use crate::NodeId;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventType {
    // Pointer
    Click,
    MouseEnter,
    MouseLeave,

    // Keyboard
    KeyDown,

    // Focus
    FocusIn,
    FocusOut,
}

impl DomEventType {
    /// Whether events of this type propagate to ancestors
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::MouseEnter | Self::MouseLeave)
    }
}

/// Key value, parsed from the DOM `KeyboardEvent.key` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Tab,
    Escape,
    Character(char),
    Unidentified(String),
}

impl Key {
    /// Parse from key string
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified(s.to_string()),
                }
            }
        }
    }

    /// Convert to key value string
    pub fn to_key_string(&self) -> String {
        match self {
            Self::ArrowUp => "ArrowUp".into(),
            Self::ArrowDown => "ArrowDown".into(),
            Self::ArrowLeft => "ArrowLeft".into(),
            Self::ArrowRight => "ArrowRight".into(),
            Self::Home => "Home".into(),
            Self::End => "End".into(),
            Self::Enter => "Enter".into(),
            Self::Space => " ".into(),
            Self::Tab => "Tab".into(),
            Self::Escape => "Escape".into(),
            Self::Character(c) => c.to_string(),
            Self::Unidentified(s) => s.clone(),
        }
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub key: Option<Key>,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    fn new(event_type: DomEventType, target: NodeId, cancelable: bool) -> Self {
        Self {
            event_type,
            target,
            key: None,
            cancelable,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(DomEventType::Click, target, true)
    }

    pub fn key_down(target: NodeId, key: Key) -> Self {
        Self {
            key: Some(key),
            ..Self::new(DomEventType::KeyDown, target, true)
        }
    }

    pub fn mouse_enter(target: NodeId) -> Self {
        Self::new(DomEventType::MouseEnter, target, false)
    }

    pub fn mouse_leave(target: NodeId) -> Self {
        Self::new(DomEventType::MouseLeave, target, false)
    }

    pub fn focus_in(target: NodeId) -> Self {
        Self::new(DomEventType::FocusIn, target, false)
    }

    pub fn focus_out(target: NodeId) -> Self {
        Self::new(DomEventType::FocusOut, target, false)
    }

    pub fn bubbles(&self) -> bool {
        self.event_type.bubbles()
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
