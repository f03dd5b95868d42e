//! Keyboard navigation for item lists
//!
//! Maps keys onto list movements. Movement is clamped: the first item
//! has no previous item and the last has no next one.

use hinge_dom::Key;

/// Navigation action within a list of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Previous,
    Next,
    First,
    Last,
    Activate,
}

impl ListAction {
    /// Action bound to `key`, if any
    pub fn from_key(key: &Key) -> Option<Self> {
        Some(match key {
            Key::ArrowLeft | Key::ArrowUp => Self::Previous,
            Key::ArrowRight | Key::ArrowDown => Self::Next,
            Key::Home => Self::First,
            Key::End => Self::Last,
            Key::Enter | Key::Space => Self::Activate,
            _ => return None,
        })
    }

    /// Index this action moves to from `current` in a list of `len` items.
    ///
    /// `None` means the key does nothing (edge of the list, or `Activate`).
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        match self {
            Self::Previous if current > 0 => Some(current - 1),
            Self::Next if current < last => Some(current + 1),
            Self::First => Some(0),
            Self::Last => Some(last),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(ListAction::from_key(&Key::ArrowUp), Some(ListAction::Previous));
        assert_eq!(ListAction::from_key(&Key::ArrowDown), Some(ListAction::Next));
        assert_eq!(ListAction::from_key(&Key::Space), Some(ListAction::Activate));
        assert_eq!(ListAction::from_key(&Key::Tab), None);
    }

    #[test]
    fn test_bounds_do_not_wrap() {
        assert_eq!(ListAction::Previous.target(0, 3), None);
        assert_eq!(ListAction::Next.target(2, 3), None);
        assert_eq!(ListAction::Next.target(0, 3), Some(1));
        assert_eq!(ListAction::Last.target(0, 3), Some(2));
        assert_eq!(ListAction::First.target(2, 3), Some(0));
        assert_eq!(ListAction::First.target(0, 0), None);
        assert_eq!(ListAction::Activate.target(1, 3), None);
    }
}
