//! Disclosure State Machine
//!
//! Which items of a widget are active, independent of any markup. The
//! variants translate [`Transition`]s into classes, ARIA attributes, hash
//! updates and data-layer events.

use std::collections::BTreeSet;

/// How many items may be active at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Any subset (accordion)
    Multiple,
    /// At most one (accordion with single expansion)
    Single,
    /// Always exactly one (tabs, carousel)
    ExactlyOne,
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready,
}

/// Items that changed state, hidden first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub hidden: Vec<usize>,
    pub shown: Vec<usize>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty() && self.shown.is_empty()
    }
}

/// Active-set bookkeeping for one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureState {
    len: usize,
    active: BTreeSet<usize>,
    policy: ExpansionPolicy,
    phase: Phase,
}

impl DisclosureState {
    /// Start from the indices marked active in markup.
    ///
    /// Out-of-range indices are dropped. Under `ExactlyOne` the first
    /// marked index wins, or index 0 when none is marked. `Single` is not
    /// normalised here; see [`Self::normalize_single_expansion`].
    pub fn new(len: usize, policy: ExpansionPolicy, initial: impl IntoIterator<Item = usize>) -> Self {
        let mut active: BTreeSet<usize> = initial.into_iter().filter(|&i| i < len).collect();
        if policy == ExpansionPolicy::ExactlyOne {
            let first = active.first().copied().unwrap_or(0);
            active.clear();
            if len > 0 {
                active.insert(first);
            }
        }
        Self {
            len,
            active,
            policy,
            phase: Phase::Initializing,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn finish_init(&mut self) {
        self.phase = Phase::Ready;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// Active indices, ascending
    pub fn active(&self) -> Vec<usize> {
        self.active.iter().copied().collect()
    }

    /// Lowest active index; the active item under `ExactlyOne`
    pub fn current(&self) -> Option<usize> {
        self.active.first().copied()
    }

    /// Keep only the last active item when more than one is active under
    /// `Single`. Returns the indices forced closed. Only valid while
    /// initializing.
    pub fn normalize_single_expansion(&mut self) -> Vec<usize> {
        if self.policy != ExpansionPolicy::Single || self.phase != Phase::Initializing {
            return Vec::new();
        }
        let Some(&last) = self.active.last() else {
            return Vec::new();
        };
        let closed: Vec<usize> = self.active.iter().copied().filter(|&i| i != last).collect();
        self.active.retain(|&i| i == last);
        closed
    }

    /// Flip one item. `None` for an out-of-range index.
    ///
    /// Under `ExactlyOne` toggling selects; the active item stays active.
    pub fn toggle(&mut self, index: usize) -> Option<Transition> {
        let on = !self.is_active(index);
        self.set(index, on)
    }

    /// Force one item on or off, closing others when the policy requires it
    pub fn set(&mut self, index: usize, on: bool) -> Option<Transition> {
        if index >= self.len {
            return None;
        }
        let mut transition = Transition::default();
        if on {
            if self.is_active(index) {
                return Some(transition);
            }
            if self.policy != ExpansionPolicy::Multiple {
                transition.hidden = self.active();
                self.active.clear();
            }
            self.active.insert(index);
            transition.shown.push(index);
        } else if self.policy != ExpansionPolicy::ExactlyOne && self.active.remove(&index) {
            transition.hidden.push(index);
        }
        Some(transition)
    }

    /// Make `index` the only active item, whatever the policy
    pub fn show_only(&mut self, index: usize) -> Option<Transition> {
        if index >= self.len {
            return None;
        }
        let hidden = self.active.iter().copied().filter(|&i| i != index).collect();
        let shown = if self.is_active(index) { Vec::new() } else { vec![index] };
        self.active.clear();
        self.active.insert(index);
        Some(Transition { hidden, shown })
    }

    /// Select `index` as the single active item
    pub fn select(&mut self, index: usize) -> Option<Transition> {
        self.show_only(index)
    }

    /// Index after the current one, wrapping
    pub fn next_index(&self) -> Option<usize> {
        let current = self.current()?;
        Some((current + 1) % self.len)
    }

    /// Index before the current one, wrapping
    pub fn previous_index(&self) -> Option<usize> {
        let current = self.current()?;
        Some((current + self.len - 1) % self.len)
    }
}
