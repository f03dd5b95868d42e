//! Session history
//!
//! Location entries for the page. Fragment navigation pushes an entry;
//! `replace_state` rewrites the current one in place.

use url::Url;

/// History entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: Url,
    pub state: Option<String>,
}

/// History manager
#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl HistoryManager {
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![HistoryEntry { url: initial, state: None }],
            current: 0,
        }
    }

    /// Current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Push a new entry, dropping forward history
    pub fn push_state(&mut self, state: Option<String>, url: Url) {
        self.entries.truncate(self.current + 1);
        self.entries.push(HistoryEntry { url, state });
        self.current = self.entries.len() - 1;
    }

    /// Replace the current entry
    pub fn replace_state(&mut self, state: Option<String>, url: Url) {
        self.entries[self.current] = HistoryEntry { url, state };
    }

    /// Go back one entry; returns true if the position changed
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Go by delta; out-of-range deltas are ignored
    pub fn go(&mut self, delta: isize) -> bool {
        match self.current.checked_add_signed(delta) {
            Some(index) if index < self.entries.len() && index != self.current => {
                self.current = index;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
