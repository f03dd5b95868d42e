//! Generational arena
//!
//! Slot storage for live widget instances. A slot's generation is bumped
//! on removal, so handles held by timers or callers go stale instead of
//! aliasing whatever instance reuses the slot.

use std::fmt;

/// Generational index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenIndex {
    pub index: u32,
    pub generation: u32,
}

impl fmt::Display for GenIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational arena (slot map)
#[derive(Debug)]
pub struct GenArena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
}

impl<T> Default for GenArena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<T> GenArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value that needs to know its own index
    pub fn insert_with(&mut self, build: impl FnOnce(GenIndex) -> T) -> GenIndex {
        let index = match self.free_list.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: None,
                });
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        let idx = GenIndex {
            index,
            generation: slot.generation,
        };
        slot.value = Some(build(idx));
        idx
    }

    pub fn insert(&mut self, value: T) -> GenIndex {
        self.insert_with(|_| value)
    }

    pub fn get(&self, idx: GenIndex) -> Option<&T> {
        self.slots
            .get(idx.index as usize)
            .filter(|slot| slot.generation == idx.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, idx: GenIndex) -> Option<&mut T> {
        self.slots
            .get_mut(idx.index as usize)
            .filter(|slot| slot.generation == idx.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn contains(&self, idx: GenIndex) -> bool {
        self.get(idx).is_some()
    }

    /// Remove a value; its index becomes stale
    pub fn remove(&mut self, idx: GenIndex) -> Option<T> {
        let slot = self.slots.get_mut(idx.index as usize)?;
        if slot.generation != idx.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(idx.index);
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live indices in slot order
    pub fn ids(&self) -> Vec<GenIndex> {
        self.iter().map(|(idx, _)| idx).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GenIndex, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let value = slot.value.as_ref()?;
            Some((
                GenIndex {
                    index: i as u32,
                    generation: slot.generation,
                },
                value,
            ))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GenIndex, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            let value = slot.value.as_mut()?;
            Some((
                GenIndex {
                    index: i as u32,
                    generation,
                },
                value,
            ))
        })
    }
}
