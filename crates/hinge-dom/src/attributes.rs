//! Element Attributes
//!
//! Ordered attribute storage with name lookup.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        let attr = Attr::new(name, value);
        if let Some(&index) = self.by_name.get(&attr.name) {
            let old = std::mem::replace(&mut self.attributes[index].value, attr.value);
            Some(old)
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index).value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
