//! Mutation Observer
//!
//! The tree appends a `MutationRecord` for every structural or attribute
//! change. Observers pick the records relevant to them when the owner
//! drains the queue at a checkpoint.

use crate::{DomTree, NodeId};

/// Mutation observer
#[derive(Debug, Default)]
pub struct MutationObserver {
    options: MutationObserverInit,
    observed: Vec<NodeId>,
}

/// Mutation observer options
#[derive(Debug, Clone, Default)]
pub struct MutationObserverInit {
    pub child_list: bool,
    pub attributes: bool,
    pub subtree: bool,
    pub attribute_filter: Option<Vec<String>>,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub mutation_type: MutationType,
    pub target: NodeId,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
    pub attribute_name: Option<String>,
    pub old_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    Attributes,
    ChildList,
}

impl MutationRecord {
    pub fn child_added(parent: NodeId, child: NodeId) -> Self {
        Self {
            mutation_type: MutationType::ChildList,
            target: parent,
            added_nodes: vec![child],
            removed_nodes: Vec::new(),
            attribute_name: None,
            old_value: None,
        }
    }

    pub fn child_removed(parent: NodeId, child: NodeId) -> Self {
        Self {
            mutation_type: MutationType::ChildList,
            target: parent,
            added_nodes: Vec::new(),
            removed_nodes: vec![child],
            attribute_name: None,
            old_value: None,
        }
    }

    pub fn attribute(target: NodeId, name: &str, old_value: Option<String>) -> Self {
        Self {
            mutation_type: MutationType::Attributes,
            target,
            added_nodes: Vec::new(),
            removed_nodes: Vec::new(),
            attribute_name: Some(name.to_string()),
            old_value,
        }
    }
}

impl MutationObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, target: NodeId, options: MutationObserverInit) {
        self.options = options;
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn is_observing(&self) -> bool {
        !self.observed.is_empty()
    }

    /// Select the records this observer would be notified about
    pub fn filter(&self, tree: &DomTree, records: &[MutationRecord]) -> Vec<MutationRecord> {
        records
            .iter()
            .filter(|record| self.wants(tree, record))
            .cloned()
            .collect()
    }

    fn wants(&self, tree: &DomTree, record: &MutationRecord) -> bool {
        let type_ok = match record.mutation_type {
            MutationType::ChildList => self.options.child_list,
            MutationType::Attributes => {
                self.options.attributes
                    && match (&self.options.attribute_filter, &record.attribute_name) {
                        (Some(filter), Some(name)) => filter.iter().any(|f| f == name),
                        _ => true,
                    }
            }
        };

        type_ok
            && self.observed.iter().any(|&root| {
                root == record.target || (self.options.subtree && tree.contains(root, record.target))
            })
    }
}
