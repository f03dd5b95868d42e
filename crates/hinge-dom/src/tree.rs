//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a removed subtree stays in the arena detached,
//! so stale `NodeId`s keep resolving but report `is_connected() == false`.

use crate::{DomError, ElementData, MutationRecord, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    records: Vec<MutationRecord>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            records: Vec::new(),
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::InvalidNode(id))
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Number of nodes ever allocated
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.node(parent)?.is_container() || child == NodeId::ROOT || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.node(child)?;

        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child)?;
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        self.records.push(MutationRecord::child_added(parent, child));
        Ok(())
    }

    /// Unlink `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !parent.is_valid() || self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }

        let (prev, next) = {
            let node = &mut self.nodes[child.index()];
            let links = (node.prev_sibling, node.next_sibling);
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
            links
        };
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        self.records.push(MutationRecord::child_removed(parent, child));
        Ok(())
    }

    /// Remove `node` from its parent, if it has one
    pub fn detach(&mut self, node: NodeId) -> Result<(), DomError> {
        match self.parent(node) {
            Some(parent) => self.remove_child(parent, node),
            None => self.node(node).map(|_| ()),
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// Direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Ancestors from the parent up to the document node
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// `id` followed by its ancestors
    pub fn inclusive_ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(id)
            .filter(move |&n| self.get(n).is_some())
            .chain(self.ancestors(id))
    }

    /// All descendants in document order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let start = stack.len();
            stack.extend(self.children(node));
            stack[start..].reverse();
        }
        out
    }

    /// Inclusive containment
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.inclusive_ancestors(node).any(|n| n == ancestor)
    }

    /// Whether the node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.contains(NodeId::ROOT, id)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        if let Some(t) = self.get(id).and_then(Node::as_text) {
            text.push_str(t);
        }
        for node in self.descendants(id) {
            if let Some(t) = self.get(node).and_then(Node::as_text) {
                text.push_str(t);
            }
        }
        text
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute; non-elements are ignored
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(element) = self.get_mut(id).and_then(Node::as_element_mut) else {
            return;
        };
        if element.get_attr(name) == Some(value) {
            return;
        }
        let old = element.attrs.set(name, value);
        self.records.push(MutationRecord::attribute(id, name, old));
    }

    /// Remove an attribute, returns true if it was present
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        let Some(element) = self.get_mut(id).and_then(Node::as_element_mut) else {
            return false;
        };
        match element.attrs.remove(name) {
            Some(old) => {
                self.records.push(MutationRecord::attribute(id, name, Some(old)));
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Mutation records
    // ------------------------------------------------------------------

    /// Drain pending mutation records
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn has_pending_records(&self) -> bool {
        !self.records.is_empty()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.to_option()?;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}
