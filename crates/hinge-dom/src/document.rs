//! Document - High-level document API
//!
//! Wraps the tree with the page-level state widgets consult: location,
//! hover and focus targets, visibility, and scroll requests.

use url::Url;

use crate::{
    DOMStringMap, DOMTokenList, DomError, DomTree, ElementData, HistoryManager, MutationRecord,
    NodeId,
};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    history: HistoryManager,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    hovered: Option<NodeId>,
    focused: Option<NodeId>,
    hidden: bool,
    scrolled: Vec<NodeId>,
}

impl Document {
    /// Create a document with `<html><head></head><body></body></html>`
    pub fn new(url: Url) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh, distinct nodes under a container: cannot fail.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);
        tree.take_records();

        let mut doc = Self::empty(url);
        doc.tree = tree;
        doc.html_element = html;
        doc.head_element = head;
        doc.body_element = body;
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: Url) -> Self {
        Self {
            tree: DomTree::new(),
            history: HistoryManager::new(url),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            hovered: None,
            focused: None,
            hidden: false,
            scrolled: Vec::new(),
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        let find = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|&id| tree.element(id).is_some_and(|e| e.tag == tag))
                .unwrap_or(NodeId::NONE)
        };
        self.html_element = find(&self.tree, NodeId::ROOT, "html");
        self.head_element = find(&self.tree, self.html_element, "head");
        self.body_element = find(&self.tree, self.html_element, "body");
        self.tree.take_records();
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    // ------------------------------------------------------------------
    // Location
    // ------------------------------------------------------------------

    /// Current location
    pub fn url(&self) -> &Url {
        &self.history.current().url
    }

    /// Current fragment without the leading `#`, if non-empty
    pub fn fragment(&self) -> Option<&str> {
        self.url().fragment().filter(|f| !f.is_empty())
    }

    /// Navigate to `#fragment`, pushing a history entry.
    ///
    /// Returns false when the fragment is unchanged (no hashchange).
    pub fn push_fragment(&mut self, fragment: &str) -> bool {
        let fragment = fragment.trim_start_matches('#');
        if self.url().fragment() == Some(fragment) {
            return false;
        }
        let mut url = self.url().clone();
        url.set_fragment(Some(fragment));
        self.history.push_state(None, url);
        true
    }

    /// Rewrite the current entry's fragment in place (no hashchange).
    ///
    /// `None` strips the fragment. Returns false when nothing changed.
    pub fn replace_fragment(&mut self, fragment: Option<&str>) -> bool {
        let fragment = fragment.map(|f| f.trim_start_matches('#'));
        if self.url().fragment() == fragment {
            return false;
        }
        let mut url = self.url().clone();
        url.set_fragment(fragment);
        let state = self.history.current().state.clone();
        self.history.replace_state(state, url);
        true
    }

    /// Navigate to an absolute or relative URL, pushing a history entry
    pub fn navigate(&mut self, href: &str) -> Result<(), DomError> {
        let url = self.url().join(href)?;
        self.history.push_state(None, url);
        Ok(())
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryManager {
        &mut self.history
    }

    // ------------------------------------------------------------------
    // Attributes and classes
    // ------------------------------------------------------------------

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.tree.element(node)
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get_attribute(node, name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.tree.has_attribute(node, name)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.tree.set_attribute(node, name, value);
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        self.tree.remove_attribute(node, name)
    }

    /// Presence-based toggle; returns whether the attribute is now present
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, force: Option<bool>) -> bool {
        let on = force.unwrap_or(!self.has_attribute(node, name));
        if on {
            if !self.has_attribute(node, name) {
                self.set_attribute(node, name, "");
            }
        } else {
            self.remove_attribute(node, name);
        }
        on
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(ElementData::id)
    }

    pub fn class_list(&self, node: NodeId) -> DOMTokenList {
        DOMTokenList::from_string(self.get_attribute(node, "class").unwrap_or(""))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let mut list = self.class_list(node);
        if list.add(class) {
            self.set_attribute(node, "class", &list.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let mut list = self.class_list(node);
        if list.remove(class) {
            self.set_attribute(node, "class", &list.to_string());
        }
    }

    /// camelCase view over the node's `data-*` attributes
    pub fn dataset(&self, node: NodeId) -> DOMStringMap {
        match self.element(node) {
            Some(e) => DOMStringMap::from_attributes(
                e.attrs.iter().map(|a| (a.name.as_str(), a.value.as_str())),
            ),
            None => DOMStringMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.tree.is_connected(node)
    }

    /// Nearest inclusive ancestor element matching `pred`
    pub fn closest(&self, node: NodeId, pred: impl Fn(&ElementData) -> bool) -> Option<NodeId> {
        self.tree
            .inclusive_ancestors(node)
            .find(|&id| self.element(id).is_some_and(&pred))
    }

    pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.closest(node, |e| e.has_class(class))
    }

    /// Descendant elements of `scope` matching `pred`, in document order
    pub fn query_all(&self, scope: NodeId, pred: impl Fn(&ElementData) -> bool) -> Vec<NodeId> {
        self.tree
            .descendants(scope)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(&pred))
            .collect()
    }

    /// Descendant elements of `scope` carrying attribute `name`
    pub fn query_with_attribute(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.query_all(scope, |e| e.has_attr(name))
    }

    /// First connected element carrying `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.id(node) == Some(id))
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    // ------------------------------------------------------------------
    // Interaction state
    // ------------------------------------------------------------------

    /// Element under the pointer
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Move the pointer; returns the previous hover target
    pub fn set_hovered(&mut self, node: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.hovered, node)
    }

    /// Whether the pointer is over `node` or one of its descendants
    pub fn is_hovered(&self, node: NodeId) -> bool {
        self.hovered.is_some_and(|h| self.contains(node, h))
    }

    /// The active element
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Focus `node`; returns the previously focused element
    pub fn focus(&mut self, node: NodeId) -> Option<NodeId> {
        tracing::trace!("focus -> {}", node);
        self.focused.replace(node)
    }

    pub fn blur(&mut self) -> Option<NodeId> {
        self.focused.take()
    }

    /// Whether focus is on `node` or inside it
    pub fn has_focus_within(&self, node: NodeId) -> bool {
        self.focused.is_some_and(|f| self.contains(node, f))
    }

    /// `document.hidden`
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Record a scroll-into-view request
    pub fn scroll_into_view(&mut self, node: NodeId) {
        tracing::debug!("scroll into view {}", node);
        self.scrolled.push(node);
    }

    /// Elements scrolled into view, oldest first
    pub fn scrolled(&self) -> &[NodeId] {
        &self.scrolled
    }

    /// Drain pending mutation records
    pub fn take_mutation_records(&mut self) -> Vec<MutationRecord> {
        self.tree.take_records()
    }
}
