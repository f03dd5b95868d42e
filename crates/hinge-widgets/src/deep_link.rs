//! Deep-Link Synchronizer
//!
//! The URL fragment is the only persisted widget state. Widgets talk to
//! it through [`DeepLinkProvider`]; when no provider is installed every
//! hash-related step is skipped.

use hinge_dom::{Document, NodeId};

use crate::HookMap;

/// The widget a deep-link query is about
#[derive(Debug, Clone, Copy)]
pub struct LinkTarget<'a> {
    pub root: NodeId,
    pub hooks: &'a HookMap,
}

/// Fragment capability used by widgets
pub trait DeepLinkProvider {
    /// Index of the item the current fragment points at, if it belongs to `target`
    fn deep_link_item_index(
        &self,
        doc: &Document,
        target: &LinkTarget<'_>,
        item_role: &str,
        panel_role: Option<&str>,
    ) -> Option<usize>;

    /// Point the fragment at the `role` element at `index`
    fn update_url_hash(&mut self, doc: &mut Document, target: &LinkTarget<'_>, role: &str, index: usize);

    /// Clear the fragment
    fn remove_url_hash(&mut self, doc: &mut Document);

    /// Scroll the fragment's target element into view
    fn scroll_to_anchor(&mut self, doc: &mut Document);
}

/// Default provider backed by the document's own location.
///
/// Hash writes replace the current history entry, so they never raise
/// a hashchange of their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct FragmentLinks;

impl FragmentLinks {
    pub fn new() -> Self {
        Self
    }
}

impl DeepLinkProvider for FragmentLinks {
    fn deep_link_item_index(
        &self,
        doc: &Document,
        target: &LinkTarget<'_>,
        item_role: &str,
        panel_role: Option<&str>,
    ) -> Option<usize> {
        let fragment = doc.fragment()?;
        let items = target.hooks.all(item_role);
        let panels = panel_role.map(|role| target.hooks.all(role)).unwrap_or(&[]);
        let panel = |i: usize| panels.get(i).copied();

        let by_id = items.iter().enumerate().position(|(i, &item)| {
            doc.id(item) == Some(fragment) || panel(i).is_some_and(|p| doc.id(p) == Some(fragment))
        });
        if by_id.is_some() {
            return by_id;
        }

        let anchor = doc.get_element_by_id(fragment)?;
        if !doc.contains(target.root, anchor) {
            return None;
        }
        items.iter().enumerate().position(|(i, &item)| {
            doc.contains(item, anchor) || panel(i).is_some_and(|p| doc.contains(p, anchor))
        })
    }

    fn update_url_hash(&mut self, doc: &mut Document, target: &LinkTarget<'_>, role: &str, index: usize) {
        let Some(&node) = target.hooks.all(role).get(index) else {
            return;
        };
        let Some(id) = doc.id(node).map(str::to_string) else {
            tracing::trace!("{} has no id, hash left alone", node);
            return;
        };
        doc.replace_fragment(Some(&id));
    }

    fn remove_url_hash(&mut self, doc: &mut Document) {
        doc.replace_fragment(None);
    }

    fn scroll_to_anchor(&mut self, doc: &mut Document) {
        let anchor = doc.fragment().and_then(|f| doc.get_element_by_id(f));
        if let Some(anchor) = anchor {
            doc.scroll_into_view(anchor);
        }
    }
}
