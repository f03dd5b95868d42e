//! Element Registry
//!
//! Hooks are descendants tagged `data-cmp-hook-<variant>="<role>"`. Only
//! hooks whose nearest `.cmp-<variant>` ancestor is the widget root
//! belong to it; a nested widget of the same variant keeps its own.

use std::collections::BTreeMap;

use hinge_dom::{Document, NodeId};

use crate::{Variant, WidgetConfig};

/// Elements found for one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEntry {
    Single(NodeId),
    Many(Vec<NodeId>),
}

impl HookEntry {
    pub fn as_slice(&self) -> &[NodeId] {
        match self {
            Self::Single(node) => std::slice::from_ref(node),
            Self::Many(nodes) => nodes,
        }
    }

    pub fn first(&self) -> NodeId {
        match self {
            Self::Single(node) => *node,
            Self::Many(nodes) => nodes[0],
        }
    }

    fn push(&mut self, node: NodeId) {
        match self {
            Self::Single(first) => *self = Self::Many(vec![*first, node]),
            Self::Many(nodes) => nodes.push(node),
        }
    }
}

/// Hooks of one widget instance, grouped by role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookMap {
    entries: BTreeMap<String, HookEntry>,
}

impl HookMap {
    /// Scan `root` for the hooks it owns, in document order
    pub fn collect(doc: &Document, root: NodeId, variant: Variant, config: &WidgetConfig) -> Self {
        let attr = config.hook_attr(variant);
        let class = config.root_class(variant);
        let mut map = Self::default();

        for hook in doc.query_all(root, |e| e.has_attr(&attr)) {
            if doc.closest_with_class(hook, &class) != Some(root) {
                continue;
            }
            let Some(role) = doc.get_attribute(hook, &attr) else {
                continue;
            };
            map.insert(role, hook);
        }

        tracing::trace!("{} hooks under {}: {:?}", variant.name(), root, map.entries.keys());
        map
    }

    fn insert(&mut self, role: &str, node: NodeId) {
        match self.entries.get_mut(role) {
            Some(entry) => entry.push(node),
            None => {
                self.entries.insert(role.to_string(), HookEntry::Single(node));
            }
        }
    }

    pub fn get(&self, role: &str) -> Option<&HookEntry> {
        self.entries.get(role)
    }

    /// First element for `role`
    pub fn single(&self, role: &str) -> Option<NodeId> {
        self.get(role).map(HookEntry::first)
    }

    /// Every element for `role`; empty when absent
    pub fn all(&self, role: &str) -> &[NodeId] {
        self.get(role).map(HookEntry::as_slice).unwrap_or(&[])
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Position of the `role` element equal to or containing `target`
    pub fn position_containing(&self, doc: &Document, role: &str, target: NodeId) -> Option<usize> {
        self.all(role).iter().position(|&hook| doc.contains(hook, target))
    }

    /// Whether `target` is inside the single `role` element
    pub fn contains(&self, doc: &Document, role: &str, target: NodeId) -> bool {
        self.single(role).is_some_and(|hook| doc.contains(hook, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_html::HtmlParser;
    use pretty_assertions::assert_eq;

    const NESTED: &str = r#"
        <div id="outer" class="cmp-accordion">
          <div data-cmp-hook-accordion="item" id="o1">
            <button data-cmp-hook-accordion="button"></button>
            <div data-cmp-hook-accordion="panel">
              <div id="inner" class="cmp-accordion">
                <div data-cmp-hook-accordion="item" id="i1"></div>
              </div>
            </div>
          </div>
          <div data-cmp-hook-accordion="item" id="o2"></div>
        </div>"#;

    #[test]
    fn test_nested_hooks_are_scoped() {
        let doc = HtmlParser::new().parse(NESTED).unwrap();
        let config = WidgetConfig::default();
        let outer = doc.get_element_by_id("outer").unwrap();
        let inner = doc.get_element_by_id("inner").unwrap();

        let outer_hooks = HookMap::collect(&doc, outer, Variant::Accordion, &config);
        let ids = |nodes: &[NodeId]| nodes.iter().map(|&n| doc.id(n).unwrap_or("")).collect::<Vec<_>>();
        assert_eq!(ids(outer_hooks.all("item")), vec!["o1", "o2"]);
        assert!(matches!(outer_hooks.get("button"), Some(HookEntry::Single(_))));

        let inner_hooks = HookMap::collect(&doc, inner, Variant::Accordion, &config);
        assert_eq!(ids(inner_hooks.all("item")), vec!["i1"]);
        assert!(inner_hooks.get("button").is_none());
        assert!(inner_hooks.all("button").is_empty());
    }

    #[test]
    fn test_position_containing() {
        let doc = HtmlParser::new()
            .parse(
                r#"<div id="t" class="cmp-tabs">
                     <ol><li data-cmp-hook-tabs="tab"><span id="a">A</span></li>
                         <li data-cmp-hook-tabs="tab"><span id="b">B</span></li></ol>
                   </div>"#,
            )
            .unwrap();
        let root = doc.get_element_by_id("t").unwrap();
        let hooks = HookMap::collect(&doc, root, Variant::Tabs, &WidgetConfig::default());

        let b = doc.get_element_by_id("b").unwrap();
        assert_eq!(hooks.position_containing(&doc, "tab", b), Some(1));
        assert_eq!(hooks.position_containing(&doc, "tab", root), None);
        assert_eq!(hooks.roles().collect::<Vec<_>>(), vec!["tab"]);
    }
}
