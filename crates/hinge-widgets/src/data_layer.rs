//! Data layer integration
//!
//! When the page opts in (`data-cmp-data-layer-enabled` on `<body>`),
//! visibility changes are pushed onto an append-only [`EventSink`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use hinge_dom::{Document, NodeId};
use serde::{Deserialize, Serialize};

use crate::WidgetConfig;

/// Visibility event name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[serde(rename = "cmp:show")]
    Show,
    #[serde(rename = "cmp:hide")]
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentState {
    pub shown_items: Vec<String>,
}

/// Event pushed onto the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataLayerEvent {
    /// `{"event": "cmp:show", "eventInfo": {"path": "component.<id>"}}`
    Visibility {
        event: Visibility,
        #[serde(rename = "eventInfo")]
        event_info: EventInfo,
    },
    /// `{"component": {"<id>": {"shownItems": [...]}}}`
    State {
        component: BTreeMap<String, ComponentState>,
    },
}

impl DataLayerEvent {
    pub fn show(id: &str) -> Self {
        Self::visibility(Visibility::Show, id)
    }

    pub fn hide(id: &str) -> Self {
        Self::visibility(Visibility::Hide, id)
    }

    fn visibility(event: Visibility, id: &str) -> Self {
        Self::Visibility {
            event,
            event_info: EventInfo {
                path: format!("component.{id}"),
            },
        }
    }

    pub fn shown_items(component: &str, shown_items: Vec<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(component.to_string(), ComponentState { shown_items });
        Self::State { component: map }
    }
}

/// Append-only event consumer
pub trait EventSink {
    fn push(&mut self, event: DataLayerEvent);
}

/// Shared handle, so the embedder can read what widgets pushed
impl<S: EventSink + ?Sized> EventSink for Rc<RefCell<S>> {
    fn push(&mut self, event: DataLayerEvent) {
        self.borrow_mut().push(event);
    }
}

/// In-memory data layer
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataLayer {
    events: Vec<DataLayerEvent>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DataLayerEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}

impl EventSink for DataLayer {
    fn push(&mut self, event: DataLayerEvent) {
        tracing::trace!("data layer push: {:?}", event);
        self.events.push(event);
    }
}

/// Data-layer id of `node`: the first key of its `data-cmp-data-layer`
/// JSON object, else its element id.
pub fn data_layer_id(doc: &Document, node: NodeId, config: &WidgetConfig) -> Option<String> {
    let fallback = || doc.id(node).map(str::to_string);
    let Some(raw) = doc.get_attribute(node, &config.data_attr("data-layer")) else {
        return fallback();
    };
    match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw) {
        Ok(map) => map.keys().next().cloned().or_else(fallback),
        Err(err) => {
            tracing::warn!("ignoring malformed data layer attribute on {}: {}", node, err);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_html::HtmlParser;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_event_shapes() {
        assert_eq!(
            serde_json::to_value(DataLayerEvent::show("acc-item-1")).unwrap(),
            json!({"event": "cmp:show", "eventInfo": {"path": "component.acc-item-1"}})
        );
        assert_eq!(
            serde_json::to_value(DataLayerEvent::shown_items("acc", vec!["a".into()])).unwrap(),
            json!({"component": {"acc": {"shownItems": ["a"]}}})
        );
    }

    #[test]
    fn test_data_layer_id() {
        let doc = HtmlParser::new()
            .parse(
                r#"<div id="a" data-cmp-data-layer='{"tabs-1-item": {"@type": "x"}}'></div>
                   <div id="b" data-cmp-data-layer="{oops"></div>
                   <div id="c"></div><div class="anon"></div>"#,
            )
            .unwrap();
        let config = WidgetConfig::default();
        let id = |s| data_layer_id(&doc, doc.get_element_by_id(s).unwrap(), &config);

        assert_eq!(id("a").as_deref(), Some("tabs-1-item"));
        assert_eq!(id("b").as_deref(), Some("b"));
        assert_eq!(id("c").as_deref(), Some("c"));

        let anon = doc.query_all(doc.body(), |e| e.has_class("anon"))[0];
        assert_eq!(data_layer_id(&doc, anon, &config), None);
    }

    #[test]
    fn test_shared_sink() {
        let shared = Rc::new(RefCell::new(DataLayer::new()));
        let mut sink: Box<dyn EventSink> = Box::new(Rc::clone(&shared));
        sink.push(DataLayerEvent::hide("x"));
        assert_eq!(shared.borrow().events(), &[DataLayerEvent::hide("x")]);
    }
}
