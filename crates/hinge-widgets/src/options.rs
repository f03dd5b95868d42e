//! Options Resolver
//!
//! Per-instance configuration comes from namespaced `data-*` attributes
//! on the widget root. [`read_options`] collects the raw strings and
//! [`resolve`] types them against a [`PropertySchema`].

use std::collections::BTreeMap;

use hinge_dom::{Document, NodeId};

use crate::{Variant, WidgetConfig};

/// Raw option strings keyed by property name (`singleExpansion`, `delay`, ...)
pub type RawOptions = BTreeMap<String, String>;

/// Typed property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Maps a raw attribute string to a typed value; `None` falls back to the default
pub type Transform = fn(&str) -> Option<PropertyValue>;

/// Schema entry for one property
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub default: PropertyValue,
    pub transform: Option<Transform>,
}

/// Property schema of a widget variant
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    specs: Vec<(&'static str, PropertySpec)>,
}

impl PropertySchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, default: PropertyValue, transform: Option<Transform>) -> Self {
        self.specs.push((key, PropertySpec { default, transform }));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertySpec)> {
        self.specs.iter().map(|(k, s)| (*k, s))
    }
}

/// Resolved properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: BTreeMap<String, PropertyValue>,
}

impl Properties {
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }

    /// Boolean view; non-boolean values count as false
    pub fn bool(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(PropertyValue::Bool(true)))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(PropertyValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PropertyValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Type raw options against `schema`.
///
/// Present values go through the key's transform (or are kept as text);
/// absent keys, and values the transform rejects, take the default.
/// Keys outside the schema are ignored.
pub fn resolve(raw: &RawOptions, schema: &PropertySchema) -> Properties {
    let values = schema
        .iter()
        .map(|(key, spec)| {
            let value = match (raw.get(key), spec.transform) {
                (Some(value), Some(transform)) => {
                    transform(value).unwrap_or_else(|| spec.default.clone())
                }
                (Some(value), None) => PropertyValue::Text(value.clone()),
                (None, _) => spec.default.clone(),
            };
            (key.to_string(), value)
        })
        .collect();
    Properties { values }
}

/// Boolean presence: any value, including the empty string, means true
pub fn presence(_: &str) -> Option<PropertyValue> {
    Some(PropertyValue::Bool(true))
}

/// Leading-float parse; `"250ms"` is 250, `"abc"` is rejected
pub fn float(raw: &str) -> Option<PropertyValue> {
    parse_float_prefix(raw).map(PropertyValue::Number)
}

/// Parse the longest decimal prefix of `s`, after leading whitespace
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int = digits(end);
    end += int;
    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = digits(end + 1);
        if int > 0 || frac > 0 {
            end += 1 + frac;
        }
    }
    if int == 0 && frac == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let n = digits(exp);
        if n > 0 {
            end = exp + n;
        }
    }
    s[..end].parse().ok()
}

/// Collect the namespaced dataset of `root` as raw options.
///
/// `data-cmp-single-expansion` becomes `singleExpansion`. The activation
/// marker and the variant's hook key are not options.
pub fn read_options(doc: &Document, root: NodeId, variant: Variant, config: &WidgetConfig) -> RawOptions {
    let ns = config.namespace.as_str();
    let hook_key = format!("hook{}", capitalize(variant.name()));

    doc.dataset(root)
        .iter()
        .filter_map(|(key, value)| {
            let rest = key.strip_prefix(ns).filter(|r| !r.is_empty())?;
            let key = lower_first(rest);
            if key == "is" || key == hook_key {
                return None;
            }
            Some((key, value.to_string()))
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_html::HtmlParser;
    use pretty_assertions::assert_eq;

    fn carousel_schema() -> PropertySchema {
        PropertySchema::new()
            .with("autoplay", PropertyValue::Bool(false), Some(presence))
            .with("delay", PropertyValue::Number(5000.0), Some(float))
    }

    #[test]
    fn test_defaults_and_transforms() {
        let mut raw = RawOptions::new();
        raw.insert("autoplay".into(), "".into());
        raw.insert("unknown".into(), "x".into());

        let props = resolve(&raw, &carousel_schema());
        assert!(props.bool("autoplay"));
        assert_eq!(props.number("delay"), Some(5000.0));
        assert_eq!(props.get("unknown"), None);
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_unparsable_number_falls_back() {
        let mut raw = RawOptions::new();
        raw.insert("delay".into(), "abc".into());
        assert_eq!(resolve(&raw, &carousel_schema()).number("delay"), Some(5000.0));
    }

    #[test]
    fn test_untransformed_value_kept_as_text() {
        let schema = PropertySchema::new().with("label", PropertyValue::Text("x".into()), None);
        let mut raw = RawOptions::new();
        raw.insert("label".into(), "Slides".into());
        assert_eq!(resolve(&raw, &schema).text("label"), Some("Slides"));
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("250"), Some(250.0));
        assert_eq!(parse_float_prefix("  250ms"), Some(250.0));
        assert_eq!(parse_float_prefix("-1.5e3x"), Some(-1500.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn test_read_options_strips_namespace() {
        let doc = HtmlParser::new()
            .parse(
                r#"<div id="c" class="cmp-carousel" data-cmp-is="carousel"
                    data-cmp-hook-carousel="x" data-cmp-autoplay data-cmp-delay="800"
                    data-cmp-autopause-disabled data-other="1"></div>"#,
            )
            .unwrap();
        let root = doc.get_element_by_id("c").unwrap();

        let raw = read_options(&doc, root, Variant::Carousel, &WidgetConfig::default());
        let keys: Vec<_> = raw.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["autopauseDisabled", "autoplay", "delay"]);
        assert_eq!(raw["delay"], "800");
    }
}
