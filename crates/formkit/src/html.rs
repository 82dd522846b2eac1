//! HTML element builder.
//!
//! [`Html`] is a mutable element value: a tag name (or none, for a bare
//! fragment), an insertion-ordered attribute list and child nodes. Controls
//! keep `Html` prototypes that renderers decorate before markup is emitted.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ATTR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").expect("attribute name pattern is valid")
});

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns whether `name` can be written as an attribute name.
pub fn is_attr_name(name: &str) -> bool {
    ATTR_NAME.is_match(name)
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Value of a single element attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute, rendered bare when true and omitted when false.
    Bool(bool),
    /// Plain string attribute.
    Str(String),
    /// Composable class list.
    Classes(Vec<String>),
}

impl AttrValue {
    /// Converts a loose JSON value into an attribute value.
    ///
    /// Returns `None` for `null` and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::String(s) => Some(Self::Str(s.clone())),
            serde_json::Value::Number(n) => Some(Self::Str(n.to_string())),
            serde_json::Value::Array(items) => Some(Self::Classes(
                items
                    .iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            serde_json::Value::Null | serde_json::Value::Object(_) => None,
        }
    }

    /// Returns the string value, if this is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Splits the value into individual class names.
    pub fn class_list(&self) -> Vec<String> {
        match self {
            Self::Str(s) => s.split_whitespace().map(str::to_string).collect(),
            Self::Classes(classes) => classes.clone(),
            Self::Bool(_) => Vec::new(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::Classes(value)
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping its position if it already exists.
    ///
    /// Names that are not valid attribute names are ignored.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        if !is_attr_name(&key) {
            return;
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets a plain string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into this map.
    ///
    /// Classes are merged by union, every other value from `other` replaces
    /// the existing one.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            match self.get(key) {
                Some(current) if key == "class" => {
                    let mut merged = current.class_list();
                    for class in value.class_list() {
                        if !merged.contains(&class) {
                            merged.push(class);
                        }
                    }
                    self.set(key, AttrValue::Classes(merged));
                }
                _ => self.set(key, value.clone()),
            }
        }
    }

    /// Renders the attributes, each prefixed by a space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            match value {
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(key);
                }
                AttrValue::Bool(false) => {}
                AttrValue::Str(s) => {
                    out.push_str(&format!(r#" {key}="{}""#, html_escape(s)));
                }
                AttrValue::Classes(classes) => {
                    if !classes.is_empty() {
                        out.push_str(&format!(r#" {key}="{}""#, html_escape(&classes.join(" "))));
                    }
                }
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

/// A child of an [`Html`] element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Html),
    /// Text, escaped on output.
    Text(String),
    /// Markup emitted verbatim.
    Raw(String),
}

impl Node {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Element(el) => out.push_str(&el.render()),
            Self::Text(text) => out.push_str(&html_escape(text)),
            Self::Raw(raw) => out.push_str(raw),
        }
    }
}

impl From<Html> for Node {
    fn from(value: Html) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A mutable HTML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html {
    name: Option<String>,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Html {
    /// Creates an element with the given tag name.
    pub fn el(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Creates a nameless element; only its children are rendered.
    pub fn fragment() -> Self {
        Self::default()
    }

    /// Returns the tag name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Changes or strips the tag name.
    pub fn set_name(&mut self, name: Option<&str>) -> &mut Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Returns the attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Returns the attributes mutably.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// Gets an attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Gets a plain string attribute.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get_str(key)
    }

    /// Sets an attribute.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attrs.set(key, value);
        self
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Removes an attribute.
    pub fn remove_attr(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.remove(key)
    }

    /// Merges `attrs` into the element; classes are added, other values replaced.
    pub fn add_attributes(&mut self, attrs: &Attrs) -> &mut Self {
        self.attrs.merge(attrs);
        self
    }

    /// Returns the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr_str("id")
    }

    /// Sets the `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.set_attr("id", id.into())
    }

    /// Returns the individual class names.
    pub fn classes(&self) -> Vec<String> {
        self.attrs
            .get("class")
            .map(AttrValue::class_list)
            .unwrap_or_default()
    }

    /// Returns the class attribute joined by spaces, if any class is set.
    pub fn class_string(&self) -> Option<String> {
        let classes = self.classes();
        if classes.is_empty() {
            None
        } else {
            Some(classes.join(" "))
        }
    }

    /// Adds one or more space-separated classes; present classes are kept once.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let mut classes = self.classes();
        for name in class.split_whitespace() {
            if !classes.iter().any(|c| c == name) {
                classes.push(name.to_string());
            }
        }
        self.attrs.set("class", AttrValue::Classes(classes));
        self
    }

    /// Builder method to add classes.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Removes a class.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        let classes: Vec<String> = self.classes().into_iter().filter(|c| c != class).collect();
        self.attrs.set("class", AttrValue::Classes(classes));
        self
    }

    /// Returns whether the element carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Replaces the children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children = vec![Node::Text(text.into())];
        self
    }

    /// Builder method to set the text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Replaces the children with raw markup.
    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.children = vec![Node::Raw(html.into())];
        self
    }

    /// Appends a child.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Builder method to append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    /// Inserts a child at `index`, or appends when out of range.
    pub fn insert(&mut self, index: usize, child: impl Into<Node>) -> &mut Self {
        let index = index.min(self.children.len());
        self.children.insert(index, child.into());
        self
    }

    /// Returns the children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => out.push_str(&el.text()),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
        out
    }

    /// Returns whether the element is a fragment without children.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.children.is_empty()
    }

    /// Renders the opening tag; empty for fragments.
    pub fn start_tag(&self) -> String {
        match &self.name {
            Some(name) => format!("<{name}{}>", self.attrs.to_html()),
            None => String::new(),
        }
    }

    /// Renders the closing tag; empty for fragments and void elements.
    pub fn end_tag(&self) -> String {
        match &self.name {
            Some(name) if !VOID_ELEMENTS.contains(&name.as_str()) => format!("</{name}>"),
            _ => String::new(),
        }
    }

    /// Renders the children.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.render_into(&mut out);
        }
        out
    }

    /// Renders the whole element.
    pub fn render(&self) -> String {
        let mut out = self.start_tag();
        if self
            .name
            .as_deref()
            .is_some_and(|name| VOID_ELEMENTS.contains(&name))
        {
            return out;
        }
        out.push_str(&self.inner_html());
        out.push_str(&self.end_tag());
        out
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_render_element() {
        let el = Html::el("p").with_class("help-block").with_text("Hi <you>");
        assert_eq!(el.render(), r#"<p class="help-block">Hi &lt;you&gt;</p>"#);
    }

    #[test]
    fn test_void_element() {
        let el = Html::el("input").with_attr("type", "text").with_attr("required", true);
        assert_eq!(el.render(), r#"<input type="text" required>"#);
        assert_eq!(el.end_tag(), "");
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut el = Html::el("label");
        el.add_class("required").add_class("required control-label");
        assert_eq!(el.class_string().as_deref(), Some("required control-label"));
    }

    #[test]
    fn test_add_class_to_string_attribute() {
        let mut el = Html::el("form").with_attr("class", "well  wide");
        el.add_class("form-horizontal");
        assert_eq!(el.classes(), vec!["well", "wide", "form-horizontal"]);
        assert!(el.has_class("wide"));
        el.remove_class("wide");
        assert!(!el.has_class("wide"));
    }

    #[test]
    fn test_fragment_renders_children_only() {
        let mut el = Html::fragment();
        assert!(el.is_empty());
        el.add(Html::el("b").with_text("x")).add("y");
        assert_eq!(el.render(), "<b>x</b>y");
    }

    #[test]
    fn test_insert_and_text() {
        let mut label = Html::el("label").with_text("Caption");
        label.insert(0, Html::el("input").with_attr("type", "radio"));
        assert_eq!(label.render(), r#"<label><input type="radio">Caption</label>"#);
        assert_eq!(label.text(), "Caption");
    }

    #[test]
    fn test_attrs_merge() {
        let mut attrs = Attrs::new()
            .with("class", vec!["a".to_string()])
            .with("title", "old");
        attrs.merge(
            &Attrs::new()
                .with("class", vec!["a".to_string(), "b".to_string()])
                .with("title", "new"),
        );
        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::Classes(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(attrs.get_str("title"), Some("new"));

        attrs.merge(&Attrs::new().with("class", "b c"));
        assert_eq!(attrs.to_html(), r#" class="a b c" title="new""#);
    }

    #[test]
    fn test_invalid_attribute_names_are_ignored() {
        assert!(is_attr_name("data-x"));
        assert!(is_attr_name("xml:lang"));
        assert!(!is_attr_name(""));
        assert!(!is_attr_name("1st"));
        assert!(!is_attr_name(r#"x"><script>alert(1)</script><i a"#));

        let mut el = Html::el("input").with_attr("type", "text");
        el.set_attr(r#"x"><script>alert(1)</script><i a"#, "y")
            .set_attr("on click", "z");
        assert_eq!(el.render(), r#"<input type="text">"#);
    }

    #[test]
    fn test_attr_value_from_json() {
        let value = serde_json::json!(["x", 1, null]);
        assert_eq!(
            AttrValue::from_json(&value),
            Some(AttrValue::Classes(vec!["x".to_string(), "1".to_string()]))
        );
        assert_eq!(AttrValue::from_json(&serde_json::Value::Null), None);
    }
}
