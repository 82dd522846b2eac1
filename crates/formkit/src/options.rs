//! Named options attached to controls and groups.

use crate::content::Content;
use crate::html::{AttrValue, Html};

/// Option marking a control as already emitted in the current render.
pub const RENDERED: &str = "rendered";
/// Option set on required controls once decorated.
pub const REQUIRED: &str = "required";
/// Placeholder text for text-like inputs.
pub const PLACEHOLDER: &str = "placeholder";
/// Help text shown below a control.
pub const DESCRIPTION: &str = "description";
/// Name of a template that replaces the default markup of a control.
pub const TEMPLATE: &str = "template";
/// Content shown before the input.
pub const INPUT_PREPEND: &str = "input-prepend";
/// Content shown after the input.
pub const INPUT_APPEND: &str = "input-append";
/// Wrapper element around a label/input pair.
pub const PAIR_CONTAINER: &str = "pairContainer";
/// Display mode for choice lists (`inline` or `block`).
pub const DISPLAY: &str = "display";
/// Group caption.
pub const LABEL: &str = "label";
/// Element wrapping a group.
pub const CONTAINER: &str = "container";
/// Whether a group is rendered as a visual unit.
pub const VISUAL: &str = "visual";

/// Value of a named option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Flag.
    Bool(bool),
    /// Plain text.
    Text(String),
    /// Prebuilt element.
    Html(Html),
}

impl OptionValue {
    /// Returns whether the value counts as set.
    ///
    /// `false`, empty text and `"0"` are unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(text) => !text.is_empty() && text != "0",
            Self::Html(_) => true,
        }
    }

    /// Returns the flag value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the element value.
    pub fn as_html(&self) -> Option<&Html> {
        match self {
            Self::Html(el) => Some(el),
            _ => None,
        }
    }

    /// Converts text and elements into [`Content`].
    pub fn to_content(&self) -> Option<Content> {
        match self {
            Self::Text(text) => Some(Content::Text(text.clone())),
            Self::Html(el) => Some(Content::Html(el.clone())),
            Self::Bool(_) => None,
        }
    }

    /// Converts the value into an attribute value.
    pub fn to_attr(&self) -> AttrValue {
        match self {
            Self::Bool(b) => AttrValue::Bool(*b),
            Self::Text(text) => AttrValue::Str(text.clone()),
            Self::Html(el) => AttrValue::Str(el.render()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Html> for OptionValue {
    fn from(value: Html) -> Self {
        Self::Html(value)
    }
}

impl From<Content> for OptionValue {
    fn from(value: Content) -> Self {
        match value {
            Content::Text(text) => Self::Text(text),
            Content::Html(el) => Self::Html(el),
        }
    }
}

/// Named options in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(Vec<(String, OptionValue)>);

impl Options {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Sets an option, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Removes an option.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    /// Returns whether the option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns whether the option is present and truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Returns the option as content, if it is set to text or an element.
    pub fn content(&self, key: &str) -> Option<Content> {
        self.get(key)
            .filter(|value| value.is_truthy())
            .and_then(OptionValue::to_content)
    }

    /// Iterates over the options in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(OptionValue::from("@").is_truthy());
        assert!(!OptionValue::from("").is_truthy());
        assert!(!OptionValue::from("0").is_truthy());
        assert!(!OptionValue::from(false).is_truthy());
        assert!(OptionValue::from(Html::fragment()).is_truthy());
    }

    #[test]
    fn test_content_skips_unset_values() {
        let mut options = Options::new();
        options.set(DESCRIPTION, "");
        options.set(PLACEHOLDER, "Name");
        options.set(RENDERED, false);
        assert_eq!(options.content(DESCRIPTION), None);
        assert_eq!(options.content(RENDERED), None);
        assert_eq!(options.content(PLACEHOLDER), Some(Content::from("Name")));
    }

    #[test]
    fn test_insertion_order() {
        let mut options = Options::new();
        options.set("title", "t");
        options.set("data-b", "b");
        options.set("data-a", "a");
        options.set("title", "u");
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "data-b", "data-a"]);
        assert_eq!(options.get("title"), Some(&OptionValue::from("u")));
        assert_eq!(options.remove("data-b"), Some(OptionValue::from("b")));
        assert!(!options.contains("data-b"));
    }
}
