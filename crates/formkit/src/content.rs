//! Text-or-markup content.

use crate::html::{html_escape, Html, Node};
use crate::translator::Translator;

/// User-facing content: plain text, or an element that is used as-is.
///
/// Only text is ever translated; prebuilt elements are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, escaped when rendered.
    Text(String),
    /// Prebuilt markup.
    Html(Html),
}

impl Content {
    /// Returns the translated content.
    ///
    /// The translation result is always treated as text.
    #[must_use]
    pub fn translated(&self, translator: Option<&dyn Translator>) -> Self {
        match (self, translator) {
            (Self::Text(text), Some(translator)) => Self::Text(translator.translate(text)),
            _ => self.clone(),
        }
    }

    /// Returns whether the content is empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Html(el) => el.is_empty(),
        }
    }

    /// Returns the plain text of the content.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Html(el) => el.text(),
        }
    }

    /// Renders the content as markup.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => html_escape(text),
            Self::Html(el) => el.render(),
        }
    }

    /// Puts the content into `el`: text replaces the children, markup is appended.
    pub fn fill(&self, el: &mut Html) {
        match self {
            Self::Text(text) => {
                el.set_text(text.clone());
            }
            Self::Html(child) => {
                el.add(child.clone());
            }
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Html> for Content {
    fn from(value: Html) -> Self {
        Self::Html(value)
    }
}

impl From<Content> for Node {
    fn from(value: Content) -> Self {
        match value {
            Content::Text(text) => Self::Text(text),
            Content::Html(el) => Self::Element(el),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapTranslator;

    #[test]
    fn test_translate_text_only() {
        let t = MapTranslator::new().with("Hello", "Hallo");
        let text = Content::from("Hello");
        assert_eq!(text.translated(Some(&t)), Content::from("Hallo"));
        assert_eq!(text.translated(None), text);

        let markup = Content::from(Html::el("b").with_text("Hello"));
        assert_eq!(markup.translated(Some(&t)), markup);
    }

    #[test]
    fn test_markup_like_translation_stays_text() {
        let t = MapTranslator::new().with("Hint", "<b>Tip</b>");
        let rendered = Content::from("Hint").translated(Some(&t)).render();
        assert_eq!(rendered, "&lt;b&gt;Tip&lt;/b&gt;");
    }
}
