//! Message translation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Translates user-facing messages.
pub trait Translator: Send + Sync {
    /// Returns the translation of `message`, or the message itself.
    fn translate(&self, message: &str) -> String;
}

/// Translator backed by an in-memory message catalog.
///
/// Messages without an entry are returned unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTranslator {
    /// Locale of the catalog, informational only.
    #[serde(default)]
    pub locale: Option<String>,
    /// Translations keyed by source message.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl MapTranslator {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog for a locale.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            messages: HashMap::new(),
        }
    }

    /// Loads a catalog from JSON.
    ///
    /// ```rust
    /// use formkit::{MapTranslator, Translator};
    ///
    /// let catalog = MapTranslator::from_json(
    ///     r#"{"locale": "de", "messages": {"Name": "Name", "Save": "Speichern"}}"#,
    /// ).unwrap();
    /// assert_eq!(catalog.translate("Save"), "Speichern");
    /// assert_eq!(catalog.translate("Cancel"), "Cancel");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method to add a translation.
    #[must_use]
    pub fn with(mut self, message: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(message.into(), translation.into());
        self
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MapTranslator {
    fn translate(&self, message: &str) -> String {
        self.messages
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
