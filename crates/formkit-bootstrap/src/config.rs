//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Implementation names recognized as checkbox lists by default.
pub const DEFAULT_CHECKBOX_LIST_TYPES: &[&str] = &["MultiOptionList", "CheckboxList"];

/// Settings of a [`BootstrapRenderer`](crate::BootstrapRenderer).
///
/// ```rust
/// use formkit_bootstrap::RendererConfig;
///
/// let config = RendererConfig::from_json(r#"{"prior_groups": ["Account"]}"#).unwrap();
/// assert!(config.errors_at_inputs);
/// assert_eq!(config.prior_groups, vec!["Account".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Render field errors next to their inputs. When false, field errors
    /// are listed with the form errors instead.
    pub errors_at_inputs: bool,
    /// Names of groups rendered before all others, in this order.
    pub prior_groups: Vec<String>,
    /// Control implementation names treated as checkbox lists.
    pub checkbox_list_types: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            errors_at_inputs: true,
            prior_groups: Vec::new(),
            checkbox_list_types: DEFAULT_CHECKBOX_LIST_TYPES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

impl RendererConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets whether field errors render at their inputs.
    #[must_use]
    pub fn errors_at_inputs(mut self, enabled: bool) -> Self {
        self.errors_at_inputs = enabled;
        self
    }

    /// Appends a priority group.
    #[must_use]
    pub fn prior_group(mut self, name: impl Into<String>) -> Self {
        self.prior_groups.push(name.into());
        self
    }

    /// Registers an extra checkbox-list implementation name.
    #[must_use]
    pub fn checkbox_list_type(mut self, name: impl Into<String>) -> Self {
        self.checkbox_list_types.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RendererConfig::default();
        assert!(config.errors_at_inputs);
        assert!(config.prior_groups.is_empty());
        assert!(config.checkbox_list_types.contains(&"CheckboxList".to_string()));
    }

    #[test]
    fn test_from_json() {
        let config = RendererConfig::from_json(
            r#"{"errors_at_inputs": false, "checkbox_list_types": ["TagList"]}"#,
        )
        .unwrap();
        assert!(!config.errors_at_inputs);
        assert_eq!(config.checkbox_list_types, vec!["TagList".to_string()]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(RendererConfig::from_json("{").is_err());
    }
}
