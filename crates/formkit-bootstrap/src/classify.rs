//! Classification of controls into the kinds the renderer knows.

use formkit::{Control, ControlKind};
use serde::Serialize;

use crate::config::RendererConfig;

/// Closed set of control kinds that drive decoration and markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlClass {
    /// Submits the form.
    Submit,
    /// Plain button.
    Button,
    /// Single checkbox.
    Checkbox,
    /// List of radio buttons.
    RadioList,
    /// List of checkboxes.
    CheckboxList,
    /// Everything else.
    Generic,
}

impl ControlClass {
    /// Returns whether the class is any kind of button.
    pub fn is_button(self) -> bool {
        matches!(self, Self::Submit | Self::Button)
    }

    /// Returns whether the class submits the form.
    pub fn is_submit(self) -> bool {
        self == Self::Submit
    }
}

/// Maps controls to a [`ControlClass`].
pub trait ControlClassifier: Send + Sync {
    /// Classifies a control.
    fn classify(&self, control: &Control) -> ControlClass;
}

/// Classifier using the control kind, plus a list of implementation names
/// recognized as checkbox lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameClassifier {
    checkbox_list_types: Vec<String>,
}

impl TypeNameClassifier {
    /// Creates a classifier recognizing the given checkbox-list names.
    pub fn new(checkbox_list_types: Vec<String>) -> Self {
        Self {
            checkbox_list_types,
        }
    }

    /// Creates the classifier described by a configuration.
    pub fn from_config(config: &RendererConfig) -> Self {
        Self::new(config.checkbox_list_types.clone())
    }
}

impl Default for TypeNameClassifier {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

impl ControlClassifier for TypeNameClassifier {
    fn classify(&self, control: &Control) -> ControlClass {
        match control.kind() {
            ControlKind::Submit | ControlKind::Image => ControlClass::Submit,
            ControlKind::Button => ControlClass::Button,
            ControlKind::Checkbox => ControlClass::Checkbox,
            ControlKind::RadioList => ControlClass::RadioList,
            _ if self
                .checkbox_list_types
                .iter()
                .any(|name| name == control.get_type_name()) =>
            {
                ControlClass::CheckboxList
            }
            _ => ControlClass::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_builtin_kinds() {
        let classifier = TypeNameClassifier::default();
        let items = vec![("a", "A")];
        assert_eq!(classifier.classify(&Control::submit("s", "S")), ControlClass::Submit);
        assert_eq!(classifier.classify(&Control::image("i", "/x.png", "X")), ControlClass::Submit);
        assert_eq!(classifier.classify(&Control::button("b", "B")), ControlClass::Button);
        assert_eq!(classifier.classify(&Control::checkbox("c", "C")), ControlClass::Checkbox);
        assert_eq!(
            classifier.classify(&Control::radio_list("r", "R", items.clone())),
            ControlClass::RadioList
        );
        assert_eq!(
            classifier.classify(&Control::checkbox_list("l", "L", items)),
            ControlClass::CheckboxList
        );
        assert_eq!(classifier.classify(&Control::text("t", "T")), ControlClass::Generic);
    }

    #[test]
    fn test_custom_checkbox_list_type() {
        let control = Control::multi_select("tags", "Tags", vec![("a", "A")]).type_name("TagList");
        assert_eq!(
            TypeNameClassifier::default().classify(&control),
            ControlClass::Generic
        );
        let classifier = TypeNameClassifier::new(vec!["TagList".to_string()]);
        assert_eq!(classifier.classify(&control), ControlClass::CheckboxList);
    }

    #[test]
    fn test_unlisted_checkbox_list_is_generic() {
        let classifier = TypeNameClassifier::new(Vec::new());
        let control = Control::checkbox_list("l", "L", vec![("a", "A")]);
        assert_eq!(classifier.classify(&control), ControlClass::Generic);
    }
}
