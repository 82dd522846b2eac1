//! Accessors and predicates used while building template data.
//!
//! These mirror what a template needs to know about a single control. They
//! never fail: missing options and a missing translator produce neutral
//! values.

use formkit::options;
use formkit::{Attrs, Control, Html, Translator};

use crate::classify::{ControlClass, ControlClassifier};

/// Display mode of checkbox lists when the control sets none.
pub const DEFAULT_DISPLAY: &str = "inline";

/// One materialized item of a radio or checkbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    /// Item key, used as input value.
    pub key: String,
    /// The item input.
    pub input: Html,
    /// The item label.
    pub label: Html,
    /// Plain caption text.
    pub caption: String,
    /// Label with the input inserted as first child.
    pub html: Html,
}

/// Returns the lookup path of a control.
pub fn control_name(control: &Control) -> String {
    control.path()
}

/// Returns the description as `p.help-block`, or an empty fragment.
pub fn control_description(control: &Control, translator: Option<&dyn Translator>) -> Html {
    let Some(description) = control.options().content(options::DESCRIPTION) else {
        return Html::fragment();
    };
    let mut el = Html::el("p");
    el.add_class("help-block");
    description.translated(translator).fill(&mut el);
    el
}

/// Returns the first control error as `p.help-inline`, or an empty fragment
/// when there is none or errors are not shown at inputs.
pub fn control_error(
    control: &Control,
    translator: Option<&dyn Translator>,
    errors_at_inputs: bool,
) -> Html {
    let Some(error) = control.errors().first().filter(|_| errors_at_inputs) else {
        return Html::fragment();
    };
    let mut el = Html::el("p");
    el.add_class("help-inline");
    error.translated(translator).fill(&mut el);
    el
}

/// Returns the name of the template replacing the default markup, if any.
pub fn control_template(control: &Control) -> Option<&str> {
    control
        .get_option(options::TEMPLATE)
        .and_then(|value| value.as_text())
        .filter(|name| !name.is_empty())
}

/// Returns whether the control is any kind of button.
pub fn is_button(classifier: &dyn ControlClassifier, control: &Control) -> bool {
    classifier.classify(control).is_button()
}

/// Returns whether the control submits the form; `None` is not a button.
pub fn is_submit_button(classifier: &dyn ControlClassifier, control: Option<&Control>) -> bool {
    control.is_some_and(|control| classifier.classify(control).is_submit())
}

/// Returns whether the control is a single checkbox.
pub fn is_checkbox(classifier: &dyn ControlClassifier, control: &Control) -> bool {
    classifier.classify(control) == ControlClass::Checkbox
}

/// Returns whether the control is a radio list.
pub fn is_radio_list(classifier: &dyn ControlClassifier, control: &Control) -> bool {
    classifier.classify(control) == ControlClass::RadioList
}

/// Returns whether the control is a checkbox list.
pub fn is_checkbox_list(classifier: &dyn ControlClassifier, control: &Control) -> bool {
    classifier.classify(control) == ControlClass::CheckboxList
}

fn choice_items(control: &Control, translator: Option<&dyn Translator>) -> Vec<ChoiceItem> {
    control
        .get_items()
        .iter()
        .filter_map(|(key, _)| {
            let input = control.control_part(key)?;
            let label = control.label_part(key, translator)?;
            Some(ChoiceItem {
                key: key.clone(),
                caption: label.text(),
                html: label.clone(),
                input,
                label,
            })
        })
        .collect()
}

/// Materializes the items of a radio list; labels get the `radio` class.
pub fn radio_list_items(control: &Control, translator: Option<&dyn Translator>) -> Vec<ChoiceItem> {
    let mut items = choice_items(control, translator);
    for item in &mut items {
        item.label.add_class("radio");
        item.html = item.label.clone();
        item.html.insert(0, item.input.clone());
    }
    items
}

/// Materializes the items of a checkbox list.
///
/// The combined markup gets the `checkbox` class, plus `inline` when the
/// control's `display` option is `inline` (the default).
pub fn checkbox_list_items(
    control: &Control,
    translator: Option<&dyn Translator>,
) -> Vec<ChoiceItem> {
    let display = control
        .get_option(options::DISPLAY)
        .and_then(|value| value.as_text())
        .unwrap_or(DEFAULT_DISPLAY);
    let mut items = choice_items(control, translator);
    for item in &mut items {
        item.html.add_class("checkbox");
        if display == DEFAULT_DISPLAY {
            item.html.add_class(DEFAULT_DISPLAY);
        }
        item.html.insert(0, item.input.clone());
    }
    items
}

/// Returns the label element of a control.
pub fn label_body(control: &Control, translator: Option<&dyn Translator>) -> Html {
    control.get_label(translator)
}

/// Returns whether the control prototype carries a class.
pub fn control_has_class(control: &Control, class: &str) -> bool {
    control.control_prototype().has_class(class)
}

/// Merges attributes into an element; `None` yields an empty fragment.
///
/// Class lists are merged by union, any other value replaces the current one.
pub fn merge_attrs(el: Option<Html>, attrs: &Attrs) -> Html {
    let Some(mut el) = el else {
        return Html::fragment();
    };
    el.attrs_mut().merge(attrs);
    el
}
