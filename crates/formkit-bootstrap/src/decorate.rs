//! One-time decoration of controls and the form element.

use std::sync::LazyLock;

use formkit::options::{self, OptionValue};
use formkit::{Attrs, Content, Control, Html, Translator};
use regex::Regex;
use tracing::trace;

use crate::classify::ControlClass;

static LAYOUT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)form-").expect("layout class pattern is valid"));

/// Adds `form-horizontal` unless the form already carries a `form-*` layout class.
pub(crate) fn prepare_form_element(el: &mut Html) {
    let has_layout = el
        .class_string()
        .is_some_and(|classes| LAYOUT_CLASS.is_match(&classes));
    if !has_layout {
        el.add_class("form-horizontal");
    }
}

/// Adds caller attributes to a form element.
///
/// A caller class carrying its own `form-*` layout drops the default
/// `form-horizontal`.
pub(crate) fn apply_form_attrs(el: &mut Html, attrs: &Attrs) {
    let has_layout = attrs
        .get("class")
        .is_some_and(|class| class.class_list().iter().any(|name| LAYOUT_CLASS.is_match(name)));
    if has_layout && el.has_class("form-horizontal") {
        el.remove_class("form-horizontal");
    }
    el.add_attributes(attrs);
}

/// Applies the Bootstrap classes and wrappers to a control.
pub(crate) fn prepare_control(
    control: &mut Control,
    class: ControlClass,
    translator: Option<&dyn Translator>,
) {
    trace!(control = %control.path(), ?class, "decorating control");
    control.set_rendered(false);

    if control.is_required() {
        control.label_prototype_mut().add_class("required");
        control.set_option(options::REQUIRED, true);
    }

    if control.kind() == formkit::ControlKind::Text {
        control.control_prototype_mut().add_class("form-control");
    }

    if let Some(placeholder) = control.options().content(options::PLACEHOLDER) {
        let placeholder = match placeholder.translated(translator) {
            Content::Text(text) => text,
            Content::Html(el) => el.render(),
        };
        control
            .control_prototype_mut()
            .set_attr("placeholder", placeholder);
    }

    if control.control_prototype().attr_str("type") == Some("email")
        && control.get_option(options::INPUT_PREPEND).is_none()
    {
        control.set_option(options::INPUT_PREPEND, "@");
    }

    if class.is_submit() {
        control.control_prototype_mut().add_class("btn");
        return;
    }

    match class {
        ControlClass::Checkbox => {
            control.label_prototype_mut().add_class("checkbox");
        }
        ControlClass::RadioList | ControlClass::CheckboxList => {}
        _ => {
            control.label_prototype_mut().add_class("control-label");
        }
    }

    let mut pair = Html::el("div");
    pair.set_id(format!("{}-pair", control.html_id()))
        .add_class("control-group");
    if control.options().is_truthy(options::REQUIRED) {
        pair.add_class("required");
    }
    if control.has_errors() {
        pair.add_class("error");
    }
    control.set_option(options::PAIR_CONTAINER, pair);

    for key in [options::INPUT_PREPEND, options::INPUT_APPEND] {
        if let Some(addon) = control.get_option(key).and_then(addon) {
            control.set_option(key, addon);
        }
    }
}

/// Wraps a prepend/append option into `span.add-on`.
///
/// Returns `None` for unset values and for add-ons that are already wrapped.
fn addon(value: &OptionValue) -> Option<Html> {
    if !value.is_truthy() {
        return None;
    }
    let mut span = Html::el("span");
    span.add_class("add-on");
    match value {
        OptionValue::Html(el) if el.name() == Some("span") && el.has_class("add-on") => None,
        OptionValue::Html(el) => {
            span.add(el.clone());
            Some(span)
        }
        OptionValue::Text(text) => {
            span.set_text(text.clone());
            Some(span)
        }
        OptionValue::Bool(_) => None,
    }
}
