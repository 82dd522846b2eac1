//! Form controls.
//!
//! A [`Control`] carries its state (value, errors, required flag), free-form
//! [`Options`] and two element prototypes: one for the input and one for its
//! label. Renderers decorate the prototypes; [`Control::get_control`] and
//! [`Control::get_label`] turn them into the final elements.

use crate::content::Content;
use crate::html::Html;
use crate::options::{self, OptionValue, Options};
use crate::translator::Translator;

/// Handle of a control inside its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    /// Returns the position of the control in its form.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Built-in control implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Single-line `<input>` (text, email, password, number, url...).
    Text,
    /// Multi-line `<textarea>`.
    TextArea,
    /// Single checkbox.
    Checkbox,
    /// Radio buttons, one per item.
    RadioList,
    /// Checkboxes, one per item.
    CheckboxList,
    /// Single-choice `<select>`.
    Select,
    /// Multiple-choice `<select>`.
    MultiSelect,
    /// File upload.
    Upload,
    /// Hidden field.
    Hidden,
    /// Form submit button.
    Submit,
    /// Image submit button.
    Image,
    /// Button that does not submit.
    Button,
}

impl ControlKind {
    /// Returns the implementation name used when a control does not override it.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "TextInput",
            Self::TextArea => "TextArea",
            Self::Checkbox => "Checkbox",
            Self::RadioList => "RadioList",
            Self::CheckboxList => "CheckboxList",
            Self::Select => "SelectBox",
            Self::MultiSelect => "MultiSelectBox",
            Self::Upload => "UploadControl",
            Self::Hidden => "HiddenField",
            Self::Submit => "SubmitButton",
            Self::Image => "ImageButton",
            Self::Button => "Button",
        }
    }

    /// Returns whether the control submits the form.
    pub fn is_submitter(self) -> bool {
        matches!(self, Self::Submit | Self::Image)
    }

    /// Returns whether the control renders as a button.
    pub fn is_button(self) -> bool {
        matches!(self, Self::Submit | Self::Image | Self::Button)
    }

    /// Returns whether the control renders one input per item.
    pub fn is_list(self) -> bool {
        matches!(self, Self::RadioList | Self::CheckboxList)
    }

    fn prototype(self, input_type: &str) -> Html {
        match self {
            Self::TextArea => Html::el("textarea"),
            Self::Select | Self::MultiSelect => Html::el("select"),
            Self::Text => Html::el("input").with_attr("type", input_type),
            Self::Checkbox | Self::CheckboxList => Html::el("input").with_attr("type", "checkbox"),
            Self::RadioList => Html::el("input").with_attr("type", "radio"),
            Self::Upload => Html::el("input").with_attr("type", "file"),
            Self::Hidden => Html::el("input").with_attr("type", "hidden"),
            Self::Submit => Html::el("input").with_attr("type", "submit"),
            Self::Image => Html::el("input").with_attr("type", "image"),
            Self::Button => Html::el("input").with_attr("type", "button"),
        }
    }
}

/// A single form control.
#[derive(Debug, Clone)]
pub struct Control {
    name: String,
    parent: Option<String>,
    kind: ControlKind,
    type_name: String,
    caption: Option<Content>,
    required: bool,
    disabled: bool,
    values: Vec<String>,
    items: Vec<(String, String)>,
    errors: Vec<Content>,
    options: Options,
    control_prototype: Html,
    label_prototype: Html,
}

impl Control {
    /// Creates a control of the given kind.
    pub fn new(kind: ControlKind, name: impl Into<String>, caption: impl Into<Content>) -> Self {
        let caption = caption.into();
        Self {
            name: name.into(),
            parent: None,
            kind,
            type_name: kind.type_name().to_string(),
            caption: (!caption.is_empty()).then_some(caption),
            required: false,
            disabled: false,
            values: Vec::new(),
            items: Vec::new(),
            errors: Vec::new(),
            options: Options::new(),
            control_prototype: kind.prototype("text"),
            label_prototype: Html::el("label"),
        }
    }

    fn input(input_type: &str, name: impl Into<String>, caption: impl Into<Content>) -> Self {
        let mut control = Self::new(ControlKind::Text, name, caption);
        control.control_prototype = ControlKind::Text.prototype(input_type);
        control
    }

    /// Creates a text input.
    pub fn text(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::input("text", name, caption)
    }

    /// Creates an email input.
    pub fn email(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::input("email", name, caption)
    }

    /// Creates a password input; its value is never written back.
    pub fn password(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::input("password", name, caption)
    }

    /// Creates a number input.
    pub fn number(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::input("number", name, caption)
    }

    /// Creates a URL input.
    pub fn url(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::input("url", name, caption)
    }

    /// Creates a textarea.
    pub fn textarea(name: impl Into<String>, caption: impl Into<Content>, rows: usize) -> Self {
        let mut control = Self::new(ControlKind::TextArea, name, caption);
        control.control_prototype.set_attr("rows", rows.to_string());
        control
    }

    /// Creates a checkbox.
    pub fn checkbox(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::new(ControlKind::Checkbox, name, caption)
    }

    /// Creates a radio list.
    pub fn radio_list(
        name: impl Into<String>,
        caption: impl Into<Content>,
        items: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(ControlKind::RadioList, name, caption).items(items)
    }

    /// Creates a checkbox list.
    pub fn checkbox_list(
        name: impl Into<String>,
        caption: impl Into<Content>,
        items: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(ControlKind::CheckboxList, name, caption).items(items)
    }

    /// Creates a select box.
    pub fn select(
        name: impl Into<String>,
        caption: impl Into<Content>,
        items: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(ControlKind::Select, name, caption).items(items)
    }

    /// Creates a multiple-choice select box.
    pub fn multi_select(
        name: impl Into<String>,
        caption: impl Into<Content>,
        items: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(ControlKind::MultiSelect, name, caption).items(items)
    }

    /// Creates a file upload.
    pub fn upload(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::new(ControlKind::Upload, name, caption)
    }

    /// Creates a hidden field.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ControlKind::Hidden, name, "").value(value)
    }

    /// Creates a submit button.
    pub fn submit(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::new(ControlKind::Submit, name, caption)
    }

    /// Creates an image submit button.
    pub fn image(name: impl Into<String>, src: impl Into<String>, alt: impl Into<String>) -> Self {
        let mut control = Self::new(ControlKind::Image, name, "");
        control
            .control_prototype
            .set_attr("src", src.into())
            .set_attr("alt", alt.into());
        control
    }

    /// Creates a button that does not submit the form.
    pub fn button(name: impl Into<String>, caption: impl Into<Content>) -> Self {
        Self::new(ControlKind::Button, name, caption)
    }

    /// Marks the control as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Disables the control.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values = vec![value.into()];
        self
    }

    /// Sets the selected values of a multiple-choice control.
    #[must_use]
    pub fn values(mut self, values: Vec<impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the choice items as `(key, caption)` pairs.
    #[must_use]
    pub fn items(mut self, items: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        self.items = items
            .into_iter()
            .map(|(key, caption)| (key.into(), caption.into()))
            .collect();
        self
    }

    /// Overrides the implementation name seen by renderers.
    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Sets an option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.set(key, value);
        self
    }

    /// Sets the placeholder option.
    #[must_use]
    pub fn placeholder(self, placeholder: impl Into<Content>) -> Self {
        self.option(options::PLACEHOLDER, placeholder.into())
    }

    /// Sets the description option.
    #[must_use]
    pub fn description(self, description: impl Into<Content>) -> Self {
        self.option(options::DESCRIPTION, description.into())
    }

    /// Sets content shown before the input.
    #[must_use]
    pub fn prepend(self, content: impl Into<Content>) -> Self {
        self.option(options::INPUT_PREPEND, content.into())
    }

    /// Sets content shown after the input.
    #[must_use]
    pub fn append(self, content: impl Into<Content>) -> Self {
        self.option(options::INPUT_APPEND, content.into())
    }

    /// Sets the template that replaces the default markup.
    #[must_use]
    pub fn template(self, name: impl Into<String>) -> Self {
        self.option(options::TEMPLATE, name.into())
    }

    /// Adds a validation error.
    #[must_use]
    pub fn error(mut self, message: impl Into<Content>) -> Self {
        self.add_error(message);
        self
    }

    /// Adds a validation error.
    pub fn add_error(&mut self, message: impl Into<Content>) {
        let message = message.into();
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    /// Removes all validation errors.
    pub fn clean_errors(&mut self) {
        self.errors.clear();
    }

    pub(crate) fn set_parent(&mut self, parent: Option<String>) {
        self.parent = parent;
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the container holding the control.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns the lookup path, the container path and the name joined by `-`.
    pub fn path(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{parent}-{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns the `name` attribute of the input.
    pub fn html_name(&self) -> String {
        let mut name = match &self.parent {
            Some(parent) => {
                let mut segments = parent.split('-');
                let mut out = segments.next().unwrap_or_default().to_string();
                for segment in segments {
                    out.push_str(&format!("[{segment}]"));
                }
                format!("{out}[{}]", self.name)
            }
            None => self.name.clone(),
        };
        if matches!(self.kind, ControlKind::CheckboxList | ControlKind::MultiSelect) {
            name.push_str("[]");
        }
        name
    }

    /// Returns the `id` attribute of the input.
    pub fn html_id(&self) -> String {
        format!("frm-{}", self.path())
    }

    /// Returns the control kind.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Returns the implementation name.
    pub fn get_type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the caption.
    pub fn caption(&self) -> Option<&Content> {
        self.caption.as_ref()
    }

    /// Returns whether the control is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the current values.
    pub fn get_values(&self) -> &[String] {
        &self.values
    }

    /// Returns the choice items.
    pub fn get_items(&self) -> &[(String, String)] {
        &self.items
    }

    /// Returns the validation errors.
    pub fn errors(&self) -> &[Content] {
        &self.errors
    }

    /// Returns whether the control has validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the options mutably.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Gets an option.
    pub fn get_option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Sets an option.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.set(key, value);
    }

    /// Returns whether the control was already emitted in this render.
    pub fn is_rendered(&self) -> bool {
        self.options.is_truthy(options::RENDERED)
    }

    /// Marks the control as emitted or pending.
    pub fn set_rendered(&mut self, rendered: bool) {
        self.options.set(options::RENDERED, rendered);
    }

    /// Returns the input prototype.
    pub fn control_prototype(&self) -> &Html {
        &self.control_prototype
    }

    /// Returns the input prototype mutably.
    pub fn control_prototype_mut(&mut self) -> &mut Html {
        &mut self.control_prototype
    }

    /// Returns the label prototype.
    pub fn label_prototype(&self) -> &Html {
        &self.label_prototype
    }

    /// Returns the label prototype mutably.
    pub fn label_prototype_mut(&mut self) -> &mut Html {
        &mut self.label_prototype
    }

    fn is_selected(&self, key: &str) -> bool {
        self.values.iter().any(|v| v == key)
    }

    fn translate(translator: Option<&dyn Translator>, text: &str) -> String {
        translator.map_or_else(|| text.to_string(), |t| t.translate(text))
    }

    /// Builds the input element from the prototype and the current state.
    pub fn get_control(&self, translator: Option<&dyn Translator>) -> Html {
        if self.kind.is_list() {
            let mut fragment = Html::fragment();
            for (key, _) in &self.items {
                if let (Some(input), Some(label)) =
                    (self.control_part(key), self.label_part(key, translator))
                {
                    let mut label = label;
                    label.insert(0, input);
                    fragment.add(label);
                }
            }
            return fragment;
        }

        let mut el = self.control_prototype.clone();
        el.set_attr("name", self.html_name()).set_id(self.html_id());
        if self.required && !self.kind.is_button() {
            el.set_attr("required", true);
        }
        if self.disabled {
            el.set_attr("disabled", true);
        }

        let value = self.values.first().cloned();
        match self.kind {
            ControlKind::Text => {
                if el.attr_str("type") != Some("password") {
                    if let Some(value) = value {
                        el.set_attr("value", value);
                    }
                }
            }
            ControlKind::Hidden => {
                el.set_attr("value", value.unwrap_or_default());
            }
            ControlKind::TextArea => {
                el.set_text(value.unwrap_or_default());
            }
            ControlKind::Checkbox => {
                let checked = value.is_some_and(|v| v == "true" || v == "on" || v == "1");
                el.set_attr("checked", checked);
            }
            ControlKind::Select | ControlKind::MultiSelect => {
                if self.kind == ControlKind::MultiSelect {
                    el.set_attr("multiple", true);
                }
                for (key, caption) in &self.items {
                    let option = Html::el("option")
                        .with_attr("value", key.as_str())
                        .with_attr("selected", self.is_selected(key))
                        .with_text(Self::translate(translator, caption));
                    el.add(option);
                }
            }
            ControlKind::Submit | ControlKind::Button => {
                if let Some(caption) = &self.caption {
                    el.set_attr("value", caption.translated(translator).text());
                }
            }
            ControlKind::Image
            | ControlKind::Upload
            | ControlKind::RadioList
            | ControlKind::CheckboxList => {}
        }
        el
    }

    /// Builds the label element, with the translated caption.
    pub fn get_label(&self, translator: Option<&dyn Translator>) -> Html {
        let mut label = self.label_prototype.clone();
        if !self.kind.is_list() {
            label.set_attr("for", self.html_id());
        }
        if let Some(caption) = &self.caption {
            caption.translated(translator).fill(&mut label);
        }
        label
    }

    /// Builds the input of a single choice item.
    pub fn control_part(&self, key: &str) -> Option<Html> {
        self.items.iter().find(|(k, _)| k == key)?;
        let mut el = self.control_prototype.clone();
        el.set_attr("name", self.html_name())
            .set_id(format!("{}-{key}", self.html_id()))
            .set_attr("value", key)
            .set_attr("checked", self.is_selected(key));
        if self.disabled {
            el.set_attr("disabled", true);
        }
        Some(el)
    }

    /// Builds the label of a single choice item.
    pub fn label_part(&self, key: &str, translator: Option<&dyn Translator>) -> Option<Html> {
        let (_, caption) = self.items.iter().find(|(k, _)| k == key)?;
        let mut label = Html::el("label");
        label
            .set_attr("for", format!("{}-{key}", self.html_id()))
            .set_text(Self::translate(translator, caption));
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapTranslator;

    #[test]
    fn test_text_control() {
        let control = Control::text("username", "Username").required().value("joe");
        let html = control.get_control(None).render();
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"id="frm-username""#));
        assert!(html.contains(r#"value="joe""#));
        assert!(html.contains(" required"));
    }

    #[test]
    fn test_password_value_is_not_rendered() {
        let control = Control::password("password", "Password").value("secret");
        assert!(!control.get_control(None).render().contains("secret"));
    }

    #[test]
    fn test_label_is_translated() {
        let t = MapTranslator::new().with("Email", "E-Mail");
        let label = Control::email("email", "Email").get_label(Some(&t));
        assert_eq!(label.render(), r#"<label for="frm-email">E-Mail</label>"#);
    }

    #[test]
    fn test_select_marks_selected_item() {
        let control = Control::select("role", "Role", vec![("user", "User"), ("admin", "Admin")])
            .value("admin");
        let html = control.get_control(None).render();
        assert!(html.contains(r#"<option value="admin" selected>Admin</option>"#));
        assert!(html.contains(r#"<option value="user">User</option>"#));
    }

    #[test]
    fn test_list_parts() {
        let control =
            Control::checkbox_list("tags", "Tags", vec![("a", "Alpha"), ("b", "Beta")]).values(vec!["b"]);
        let input = control.control_part("b").unwrap();
        assert_eq!(input.attr_str("name"), Some("tags[]"));
        assert_eq!(input.id(), Some("frm-tags-b"));
        assert!(input.render().contains(" checked"));
        assert!(control.control_part("missing").is_none());
        let label = control.label_part("a", None).unwrap();
        assert_eq!(label.text(), "Alpha");
    }

    #[test]
    fn test_nested_names() {
        let mut control = Control::text("street", "Street");
        control.set_parent(Some("address".to_string()));
        assert_eq!(control.path(), "address-street");
        assert_eq!(control.html_name(), "address[street]");
        assert_eq!(control.html_id(), "frm-address-street");
    }

    #[test]
    fn test_errors_are_unique() {
        let control = Control::text("name", "Name").error("Required.").error("Required.");
        assert_eq!(control.errors().len(), 1);
        assert!(control.has_errors());
    }
}
