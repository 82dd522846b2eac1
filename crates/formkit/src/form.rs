//! The form: controls, containers, groups and form-level errors.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::content::Content;
use crate::control::{Control, ControlId, ControlKind};
use crate::error::{FormError, Result};
use crate::group::{ControlGroup, GroupId};
use crate::html::{Attrs, Html};
use crate::translator::Translator;

static NEXT_FORM_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a form instance.
///
/// Every constructed or cloned form gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(u64);

impl FormId {
    fn next() -> Self {
        Self(NEXT_FORM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A form and its control tree.
pub struct Form {
    id: FormId,
    name: String,
    element: Html,
    controls: Vec<Control>,
    groups: Vec<ControlGroup>,
    current_group: Option<GroupId>,
    errors: Vec<Content>,
    translator: Option<Arc<dyn Translator>>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("controls", &self.controls.len())
            .field("groups", &self.groups.len())
            .field("errors", &self.errors)
            .field("translator", &self.translator.is_some())
            .finish_non_exhaustive()
    }
}

impl Clone for Form {
    fn clone(&self) -> Self {
        Self {
            id: FormId::next(),
            name: self.name.clone(),
            element: self.element.clone(),
            controls: self.controls.clone(),
            groups: self.groups.clone(),
            current_group: self.current_group,
            errors: self.errors.clone(),
            translator: self.translator.clone(),
        }
    }
}

impl Form {
    /// Creates an empty form posting to the current URL.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let element = Html::el("form")
            .with_attr("action", "")
            .with_attr("method", "post")
            .with_attr("id", format!("frm-{name}"));
        Self {
            id: FormId::next(),
            name,
            element,
            controls: Vec::new(),
            groups: Vec::new(),
            current_group: None,
            errors: Vec::new(),
            translator: None,
        }
    }

    /// Sets the form action.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.element.set_attr("action", action.into());
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: &str) -> Self {
        self.element.set_attr("method", method.to_ascii_lowercase());
        self
    }

    /// Attaches a translator.
    #[must_use]
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.set_translator(Arc::new(translator));
        self
    }

    /// Attaches a shared translator.
    pub fn set_translator(&mut self, translator: Arc<dyn Translator>) {
        self.translator = Some(translator);
    }

    /// Returns the identity of this form instance.
    pub fn id(&self) -> FormId {
        self.id
    }

    /// Returns the form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the translator, if any.
    pub fn get_translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Returns a shared handle to the translator, if any.
    pub fn shared_translator(&self) -> Option<Arc<dyn Translator>> {
        self.translator.clone()
    }

    /// Returns the `<form>` prototype.
    pub fn element_prototype(&self) -> &Html {
        &self.element
    }

    /// Returns the `<form>` prototype mutably.
    pub fn element_prototype_mut(&mut self) -> &mut Html {
        &mut self.element
    }

    /// Adds a control at the top level.
    ///
    /// The control joins the current group, if one is set.
    pub fn add_control(&mut self, control: Control) -> Result<ControlId> {
        self.attach(None, control)
    }

    /// Adds a control inside a named container, e.g. `address` or `address-billing`.
    pub fn add_control_in(&mut self, container: &str, control: Control) -> Result<ControlId> {
        self.attach(Some(container.to_string()), control)
    }

    fn attach(&mut self, parent: Option<String>, mut control: Control) -> Result<ControlId> {
        control.set_parent(parent);
        let path = control.path();
        if self.controls.iter().any(|c| c.path() == path) {
            return Err(FormError::DuplicateControl(path));
        }

        let id = ControlId(self.controls.len());
        self.controls.push(control);
        if let Some(group) = self.current_group {
            self.groups[group.0].add(id);
        }
        Ok(id)
    }

    /// Adds a group and makes it current, so subsequently added controls join it.
    pub fn add_group(&mut self, name: &str) -> Result<GroupId> {
        if self.group_by_name(name).is_some() {
            return Err(FormError::DuplicateGroup(name.to_string()));
        }
        let id = GroupId(self.groups.len());
        self.groups.push(ControlGroup::new(name));
        self.current_group = Some(id);
        Ok(id)
    }

    /// Changes the group that new controls join.
    pub fn set_current_group(&mut self, group: Option<GroupId>) {
        self.current_group = group;
    }

    /// Iterates over all controls in insertion order.
    pub fn controls(&self) -> impl Iterator<Item = (ControlId, &Control)> {
        self.controls
            .iter()
            .enumerate()
            .map(|(index, control)| (ControlId(index), control))
    }

    /// Iterates mutably over all controls in insertion order.
    pub fn controls_mut(&mut self) -> impl Iterator<Item = &mut Control> {
        self.controls.iter_mut()
    }

    /// Returns the number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Returns whether the form has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Returns a control.
    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0)
    }

    /// Returns a control mutably.
    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(id.0)
    }

    /// Finds a control by its lookup path.
    pub fn control_by_path(&self, path: &str) -> Option<ControlId> {
        self.controls
            .iter()
            .position(|c| c.path() == path)
            .map(ControlId)
    }

    /// Iterates over the groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &ControlGroup)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| (GroupId(index), group))
    }

    /// Returns a group.
    pub fn group(&self, id: GroupId) -> Option<&ControlGroup> {
        self.groups.get(id.0)
    }

    /// Returns a group mutably.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut ControlGroup> {
        self.groups.get_mut(id.0)
    }

    /// Finds a group by name.
    pub fn group_by_name(&self, name: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|g| g.name() == name)
            .map(GroupId)
    }

    /// Adds a form-level error.
    pub fn add_error(&mut self, message: impl Into<Content>) {
        let message = message.into();
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    /// Returns the form-level errors.
    pub fn own_errors(&self) -> &[Content] {
        &self.errors
    }

    /// Returns form-level errors followed by every control error, without duplicates.
    pub fn all_errors(&self) -> Vec<Content> {
        let mut errors = self.errors.clone();
        for control in &self.controls {
            for error in control.errors() {
                if !errors.contains(error) {
                    errors.push(error.clone());
                }
            }
        }
        errors
    }

    /// Returns whether the form or any control has errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.controls.iter().any(Control::has_errors)
    }

    /// Renders the opening `<form>` tag with extra attributes.
    pub fn render_begin(&self, attrs: &Attrs) -> String {
        let mut el = self.element.clone();
        el.add_attributes(attrs);
        el.start_tag()
    }

    /// Renders hidden fields that were not emitted yet and the closing tag.
    pub fn render_end(&self) -> String {
        let hidden: String = self
            .controls
            .iter()
            .filter(|c| c.kind() == ControlKind::Hidden && !c.is_rendered())
            .map(|c| c.get_control(None).render())
            .collect();

        let mut out = String::new();
        if !hidden.is_empty() {
            out.push_str(&format!("<div>{hidden}</div>\n"));
        }
        out.push_str(&self.element.end_tag());
        out
    }
}
