//! Control groups.

use crate::content::Content;
use crate::control::ControlId;
use crate::html::Html;
use crate::options::{self, OptionValue, Options};

/// Handle of a group inside its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    /// Returns the position of the group in its form.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named set of controls rendered together, e.g. as a fieldset.
///
/// New groups are visual and use their name as label.
#[derive(Debug, Clone)]
pub struct ControlGroup {
    name: String,
    controls: Vec<ControlId>,
    options: Options,
}

impl ControlGroup {
    pub(crate) fn new(name: &str) -> Self {
        let mut options = Options::new();
        options.set(options::LABEL, name);
        options.set(options::VISUAL, true);
        Self {
            name: name.to_string(),
            controls: Vec::new(),
            options,
        }
    }

    /// Returns the group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the grouped controls in insertion order.
    pub fn controls(&self) -> &[ControlId] {
        &self.controls
    }

    /// Adds a control; controls already in the group are ignored.
    pub fn add(&mut self, control: ControlId) -> &mut Self {
        if !self.controls.contains(&control) {
            self.controls.push(control);
        }
        self
    }

    /// Removes a control.
    pub fn remove(&mut self, control: ControlId) -> &mut Self {
        self.controls.retain(|c| *c != control);
        self
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Gets an option.
    pub fn get_option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Sets an option. Options without a reserved meaning become attributes
    /// of the group container.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.set(key, value);
        self
    }

    /// Sets the label.
    pub fn set_label(&mut self, label: impl Into<Content>) -> &mut Self {
        self.set_option(options::LABEL, label.into())
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<Content>) -> &mut Self {
        self.set_option(options::DESCRIPTION, description.into())
    }

    /// Sets the container element.
    pub fn set_container(&mut self, container: Html) -> &mut Self {
        self.set_option(options::CONTAINER, container)
    }

    /// Shows or hides the group as a visual unit.
    pub fn set_visual(&mut self, visual: bool) -> &mut Self {
        self.set_option(options::VISUAL, visual)
    }

    /// Returns whether the group is rendered as a visual unit.
    pub fn is_visual(&self) -> bool {
        self.options.is_truthy(options::VISUAL)
    }
}
