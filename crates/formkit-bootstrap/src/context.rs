//! Per-render accessors over a form.

use formkit::options;
use formkit::{Content, Control, ControlId, ControlKind, Form, GroupId, Html, Options, Translator};
use tracing::debug;

use crate::classify::{ControlClass, ControlClassifier};
use crate::config::RendererConfig;
use crate::error::{RenderError, Result};
use crate::helpers;

/// Group options that are not container attributes.
const RESERVED_GROUP_OPTIONS: &[&str] = &[
    options::CONTAINER,
    options::LABEL,
    options::DESCRIPTION,
    options::VISUAL,
];

/// Read-only view of a group prepared for rendering.
#[derive(Debug, Clone)]
pub struct GroupSnapshot<'a> {
    /// The group.
    pub id: GroupId,
    /// Translated label.
    pub label: Option<Content>,
    /// Translated description.
    pub description: Option<Content>,
    /// Nameless container element carrying the group attributes.
    pub attrs: Html,
    /// Controls still to be rendered, in group order.
    pub controls: Vec<(ControlId, &'a Control)>,
    /// All group options.
    pub options: &'a Options,
}

/// Accessors over one form, as seen by a renderer configuration.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    form: &'a Form,
    config: &'a RendererConfig,
    classifier: &'a dyn ControlClassifier,
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("form", &self.form.name())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderContext<'a> {
    /// Creates a context.
    pub fn new(
        form: &'a Form,
        config: &'a RendererConfig,
        classifier: &'a dyn ControlClassifier,
    ) -> Self {
        Self {
            form,
            config,
            classifier,
        }
    }

    /// Returns the form.
    pub fn form(&self) -> &'a Form {
        self.form
    }

    /// Returns the configuration.
    pub fn config(&self) -> &'a RendererConfig {
        self.config
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &'a dyn ControlClassifier {
        self.classifier
    }

    /// Returns the form translator.
    pub fn translator(&self) -> Option<&'a dyn Translator> {
        self.form.get_translator()
    }

    /// Classifies a control.
    pub fn classify(&self, control: &Control) -> ControlClass {
        self.classifier.classify(control)
    }

    /// Returns the translated form errors.
    ///
    /// Field errors are included only when they are not shown at the inputs.
    pub fn find_errors(&self) -> Vec<Content> {
        let errors = if self.config.errors_at_inputs {
            self.form.own_errors().to_vec()
        } else {
            self.form.all_errors()
        };
        errors
            .iter()
            .map(|error| error.translated(self.translator()))
            .collect()
    }

    /// Returns the groups to render: priority groups first, then the rest
    /// in form order. Hidden and empty groups are skipped, and no group is
    /// returned twice.
    ///
    /// Fails when a priority group does not exist.
    pub fn find_groups(&self) -> Result<Vec<GroupSnapshot<'a>>> {
        let mut visited = Vec::new();
        let mut groups = Vec::new();

        for name in &self.config.prior_groups {
            let id = self
                .form
                .group_by_name(name)
                .ok_or_else(|| RenderError::UnknownGroup(name.clone()))?;
            if visited.contains(&id) {
                continue;
            }
            visited.push(id);
            groups.extend(self.process_group(id));
        }

        for (id, _) in self.form.groups() {
            if !visited.contains(&id) {
                groups.extend(self.process_group(id));
            }
        }

        debug!(form = self.form.name(), groups = groups.len(), "collected groups");
        Ok(groups)
    }

    /// Returns the pending controls of a container (the whole form for `None`).
    ///
    /// Rendered and hidden controls are skipped. `buttons` selects only
    /// buttons (`Some(true)`), only other controls (`Some(false)`) or both.
    pub fn find_controls(
        self,
        container: Option<&'a str>,
        buttons: Option<bool>,
    ) -> impl Iterator<Item = (ControlId, &'a Control)> + 'a {
        self.form.controls().filter(move |(_, control)| {
            let in_container = container.is_none_or(|name| {
                control
                    .parent()
                    .is_some_and(|parent| parent == name || parent.starts_with(&format!("{name}-")))
            });
            let is_button = self.classify(control).is_button();
            in_container
                && is_pending(control)
                && buttons.is_none_or(|wanted| wanted == is_button)
        })
    }

    /// Prepares a group for rendering.
    ///
    /// Returns `None` for groups that are not visual or have no pending controls.
    pub fn process_group(&self, id: GroupId) -> Option<GroupSnapshot<'a>> {
        let group = self.form.group(id)?;
        if !group.is_visual() || group.controls().is_empty() {
            return None;
        }

        let controls: Vec<_> = group
            .controls()
            .iter()
            .filter_map(|id| Some((*id, self.form.control(*id)?)))
            .filter(|(_, control)| is_pending(control))
            .collect();
        if controls.is_empty() {
            return None;
        }

        let translator = self.translator();
        let label = group
            .options()
            .content(options::LABEL)
            .map(|label| label.translated(translator));
        let description = group
            .options()
            .content(options::DESCRIPTION)
            .map(|description| description.translated(translator));

        let mut attrs = group
            .get_option(options::CONTAINER)
            .and_then(|value| value.as_html())
            .cloned()
            .unwrap_or_default();
        attrs.set_name(None);
        for (key, value) in group.options().iter() {
            if !RESERVED_GROUP_OPTIONS.contains(&key) && attrs.attr(key).is_none() {
                attrs.set_attr(key, value.to_attr());
            }
        }

        Some(GroupSnapshot {
            id,
            label,
            description,
            attrs,
            controls,
            options: group.options(),
        })
    }

    /// Returns the inline error of a control, honoring `errors_at_inputs`.
    pub fn control_error(&self, control: &Control) -> Html {
        helpers::control_error(control, self.translator(), self.config.errors_at_inputs)
    }

    /// Returns the help block of a control.
    pub fn control_description(&self, control: &Control) -> Html {
        helpers::control_description(control, self.translator())
    }
}

fn is_pending(control: &Control) -> bool {
    !control.is_rendered() && control.kind() != ControlKind::Hidden
}
