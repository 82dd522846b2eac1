//! Template data.
//!
//! Every fragment is rendered to markup here, so templates only decide
//! layout and print fields with `|safe`.

use std::collections::HashSet;

use formkit::options;
use formkit::{Content, Control, ControlId, Html};
use serde::Serialize;

use crate::classify::ControlClass;
use crate::context::{GroupSnapshot, RenderContext};
use crate::error::Result;
use crate::helpers::{self, merge_attrs};
use crate::mode::{Part, PartAttrs};
use crate::template::TemplateEngine;

/// Markup of a label/input pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PairView {
    /// Lookup path of the control.
    pub name: String,
    /// Control class, e.g. `checkbox` or `radio-list`.
    pub kind: Option<ControlClass>,
    /// Opening tag of the pair container.
    pub pair_start: String,
    /// Closing tag of the pair container.
    pub pair_end: String,
    /// Label; for checkboxes it wraps the input.
    pub label: String,
    /// Input.
    pub control: String,
    /// Add-on before the input.
    pub prepend: String,
    /// Add-on after the input.
    pub append: String,
    /// Help block.
    pub description: String,
    /// Inline error.
    pub error: String,
    /// Combined markup of list items.
    pub items: Vec<String>,
    /// Output of the control's own template, replacing everything above.
    pub custom: Option<String>,
}

/// Markup of a group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupView {
    /// Legend.
    pub label: String,
    /// Text under the legend.
    pub description: String,
    /// Container attributes, each prefixed by a space.
    pub attrs: String,
    /// Pairs of the group.
    pub pairs: Vec<PairView>,
}

/// Rendered attributes handed to partial templates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttrsView {
    /// Input attributes.
    pub input: String,
    /// Label attributes.
    pub label: String,
}

/// Data of the form and partial templates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormView {
    /// Partial name; empty for a full render.
    pub mode: String,
    /// Extra partial attributes, already merged into the pairs.
    pub attrs: AttrsView,
    /// Opening form tag.
    pub begin: String,
    /// Hidden fields and closing form tag.
    pub end: String,
    /// Form errors.
    pub errors: Vec<String>,
    /// Groups.
    pub groups: Vec<GroupView>,
    /// Pairs outside of groups.
    pub controls: Vec<PairView>,
    /// Buttons.
    pub buttons: Vec<PairView>,
}

/// Builds template data and records which controls it emitted.
pub(crate) struct ViewBuilder<'a> {
    ctx: RenderContext<'a>,
    engine: &'a dyn TemplateEngine,
    attrs: &'a PartAttrs,
    emitted: HashSet<ControlId>,
    order: Vec<ControlId>,
}

impl<'a> ViewBuilder<'a> {
    pub(crate) fn new(
        ctx: RenderContext<'a>,
        engine: &'a dyn TemplateEngine,
        attrs: &'a PartAttrs,
    ) -> Self {
        Self {
            ctx,
            engine,
            attrs,
            emitted: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Returns the controls emitted so far, in emission order.
    pub(crate) fn into_emitted(self) -> Vec<ControlId> {
        self.order
    }

    /// Builds the data of a full render.
    pub(crate) fn form(&mut self) -> Result<FormView> {
        let mut view = self.body()?;
        let form = self.ctx.form();
        view.begin = form.render_begin(&formkit::Attrs::new());
        view.end = form.render_end();
        Ok(view)
    }

    /// Builds the data of a partial.
    pub(crate) fn part(&mut self, part: &Part) -> Result<FormView> {
        let mut view = match part {
            Part::Errors => FormView {
                errors: self.errors(),
                ..FormView::default()
            },
            Part::Body => self.body()?,
            Part::Controls => FormView {
                controls: self.controls(Some(false))?,
                ..FormView::default()
            },
            Part::Buttons => FormView {
                buttons: self.controls(Some(true))?,
                ..FormView::default()
            },
            Part::Control(path) => {
                let form = self.ctx.form();
                let id = form
                    .control_by_path(path)
                    .ok_or_else(|| crate::RenderError::UnknownControl(path.clone()))?;
                let control = form
                    .control(id)
                    .ok_or_else(|| crate::RenderError::UnknownControl(path.clone()))?;
                FormView {
                    controls: vec![self.pair(id, control)?],
                    ..FormView::default()
                }
            }
        };
        view.mode = part.as_str().to_string();
        view.attrs = AttrsView {
            input: self.attrs.input.to_html(),
            label: self.attrs.label.to_html(),
        };
        Ok(view)
    }

    fn body(&mut self) -> Result<FormView> {
        let errors = self.errors();
        let mut groups = Vec::new();
        for snapshot in self.ctx.find_groups()? {
            if let Some(group) = self.group(&snapshot)? {
                groups.push(group);
            }
        }
        Ok(FormView {
            errors,
            groups,
            controls: self.controls(Some(false))?,
            buttons: self.controls(Some(true))?,
            ..FormView::default()
        })
    }

    fn errors(&self) -> Vec<String> {
        self.ctx.find_errors().iter().map(Content::render).collect()
    }

    fn group(&mut self, snapshot: &GroupSnapshot<'a>) -> Result<Option<GroupView>> {
        let mut pairs = Vec::new();
        for &(id, control) in &snapshot.controls {
            if !self.emitted.contains(&id) {
                pairs.push(self.pair(id, control)?);
            }
        }
        if pairs.is_empty() {
            return Ok(None);
        }
        Ok(Some(GroupView {
            label: snapshot.label.as_ref().map(Content::render).unwrap_or_default(),
            description: snapshot
                .description
                .as_ref()
                .map(Content::render)
                .unwrap_or_default(),
            attrs: snapshot.attrs.attrs().to_html(),
            pairs,
        }))
    }

    fn controls(&mut self, buttons: Option<bool>) -> Result<Vec<PairView>> {
        let pending: Vec<_> = self
            .ctx
            .find_controls(None, buttons)
            .filter(|(id, _)| !self.emitted.contains(id))
            .collect();
        pending
            .into_iter()
            .map(|(id, control)| self.pair(id, control))
            .collect()
    }

    fn pair(&mut self, id: ControlId, control: &Control) -> Result<PairView> {
        if self.emitted.insert(id) {
            self.order.push(id);
        }

        let translator = self.ctx.translator();
        let class = self.ctx.classify(control);
        let input = merge_attrs(Some(control.get_control(translator)), &self.attrs.input);
        let mut label = merge_attrs(
            Some(helpers::label_body(control, translator)),
            &self.attrs.label,
        );
        if class == ControlClass::Checkbox {
            label.insert(0, input.clone());
        }

        let pair = control
            .get_option(options::PAIR_CONTAINER)
            .and_then(|value| value.as_html())
            .cloned()
            .unwrap_or_else(Html::fragment);
        let addon = |key: &str| {
            control
                .get_option(key)
                .and_then(|value| value.as_html())
                .map(Html::render)
                .unwrap_or_default()
        };
        let items = match class {
            ControlClass::RadioList => helpers::radio_list_items(control, translator),
            ControlClass::CheckboxList => helpers::checkbox_list_items(control, translator),
            _ => Vec::new(),
        };

        let mut view = PairView {
            name: helpers::control_name(control),
            kind: Some(class),
            pair_start: pair.start_tag(),
            pair_end: pair.end_tag(),
            label: label.render(),
            control: input.render(),
            prepend: addon(options::INPUT_PREPEND),
            append: addon(options::INPUT_APPEND),
            description: self.ctx.control_description(control).render(),
            error: self.ctx.control_error(control).render(),
            items: items.iter().map(|item| item.html.render()).collect(),
            custom: None,
        };

        if let Some(template) = helpers::control_template(control) {
            let data = serde_json::to_value(&view)?;
            view.custom = Some(self.engine.render_named(template, &data)?);
        }
        Ok(view)
    }
}
