//! The Bootstrap form renderer.

use formkit::{Form, FormId};
use tracing::debug;

use crate::classify::{ControlClassifier, TypeNameClassifier};
use crate::config::RendererConfig;
use crate::context::RenderContext;
use crate::decorate;
use crate::error::Result;
use crate::mode::{PartAttrs, RenderMode};
use crate::template::{MiniJinjaEngine, TemplateEngine, FORM_TEMPLATE, PARTS_TEMPLATE};
use crate::view::ViewBuilder;

/// Renders forms with Twitter Bootstrap markup.
///
/// The first time a form is rendered its controls are decorated with
/// Bootstrap classes and wrappers. Later calls for the same form instance
/// reuse that decoration; rendering a different form rebinds the renderer.
///
/// ```rust
/// use formkit::{Control, Form};
/// use formkit_bootstrap::{BootstrapRenderer, RenderMode};
///
/// let mut form = Form::new("login");
/// form.add_control(Control::text("user", "User").required()).unwrap();
/// form.add_control(Control::submit("login", "Log in")).unwrap();
///
/// let mut renderer = BootstrapRenderer::new();
/// let html = renderer.render(&mut form, RenderMode::full()).unwrap();
/// assert!(html.contains(r#"class="form-horizontal""#));
/// assert!(html.contains(r#"<label class="required control-label" for="frm-user">"#));
/// ```
pub struct BootstrapRenderer {
    config: RendererConfig,
    classifier: Box<dyn ControlClassifier>,
    engine: Box<dyn TemplateEngine>,
    bound: Option<FormId>,
}

impl std::fmt::Debug for BootstrapRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapRenderer")
            .field("config", &self.config)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl Default for BootstrapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapRenderer {
    /// Creates a renderer with the default configuration and bundled templates.
    pub fn new() -> Self {
        Self::with_config(RendererConfig::default())
    }

    /// Creates a renderer with a configuration and bundled templates.
    pub fn with_config(config: RendererConfig) -> Self {
        Self {
            classifier: Box::new(TypeNameClassifier::from_config(&config)),
            config,
            engine: Box::new(MiniJinjaEngine::new()),
            bound: None,
        }
    }

    /// Replaces the template engine.
    #[must_use]
    pub fn engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Replaces the control classifier.
    #[must_use]
    pub fn classifier(mut self, classifier: impl ControlClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Returns the configuration mutably.
    ///
    /// Checkbox-list names are read when the renderer is built; changing
    /// them here does not affect the classifier.
    pub fn config_mut(&mut self) -> &mut RendererConfig {
        &mut self.config
    }

    /// Returns the template engine mutably, e.g. to register control templates.
    pub fn engine_mut(&mut self) -> &mut dyn TemplateEngine {
        self.engine.as_mut()
    }

    /// Returns the accessors over a form for this renderer.
    pub fn context<'a>(&'a self, form: &'a Form) -> RenderContext<'a> {
        RenderContext::new(form, &self.config, self.classifier.as_ref())
    }

    /// Renders the form, or a part of it.
    ///
    /// Controls emitted by the call are marked as rendered, so later partial
    /// renders skip them until the next [`RenderMode::Begin`] or
    /// [`RenderMode::Full`].
    pub fn render(&mut self, form: &mut Form, mode: RenderMode) -> Result<String> {
        let first = self.bind(form);
        if !first && matches!(mode, RenderMode::Full { .. } | RenderMode::Begin { .. }) {
            for control in form.controls_mut() {
                control.set_rendered(false);
            }
        }

        match mode {
            RenderMode::Full { attrs } => {
                if !attrs.is_empty() {
                    decorate::apply_form_attrs(form.element_prototype_mut(), &attrs);
                }
                let part_attrs = PartAttrs::new();
                let mut builder =
                    ViewBuilder::new(self.context(form), self.engine.as_ref(), &part_attrs);
                let view = builder.form()?;
                let emitted = builder.into_emitted();
                let html = self
                    .engine
                    .render_named(FORM_TEMPLATE, &serde_json::to_value(&view)?)?;
                mark_rendered(form, &emitted);
                Ok(html)
            }
            RenderMode::Begin { attrs } => {
                let mut el = form.element_prototype().clone();
                decorate::apply_form_attrs(&mut el, &attrs);
                Ok(el.start_tag())
            }
            RenderMode::End => Ok(form.render_end()),
            RenderMode::Part { part, attrs } => {
                let mut builder =
                    ViewBuilder::new(self.context(form), self.engine.as_ref(), &attrs);
                let view = builder.part(&part)?;
                let emitted = builder.into_emitted();
                let html = self
                    .engine
                    .render_named(PARTS_TEMPLATE, &serde_json::to_value(&view)?)?;
                mark_rendered(form, &emitted);
                Ok(html)
            }
        }
    }

    /// Binds the renderer to `form`, decorating it on first sight.
    ///
    /// Returns whether this was the first render of the form.
    fn bind(&mut self, form: &mut Form) -> bool {
        if self.bound == Some(form.id()) {
            return false;
        }
        self.bound = Some(form.id());
        debug!(form = form.name(), controls = form.len(), "decorating form");

        let classes: Vec<_> = form
            .controls()
            .map(|(_, control)| self.classifier.classify(control))
            .collect();
        let translator = form.shared_translator();
        for (control, class) in form.controls_mut().zip(classes) {
            decorate::prepare_control(control, class, translator.as_deref());
        }
        decorate::prepare_form_element(form.element_prototype_mut());
        true
    }
}

fn mark_rendered(form: &mut Form, emitted: &[formkit::ControlId]) {
    for id in emitted {
        if let Some(control) = form.control_mut(*id) {
            control.set_rendered(true);
        }
    }
}
