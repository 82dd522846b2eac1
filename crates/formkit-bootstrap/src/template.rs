//! Template engine abstraction.
//!
//! The renderer prepares all markup fragments itself and hands a serialized
//! view to a [`TemplateEngine`], which only arranges them. The default
//! [`MiniJinjaEngine`] ships Bootstrap templates; a directory of templates
//! can replace them.

use std::path::Path;

use minijinja::{Environment, Value};

use crate::error::Result;

/// Template rendering the whole form.
pub const FORM_TEMPLATE: &str = "bootstrap/form.html";
/// Template rendering named partials.
pub const PARTS_TEMPLATE: &str = "bootstrap/parts.html";
/// Macros shared by the bundled templates.
pub const MACROS_TEMPLATE: &str = "bootstrap/macros.html";

const BUNDLED: &[(&str, &str)] = &[
    (MACROS_TEMPLATE, include_str!("../templates/macros.html")),
    (FORM_TEMPLATE, include_str!("../templates/form.html")),
    (PARTS_TEMPLATE, include_str!("../templates/parts.html")),
];

/// A template engine that renders named templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Renders a registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String>;

    /// Adds a named template.
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// ```rust
/// use formkit_bootstrap::template::{MiniJinjaEngine, TemplateEngine};
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("hello.html", "Hello, {{ name }}!").unwrap();
/// let output = engine
///     .render_named("hello.html", &serde_json::json!({"name": "<World>"}))
///     .unwrap();
/// assert_eq!(output, "Hello, &lt;World&gt;!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine with the bundled Bootstrap templates.
    ///
    /// # Panics
    ///
    /// Panics if a bundled template does not compile.
    pub fn new() -> Self {
        Self {
            env: bundled_environment(BUNDLED),
        }
    }

    /// Creates an engine loading every template from a directory.
    ///
    /// The directory must provide `bootstrap/form.html` and
    /// `bootstrap/parts.html` (and whatever they import).
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir));
        Self { env }
    }

    /// Returns the underlying environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns the underlying environment mutably, e.g. to add filters.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

fn bundled_environment(templates: &[(&'static str, &'static str)]) -> Environment<'static> {
    let mut env = Environment::new();
    for &(name, source) in templates {
        if let Err(err) = env.add_template(name, source) {
            panic!("bundled template {name} does not compile: {err}");
        }
    }
    env
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MiniJinjaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniJinjaEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(Value::from_serialize(data))?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
