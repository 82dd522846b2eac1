//! # formkit-bootstrap
//!
//! Twitter Bootstrap renderer for [`formkit`] forms.
//!
//! The renderer decorates a form once (Bootstrap classes, pair containers,
//! add-ons, the `required` marker) and then renders it through MiniJinja
//! templates, either whole or in parts:
//!
//! - [`RenderMode::Full`]: the complete form
//! - [`RenderMode::Begin`] and [`RenderMode::End`]: the form tags
//! - [`RenderMode::Part`]: errors, body, controls, buttons or one control
//!
//! Controls emitted by a partial render are skipped by later partial
//! renders, so a form can be laid out by hand and finished with the body.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit::{Control, Form};
//! use formkit_bootstrap::{BootstrapRenderer, Part, RenderMode, RendererConfig};
//!
//! let mut form = Form::new("contact");
//! form.add_group("Message").unwrap();
//! form.add_control(Control::email("email", "Email").required()).unwrap();
//! form.add_control(Control::textarea("body", "Message", 4)).unwrap();
//! form.set_current_group(None);
//! form.add_control(Control::submit("send", "Send")).unwrap();
//!
//! let mut renderer = BootstrapRenderer::with_config(RendererConfig::new());
//! let begin = renderer.render(&mut form, RenderMode::begin()).unwrap();
//! let email = renderer
//!     .render(&mut form, RenderMode::part(Part::Control("email".into())))
//!     .unwrap();
//! let rest = renderer.render(&mut form, RenderMode::part(Part::Body)).unwrap();
//! let end = renderer.render(&mut form, RenderMode::end()).unwrap();
//!
//! assert!(begin.contains("form-horizontal"));
//! assert!(email.contains(r#"<span class="add-on">@</span>"#));
//! assert!(!rest.contains(r#"name="email""#));
//! assert!(rest.contains("form-actions"));
//! assert_eq!(end, "</form>");
//! ```

mod classify;
mod config;
mod context;
mod decorate;
mod error;
pub mod helpers;
mod mode;
mod renderer;
pub mod template;
mod view;

pub use classify::{ControlClass, ControlClassifier, TypeNameClassifier};
pub use config::{RendererConfig, DEFAULT_CHECKBOX_LIST_TYPES};
pub use context::{GroupSnapshot, RenderContext};
pub use error::{RenderError, Result};
pub use helpers::ChoiceItem;
pub use mode::{Part, PartAttrs, RenderMode};
pub use renderer::BootstrapRenderer;
pub use template::{MiniJinjaEngine, TemplateEngine};
pub use view::{AttrsView, FormView, GroupView, PairView};
