//! # formkit
//!
//! Form model for server-rendered HTML forms.
//!
//! This crate provides:
//! - Controls with element prototypes that renderers can decorate
//! - Containers and control groups
//! - An [`Html`] element builder
//! - Message translation through the [`Translator`] trait
//!
//! It does not validate input; validation errors are attached by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit::{Control, Form, MapTranslator};
//!
//! let mut form = Form::new("signup")
//!     .action("/signup")
//!     .translator(MapTranslator::for_locale("de").with("Email", "E-Mail"));
//!
//! form.add_group("Account").unwrap();
//! let email = form
//!     .add_control(Control::email("email", "Email").required())
//!     .unwrap();
//! form.set_current_group(None);
//! form.add_control(Control::submit("send", "Sign up")).unwrap();
//!
//! let control = form.control(email).unwrap();
//! let label = control.get_label(form.get_translator());
//! assert_eq!(label.text(), "E-Mail");
//! ```

mod content;
mod control;
mod error;
mod form;
mod group;
pub mod html;
pub mod options;
mod translator;

pub use content::Content;
pub use control::{Control, ControlId, ControlKind};
pub use error::{FormError, Result};
pub use form::{Form, FormId};
pub use group::{ControlGroup, GroupId};
pub use html::{html_escape, is_attr_name, AttrValue, Attrs, Html, Node};
pub use options::{OptionValue, Options};
pub use translator::{MapTranslator, Translator};
