#![allow(dead_code)]

use formkit::{Control, Form, MapTranslator};
use formkit_bootstrap::{BootstrapRenderer, Part, RenderMode, RendererConfig};

/// A sign-up form with two groups, loose controls, a hidden token and buttons.
pub fn signup_form() -> Form {
    let mut form = Form::new("signup").action("/signup");
    form.add_control(Control::hidden("token", "abc123")).unwrap();

    form.add_group("Account").unwrap();
    form.add_control(Control::text("username", "Username").required())
        .unwrap();
    form.add_control(Control::email("email", "Email")).unwrap();

    form.add_group("Profile").unwrap();
    form.add_control(Control::text("city", "City").description("Where you live"))
        .unwrap();
    form.add_control(Control::checkbox("newsletter", "Send me news"))
        .unwrap();

    form.set_current_group(None);
    form.add_control(Control::text("nick", "Nick")).unwrap();
    form.add_control(Control::submit("send", "Sign up")).unwrap();
    form.add_control(Control::button("cancel", "Cancel")).unwrap();
    form
}

/// A form whose labels and placeholder are translated to German.
pub fn german_form() -> Form {
    let translator = MapTranslator::for_locale("de")
        .with("Name", "Name")
        .with("required-field-hint", "Pflichtfeld")
        .with("Send", "Senden");
    let mut form = Form::new("german").translator(translator);
    form.add_control(
        Control::text("name", "Name")
            .required()
            .placeholder("required-field-hint"),
    )
    .unwrap();
    form.add_control(Control::submit("send", "Send")).unwrap();
    form
}

pub fn render(renderer: &mut BootstrapRenderer, form: &mut Form, mode: RenderMode) -> String {
    renderer
        .render(form, mode)
        .unwrap_or_else(|e| panic!("Failed to render {}: {e}", form.name()))
}

pub fn render_full(form: &mut Form) -> String {
    render(&mut BootstrapRenderer::new(), form, RenderMode::full())
}

pub fn render_part(renderer: &mut BootstrapRenderer, form: &mut Form, part: &str) -> String {
    render(renderer, form, RenderMode::part(part.parse::<Part>().unwrap()))
}

pub fn renderer_with(config: RendererConfig) -> BootstrapRenderer {
    BootstrapRenderer::with_config(config)
}

/// Counts non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Returns the byte offset of `needle`, failing the test if it is missing.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("Expected {needle:?} in:\n{haystack}"))
}
