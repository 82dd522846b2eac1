mod common;

use common::*;
use formkit::{Attrs, Control, Form, Html};
use formkit_bootstrap::{BootstrapRenderer, RenderMode, RendererConfig};

#[test]
fn test_full_render_layout() {
    let mut form = signup_form();
    let html = render_full(&mut form);

    assert!(html.starts_with(
        r#"<form action="/signup" method="post" id="frm-signup" class="form-horizontal">"#
    ));
    assert!(html.trim_end().ends_with("</form>"));
    assert!(html.contains("<legend>Account</legend>"));
    assert!(html.contains("<legend>Profile</legend>"));
    assert!(html.contains(r#"<div id="frm-username-pair" class="control-group required">"#));
    assert!(html.contains(r#"<label class="required control-label" for="frm-username">Username</label>"#));
    assert!(html.contains(
        r#"<input type="text" class="form-control" name="username" id="frm-username" required>"#
    ));
    assert!(html.contains(r#"<p class="help-block">Where you live</p>"#));
    assert!(html.contains(r#"<div class="form-actions">"#));
}

#[test]
fn test_full_render_order() {
    let mut form = signup_form();
    let html = render_full(&mut form);

    let account = position(&html, "<legend>Account</legend>");
    let profile = position(&html, "<legend>Profile</legend>");
    let nick = position(&html, r#"id="frm-nick""#);
    let actions = position(&html, r#"<div class="form-actions">"#);
    let token = position(&html, r#"name="token""#);
    assert!(account < profile);
    assert!(profile < nick);
    assert!(nick < actions);
    assert!(actions < token);
}

#[test]
fn test_every_control_is_emitted_once() {
    let mut form = signup_form();
    let html = render_full(&mut form);
    for name in ["username", "email", "city", "newsletter", "nick", "send", "cancel", "token"] {
        assert_eq!(count(&html, &format!(r#"name="{name}""#)), 1, "{name}");
    }
}

#[test]
fn test_buttons_render_without_pair() {
    let mut form = signup_form();
    let html = render_full(&mut form);
    assert!(html.contains(
        r#"<input type="submit" class="btn" name="send" id="frm-send" value="Sign up">"#
    ));
    assert!(!html.contains("frm-send-pair"));
    assert!(!html.contains("frm-cancel-pair"));
    assert!(!html.contains(r#"for="frm-send""#));
}

#[test]
fn test_checkbox_label_wraps_input() {
    let mut form = signup_form();
    let html = render_full(&mut form);
    assert!(html.contains(
        r#"<label class="checkbox" for="frm-newsletter"><input type="checkbox" name="newsletter" id="frm-newsletter">Send me news</label>"#
    ));
}

#[test]
fn test_email_gets_prepended_at() {
    let mut form = signup_form();
    let html = render_full(&mut form);
    assert!(html.contains(
        r#"<div class="input-prepend"><span class="add-on">@</span><input type="email" class="form-control" name="email" id="frm-email"></div>"#
    ));
}

#[test]
fn test_explicit_prepend_and_append() {
    let mut form = Form::new("price");
    form.add_control(
        Control::number("amount", "Amount")
            .prepend("$")
            .append(Html::el("i").with_class("icon-tag")),
    )
    .unwrap();
    let html = render_full(&mut form);
    assert!(html.contains(
        r#"<div class="input-prepend input-append"><span class="add-on">$</span><input type="number" class="form-control" name="amount" id="frm-amount"><span class="add-on"><i class="icon-tag"></i></span></div>"#
    ));
}

#[test]
fn test_translated_placeholder() {
    let mut form = german_form();
    let html = render_full(&mut form);
    assert!(html.contains(r#"<label class="required control-label" for="frm-name">Name</label>"#));
    assert!(html.contains(r#"placeholder="Pflichtfeld""#));
    assert!(!html.contains("required-field-hint"));
    assert!(html.contains(r#"value="Senden""#));
}

#[test]
fn test_placeholder_without_translator() {
    let mut form = Form::new("plain");
    form.add_control(Control::text("q", "Search").placeholder("Type here"))
        .unwrap();
    let html = render_full(&mut form);
    assert!(html.contains(r#"placeholder="Type here""#));
}

#[test]
fn test_existing_layout_class_is_kept() {
    let mut form = Form::new("search");
    form.element_prototype_mut().add_class("form-inline");
    form.add_control(Control::text("q", "Search")).unwrap();
    let html = render_full(&mut form);
    assert!(html.contains(r#"class="form-inline""#));
    assert!(!html.contains("form-horizontal"));
}

#[test]
fn test_full_render_attributes() {
    let mut form = signup_form();
    let mut renderer = BootstrapRenderer::new();
    let html = render(
        &mut renderer,
        &mut form,
        RenderMode::Full {
            attrs: Attrs::new().with("class", "ajax").with("data-role", "signup"),
        },
    );
    assert!(html.starts_with(
        r#"<form action="/signup" method="post" id="frm-signup" class="form-horizontal ajax" data-role="signup">"#
    ));
}

#[test]
fn test_form_errors() {
    let mut form = signup_form();
    form.add_error("Sign-up is closed.");
    let id = form.control_by_path("username").unwrap();
    form.control_mut(id).unwrap().add_error("Username is taken.");
    let html = render_full(&mut form);

    assert!(html.contains(r#"<div class="alert alert-error">"#));
    assert!(html.contains("<p>Sign-up is closed.</p>"));
    assert!(html.contains(r#"<p class="help-inline">Username is taken.</p>"#));
    assert!(!html.contains("<p>Username is taken.</p>"));
    assert!(html.contains(r#"<div id="frm-username-pair" class="control-group required error">"#));
}

#[test]
fn test_errors_listed_with_form_errors() {
    let mut form = signup_form();
    let id = form.control_by_path("username").unwrap();
    form.control_mut(id).unwrap().add_error("Username is taken.");
    let mut renderer = renderer_with(RendererConfig::new().errors_at_inputs(false));
    let html = render(&mut renderer, &mut form, RenderMode::full());

    assert!(html.contains("<p>Username is taken.</p>"));
    assert!(!html.contains("help-inline"));
}

#[test]
fn test_no_alert_without_errors() {
    let mut form = signup_form();
    let html = render_full(&mut form);
    assert!(!html.contains("alert"));
}

#[test]
fn test_error_markup_is_escaped() {
    let mut form = Form::new("f");
    form.add_error("<b>bad</b>");
    form.add_control(Control::text("a", "A")).unwrap();
    let html = render_full(&mut form);
    assert!(html.contains("<p>&lt;b&gt;bad&lt;/b&gt;</p>"));
}

#[test]
fn test_radio_and_checkbox_lists() {
    let mut form = Form::new("prefs");
    form.add_control(
        Control::radio_list("size", "Size", vec![("s", "Small"), ("l", "Large")]).value("l"),
    )
    .unwrap();
    form.add_control(Control::checkbox_list(
        "colors",
        "Colors",
        vec![("r", "Red"), ("g", "Green")],
    ))
    .unwrap();
    let html = render_full(&mut form);

    assert!(html.contains(
        r#"<label for="frm-size-s" class="radio"><input type="radio" name="size" id="frm-size-s" value="s">Small</label>"#
    ));
    assert!(html.contains(r#"id="frm-size-l" value="l" checked>"#));
    assert!(html.contains(
        r#"<label for="frm-colors-r" class="checkbox inline"><input type="checkbox" name="colors[]" id="frm-colors-r" value="r">Red</label>"#
    ));
    assert!(html.contains(r#"<label>Size</label>"#));
}

#[test]
fn test_checkbox_list_display_option() {
    let mut form = Form::new("prefs");
    form.add_control(
        Control::checkbox_list("colors", "Colors", vec![("r", "Red")]).option("display", "block"),
    )
    .unwrap();
    let html = render_full(&mut form);
    assert!(html.contains(r#"<label for="frm-colors-r" class="checkbox">"#));
}

#[test]
fn test_custom_checkbox_list_type() {
    let mut form = Form::new("prefs");
    form.add_control(
        Control::checkbox_list("tags", "Tags", vec![("a", "A")]).type_name("TagList"),
    )
    .unwrap();

    let html = render_full(&mut form.clone());
    assert!(!html.contains("checkbox inline"));

    let mut renderer = renderer_with(RendererConfig::new().checkbox_list_type("TagList"));
    let html = render(&mut renderer, &mut form, RenderMode::full());
    assert!(html.contains("checkbox inline"));
}

#[test]
fn test_custom_control_template() {
    let mut form = Form::new("f");
    form.add_control(Control::text("nick", "Nick").template("fields/nick.html"))
        .unwrap();
    form.add_control(Control::text("other", "Other")).unwrap();

    let mut renderer = BootstrapRenderer::new();
    renderer
        .engine_mut()
        .add_template(
            "fields/nick.html",
            r#"<div class="nick">{{ label|safe }}{{ control|safe }}</div>"#,
        )
        .unwrap();
    let html = render(&mut renderer, &mut form, RenderMode::full());

    assert!(html.contains(
        r#"<div class="nick"><label class="control-label" for="frm-nick">Nick</label><input type="text" class="form-control" name="nick" id="frm-nick"></div>"#
    ));
    assert!(!html.contains("frm-nick-pair"));
    assert!(html.contains("frm-other-pair"));
}

#[test]
fn test_missing_control_template_fails() {
    let mut form = Form::new("f");
    form.add_control(Control::text("nick", "Nick").template("missing.html"))
        .unwrap();
    let err = BootstrapRenderer::new()
        .render(&mut form, RenderMode::full())
        .unwrap_err();
    assert!(matches!(err, formkit_bootstrap::RenderError::Template(_)));
}

#[test]
fn test_caller_layout_class_on_full_render() {
    let mut form = Form::new("f");
    form.add_control(Control::text("q", "Search")).unwrap();
    let mut renderer = BootstrapRenderer::new();
    let html = render(
        &mut renderer,
        &mut form,
        RenderMode::Full {
            attrs: Attrs::new().with("class", "form-inline"),
        },
    );
    assert!(html.starts_with(r#"<form action="" method="post" id="frm-f" class="form-inline">"#));
    assert!(!html.contains("form-horizontal"));

    let again = render(&mut renderer, &mut form, RenderMode::full());
    assert!(!again.contains("form-horizontal"));
}
