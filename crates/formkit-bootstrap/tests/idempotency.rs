mod common;

use common::*;
use formkit::{Control, Form, Html};
use formkit_bootstrap::{BootstrapRenderer, RenderMode};

#[test]
fn test_repeated_full_render_is_stable() {
    let mut form = signup_form();
    let mut renderer = BootstrapRenderer::new();
    let first = render(&mut renderer, &mut form, RenderMode::full());
    let second = render(&mut renderer, &mut form, RenderMode::full());
    assert_eq!(first, second);
    assert_eq!(count(&second, "required control-label"), 1);
    assert_eq!(count(&second, "form-horizontal"), 1);
}

#[test]
fn test_rebinding_does_not_duplicate_decoration() {
    let mut first_form = signup_form();
    let mut other = german_form();
    let mut renderer = BootstrapRenderer::new();

    let first = render(&mut renderer, &mut first_form, RenderMode::full());
    render(&mut renderer, &mut other, RenderMode::full());
    let again = render(&mut renderer, &mut first_form, RenderMode::full());

    assert_eq!(first, again);
    assert_eq!(count(&again, r#"class="required control-label""#), 1);
    assert_eq!(count(&again, r#"class="form-control""#), 4);
    assert_eq!(count(&again, r#"<span class="add-on">"#), 1);
    assert!(!again.contains("add-on\"><span"));
}

#[test]
fn test_two_renderers_share_a_form() {
    let mut form = signup_form();
    let first = render(&mut BootstrapRenderer::new(), &mut form, RenderMode::full());
    let second = render(&mut BootstrapRenderer::new(), &mut form, RenderMode::full());
    assert_eq!(first, second);
}

#[test]
fn test_cloned_form_is_decorated_again() {
    let mut form = signup_form();
    let mut renderer = BootstrapRenderer::new();
    let original = render(&mut renderer, &mut form, RenderMode::full());

    let mut copy = form.clone();
    assert_ne!(copy.id(), form.id());
    let copied = render(&mut renderer, &mut copy, RenderMode::full());
    assert_eq!(original, copied);
}

#[test]
fn test_wrapped_addon_is_kept() {
    let addon = Html::el("span").with_class("add-on").with_text("kg");
    let mut form = Form::new("f");
    form.add_control(Control::number("weight", "Weight").append(addon))
        .unwrap();
    let html = render_full(&mut form);
    assert_eq!(count(&html, r#"<span class="add-on">kg</span>"#), 1);
    assert!(html.contains(r#"<div class="input-append">"#));
}

#[test]
fn test_pair_container_reflects_errors_added_later() {
    let mut form = signup_form();
    let mut renderer = BootstrapRenderer::new();
    let before = render(&mut renderer, &mut form, RenderMode::full());
    assert!(!before.contains("control-group required error"));

    let mut fresh = signup_form();
    let id = fresh.control_by_path("username").unwrap();
    fresh.control_mut(id).unwrap().add_error("Taken.");
    let after = render(&mut renderer, &mut fresh, RenderMode::full());
    assert!(after.contains("control-group required error"));
}
