//! Browser-side tests for the DOM-facing paths. Run with
//! `wasm-pack test --headless --chrome`; the whole file is skipped on host
//! targets so plain `cargo test` stays green.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

use vm_order_frontend::{dom_utils, form, loading, pages};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_button(document: &Document, id: &str, label: &str) -> HtmlElement {
    let btn: HtmlElement = document
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    btn.set_id(id);
    btn.set_inner_html(label);
    document.body().unwrap().append_child(&btn).unwrap();
    btn
}

#[wasm_bindgen_test]
fn loading_state_captures_and_restores_label() {
    let document = document();
    let btn = make_button(&document, "loading-test-btn", "Войти через Keycloak");

    loading::set_loading(&btn, true);
    let real_btn: &HtmlButtonElement = btn.dyn_ref().unwrap();
    assert!(real_btn.disabled());
    assert!(btn.inner_html().contains("spinner"));

    // Second enter must not overwrite the saved original label.
    loading::set_loading(&btn, true);
    loading::set_loading(&btn, false);
    assert!(!real_btn.disabled());
    assert_eq!(btn.inner_html(), "Войти через Keycloak");

    btn.remove();
}

#[wasm_bindgen_test]
fn switch_to_without_sections_is_a_noop() {
    // No #main-page / #form-page in the test document; must not panic and
    // must not schedule anything.
    pages::switch_to(pages::Section::Form);
}

#[wasm_bindgen_test]
fn field_value_roundtrip() {
    let document = document();
    let input: HtmlInputElement = document
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_id("field-roundtrip");
    document.body().unwrap().append_child(&input).unwrap();

    dom_utils::set_input_value(&document, "field-roundtrip", "10.0.0.0/24");
    assert_eq!(
        dom_utils::field_value(&document, "field-roundtrip").as_deref(),
        Some("10.0.0.0/24")
    );
    assert!(dom_utils::field_value(&document, "no-such-field").is_none());

    input.remove();
}

#[wasm_bindgen_test]
fn choice_card_stores_token_and_starts_transition() {
    let document = document();
    let body = document.body().unwrap();

    let main = document.create_element("div").unwrap();
    main.set_id("main-page");
    main.set_class_name("active");
    body.append_child(&main).unwrap();

    let form_page = document.create_element("div").unwrap();
    form_page.set_id("form-page");
    form_page.set_class_name("hidden");
    body.append_child(&form_page).unwrap();

    let hidden: HtmlInputElement = document
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    hidden.set_id("selected-choice");
    body.append_child(&hidden).unwrap();

    let card = document.create_element("div").unwrap();
    card.set_class_name("choice-card");
    card.dyn_ref::<HtmlElement>()
        .unwrap()
        .dataset()
        .set("choice", "pangolin")
        .unwrap();
    body.append_child(&card).unwrap();

    pages::bind(&document).unwrap();

    let click = web_sys::MouseEvent::new("click").unwrap();
    card.dispatch_event(&click).unwrap();

    // Token lands in the hidden field and the fade-out starts immediately.
    assert_eq!(
        dom_utils::field_value(&document, "selected-choice").as_deref(),
        Some("pangolin")
    );
    assert!(!main.class_list().contains("active"));

    main.remove();
    form_page.remove();
    hidden.remove();
    card.remove();
}

#[wasm_bindgen_test]
fn focus_decoration_marks_wrapper() {
    let document = document();
    let wrapper = document.create_element("div").unwrap();
    let input: HtmlInputElement = document
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_class_name("form-input");
    wrapper.append_child(&input).unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();

    form::bind_focus_decoration(&document).unwrap();

    let focus = web_sys::Event::new("focus").unwrap();
    input.dispatch_event(&focus).unwrap();
    assert!(wrapper.class_list().contains("focused"));

    // Empty field loses the mark on blur.
    let blur = web_sys::Event::new("blur").unwrap();
    input.dispatch_event(&blur).unwrap();
    assert!(!wrapper.class_list().contains("focused"));

    // Non-empty field keeps it.
    input.set_value("vm1");
    input.dispatch_event(&web_sys::Event::new("focus").unwrap()).unwrap();
    input.dispatch_event(&web_sys::Event::new("blur").unwrap()).unwrap();
    assert!(wrapper.class_list().contains("focused"));

    wrapper.remove();
}
