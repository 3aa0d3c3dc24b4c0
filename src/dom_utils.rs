//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Keeps class toggles, typed value reads and closure-based listener
//! registration in one place instead of sprinkling `Closure::wrap` and
//! `dyn_into` chains across the code-base.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Current value of a form control, or `None` when the element is not an
/// input / select / textarea.
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}

/// Look up a form control by id and read its value. `None` doubles as the
/// "required element is missing" signal for callers.
pub fn field_value(document: &Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    control_value(&el)
}

pub fn set_input_value(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

/// Register a click handler. The closure is leaked (`forget`) because it
/// must outlive this call for the page lifetime.
pub fn on_click(
    target: &EventTarget,
    handler: impl FnMut(web_sys::MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Register a handler for an arbitrary event type ("focus", "blur", ...).
pub fn on_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Iterate the elements matching a selector. Non-element nodes are skipped.
pub fn for_each_selected(
    document: &Document,
    selector: &str,
    mut f: impl FnMut(Element) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(el)?;
        }
    }
    Ok(())
}
