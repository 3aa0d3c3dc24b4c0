//! Applies the host link color to the page's CSS custom-property namespace.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::bridge::HostBridge;
use crate::constants::{FALLBACK_LINK_COLOR, LINK_COLOR_VAR};

/// Write `--tg-link-color` on the document root. Missing or empty host
/// theme data resolves to the fixed fallback, so there is no error path.
pub fn apply(document: &Document, bridge: &Rc<dyn HostBridge>) {
    let color = bridge
        .theme_params()
        .link_color
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| FALLBACK_LINK_COLOR.to_string());

    if let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let _ = root.style().set_property(LINK_COLOR_VAR, &color);
    }
}
