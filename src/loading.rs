//! Transient button loading state.
//!
//! While a request is in flight the trigger button is disabled and shows a
//! spinner plus a localized label. The original label lives in an explicit
//! [`LabelStore`] keyed by button identity rather than being stuffed onto
//! the DOM node itself.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement};

use crate::constants::LOADING_LABEL;
use crate::state::CONTROLLER;

/// Saved original labels, one slot per button key.
///
/// Invariant: a slot is written at most once per loading cycle. Repeated
/// `save_once` calls keep the first value, so entering loading twice in a
/// row can never capture the spinner markup as the "original" label.
#[derive(Default)]
pub struct LabelStore {
    saved: HashMap<String, String>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `label` under `key` unless a label is already saved. Returns
    /// whether this call stored the value.
    pub fn save_once(&mut self, key: &str, label: &str) -> bool {
        if self.saved.contains_key(key) {
            return false;
        }
        self.saved.insert(key.to_string(), label.to_string());
        true
    }

    /// Remove and return the saved label, ending the loading cycle.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.saved.remove(key)
    }
}

/// Stable identity for a button: its `id`, else its `data-provider` value.
/// The DOM contract requires one of the two to be present and distinct.
fn button_key(button: &HtmlElement) -> Option<String> {
    let id = button.id();
    if !id.is_empty() {
        return Some(id);
    }
    button.dataset().get("provider")
}

fn loading_markup() -> String {
    format!(r#"<span class="spinner"></span> {}"#, LOADING_LABEL)
}

/// Enter or leave loading state. Callers must pair enter/exit per request;
/// the label is restored verbatim on exit.
pub fn set_loading(button: &HtmlElement, is_loading: bool) {
    let key = match button_key(button) {
        Some(k) => k,
        None => return,
    };

    if is_loading {
        let current = button.inner_html();
        CONTROLLER.with(|s| s.borrow_mut().labels.save_once(&key, &current));
        set_disabled(button, true);
        button.set_inner_html(&loading_markup());
    } else {
        set_disabled(button, false);
        if let Some(original) = CONTROLLER.with(|s| s.borrow_mut().labels.take(&key)) {
            button.set_inner_html(&original);
        }
    }
}

fn set_disabled(button: &HtmlElement, disabled: bool) {
    if let Some(btn) = button.dyn_ref::<HtmlButtonElement>() {
        btn.set_disabled(disabled);
    } else if disabled {
        let _ = button.set_attribute("disabled", "disabled");
    } else {
        let _ = button.remove_attribute("disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_enter_keeps_first_label() {
        let mut store = LabelStore::new();
        assert!(store.save_once("google", "Войти через Google"));
        // Second enter sees the spinner markup; it must not win the slot.
        assert!(!store.save_once("google", r#"<span class="spinner"></span>"#));
        assert_eq!(store.take("google").as_deref(), Some("Войти через Google"));
    }

    #[test]
    fn take_clears_the_slot() {
        let mut store = LabelStore::new();
        store.save_once("kc", "Keycloak");
        assert_eq!(store.take("kc").as_deref(), Some("Keycloak"));
        assert!(store.take("kc").is_none());
        // Next cycle starts fresh.
        assert!(store.save_once("kc", "Keycloak"));
    }

    #[test]
    fn keys_do_not_interfere() {
        let mut store = LabelStore::new();
        store.save_once("a", "A");
        store.save_once("b", "B");
        assert_eq!(store.take("a").as_deref(), Some("A"));
        assert_eq!(store.take("b").as_deref(), Some("B"));
    }
}
