//! VM order form: validation, submission hand-off and input decoration.
//!
//! Submission never talks to the backend directly; the composed record is
//! serialized and handed to the host bridge, which owns transport.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::bridge::HostBridge;
use crate::constants::{
    CHOICE_FIELD_ID, CHOICE_NOT_SELECTED, DESC_FIELD_ID, FLAVOR_FIELD_ID, FOCUSED_CLASS,
    FORM_INPUT_CLASS, MSG_PICK_SUBNET_FLAVOR, MSG_TITLE_REQUIRED, SUBMIT_BUTTON_ID,
    SUBNET_FIELD_ID, TITLE_FIELD_ID,
};
use crate::dom_utils;
use crate::models::SubmissionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Subnet or flavor is unselected; checked first, short-circuits.
    SubnetOrFlavorMissing,
    TitleMissing,
}

pub fn validate(title: &str, subnet: &str, flavor: &str) -> Result<(), ValidationError> {
    if subnet.is_empty() || flavor.is_empty() {
        return Err(ValidationError::SubnetOrFlavorMissing);
    }
    if title.trim().is_empty() {
        return Err(ValidationError::TitleMissing);
    }
    Ok(())
}

/// Build the outbound record. An absent or empty choice token becomes the
/// localized "not selected" sentinel.
pub fn compose(
    choice: Option<String>,
    title: &str,
    desc: &str,
    subnet: &str,
    flavor: &str,
) -> SubmissionRecord {
    SubmissionRecord {
        choice: choice
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| CHOICE_NOT_SELECTED.to_string()),
        title: title.trim().to_string(),
        desc: desc.trim().to_string(),
        subnet: subnet.to_string(),
        flavor: flavor.to_string(),
    }
}

pub fn summary(record: &SubmissionRecord) -> String {
    format!(
        "Заявка отправлена: {} ({}, {})",
        record.choice, record.flavor, record.subnet
    )
}

/// Outcome of a submit click, decided before any side effect runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Validation failed; alert text to show, nothing is sent.
    Reject(&'static str),
    /// Hand the record to the bridge and confirm.
    Send(SubmissionRecord),
}

pub fn plan_submission(
    choice: Option<String>,
    title: &str,
    desc: &str,
    subnet: &str,
    flavor: &str,
) -> SubmitAction {
    match validate(title, subnet, flavor) {
        Err(ValidationError::SubnetOrFlavorMissing) => SubmitAction::Reject(MSG_PICK_SUBNET_FLAVOR),
        Err(ValidationError::TitleMissing) => SubmitAction::Reject(MSG_TITLE_REQUIRED),
        Ok(()) => SubmitAction::Send(compose(choice, title, desc, subnet, flavor)),
    }
}

/// Bind the submit button. Fields are re-read on every click so the handler
/// sees current values, not the ones present at bind time.
pub fn bind(document: &Document, bridge: &Rc<dyn HostBridge>) -> Result<(), JsValue> {
    let submit = match document.get_element_by_id(SUBMIT_BUTTON_ID) {
        Some(el) => el,
        None => return Ok(()),
    };

    let bridge = Rc::clone(bridge);
    dom_utils::on_click(submit.as_ref(), move |_| {
        let document = match dom_utils::document() {
            Some(d) => d,
            None => return,
        };
        submit_form(&document, &bridge);
    })
}

fn submit_form(document: &Document, bridge: &Rc<dyn HostBridge>) {
    // Required controls: bail out quietly when the page lacks them.
    let title = match dom_utils::field_value(document, TITLE_FIELD_ID) {
        Some(v) => v,
        None => return,
    };
    let subnet = match dom_utils::field_value(document, SUBNET_FIELD_ID) {
        Some(v) => v,
        None => return,
    };
    let flavor = match dom_utils::field_value(document, FLAVOR_FIELD_ID) {
        Some(v) => v,
        None => return,
    };
    let desc = dom_utils::field_value(document, DESC_FIELD_ID).unwrap_or_default();
    let choice = dom_utils::field_value(document, CHOICE_FIELD_ID);

    match plan_submission(choice, &title, &desc, &subnet, &flavor) {
        SubmitAction::Reject(message) => bridge.show_alert(message),
        SubmitAction::Send(record) => match serde_json::to_string(&record) {
            Ok(payload) => {
                bridge.send_data(&payload);
                bridge.show_alert(&summary(&record));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("failed to serialize submission: {}", e).into(),
                );
            }
        },
    }
}

/// Cosmetic focus decoration: mark the parent wrapper while a field is
/// focused, and keep the mark after blur only when the field holds text.
pub fn bind_focus_decoration(document: &Document) -> Result<(), JsValue> {
    dom_utils::for_each_selected(
        document,
        &format!(".{}", FORM_INPUT_CLASS),
        |field| {
            let focus_field = field.clone();
            dom_utils::on_event(field.as_ref(), "focus", move |_| {
                if let Some(wrapper) = focus_field.parent_element() {
                    dom_utils::add_class(&wrapper, FOCUSED_CLASS);
                }
            })?;

            let blur_field = field.clone();
            dom_utils::on_event(field.as_ref(), "blur", move |_| {
                let empty = dom_utils::control_value(&blur_field)
                    .map(|v| v.is_empty())
                    .unwrap_or(true);
                if empty {
                    if let Some(wrapper) = blur_field.parent_element() {
                        dom_utils::remove_class(&wrapper, FOCUSED_CLASS);
                    }
                }
            })
        },
    )
}
