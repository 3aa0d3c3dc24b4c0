//! Main/Form section navigation.
//!
//! The cross-fade is a three-phase machine (Idle -> FadingOut -> FadingIn
//! -> Idle) driven by two timers. The phase logic is DOM-free and returns
//! [`ClassEdit`] lists so it can be unit-tested on the host; the thin
//! driver below maps edits onto the section elements and owns the timer
//! handles. A new trigger drops the pending handles (which cancels the
//! underlying timeouts), so overlapping transitions settle on the newest
//! target instead of interleaving.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::constants::{
    ACTIVATE_DELAY_MS, ACTIVE_CLASS, BACK_BUTTON_ID, CHOICE_CARD_CLASS, CHOICE_FIELD_ID,
    FADE_OUT_MS, FORM_PAGE_ID, HIDDEN_CLASS, MAIN_PAGE_ID,
};
use crate::dom_utils;
use crate::state::CONTROLLER;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Main,
    Form,
}

impl Section {
    pub fn other(self) -> Section {
        match self {
            Section::Main => Section::Form,
            Section::Form => Section::Main,
        }
    }

    fn element_id(self) -> &'static str {
        match self {
            Section::Main => MAIN_PAGE_ID,
            Section::Form => FORM_PAGE_ID,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    FadingOut,
    FadingIn,
}

/// One class toggle on one section element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClassEdit {
    pub section: Section,
    pub class: &'static str,
    pub add: bool,
}

impl ClassEdit {
    fn add(section: Section, class: &'static str) -> Self {
        Self { section, class, add: true }
    }

    fn remove(section: Section, class: &'static str) -> Self {
        Self { section, class, add: false }
    }
}

pub struct Transition {
    phase: Phase,
    target: Section,
    swap_timer: Option<Timeout>,
    activate_timer: Option<Timeout>,
}

impl Transition {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            target: Section::Main,
            swap_timer: None,
            activate_timer: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> Section {
        self.target
    }

    /// Start (or restart) a transition toward `target`. Any pending timers
    /// from an earlier trigger are dropped here, cancelling them.
    pub fn begin(&mut self, target: Section) -> Vec<ClassEdit> {
        self.swap_timer = None;
        self.activate_timer = None;
        self.phase = Phase::FadingOut;
        self.target = target;
        vec![ClassEdit::remove(target.other(), ACTIVE_CLASS)]
    }

    /// Fade-out elapsed: hide the outgoing section, unhide the incoming one.
    pub fn swap(&mut self) -> Vec<ClassEdit> {
        self.phase = Phase::FadingIn;
        vec![
            ClassEdit::add(self.target.other(), HIDDEN_CLASS),
            ClassEdit::remove(self.target, HIDDEN_CLASS),
        ]
    }

    /// Settle: mark the incoming section active, starting its fade-in.
    pub fn activate(&mut self) -> Vec<ClassEdit> {
        self.phase = Phase::Idle;
        vec![ClassEdit::add(self.target, ACTIVE_CLASS)]
    }

    fn store_swap_timer(&mut self, timer: Timeout) {
        self.swap_timer = Some(timer);
    }

    fn store_activate_timer(&mut self, timer: Timeout) {
        self.activate_timer = Some(timer);
    }
}

// ---------------------------------------------------------------------------
// DOM driver
// ---------------------------------------------------------------------------

fn apply_edits(document: &Document, edits: &[ClassEdit]) {
    for edit in edits {
        if let Some(el) = document.get_element_by_id(edit.section.element_id()) {
            if edit.add {
                dom_utils::add_class(&el, edit.class);
            } else {
                dom_utils::remove_class(&el, edit.class);
            }
        }
    }
}

/// Switch the visible section. No-op when either section element is
/// missing from the page.
pub fn switch_to(target: Section) {
    let document = match dom_utils::document() {
        Some(d) => d,
        None => return,
    };
    if document.get_element_by_id(MAIN_PAGE_ID).is_none()
        || document.get_element_by_id(FORM_PAGE_ID).is_none()
    {
        return;
    }

    let edits = CONTROLLER.with(|s| s.borrow_mut().transition.begin(target));
    apply_edits(&document, &edits);

    let swap_timer = Timeout::new(FADE_OUT_MS, move || {
        let document = match dom_utils::document() {
            Some(d) => d,
            None => return,
        };
        let edits = CONTROLLER.with(|s| s.borrow_mut().transition.swap());
        apply_edits(&document, &edits);

        let activate_timer = Timeout::new(ACTIVATE_DELAY_MS, move || {
            let document = match dom_utils::document() {
                Some(d) => d,
                None => return,
            };
            let edits = CONTROLLER.with(|s| s.borrow_mut().transition.activate());
            apply_edits(&document, &edits);
        });
        CONTROLLER.with(|s| s.borrow_mut().transition.store_activate_timer(activate_timer));
    });
    CONTROLLER.with(|s| s.borrow_mut().transition.store_swap_timer(swap_timer));
}

// ---------------------------------------------------------------------------
// Event binding
// ---------------------------------------------------------------------------

/// Bind choice cards (Main -> Form, storing the choice token) and the back
/// button (Form -> Main).
pub fn bind(document: &Document) -> Result<(), JsValue> {
    dom_utils::for_each_selected(
        document,
        &format!(".{}", CHOICE_CARD_CLASS),
        |card| {
            let token = card
                .dyn_ref::<HtmlElement>()
                .and_then(|c| c.dataset().get("choice"));
            dom_utils::on_click(card.as_ref(), move |_| {
                if let Some(token) = token.as_deref() {
                    if let Some(document) = dom_utils::document() {
                        dom_utils::set_input_value(&document, CHOICE_FIELD_ID, token);
                    }
                }
                switch_to(Section::Form);
            })
        },
    )?;

    if let Some(back) = document.get_element_by_id(BACK_BUTTON_ID) {
        dom_utils::on_click(back.as_ref(), |_| switch_to(Section::Main))?;
    }

    Ok(())
}
