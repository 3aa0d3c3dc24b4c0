//! Page-lifetime controller state.
//!
//! Single-threaded UI code, so a `thread_local` `RefCell` is all the
//! synchronization needed. Borrows must stay short: take what you need out
//! of the cell, drop the borrow, then touch the DOM.

use std::cell::RefCell;

use crate::loading::LabelStore;
use crate::pages::Transition;

pub struct ControllerState {
    /// Original button labels saved while a request is in flight.
    pub labels: LabelStore,
    /// Main/Form cross-fade state machine and its pending timers.
    pub transition: Transition,
}

impl ControllerState {
    fn new() -> Self {
        Self {
            labels: LabelStore::new(),
            transition: Transition::new(),
        }
    }
}

thread_local! {
    pub static CONTROLLER: RefCell<ControllerState> = RefCell::new(ControllerState::new());
}
