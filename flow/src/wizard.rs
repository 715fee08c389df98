//! Moves the send flow between screens.
//!
//! The store only records the current step; the navigator owns routing. A
//! [`Wizard`] keeps the two in step.

use api::bridge::Navigator;
use serde_json::json;

use crate::step::WizardStep;
use crate::store::SendStore;

pub struct Wizard<'a, B, N> {
    store: &'a SendStore<B>,
    navigator: &'a N,
}

impl<'a, B, N: Navigator> Wizard<'a, B, N> {
    pub fn new(store: &'a SendStore<B>, navigator: &'a N) -> Self {
        Self { store, navigator }
    }

    /// Navigates to the step after the current one. Returns the new step, or
    /// `None` when the flow is already finished.
    pub fn advance(&self) -> Option<WizardStep> {
        let (current, kind) = self
            .store
            .read(|state| (state.current_step, state.transaction_type));
        let next = current.next(kind)?;

        self.store.set_current_step(next);
        let params = json!({ "transactionType": kind.to_string() });
        self.navigator.navigate(next.screen_name(), Some(params));
        Some(next)
    }

    /// Steps back one screen.
    pub fn back(&self) -> Option<WizardStep> {
        let (current, kind) = self
            .store
            .read(|state| (state.current_step, state.transaction_type));
        let previous = current.previous(kind)?;

        self.store.set_current_step(previous);
        self.navigator.go_back();
        Some(previous)
    }

    /// Abandons the flow, discarding the draft.
    pub fn cancel(&self) {
        self.store.reset();
        self.store.set_current_step(WizardStep::Cancelled);
        self.navigator.navigate(WizardStep::Cancelled.screen_name(), None);
    }
}
