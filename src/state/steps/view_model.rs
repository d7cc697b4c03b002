//! Derived view data for the wizard
//!
//! Everything here is a pure function of [`WizardState`]. The view layer
//! uses it to decide which controls are enabled; the state machine itself
//! never consults it.

use super::step_state::WizardState;
use super::FieldRecord;

/// Read-only projection of the wizard for one frame
#[derive(Debug, Clone, Copy)]
pub struct StepsView<'a> {
    state: &'a WizardState,
}

impl<'a> StepsView<'a> {
    pub fn new(state: &'a WizardState) -> Self {
        Self { state }
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    pub fn step_count(&self) -> usize {
        self.state.field_count()
    }

    pub fn field(&self) -> &'a FieldRecord {
        self.state.current_field()
    }

    pub fn is_first(&self) -> bool {
        self.current_step() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step() == self.step_count() - 1
    }

    /// "Step 2 of 3"
    pub fn step_indicator(&self) -> String {
        format!("Step {} of {}", self.current_step() + 1, self.step_count())
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_first()
    }

    /// Next is only offered before the last step, once the current field is valid
    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.field().is_valid()
    }

    /// Submit replaces Next on the last step
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.field().is_valid()
    }

    /// Errors stay hidden until the user has typed something
    pub fn show_error(&self) -> bool {
        let field = self.field();
        !field.value().is_empty() && !field.is_valid()
    }

    pub fn error_message(&self) -> Option<String> {
        self.show_error()
            .then(|| format!("Please enter a valid {}", self.field().label().to_lowercase()))
    }

    /// One flag per step, set for the current step and every step before it
    pub fn progress(&self) -> Vec<bool> {
        (0..self.step_count())
            .map(|i| i <= self.current_step())
            .collect()
    }
}
