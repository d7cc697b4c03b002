//! Step wizard state and its transitions

use super::field::FieldRecord;
use crate::state::validation::FieldKind;
use thiserror::Error;

/// What `Reset` does besides rewinding to the first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Only move back to step 0, keep entered values
    #[default]
    Rewind,
    /// Move back to step 0 and clear every value
    Clear,
}

impl ResetPolicy {
    pub fn from_clear_flag(clear_values: bool) -> Self {
        if clear_values {
            Self::Clear
        } else {
            Self::Rewind
        }
    }
}

/// Intents accepted by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepsAction {
    /// Move to the next step (saturates at the last step)
    Advance,
    /// Move to the previous step (saturates at step 0)
    Retreat,
    /// Replace a field's value. Out-of-range indices are clamped.
    SetFieldValue { index: usize, value: String },
    /// Rewind to step 0, see [`ResetPolicy`]
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepsError {
    #[error("a wizard needs at least one field")]
    NoFields,
    #[error("duplicate field name: {0}")]
    DuplicateName(String),
}

/// The whole wizard: ordered fields plus the current position
///
/// `current_step` always indexes into `fields`, and the field list never
/// grows or shrinks after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current_step: usize,
    fields: Vec<FieldRecord>,
    reset_policy: ResetPolicy,
}

impl WizardState {
    /// Build a wizard over a fixed, non-empty list of uniquely named fields
    pub fn new(fields: Vec<FieldRecord>, reset_policy: ResetPolicy) -> Result<Self, StepsError> {
        if fields.is_empty() {
            return Err(StepsError::NoFields);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name() == field.name()) {
                return Err(StepsError::DuplicateName(field.name().to_string()));
            }
        }
        Ok(Self {
            current_step: 0,
            fields,
            reset_policy,
        })
    }

    /// The contact form: full name, email, phone
    pub fn contact_form(reset_policy: ResetPolicy) -> Self {
        Self {
            current_step: 0,
            fields: contact_fields(),
            reset_policy,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn current_field(&self) -> &FieldRecord {
        &self.fields[self.current_step]
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    fn last_index(&self) -> usize {
        self.fields.len() - 1
    }

    /// Apply an action in place. Returns true if anything changed.
    pub fn reduce(&mut self, action: &StepsAction) -> bool {
        match action {
            StepsAction::Advance => self.advance(),
            StepsAction::Retreat => self.retreat(),
            StepsAction::SetFieldValue { index, value } => self.set_field_value(*index, value),
            StepsAction::Reset => self.reset(),
        }
    }

    fn advance(&mut self) -> bool {
        if self.current_step < self.last_index() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    fn retreat(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    fn set_field_value(&mut self, index: usize, value: &str) -> bool {
        let target = index.min(self.last_index());
        if target != index {
            tracing::debug!(index, clamped = target, "Field index out of range, clamping");
        }

        let field = &mut self.fields[target];
        if field.value() == value {
            return false;
        }
        field.set_value(value.to_string());
        true
    }

    fn reset(&mut self) -> bool {
        let mut changed = self.current_step != 0;
        self.current_step = 0;

        if self.reset_policy == ResetPolicy::Clear {
            for field in &mut self.fields {
                if !field.value().is_empty() {
                    field.clear();
                    changed = true;
                }
            }
        }
        changed
    }
}

/// Fields of the contact form, in step order
pub fn contact_fields() -> Vec<FieldRecord> {
    vec![
        FieldRecord::new(
            "fullName",
            "Full Name",
            "Enter your full name",
            FieldKind::ShortText,
        ),
        FieldRecord::new(
            "email",
            "Email Address",
            "Enter your email",
            FieldKind::Email,
        ),
        FieldRecord::new(
            "phone",
            "Phone Number",
            "Enter your phone number",
            FieldKind::Phone,
        ),
    ]
}

impl Default for WizardState {
    fn default() -> Self {
        Self::contact_form(ResetPolicy::default())
    }
}
