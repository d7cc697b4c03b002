//! Step wizard domain layer
//!
//! The wizard owns a fixed list of fields and a current position. All
//! changes go through [`StepsAction`] so validity can never go stale.

mod field;
mod step_state;
mod view_model;

pub use field::FieldRecord;
pub use step_state::{contact_fields, ResetPolicy, StepsAction, WizardState};
pub use view_model::StepsView;
