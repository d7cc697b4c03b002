//! Form field records

use crate::state::validation::{validate, FieldKind};
use serde::Serialize;

/// A single wizard field with its configuration, value and derived validity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    name: String,
    label: String,
    placeholder: String,
    kind: FieldKind,
    value: String,
    valid: bool,
}

impl FieldRecord {
    /// Create an empty field. Validity is computed from the empty value.
    pub fn new(name: &str, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self::with_value(name, label, placeholder, kind, String::new())
    }

    /// Create a field with an initial value
    pub fn with_value(
        name: &str,
        label: &str,
        placeholder: &str,
        kind: FieldKind,
        value: String,
    ) -> Self {
        let valid = validate(kind, &value);
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value,
            valid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Replace the value and revalidate
    pub(super) fn set_value(&mut self, value: String) {
        self.valid = validate(self.kind, &value);
        self.value = value;
    }

    /// Clear the value and revalidate
    pub(super) fn clear(&mut self) {
        self.set_value(String::new());
    }
}
