//! Required-field rules for the intake form
//!
//! Validation here only answers "does this field currently pass?". Whether a
//! failure is *shown* depends on whether a submission has been attempted and
//! is decided in the view model.

use crate::types::TextField;

/// Result of form validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub is_valid: bool,
    /// Error message if validation failed
    pub error: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Create a failed validation result with an error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Check one text field's required rule
///
/// The full name must be non-empty after trimming. Email and username only
/// need to be non-empty; email format is deliberately not checked.
pub fn validate_field(field: TextField, value: &str) -> ValidationResult {
    let present = match field {
        TextField::FullName => !value.trim().is_empty(),
        TextField::Email | TextField::Username => !value.is_empty(),
    };

    if present {
        ValidationResult::success()
    } else {
        ValidationResult::failure(field.required_message())
    }
}

/// Per-field outcome of validating all three text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub full_name: bool,
    pub email: bool,
    pub username: bool,
}

impl FieldErrors {
    /// Validate all three text fields independently
    pub fn collect(full_name: &str, email: &str, username: &str) -> Self {
        Self {
            full_name: !validate_field(TextField::FullName, full_name).is_valid,
            email: !validate_field(TextField::Email, email).is_valid,
            username: !validate_field(TextField::Username, username).is_valid,
        }
    }

    pub fn has(&self, field: TextField) -> bool {
        match field {
            TextField::FullName => self.full_name,
            TextField::Email => self.email,
            TextField::Username => self.username,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.full_name || self.email || self.username)
    }

    /// Fields that failed, in form order
    pub fn failing(&self) -> Vec<TextField> {
        TextField::ALL
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }
}
