//! Intake form controller
//!
//! The core of the application: field state, the single avatar slot,
//! required-field rules and the submission gate.

pub mod controller;
pub mod model;
pub mod record;
pub mod validation;

pub use controller::{IntakeController, SubmitBlocked, SubmitOutcome, generate_ticket_id, submit};
pub use model::{
    AcceptanceResult, AvatarRejection, IntakeAction, IntakeState, IntakeViewModel,
    compute_intake_view_model, reduce_intake_state,
};
pub use record::SubmissionRecord;
pub use validation::{FieldErrors, ValidationResult, validate_field};
