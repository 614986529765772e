//! Intake form controller
//!
//! Owns a draft [`IntakeState`] and runs the submission algorithm. All state
//! changes happen synchronously inside one method call, so no partially
//! applied transition is ever observable.

use rand::Rng;

use crate::avatar::{AcceptPolicy, DropOutcome, acquire};
use crate::types::{TICKET_ID_MAX, TICKET_ID_MIN, TextField};

use super::model::{
    AvatarRejection, IntakeAction, IntakeState, IntakeViewModel, compute_intake_view_model,
    reduce_intake_state,
};
use super::record::SubmissionRecord;

/// Why a submit attempt did not produce a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A file rejection is still showing
    RejectionPending(AvatarRejection),
    /// Required inputs are missing
    Incomplete {
        fields: Vec<TextField>,
        avatar_missing: bool,
    },
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmissionRecord),
    Blocked(SubmitBlocked),
}

/// Draw a ticket number uniformly from the five-digit range
pub fn generate_ticket_id<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(TICKET_ID_MIN..=TICKET_ID_MAX)
}

/// Run the submission algorithm against a draft
///
/// Marks the draft as attempted, then either hands back a record (and
/// resets the draft so it cannot be reused) or leaves the draft in place
/// with its indicators now visible.
pub fn submit<R: Rng>(state: &mut IntakeState, rng: &mut R) -> SubmitOutcome {
    state.submit_attempted = true;
    let errors = state.field_errors();

    if let Some(rejection) = state.rejection {
        tracing::debug!(?rejection, "submit blocked by pending rejection");
        return SubmitOutcome::Blocked(SubmitBlocked::RejectionPending(rejection));
    }

    match state.avatar.take() {
        Some(avatar) if errors.is_empty() => {
            let draft = std::mem::take(state);
            let ticket_id = generate_ticket_id(rng);
            tracing::debug!(ticket_id, "ticket generated");

            SubmitOutcome::Submitted(SubmissionRecord {
                full_name: draft.full_name,
                email: draft.email,
                username: draft.username,
                avatar,
                ticket_id,
            })
        }
        avatar => {
            let avatar_missing = avatar.is_none();
            state.avatar = avatar;
            let fields = errors.failing();
            tracing::debug!(?fields, avatar_missing, "submit blocked");
            SubmitOutcome::Blocked(SubmitBlocked::Incomplete {
                fields,
                avatar_missing,
            })
        }
    }
}

/// Stateful wrapper used by the headless command and integration tests
#[derive(Debug, Default)]
pub struct IntakeController {
    state: IntakeState,
    policy: AcceptPolicy,
}

impl IntakeController {
    pub fn new(policy: AcceptPolicy) -> Self {
        Self {
            state: IntakeState::default(),
            policy,
        }
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn policy(&self) -> &AcceptPolicy {
        &self.policy
    }

    pub fn view_model(&self) -> IntakeViewModel {
        compute_intake_view_model(&self.state)
    }

    pub fn dispatch(&mut self, action: IntakeAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_intake_state(state, action);
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.dispatch(IntakeAction::SetText(field, value.into()));
    }

    /// Apply an already-evaluated drop
    pub fn apply_drop(&mut self, outcome: DropOutcome) {
        self.dispatch(IntakeAction::Drop(outcome));
    }

    /// Read the paths named by dropped text and apply the result
    pub fn drop_paths(&mut self, raw: &str) {
        let outcome = acquire(&self.policy, raw);
        self.apply_drop(outcome);
    }

    /// Submit the typed path buffer as a drop
    pub fn commit_path(&mut self) {
        let raw = std::mem::take(&mut self.state.path_buffer);
        self.drop_paths(&raw);
    }

    pub fn remove_avatar(&mut self) {
        self.dispatch(IntakeAction::RemoveAvatar);
    }

    pub fn replace_avatar(&mut self) {
        self.dispatch(IntakeAction::OpenPicker);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        submit(&mut self.state, &mut rand::rng())
    }

    pub fn submit_with_rng<R: Rng>(&mut self, rng: &mut R) -> SubmitOutcome {
        submit(&mut self.state, rng)
    }
}
