//! Intake form model types for testable state management
//!
//! This module separates the draft state (IntakeState) from what is rendered
//! (IntakeViewModel). Error visibility is never stored: it is derived from
//! the current draft and the submission-attempted flag every time the view
//! model is computed.

use crate::avatar::{AvatarFile, DropOutcome, FileRejection, RejectionCode};
use crate::types::{
    IntakeField, MSG_AVATAR_HINT, MSG_AVATAR_REQUIRED, MSG_FILE_INVALID_TYPE, MSG_FILE_OTHER,
    MSG_FILE_TOO_LARGE, TextField,
};

use super::validation::FieldErrors;

/// Why the last attempt to attach a file failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarRejection {
    TooLarge,
    InvalidType,
    Other,
}

impl AvatarRejection {
    /// Classify a rejection by its first failed check
    pub fn from_rejection(rejection: &FileRejection) -> Self {
        match rejection.primary_code() {
            Some(RejectionCode::FileTooLarge) => AvatarRejection::TooLarge,
            Some(RejectionCode::FileInvalidType) => AvatarRejection::InvalidType,
            _ => AvatarRejection::Other,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AvatarRejection::TooLarge => MSG_FILE_TOO_LARGE,
            AvatarRejection::InvalidType => MSG_FILE_INVALID_TYPE,
            AvatarRejection::Other => MSG_FILE_OTHER,
        }
    }
}

/// Outcome of one attempt to set the avatar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptanceResult {
    Accepted(AvatarFile),
    RejectedTooLarge,
    RejectedInvalidType,
    RejectedOther,
}

impl AcceptanceResult {
    /// Collapse a drop into a single acceptance result
    ///
    /// Rejections win over acceptances, and the last rejection decides the
    /// message. An empty drop yields `None` and changes nothing.
    pub fn from_drop(outcome: DropOutcome) -> Option<Self> {
        if let Some(rejection) = outcome.rejected.last() {
            return Some(AvatarRejection::from_rejection(rejection).into());
        }
        outcome
            .accepted
            .into_iter()
            .next()
            .map(AcceptanceResult::Accepted)
    }

    pub fn rejection(&self) -> Option<AvatarRejection> {
        match self {
            AcceptanceResult::Accepted(_) => None,
            AcceptanceResult::RejectedTooLarge => Some(AvatarRejection::TooLarge),
            AcceptanceResult::RejectedInvalidType => Some(AvatarRejection::InvalidType),
            AcceptanceResult::RejectedOther => Some(AvatarRejection::Other),
        }
    }
}

impl From<AvatarRejection> for AcceptanceResult {
    fn from(rejection: AvatarRejection) -> Self {
        match rejection {
            AvatarRejection::TooLarge => AcceptanceResult::RejectedTooLarge,
            AvatarRejection::InvalidType => AcceptanceResult::RejectedInvalidType,
            AvatarRejection::Other => AcceptanceResult::RejectedOther,
        }
    }
}

/// The draft record plus form UI state
///
/// `avatar` is the single canonical file slot. `rejection` is only ever set
/// while `avatar` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeState {
    pub full_name: String,
    pub email: String,
    pub username: String,
    /// The attached avatar, if any
    pub avatar: Option<AvatarFile>,
    /// Rejection of the most recent acquisition attempt
    pub rejection: Option<AvatarRejection>,
    /// Set by the first submit and never cleared for this draft
    pub submit_attempted: bool,
    /// Currently focused form element
    pub focused: IntakeField,
    /// Whether the user asked to pick a replacement file
    pub picker_open: bool,
    /// Path text typed or pasted into the avatar field
    pub path_buffer: String,
}

impl IntakeState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Email => &self.email,
            TextField::Username => &self.username,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Email => &mut self.email,
            TextField::Username => &mut self.username,
        }
    }

    /// Number of files the avatar field holds (0 or 1)
    pub fn avatar_file_count(&self) -> usize {
        usize::from(self.avatar.is_some())
    }

    /// Whether typed characters in the avatar field go to the path buffer
    pub fn picker_active(&self) -> bool {
        self.picker_open || self.avatar.is_none()
    }

    pub fn field_errors(&self) -> FieldErrors {
        FieldErrors::collect(&self.full_name, &self.email, &self.username)
    }
}

/// All possible synchronous actions on the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeAction {
    // Focus
    /// Move focus to the next form element
    FocusNext,
    /// Move focus to the previous form element
    FocusPrev,

    // Input
    /// Type a character into the focused element
    InputChar(char),
    /// Delete the last character of the focused element
    Backspace,
    /// Replace a text field's value
    SetText(TextField, String),

    // Avatar
    /// Open the acquisition surface to pick a replacement
    OpenPicker,
    /// Close the acquisition surface without picking
    ClosePicker,
    /// Apply the result of a drop or picker selection
    Drop(DropOutcome),
    /// Detach the current avatar
    RemoveAvatar,
    /// Submit the typed path (requires file I/O, handled externally)
    CommitPath,

    // App
    /// Attempt submission (requires ticket ID generation, handled externally)
    Submit,
    /// Quit the application
    Quit,
}

/// Computed view model for rendering the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeViewModel {
    pub avatar: AvatarViewModel,
    pub fields: Vec<TextFieldViewModel>,
    pub submit_focused: bool,
}

/// View model for the avatar dropzone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarViewModel {
    /// Attached file shown as a preview
    pub file: Option<AvatarFile>,
    /// Error line under the dropzone (rejection or required)
    pub error: Option<&'static str>,
    /// Hint line shown when there is neither a file nor an error
    pub hint: Option<&'static str>,
    /// Whether typed text goes into the path prompt
    pub picker_active: bool,
    pub path_buffer: String,
    pub is_focused: bool,
}

/// View model for a single text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldViewModel {
    pub field: TextField,
    pub value: String,
    pub error: Option<&'static str>,
    pub is_focused: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// The avatar message currently visible, if any
///
/// A rejection message is shown as soon as it happens. The required message
/// only appears once a submit was attempted and no file is attached.
pub fn avatar_error(state: &IntakeState) -> Option<&'static str> {
    if let Some(rejection) = state.rejection {
        return Some(rejection.message());
    }
    if state.submit_attempted && state.avatar.is_none() {
        return Some(MSG_AVATAR_REQUIRED);
    }
    None
}

/// Whether a text field's error indicator is visible
pub fn text_error_visible(state: &IntakeState, field: TextField) -> bool {
    state.submit_attempted && state.field_errors().has(field)
}

/// Pure function: compute view model from state
pub fn compute_intake_view_model(state: &IntakeState) -> IntakeViewModel {
    let error = avatar_error(state);
    let hint = (error.is_none() && state.avatar.is_none()).then_some(MSG_AVATAR_HINT);

    let avatar = AvatarViewModel {
        file: state.avatar.clone(),
        error,
        hint,
        picker_active: state.picker_active(),
        path_buffer: state.path_buffer.clone(),
        is_focused: state.focused == IntakeField::Avatar,
    };

    let fields = TextField::ALL
        .into_iter()
        .map(|field| TextFieldViewModel {
            field,
            value: state.text(field).to_string(),
            error: text_error_visible(state, field).then(|| field.required_message()),
            is_focused: state.focused == IntakeField::Text(field),
        })
        .collect();

    IntakeViewModel {
        avatar,
        fields,
        submit_focused: state.focused == IntakeField::Submit,
    }
}

/// Attach a file, superseding any previous one and clearing any rejection
pub fn accept_avatar(state: &mut IntakeState, file: AvatarFile) {
    tracing::debug!(name = %file.name, size = file.size, "avatar accepted");
    state.avatar = Some(file);
    state.rejection = None;
    close_picker(state);
}

/// Record a rejection and detach whatever was attached
pub fn reject_avatar(state: &mut IntakeState, rejection: AvatarRejection) {
    tracing::debug!(?rejection, "avatar rejected");
    state.avatar = None;
    state.rejection = Some(rejection);
    close_picker(state);
}

/// Detach the avatar and clear any message
pub fn remove_avatar(state: &mut IntakeState) {
    state.avatar = None;
    state.rejection = None;
    close_picker(state);
}

/// Apply an acceptance result to the single avatar slot
pub fn apply_acceptance(state: &mut IntakeState, result: AcceptanceResult) {
    match result {
        AcceptanceResult::Accepted(file) => accept_avatar(state, file),
        other => {
            if let Some(rejection) = other.rejection() {
                reject_avatar(state, rejection);
            }
        }
    }
}

fn close_picker(state: &mut IntakeState) {
    state.picker_open = false;
    state.path_buffer.clear();
}

/// Pure function: apply action to state (reducer pattern)
///
/// `CommitPath`, `Submit` and `Quit` need file I/O, randomness or system
/// context and are handled by the caller.
pub fn reduce_intake_state(mut state: IntakeState, action: IntakeAction) -> IntakeState {
    match action {
        IntakeAction::FocusNext => {
            state.focused = state.focused.next();
        }
        IntakeAction::FocusPrev => {
            state.focused = state.focused.prev();
        }
        IntakeAction::InputChar(c) => match state.focused {
            IntakeField::Text(field) => state.text_mut(field).push(c),
            IntakeField::Avatar if state.picker_active() => state.path_buffer.push(c),
            IntakeField::Avatar | IntakeField::Submit => {}
        },
        IntakeAction::Backspace => match state.focused {
            IntakeField::Text(field) => {
                state.text_mut(field).pop();
            }
            IntakeField::Avatar if state.picker_active() => {
                state.path_buffer.pop();
            }
            IntakeField::Avatar | IntakeField::Submit => {}
        },
        IntakeAction::SetText(field, value) => {
            *state.text_mut(field) = value;
        }
        IntakeAction::OpenPicker => {
            // Replacing keeps the current file until a new drop resolves
            state.focused = IntakeField::Avatar;
            state.picker_open = true;
        }
        IntakeAction::ClosePicker => close_picker(&mut state),
        IntakeAction::Drop(outcome) => {
            if let Some(result) = AcceptanceResult::from_drop(outcome) {
                apply_acceptance(&mut state, result);
            }
        }
        IntakeAction::RemoveAvatar => remove_avatar(&mut state),
        IntakeAction::CommitPath | IntakeAction::Submit | IntakeAction::Quit => {}
    }
    state
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_AVATAR_BYTES;

    fn png(name: &str, size: u64) -> AvatarFile {
        AvatarFile::new(format!("/tmp/{name}"), "image/png", size)
    }

    fn rejected(code: RejectionCode) -> DropOutcome {
        DropOutcome {
            accepted: vec![],
            rejected: vec![FileRejection::new("/tmp/x", vec![code])],
        }
    }

    fn accepted(file: AvatarFile) -> DropOutcome {
        DropOutcome {
            accepted: vec![file],
            rejected: vec![],
        }
    }

    #[test]
    fn test_initial_view_model_has_no_errors() {
        let vm = compute_intake_view_model(&IntakeState::default());
        assert!(vm.avatar.error.is_none());
        assert_eq!(vm.avatar.hint, Some(MSG_AVATAR_HINT));
        assert!(vm.fields.iter().all(|f| f.error.is_none()));
        assert!(vm.avatar.is_focused);
    }

    #[test]
    fn test_errors_appear_only_after_attempt() {
        let mut state = IntakeState::default();
        assert!(!text_error_visible(&state, TextField::FullName));
        assert_eq!(avatar_error(&state), None);

        state.submit_attempted = true;
        assert!(text_error_visible(&state, TextField::FullName));
        assert_eq!(avatar_error(&state), Some(MSG_AVATAR_REQUIRED));
    }

    #[test]
    fn test_field_errors_visible_independently() {
        let state = IntakeState {
            full_name: "Ada".to_string(),
            submit_attempted: true,
            ..Default::default()
        };
        let vm = compute_intake_view_model(&state);
        assert_eq!(vm.fields[0].error, None);
        assert_eq!(vm.fields[1].error, Some("Email is required"));
        assert_eq!(vm.fields[2].error, Some("Username is required"));
    }

    #[test]
    fn test_reduce_accept_sets_file_and_clears_rejection() {
        let state = IntakeState {
            rejection: Some(AvatarRejection::TooLarge),
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::Drop(accepted(png("a.png", 10))));
        assert_eq!(state.avatar.as_ref().map(|f| f.name.as_str()), Some("a.png"));
        assert_eq!(state.rejection, None);
        assert_eq!(state.avatar_file_count(), 1);
    }

    #[test]
    fn test_reduce_accept_supersedes_previous_file() {
        let state = IntakeState {
            avatar: Some(png("old.png", 10)),
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::Drop(accepted(png("new.png", 20))));
        assert_eq!(state.avatar, Some(png("new.png", 20)));
    }

    #[test]
    fn test_reduce_reject_clears_file() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            ..Default::default()
        };
        let state = reduce_intake_state(
            state,
            IntakeAction::Drop(rejected(RejectionCode::FileTooLarge)),
        );
        assert_eq!(state.avatar, None);
        assert_eq!(state.rejection, Some(AvatarRejection::TooLarge));
        assert_eq!(avatar_error(&state), Some(MSG_FILE_TOO_LARGE));
        assert_eq!(state.avatar_file_count(), 0);
    }

    #[test]
    fn test_reject_classification() {
        let cases = [
            (RejectionCode::FileTooLarge, MSG_FILE_TOO_LARGE),
            (RejectionCode::FileInvalidType, MSG_FILE_INVALID_TYPE),
            (RejectionCode::TooManyFiles, MSG_FILE_OTHER),
            (RejectionCode::FileNotFound, MSG_FILE_OTHER),
            (RejectionCode::FileUnreadable, MSG_FILE_OTHER),
        ];
        for (code, message) in cases {
            let state = reduce_intake_state(IntakeState::default(), IntakeAction::Drop(rejected(code)));
            assert_eq!(avatar_error(&state), Some(message), "code {code}");
        }
    }

    #[test]
    fn test_last_rejection_decides_message() {
        let outcome = DropOutcome {
            accepted: vec![],
            rejected: vec![
                FileRejection::new("/tmp/a", vec![RejectionCode::FileTooLarge]),
                FileRejection::new("/tmp/b", vec![RejectionCode::FileInvalidType]),
            ],
        };
        assert_eq!(
            AcceptanceResult::from_drop(outcome),
            Some(AcceptanceResult::RejectedInvalidType)
        );
    }

    #[test]
    fn test_rejection_wins_over_acceptance_in_same_drop() {
        let outcome = DropOutcome {
            accepted: vec![png("a.png", 10)],
            rejected: vec![FileRejection::new("/tmp/b", vec![RejectionCode::FileTooLarge])],
        };
        assert_eq!(
            AcceptanceResult::from_drop(outcome),
            Some(AcceptanceResult::RejectedTooLarge)
        );
    }

    #[test]
    fn test_empty_drop_changes_nothing() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            ..Default::default()
        };
        let next = reduce_intake_state(state.clone(), IntakeAction::Drop(DropOutcome::default()));
        assert_eq!(next, state);
    }

    #[test]
    fn test_remove_clears_file_and_message() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            submit_attempted: false,
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::RemoveAvatar);
        assert_eq!(state.avatar, None);
        assert_eq!(state.rejection, None);
        assert_eq!(avatar_error(&state), None);
    }

    #[test]
    fn test_remove_clears_rejection() {
        let state = IntakeState {
            rejection: Some(AvatarRejection::InvalidType),
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::RemoveAvatar);
        assert_eq!(state.rejection, None);
    }

    #[test]
    fn test_remove_then_attempt_shows_required() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            ..Default::default()
        };
        let mut state = reduce_intake_state(state, IntakeAction::RemoveAvatar);
        assert_eq!(avatar_error(&state), None);
        state.submit_attempted = true;
        assert_eq!(avatar_error(&state), Some(MSG_AVATAR_REQUIRED));
    }

    #[test]
    fn test_open_picker_keeps_file() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            focused: IntakeField::Submit,
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::OpenPicker);
        assert!(state.picker_open);
        assert_eq!(state.focused, IntakeField::Avatar);
        assert_eq!(state.avatar, Some(png("a.png", 10)));
    }

    #[test]
    fn test_close_picker_clears_buffer() {
        let state = IntakeState {
            picker_open: true,
            path_buffer: "/tmp/a".to_string(),
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::ClosePicker);
        assert!(!state.picker_open);
        assert!(state.path_buffer.is_empty());
    }

    #[test]
    fn test_input_goes_to_focused_text_field() {
        let mut state = IntakeState {
            focused: IntakeField::Text(TextField::Email),
            ..Default::default()
        };
        for c in "ada@x".chars() {
            state = reduce_intake_state(state, IntakeAction::InputChar(c));
        }
        state = reduce_intake_state(state, IntakeAction::Backspace);
        assert_eq!(state.email, "ada@");
        assert!(state.full_name.is_empty());
    }

    #[test]
    fn test_input_on_avatar_goes_to_path_buffer() {
        let mut state = IntakeState::default();
        for c in "/tmp/a.png".chars() {
            state = reduce_intake_state(state, IntakeAction::InputChar(c));
        }
        assert_eq!(state.path_buffer, "/tmp/a.png");
    }

    #[test]
    fn test_input_on_attached_avatar_ignored_until_picker_opens() {
        let state = IntakeState {
            avatar: Some(png("a.png", 10)),
            ..Default::default()
        };
        let state = reduce_intake_state(state, IntakeAction::InputChar('z'));
        assert!(state.path_buffer.is_empty());
        let state = reduce_intake_state(state, IntakeAction::OpenPicker);
        let state = reduce_intake_state(state, IntakeAction::InputChar('z'));
        assert_eq!(state.path_buffer, "z");
    }

    #[test]
    fn test_input_on_submit_ignored() {
        let state = IntakeState {
            focused: IntakeField::Submit,
            ..Default::default()
        };
        let next = reduce_intake_state(state.clone(), IntakeAction::InputChar('a'));
        assert_eq!(next, state);
    }

    #[test]
    fn test_set_text() {
        let state = reduce_intake_state(
            IntakeState::default(),
            IntakeAction::SetText(TextField::Username, "adalovelace".to_string()),
        );
        assert_eq!(state.text(TextField::Username), "adalovelace");
    }

    #[test]
    fn test_hint_hidden_when_file_or_error() {
        let with_file = IntakeState {
            avatar: Some(png("a.png", MAX_AVATAR_BYTES)),
            ..Default::default()
        };
        assert_eq!(compute_intake_view_model(&with_file).avatar.hint, None);

        let with_error = IntakeState {
            rejection: Some(AvatarRejection::Other),
            ..Default::default()
        };
        assert_eq!(compute_intake_view_model(&with_error).avatar.hint, None);
    }

    #[test]
    fn test_reduce_focus_cycle() {
        let state = reduce_intake_state(IntakeState::default(), IntakeAction::FocusNext);
        assert_eq!(state.focused, IntakeField::Text(TextField::FullName));
        let state = reduce_intake_state(state, IntakeAction::FocusPrev);
        assert_eq!(state.focused, IntakeField::Avatar);
    }
}
