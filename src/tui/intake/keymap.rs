//! Key bindings for the intake form

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::intake::IntakeAction;
use crate::types::IntakeField;

/// Convert a key event to an IntakeAction
///
/// `picker_active` is true while the avatar field takes a typed path rather
/// than showing a preview. Only Ctrl-q / Ctrl-c quit; a draft is never
/// dropped by a single plain key.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    focused: IntakeField,
    picker_active: bool,
) -> Option<IntakeAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(IntakeAction::Quit),
            KeyCode::Char('g') => Some(IntakeAction::Submit),
            _ => None,
        };
    }

    match code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(IntakeAction::FocusPrev);
        }
        KeyCode::Tab | KeyCode::Down => return Some(IntakeAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(IntakeAction::FocusPrev),
        _ => {}
    }

    match focused {
        IntakeField::Avatar if picker_active => avatar_picker_key(code),
        IntakeField::Avatar => avatar_preview_key(code),
        IntakeField::Text(_) => match code {
            KeyCode::Char(c) => Some(IntakeAction::InputChar(c)),
            KeyCode::Backspace => Some(IntakeAction::Backspace),
            KeyCode::Enter => Some(IntakeAction::Submit),
            _ => None,
        },
        IntakeField::Submit => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(IntakeAction::Submit),
            _ => None,
        },
    }
}

fn avatar_picker_key(code: KeyCode) -> Option<IntakeAction> {
    match code {
        KeyCode::Char(c) => Some(IntakeAction::InputChar(c)),
        KeyCode::Backspace => Some(IntakeAction::Backspace),
        KeyCode::Enter => Some(IntakeAction::CommitPath),
        KeyCode::Esc => Some(IntakeAction::ClosePicker),
        _ => None,
    }
}

fn avatar_preview_key(code: KeyCode) -> Option<IntakeAction> {
    match code {
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            Some(IntakeAction::RemoveAvatar)
        }
        KeyCode::Char('c') | KeyCode::Enter => Some(IntakeAction::OpenPicker),
        _ => None,
    }
}
