//! Shared domain types and constants for the ticket generator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest avatar accepted, in bytes (500 KiB)
pub const MAX_AVATAR_BYTES: u64 = 500 * 1024;

/// Media type pattern accepted for avatars
pub const ACCEPTED_MEDIA_TYPES: &str = "image/*";

/// Inclusive lower bound of generated ticket numbers
pub const TICKET_ID_MIN: u32 = 10000;

/// Inclusive upper bound of generated ticket numbers
pub const TICKET_ID_MAX: u32 = 99999;

pub const MSG_FILE_TOO_LARGE: &str = "File too large. Please upload a photo under 500KB.";
pub const MSG_FILE_INVALID_TYPE: &str = "Please upload an image file (JPG, PNG, etc.).";
pub const MSG_FILE_OTHER: &str = "Invalid file. Please try again.";
pub const MSG_AVATAR_REQUIRED: &str = "Avatar is required";
pub const MSG_AVATAR_HINT: &str = "Upload your photo (JPG or PNG, max size: 500KB).";

/// The two logical routes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Route {
    /// The form collecting name, email, username and avatar
    #[default]
    Intake,
    /// Read-only display of a generated ticket
    Ticket,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Intake => write!(f, "/ticket-generator"),
            Route::Ticket => write!(f, "/ticket"),
        }
    }
}

/// The required text fields of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    FullName,
    Email,
    Username,
}

impl TextField {
    pub const ALL: [TextField; 3] = [TextField::FullName, TextField::Email, TextField::Username];

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            TextField::FullName => "Full name",
            TextField::Email => "Email address",
            TextField::Username => "GitHub Username",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            TextField::FullName => "name",
            TextField::Email => "example@email.com",
            TextField::Username => "@yourusername",
        }
    }

    /// Message shown when the field fails its required check
    pub fn required_message(self) -> &'static str {
        match self {
            TextField::FullName => "Fullname is required",
            TextField::Email => "Email is required",
            TextField::Username => "Username is required",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Focusable elements of the intake form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeField {
    #[default]
    Avatar,
    Text(TextField),
    Submit,
}

impl IntakeField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            IntakeField::Avatar => IntakeField::Text(TextField::FullName),
            IntakeField::Text(TextField::FullName) => IntakeField::Text(TextField::Email),
            IntakeField::Text(TextField::Email) => IntakeField::Text(TextField::Username),
            IntakeField::Text(TextField::Username) => IntakeField::Submit,
            IntakeField::Submit => IntakeField::Avatar,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            IntakeField::Avatar => IntakeField::Submit,
            IntakeField::Text(TextField::FullName) => IntakeField::Avatar,
            IntakeField::Text(TextField::Email) => IntakeField::Text(TextField::FullName),
            IntakeField::Text(TextField::Username) => IntakeField::Text(TextField::Email),
            IntakeField::Submit => IntakeField::Text(TextField::Username),
        }
    }
}
