//! The validated payload handed from the intake screen to the ticket screen

use serde::{Deserialize, Serialize};

use crate::avatar::AvatarFile;

/// Immutable record produced by exactly one successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub avatar: AvatarFile,
    /// Five-digit number drawn uniformly from 10000..=99999
    pub ticket_id: u32,
}
