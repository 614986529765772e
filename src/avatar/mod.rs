//! Avatar file acquisition
//!
//! This module is the file-acquisition surface of the intake form. It turns
//! dropped or typed paths into candidate files and evaluates them against an
//! [`AcceptPolicy`], producing a single [`DropOutcome`] per drop:
//! - `paths` - parse pasted/dropped text into file paths
//! - `dropzone` - acceptance rules and rejection codes

pub mod dropzone;
pub mod paths;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use dropzone::{
    AcceptPolicy, DropOutcome, FileRejection, RejectionCode, acquire, acquire_paths,
    read_candidate,
};
pub use paths::parse_dropped_paths;

/// A file that has been read from disk and is a candidate for the avatar slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarFile {
    /// Where the file was dropped from
    pub path: PathBuf,
    /// Display name (final path component)
    pub name: String,
    /// Media type guessed from the file name
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
}

impl AvatarFile {
    pub fn new(path: impl Into<PathBuf>, media_type: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            media_type: media_type.into(),
            size,
        }
    }

    /// Human-readable size, e.g. "97.7 KB"
    pub fn size_label(&self) -> String {
        if self.size < 1024 {
            format!("{} B", self.size)
        } else {
            format!("{:.1} KB", self.size as f64 / 1024.0)
        }
    }
}

/// Final component of a path, falling back to the whole path
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
