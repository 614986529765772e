//! Acceptance rules for dropped avatar files
//!
//! Files are checked in the same order a browser dropzone checks them: media
//! type first, then size. Every failed check contributes a [`RejectionCode`]
//! to the file's rejection; the first code decides the message the user sees.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{AvatarFile, display_name, parse_dropped_paths};
use crate::types::{ACCEPTED_MEDIA_TYPES, MAX_AVATAR_BYTES};

/// Media type used when nothing can be guessed from the file name
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Configuration of the acquisition surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPolicy {
    /// Comma-separated media type patterns, e.g. `image/*` or `image/png,image/jpeg`
    pub accepted_media_types: String,
    /// Largest accepted file in bytes
    pub max_size_bytes: u64,
    /// Whether a single drop may carry more than one file
    pub multiple: bool,
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self {
            accepted_media_types: ACCEPTED_MEDIA_TYPES.to_string(),
            max_size_bytes: MAX_AVATAR_BYTES,
            multiple: false,
        }
    }
}

impl AcceptPolicy {
    /// Check a media type against the accepted patterns
    pub fn accepts_media_type(&self, media_type: &str) -> bool {
        let media_type = media_type
            .split(';')
            .next()
            .unwrap_or(media_type)
            .trim()
            .to_ascii_lowercase();

        self.accepted_media_types
            .split(',')
            .map(|pattern| pattern.trim().to_ascii_lowercase())
            .filter(|pattern| !pattern.is_empty())
            .any(|pattern| match pattern.strip_suffix("/*") {
                Some("*") => true,
                Some(prefix) => media_type
                    .split_once('/')
                    .is_some_and(|(kind, _)| kind == prefix),
                None => media_type == pattern,
            })
    }

    /// Run the per-file checks, returning every failed check in order
    pub fn check(&self, file: &AvatarFile) -> Vec<RejectionCode> {
        let mut errors = Vec::new();
        if !self.accepts_media_type(&file.media_type) {
            errors.push(RejectionCode::FileInvalidType);
        }
        if file.size > self.max_size_bytes {
            errors.push(RejectionCode::FileTooLarge);
        }
        errors
    }
}

/// Why a dropped file was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionCode {
    FileTooLarge,
    FileInvalidType,
    TooManyFiles,
    FileNotFound,
    FileUnreadable,
}

impl RejectionCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionCode::FileTooLarge => "file-too-large",
            RejectionCode::FileInvalidType => "file-invalid-type",
            RejectionCode::TooManyFiles => "too-many-files",
            RejectionCode::FileNotFound => "file-not-found",
            RejectionCode::FileUnreadable => "file-unreadable",
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dropped file together with the checks it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRejection {
    pub path: PathBuf,
    pub errors: Vec<RejectionCode>,
}

impl FileRejection {
    pub fn new(path: impl Into<PathBuf>, errors: Vec<RejectionCode>) -> Self {
        Self {
            path: path.into(),
            errors,
        }
    }

    /// The code that decides the user-facing message
    pub fn primary_code(&self) -> Option<RejectionCode> {
        self.errors.first().copied()
    }
}

/// Result of one drop (or one picker selection)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropOutcome {
    pub accepted: Vec<AvatarFile>,
    pub rejected: Vec<FileRejection>,
}

impl DropOutcome {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// Stat a path and build a candidate file from it
///
/// Paths that do not name a readable regular file are rejected up front.
pub fn read_candidate(path: &Path) -> std::result::Result<AvatarFile, FileRejection> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            let media_type = mime_guess::from_path(path)
                .first()
                .map(|mime| mime.essence_str().to_string())
                .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());
            Ok(AvatarFile::new(path, media_type, meta.len()))
        }
        Ok(_) => Err(FileRejection::new(path, vec![RejectionCode::FileNotFound])),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Dropped path does not exist: {}", path.display());
            Err(FileRejection::new(path, vec![RejectionCode::FileNotFound]))
        }
        Err(e) => {
            tracing::warn!("Failed to read dropped file {}: {e}", display_name(path));
            Err(FileRejection::new(path, vec![RejectionCode::FileUnreadable]))
        }
    }
}

/// Evaluate already-read candidates against the policy
///
/// When the policy is single-file and more than one file passes the checks,
/// every one of those files is rejected with [`RejectionCode::TooManyFiles`].
/// Files that already failed keep their own codes.
pub fn evaluate(
    policy: &AcceptPolicy,
    candidates: Vec<std::result::Result<AvatarFile, FileRejection>>,
) -> DropOutcome {
    let mut outcome = DropOutcome::default();

    for candidate in candidates {
        match candidate {
            Ok(file) => {
                let errors = policy.check(&file);
                if errors.is_empty() {
                    outcome.accepted.push(file);
                } else {
                    outcome.rejected.push(FileRejection::new(file.path, errors));
                }
            }
            Err(rejection) => outcome.rejected.push(rejection),
        }
    }

    if !policy.multiple && outcome.accepted.len() > 1 {
        for file in outcome.accepted.drain(..) {
            outcome
                .rejected
                .push(FileRejection::new(file.path, vec![RejectionCode::TooManyFiles]));
        }
    }

    outcome
}

/// Read and evaluate a list of paths as one drop
pub fn acquire_paths(policy: &AcceptPolicy, paths: &[PathBuf]) -> DropOutcome {
    let candidates = paths.iter().map(|p| read_candidate(p)).collect();
    evaluate(policy, candidates)
}

/// Parse dropped/pasted text and evaluate the paths it names as one drop
pub fn acquire(policy: &AcceptPolicy, raw: &str) -> DropOutcome {
    let paths = parse_dropped_paths(raw);
    acquire_paths(policy, &paths)
}
