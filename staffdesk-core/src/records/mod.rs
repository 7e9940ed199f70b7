// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record Types
//!
//! Typed rows for the backend tables, the drafts the screens submit, and
//! the backup snapshot aggregate.

mod activity;
mod backup;
mod contact;
mod file;
mod notification;
mod profile;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

pub use activity::{ActivityAction, ActivityLogEntry};
pub use backup::BackupSnapshot;
pub use contact::{ContactDraft, ContactRecord};
pub use file::{FileDraft, FileRecord, FileType, RecentFile};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use profile::Profile;

/// Draft validation failures raised before anything reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Unknown file type name.
    #[error("unknown file type: {0}")]
    UnknownFileType(String),
}

/// Formats a timestamp the way rows store it (RFC 3339, milliseconds, `Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Trims a field and maps empty input to `None`.
pub(crate) fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Fails with `MissingField` when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
