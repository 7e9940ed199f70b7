// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup snapshot aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContactRecord, FileRecord};

/// A user's files and contacts captured at one moment.
///
/// Built fresh for every backup request and never persisted by the core;
/// callers decide whether to write it anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub timestamp: DateTime<Utc>,
    pub files: Vec<FileRecord>,
    pub contacts: Vec<ContactRecord>,
}

impl BackupSnapshot {
    pub fn files_count(&self) -> usize {
        self.files.len()
    }

    pub fn contacts_count(&self) -> usize {
        self.contacts.len()
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
