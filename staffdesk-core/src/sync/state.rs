// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync coordinator state and pass results.

use chrono::{DateTime, Utc};

use crate::api::StaffdeskResult;

/// Whether a recurring schedule is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No schedule.
    #[default]
    Idle,
    /// Ticking for `user_id`.
    Scheduled { user_id: String },
}

impl SyncState {
    /// Returns true if a schedule is active.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, SyncState::Scheduled { .. })
    }

    /// The bound user, if scheduled.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            SyncState::Idle => None,
            SyncState::Scheduled { user_id } => Some(user_id),
        }
    }
}

/// Outcome of one successful sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The synced user.
    pub user_id: String,
    /// Value written to `synced_at`.
    pub synced_at: DateTime<Utc>,
    /// Number of file records the update touched.
    pub files_synced: usize,
}

/// Returned by `start_auto_sync` once the schedule is established.
#[derive(Debug)]
pub struct AutoSyncStarted {
    /// User the schedule is bound to.
    pub user_id: String,
    /// Outcome of the immediate first pass. A failure here does not
    /// prevent the schedule.
    pub initial_pass: StaffdeskResult<SyncReport>,
}
