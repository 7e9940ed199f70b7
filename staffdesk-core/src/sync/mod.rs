// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync Coordinator
//!
//! Periodic and on-demand "mark synchronized" passes plus backup snapshots.
//!
//! A pass is one bulk update stamping `synced_at` on every file the user
//! owns. There is no retry, conflict resolution or offline queue: each
//! operation returns a `Result` and the caller decides how loudly to fail.
//!
//! ```text
//! Idle --start(u)--> Scheduled(u) --start(v)--> Scheduled(v)
//!   ^                     |
//!   +-------stop----------+
//! ```

mod backup;
mod service;
mod state;

pub use service::SyncService;
pub use state::{AutoSyncStarted, SyncReport, SyncState};
