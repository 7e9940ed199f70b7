// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup snapshots.

use chrono::Utc;
use tracing::info;

use crate::api::{require_user_id, StaffdeskEvent, StaffdeskResult};
use crate::backend::{Query, Table};
use crate::records::{ActivityLogEntry, BackupSnapshot, ContactRecord, FileRecord};

use super::service::SyncService;

impl SyncService {
    /// Captures all of the user's files and contacts and audits the backup.
    ///
    /// Both tables are read concurrently; the activity log entry is written
    /// only after both reads succeed. Any failure is returned and nothing is
    /// logged.
    pub async fn create_backup(&self, user_id: &str) -> StaffdeskResult<BackupSnapshot> {
        require_user_id(user_id)?;

        let client = &self.shared.client;
        let query = Query::owned_by(user_id);
        let (files, contacts) = tokio::try_join!(
            client.select(Table::Files, &query),
            client.select(Table::Contacts, &query),
        )?;

        let snapshot = BackupSnapshot {
            timestamp: Utc::now(),
            files: files.decode::<FileRecord>()?,
            contacts: contacts.decode::<ContactRecord>()?,
        };

        let entry = ActivityLogEntry::backup_created(
            user_id,
            snapshot.files_count(),
            snapshot.contacts_count(),
        );
        client
            .insert(Table::ActivityLogs, serde_json::to_value(&entry)?)
            .await?;

        info!(
            "Backup created for {}: {} files, {} contacts",
            user_id,
            snapshot.files_count(),
            snapshot.contacts_count()
        );
        self.shared.events.dispatch(StaffdeskEvent::BackupCreated {
            user_id: user_id.to_string(),
            files_count: snapshot.files_count(),
            contacts_count: snapshot.contacts_count(),
        });

        Ok(snapshot)
    }
}
