// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dashboard
//!
//! Aggregated landing view: record counts, unread notifications, storage
//! usage and the most recently created files.

use std::sync::Arc;

use tracing::debug;

use crate::backend::{DataClient, Query, QueryResponse, Table};
use crate::records::{Notification, Profile, RecentFile};

use super::error::{require_user_id, StaffdeskResult};
use super::notifications::NotificationCenter;

/// Number of recent files shown.
pub const RECENT_FILES_LIMIT: usize = 5;

/// Number of notifications shown.
pub const NOTIFICATIONS_LIMIT: usize = 5;

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_files: u64,
    pub total_contacts: u64,
    pub unread_notifications: usize,
    /// Bytes, as recorded on the profile.
    pub storage_used: u64,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent_files: Vec<RecentFile>,
    /// Up to [`NOTIFICATIONS_LIMIT`] unread notifications, newest first.
    pub notifications: Vec<Notification>,
}

/// Loads the dashboard.
pub struct Dashboard {
    client: Arc<dyn DataClient>,
    notifications: NotificationCenter,
}

impl Dashboard {
    /// Creates a new Dashboard.
    pub fn new(client: Arc<dyn DataClient>) -> Self {
        Dashboard {
            notifications: NotificationCenter::new(Arc::clone(&client)),
            client,
        }
    }

    /// Loads counts and unread notifications concurrently, then the recent
    /// files. `storage_used` is 0 without a profile.
    pub async fn load(
        &self,
        user_id: &str,
        profile: Option<&Profile>,
    ) -> StaffdeskResult<DashboardSnapshot> {
        require_user_id(user_id)?;

        let (files, contacts, mut unread) = tokio::try_join!(
            self.count(Table::Files, user_id),
            self.count(Table::Contacts, user_id),
            self.notifications.unread(user_id),
        )?;

        let recent = Query::owned_by(user_id)
            .columns(&RecentFile::COLUMNS)
            .newest_first("created_at")
            .limit(RECENT_FILES_LIMIT);
        let recent_files = self
            .client
            .select(Table::Files, &recent)
            .await?
            .decode::<RecentFile>()?;

        let stats = DashboardStats {
            total_files: files,
            total_contacts: contacts,
            unread_notifications: unread.len(),
            storage_used: profile.map(|p| p.storage_used).unwrap_or(0),
        };
        debug!("Dashboard for {}: {:?}", user_id, stats);

        unread.truncate(NOTIFICATIONS_LIMIT);
        Ok(DashboardSnapshot {
            stats,
            recent_files,
            notifications: unread,
        })
    }

    async fn count(&self, table: Table, user_id: &str) -> StaffdeskResult<u64> {
        // Only the count is read.
        let query = Query::owned_by(user_id)
            .columns(&["id"])
            .limit(1)
            .with_count();
        let QueryResponse { rows, count } = self.client.select(table, &query).await?;
        Ok(count.unwrap_or(rows.len() as u64))
    }
}
