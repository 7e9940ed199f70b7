// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Notification Center
//!
//! Writes and reads the per-user notification feed.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::backend::{decode_rows, DataClient, Filter, Query, Table};
use crate::records::{NewNotification, Notification, NotificationKind};

use super::error::{require_user_id, StaffdeskError, StaffdeskResult};

/// Reads and writes the `notifications` table.
#[derive(Clone)]
pub struct NotificationCenter {
    client: Arc<dyn DataClient>,
}

impl NotificationCenter {
    /// Creates a new NotificationCenter.
    pub fn new(client: Arc<dyn DataClient>) -> Self {
        NotificationCenter { client }
    }

    /// Writes one notification for `user_id`.
    pub async fn notify(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) -> StaffdeskResult<Notification> {
        self.send(&NewNotification::new(user_id, kind, title, message))
            .await
    }

    /// Writes a prepared notification.
    pub async fn send(&self, notification: &NewNotification) -> StaffdeskResult<Notification> {
        require_user_id(&notification.user_id)?;

        let rows = self
            .client
            .insert(Table::Notifications, notification.row())
            .await?;

        decode_rows::<Notification>(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| StaffdeskError::NotFound("inserted notification".into()))
    }

    /// Writes a notification, logging instead of failing.
    ///
    /// Used after a mutation has already succeeded.
    pub(crate) async fn send_quietly(&self, notification: NewNotification) {
        match self.send(&notification).await {
            Ok(n) => debug!("Notification {} ({}) written", n.id, n.kind.as_str()),
            Err(e) => warn!(
                "Failed to write {} notification for {}: {}",
                notification.kind.as_str(),
                notification.user_id,
                e
            ),
        }
    }

    /// Unread notifications, newest first.
    pub async fn unread(&self, user_id: &str) -> StaffdeskResult<Vec<Notification>> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id)
            .eq("is_read", false)
            .newest_first("created_at");
        let response = self.client.select(Table::Notifications, &query).await?;

        Ok(response.decode()?)
    }

    /// Marks one notification as read.
    pub async fn mark_read(&self, notification_id: &str) -> StaffdeskResult<()> {
        let updated = self
            .client
            .update(
                Table::Notifications,
                json!({ "is_read": true }),
                &[Filter::eq("id", notification_id)],
            )
            .await?;

        if updated.is_empty() {
            return Err(StaffdeskError::NotFound(format!(
                "notification {}",
                notification_id
            )));
        }
        Ok(())
    }
}
