// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Notification category, stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    FileUpload,
    FileUpdate,
    FileDelete,
    #[serde(other)]
    General,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::FileUpload => "file_upload",
            NotificationKind::FileUpdate => "file_update",
            NotificationKind::FileDelete => "file_delete",
            NotificationKind::General => "general",
        }
    }
}

/// A row of the `notifications` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default = "general")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

fn general() -> NotificationKind {
    NotificationKind::General
}

/// A notification about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl NewNotification {
    pub fn new(
        user_id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        NewNotification {
            user_id: user_id.into(),
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    /// A file was created.
    pub fn file_uploaded(user_id: &str, file_title: &str) -> Self {
        Self::new(
            user_id,
            NotificationKind::FileUpload,
            "New file",
            format!("File \"{}\" uploaded", file_title),
        )
    }

    /// A file was edited.
    pub fn file_updated(user_id: &str, file_title: &str) -> Self {
        Self::new(
            user_id,
            NotificationKind::FileUpdate,
            "File updated",
            format!("File \"{}\" updated", file_title),
        )
    }

    /// A file was removed.
    pub fn file_deleted(user_id: &str, file_title: &str) -> Self {
        Self::new(
            user_id,
            NotificationKind::FileDelete,
            "File deleted",
            format!("File \"{}\" deleted", file_title),
        )
    }

    pub(crate) fn row(&self) -> Value {
        json!({
            "user_id": self.user_id,
            "title": self.title,
            "message": self.message,
            "type": self.kind.as_str(),
        })
    }
}
