//! File Manager
//!
//! High-level interface for file record operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::backend::{decode_rows, DataClient, Filter, Query, Table};
use crate::records::{FileDraft, FileRecord, NewNotification};

use super::error::{require_user_id, StaffdeskError, StaffdeskResult};
use super::events::{EventDispatcher, StaffdeskEvent};
use super::notifications::NotificationCenter;

/// Manages the signed-in user's file records.
///
/// Every successful mutation is followed by a notification of the matching
/// kind and a [`StaffdeskEvent`]. Notification writes are best-effort.
pub struct FileManager {
    client: Arc<dyn DataClient>,
    notifications: NotificationCenter,
    events: Arc<EventDispatcher>,
}

impl FileManager {
    /// Creates a new FileManager.
    pub fn new(client: Arc<dyn DataClient>, events: Arc<EventDispatcher>) -> Self {
        FileManager {
            notifications: NotificationCenter::new(Arc::clone(&client)),
            client,
            events,
        }
    }

    /// Lists the user's files, newest first.
    pub async fn list(&self, user_id: &str) -> StaffdeskResult<Vec<FileRecord>> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id).newest_first("created_at");
        let response = self.client.select(Table::Files, &query).await?;
        Ok(response.decode()?)
    }

    /// Gets one file by ID, returning error if not found.
    pub async fn get(&self, user_id: &str, file_id: &str) -> StaffdeskResult<FileRecord> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id).eq("id", file_id).limit(1);
        let response = self.client.select(Table::Files, &query).await?;
        response
            .decode::<FileRecord>()?
            .into_iter()
            .next()
            .ok_or_else(|| StaffdeskError::NotFound(format!("file {}", file_id)))
    }

    /// Creates a file record (size 0) and notifies the user.
    pub async fn create(&self, user_id: &str, draft: &FileDraft) -> StaffdeskResult<FileRecord> {
        require_user_id(user_id)?;
        draft.validate()?;

        let rows = self
            .client
            .insert(Table::Files, draft.insert_row(user_id))
            .await?;
        let file = first(rows, "inserted file")?;

        info!("Created file {} for {}", file.id, user_id);
        self.notifications
            .send_quietly(NewNotification::file_uploaded(user_id, &file.title))
            .await;
        self.events.dispatch(StaffdeskEvent::FileCreated {
            file_id: file.id.clone(),
        });

        Ok(file)
    }

    /// Replaces the editable fields and stamps `synced_at`.
    pub async fn update(
        &self,
        user_id: &str,
        file_id: &str,
        draft: &FileDraft,
    ) -> StaffdeskResult<FileRecord> {
        require_user_id(user_id)?;
        draft.validate()?;

        let rows = self
            .client
            .update(
                Table::Files,
                draft.update_patch(Utc::now()),
                &owned_file(user_id, file_id),
            )
            .await?;
        let file = first(rows, &format!("file {}", file_id))?;

        self.notifications
            .send_quietly(NewNotification::file_updated(user_id, &file.title))
            .await;
        self.events.dispatch(StaffdeskEvent::FileUpdated {
            file_id: file.id.clone(),
        });

        Ok(file)
    }

    /// Deletes a file and returns the removed record.
    pub async fn delete(&self, user_id: &str, file_id: &str) -> StaffdeskResult<FileRecord> {
        require_user_id(user_id)?;

        let rows = self
            .client
            .delete(Table::Files, &owned_file(user_id, file_id))
            .await?;
        let file = first(rows, &format!("file {}", file_id))?;

        info!("Deleted file {} for {}", file.id, user_id);
        self.notifications
            .send_quietly(NewNotification::file_deleted(user_id, &file.title))
            .await;
        self.events.dispatch(StaffdeskEvent::FileDeleted {
            file_id: file.id.clone(),
        });

        Ok(file)
    }
}

fn owned_file(user_id: &str, file_id: &str) -> [Filter; 2] {
    [Filter::eq("id", file_id), Filter::eq("user_id", user_id)]
}

fn first(rows: Vec<serde_json::Value>, what: &str) -> StaffdeskResult<FileRecord> {
    decode_rows::<FileRecord>(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| StaffdeskError::NotFound(what.to_string()))
}
