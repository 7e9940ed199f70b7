//! Contact Manager
//!
//! High-level interface for the employee directory.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::backend::{decode_rows, DataClient, Filter, Query, Table};
use crate::records::{ContactDraft, ContactRecord};

use super::error::{require_user_id, StaffdeskError, StaffdeskResult};
use super::events::{EventDispatcher, StaffdeskEvent};

/// Manages the signed-in user's contacts.
///
/// Provides high-level operations for:
/// - Listing and searching contacts
/// - Adding and editing contacts
/// - Removing contacts
pub struct ContactManager {
    client: Arc<dyn DataClient>,
    events: Arc<EventDispatcher>,
}

impl ContactManager {
    /// Creates a new ContactManager.
    pub fn new(client: Arc<dyn DataClient>, events: Arc<EventDispatcher>) -> Self {
        ContactManager { client, events }
    }

    /// Lists all contacts, newest first.
    pub async fn list(&self, user_id: &str) -> StaffdeskResult<Vec<ContactRecord>> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id).newest_first("created_at");
        let response = self.client.select(Table::Contacts, &query).await?;
        Ok(response.decode()?)
    }

    /// Gets a contact by ID, returning error if not found.
    pub async fn get(&self, user_id: &str, contact_id: &str) -> StaffdeskResult<ContactRecord> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id).eq("id", contact_id).limit(1);
        let response = self.client.select(Table::Contacts, &query).await?;
        first(response.rows, &format!("contact {}", contact_id))
    }

    /// Searches name, email, position and department (case-insensitive).
    pub async fn search(&self, user_id: &str, query: &str) -> StaffdeskResult<Vec<ContactRecord>> {
        let contacts = self.list(user_id).await?;

        Ok(contacts.into_iter().filter(|c| c.matches(query)).collect())
    }

    /// Adds a contact.
    pub async fn create(
        &self,
        user_id: &str,
        draft: &ContactDraft,
    ) -> StaffdeskResult<ContactRecord> {
        require_user_id(user_id)?;
        draft.validate()?;

        let rows = self
            .client
            .insert(Table::Contacts, draft.insert_row(user_id))
            .await?;
        let contact = first(rows, "inserted contact")?;

        info!("Added contact {}", contact.id);
        self.events.dispatch(StaffdeskEvent::ContactAdded {
            contact_id: contact.id.clone(),
        });

        Ok(contact)
    }

    /// Replaces every field of a contact.
    pub async fn update(
        &self,
        contact_id: &str,
        draft: &ContactDraft,
    ) -> StaffdeskResult<ContactRecord> {
        draft.validate()?;

        let rows = self
            .client
            .update(
                Table::Contacts,
                draft.update_patch(),
                &[Filter::eq("id", contact_id)],
            )
            .await?;
        let contact = first(rows, &format!("contact {}", contact_id))?;

        self.events.dispatch(StaffdeskEvent::ContactUpdated {
            contact_id: contact.id.clone(),
        });

        Ok(contact)
    }

    /// Removes a contact.
    pub async fn delete(&self, contact_id: &str) -> StaffdeskResult<ContactRecord> {
        let rows = self
            .client
            .delete(Table::Contacts, &[Filter::eq("id", contact_id)])
            .await?;
        let contact = first(rows, &format!("contact {}", contact_id))?;

        info!("Removed contact {}", contact.id);
        self.events.dispatch(StaffdeskEvent::ContactRemoved {
            contact_id: contact.id.clone(),
        });

        Ok(contact)
    }
}

fn first(rows: Vec<Value>, what: &str) -> StaffdeskResult<ContactRecord> {
    decode_rows::<ContactRecord>(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| StaffdeskError::NotFound(what.to_string()))
}
