// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{optional, require, ValidationError};

/// A row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Case-insensitive match against name, email, position and department.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        std::iter::once(Some(self.name.as_str()))
            .chain([
                self.email.as_deref(),
                self.position.as_deref(),
                self.department.as_deref(),
            ])
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// User-entered contact fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
}

impl ContactDraft {
    /// Creates a draft with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        ContactDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Only the name is required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")
    }

    pub(crate) fn insert_row(&self, user_id: &str) -> Value {
        let mut row = self.update_patch();
        row["user_id"] = Value::String(user_id.to_string());
        row
    }

    pub(crate) fn update_patch(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "email": optional(&self.email),
            "phone": optional(&self.phone),
            "position": optional(&self.position),
            "department": optional(&self.department),
            "notes": optional(&self.notes),
        })
    }
}

impl From<&ContactRecord> for ContactDraft {
    fn from(contact: &ContactRecord) -> Self {
        ContactDraft {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            position: contact.position.clone(),
            department: contact.department.clone(),
            notes: contact.notes.clone(),
        }
    }
}
