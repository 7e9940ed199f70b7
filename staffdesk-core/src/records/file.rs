// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! File records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{iso_timestamp, optional, require, ValidationError};

/// Kind of file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Document,
    Image,
    Pdf,
    Other,
}

impl FileType {
    /// All file types, in display order.
    pub const ALL: [FileType; 4] = [
        FileType::Document,
        FileType::Image,
        FileType::Pdf,
        FileType::Other,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Document => "document",
            FileType::Image => "image",
            FileType::Pdf => "pdf",
            FileType::Other => "other",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownFileType(s.to_string()))
    }
}

/// A row of the `files` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_type: FileType,
    pub file_url: String,
    #[serde(default)]
    pub file_size: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub synced_at: Option<DateTime<Utc>>,
}

/// Projection used by the dashboard's recent files list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub file_type: FileType,
    pub created_at: DateTime<Utc>,
}

impl RecentFile {
    /// Columns selected for this projection.
    pub const COLUMNS: [&'static str; 4] = ["id", "title", "file_type", "created_at"];
}

/// User-entered file fields, as submitted from the create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDraft {
    pub title: String,
    pub description: Option<String>,
    pub file_type: FileType,
    pub file_url: String,
}

impl FileDraft {
    /// Creates a draft with the required fields.
    pub fn new(title: impl Into<String>, file_url: impl Into<String>) -> Self {
        FileDraft {
            title: title.into(),
            file_url: file_url.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the file type.
    pub fn with_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    /// Title and URL are both required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "title")?;
        require(&self.file_url, "file_url")
    }

    /// Row inserted for a new file. Size starts at zero.
    pub(crate) fn insert_row(&self, user_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "title": self.title.trim(),
            "description": optional(&self.description),
            "file_type": self.file_type,
            "file_url": self.file_url.trim(),
            "file_size": 0,
        })
    }

    /// Patch applied on edit; editing also stamps `synced_at`.
    pub(crate) fn update_patch(&self, now: DateTime<Utc>) -> Value {
        json!({
            "title": self.title.trim(),
            "description": optional(&self.description),
            "file_type": self.file_type,
            "file_url": self.file_url.trim(),
            "synced_at": iso_timestamp(now),
        })
    }
}

impl From<&FileRecord> for FileDraft {
    fn from(file: &FileRecord) -> Self {
        FileDraft {
            title: file.title.clone(),
            description: file.description.clone(),
            file_type: file.file_type,
            file_url: file.file_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_parse_case_insensitive() {
        assert_eq!("PDF".parse::<FileType>().unwrap(), FileType::Pdf);
        assert_eq!(" image ".parse::<FileType>().unwrap(), FileType::Image);
        assert!(matches!(
            "spreadsheet".parse::<FileType>(),
            Err(ValidationError::UnknownFileType(_))
        ));
    }

    #[test]
    fn test_draft_requires_title_and_url() {
        assert_eq!(
            FileDraft::new("", "https://files/x").validate(),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            FileDraft::new("Contract", " ").validate(),
            Err(ValidationError::MissingField("file_url"))
        );
        assert!(FileDraft::new("Contract", "https://files/x").validate().is_ok());
    }

    #[test]
    fn test_insert_row_nulls_empty_description() {
        let row = FileDraft::new("Contract", "https://files/x")
            .with_description("")
            .insert_row("u1");

        assert_eq!(row["description"], Value::Null);
        assert_eq!(row["file_size"], 0);
        assert_eq!(row["file_type"], "document");
        assert_eq!(row["user_id"], "u1");
    }

    #[test]
    fn test_record_deserializes_backend_row() {
        let row = json!({
            "id": "f1",
            "user_id": "u1",
            "title": "Payroll",
            "description": null,
            "file_type": "pdf",
            "file_url": "https://files/payroll.pdf",
            "file_size": 2048,
            "created_at": "2026-01-05T10:00:00.000000+00:00",
            "updated_at": "2026-01-05T10:00:00.000000+00:00",
            "synced_at": null
        });

        let file: FileRecord = serde_json::from_value(row).unwrap();
        assert_eq!(file.file_type, FileType::Pdf);
        assert_eq!(file.file_size, 2048);
        assert!(file.synced_at.is_none());
    }
}
