// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Activity log entries (audit trail).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Audited action names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    BackupCreated,
}

/// A row of the `activity_logs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub user_id: String,
    pub action: ActivityAction,
    pub resource_type: String,
    pub resource_id: String,
    #[serde(default)]
    pub details: Value,
}

impl ActivityLogEntry {
    /// Entry recorded after a backup: the user is both actor and resource.
    pub fn backup_created(user_id: &str, files_count: usize, contacts_count: usize) -> Self {
        ActivityLogEntry {
            user_id: user_id.to_string(),
            action: ActivityAction::BackupCreated,
            resource_type: "user".to_string(),
            resource_id: user_id.to_string(),
            details: json!({
                "files_count": files_count,
                "contacts_count": contacts_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_entry_shape() {
        let entry = ActivityLogEntry::backup_created("u1", 3, 2);
        let row = serde_json::to_value(&entry).unwrap();

        assert_eq!(row["action"], "backup_created");
        assert_eq!(row["resource_type"], "user");
        assert_eq!(row["resource_id"], "u1");
        assert_eq!(row["details"], json!({"files_count": 3, "contacts_count": 2}));
    }
}
