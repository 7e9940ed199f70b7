// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote Data Client
//!
//! Table-scoped query/command interface over the hosted relational store.
//! Every screen and the sync coordinator talk to the backend only through
//! [`DataClient`].
//!
//! - [`RestClient`] speaks the REST data API over HTTP.
//! - [`MemoryBackend`] keeps tables in process; it records every call and
//!   can inject failures, which makes it the test double for everything above.

mod error;
mod memory;
mod query;
#[cfg(feature = "rest")]
mod rest;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{BackendError, BackendResult};
pub use memory::{MemoryBackend, Operation, RecordedCall};
pub use query::{Direction, Filter, Order, Query};
#[cfg(feature = "rest")]
pub use rest::RestClient;

/// Backend tables used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Files,
    Contacts,
    Notifications,
    ActivityLogs,
    Profiles,
}

impl Table {
    /// Table name on the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Files => "files",
            Table::Contacts => "contacts",
            Table::Notifications => "notifications",
            Table::ActivityLogs => "activity_logs",
            Table::Profiles => "profiles",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rows returned by a select, plus the exact match count when requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    pub rows: Vec<Value>,
    pub count: Option<u64>,
}

impl QueryResponse {
    /// Decodes every row into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> BackendResult<Vec<T>> {
        decode_rows(self.rows)
    }
}

/// Decodes raw rows into typed records.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> BackendResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(BackendError::from))
        .collect()
}

/// Generic query/command interface over the hosted store.
///
/// Writes return the affected rows (the backend's "return representation"),
/// so callers can tell an update or delete that matched nothing.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Selects rows matching `query`.
    async fn select(&self, table: Table, query: &Query) -> BackendResult<QueryResponse>;

    /// Inserts one row and returns it as stored.
    async fn insert(&self, table: Table, row: Value) -> BackendResult<Vec<Value>>;

    /// Applies `patch` to every row matching `filters`.
    async fn update(&self, table: Table, patch: Value, filters: &[Filter])
        -> BackendResult<Vec<Value>>;

    /// Deletes every row matching `filters`.
    async fn delete(&self, table: Table, filters: &[Filter]) -> BackendResult<Vec<Value>>;
}
