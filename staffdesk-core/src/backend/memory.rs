// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-Memory Backend
//!
//! In-process implementation of [`DataClient`] for tests and offline demos.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::error::{BackendError, BackendResult};
use super::query::{Direction, Filter, Query};
use super::{DataClient, QueryResponse, Table};
use crate::records::iso_timestamp;

/// Data operation kinds, for call recording and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Select => "select",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// One call made against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub table: Table,
    pub operation: Operation,
    /// Inserted row or update patch.
    pub payload: Option<Value>,
    /// Filters of the select/update/delete.
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone)]
enum Failure {
    Once(String),
    Always(String),
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<Table, Vec<Value>>,
    calls: Vec<RecordedCall>,
    failures: HashMap<(Table, Operation), Failure>,
    latency: Option<Duration>,
    last_stamp: Option<DateTime<Utc>>,
}

/// In-memory backend.
///
/// Emulates the column defaults of the hosted schema (generated `id`,
/// `created_at`, `updated_at` on files, `is_read = false` on notifications),
/// records every call, and can inject failures or latency.
///
/// # Example
///
/// ```ignore
/// use staffdesk_core::backend::{MemoryBackend, Operation, Table};
///
/// let backend = MemoryBackend::new();
/// backend.fail_next(Table::Files, Operation::Update, "offline");
///
/// // The next files update returns BackendError::Rejected.
/// assert_eq!(backend.call_count(Table::Files, Operation::Update), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts rows directly, applying column defaults, without recording calls.
    pub fn seed(&self, table: Table, rows: impl IntoIterator<Item = Value>) {
        let mut inner = self.inner.lock();
        for row in rows {
            let row = inner.with_defaults(table, row);
            inner.tables.entry(table).or_default().push(row);
        }
    }

    /// Current contents of a table, in insertion order.
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.inner
            .lock()
            .tables
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of recorded calls of one kind against one table.
    pub fn call_count(&self, table: Table, operation: Operation) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| c.table == table && c.operation == operation)
            .count()
    }

    /// Clears the call log.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    /// Makes the next `operation` on `table` fail once.
    pub fn fail_next(&self, table: Table, operation: Operation, message: impl Into<String>) {
        self.inner
            .lock()
            .failures
            .insert((table, operation), Failure::Once(message.into()));
    }

    /// Makes every `operation` on `table` fail until cleared.
    pub fn fail_always(&self, table: Table, operation: Operation, message: impl Into<String>) {
        self.inner
            .lock()
            .failures
            .insert((table, operation), Failure::Always(message.into()));
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        self.inner.lock().failures.clear();
    }

    /// Delays every call by `latency` (runs on the tokio clock).
    pub fn set_latency(&self, latency: Option<Duration>) {
        self.inner.lock().latency = latency;
    }

    async fn begin(
        &self,
        table: Table,
        operation: Operation,
        payload: Option<Value>,
        filters: &[Filter],
    ) -> BackendResult<()> {
        let latency = {
            let mut inner = self.inner.lock();
            inner.calls.push(RecordedCall {
                table,
                operation,
                payload,
                filters: filters.to_vec(),
            });
            inner.latency
        };

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        self.inner.lock().check_failure(table, operation)
    }
}

impl Inner {
    fn check_failure(&mut self, table: Table, operation: Operation) -> BackendResult<()> {
        let key = (table, operation);
        let message = match self.failures.get(&key).cloned() {
            None => return Ok(()),
            Some(Failure::Always(message)) => message,
            Some(Failure::Once(message)) => {
                self.failures.remove(&key);
                message
            }
        };

        Err(BackendError::Rejected {
            table: table.to_string(),
            operation: operation.to_string(),
            message,
        })
    }

    /// Strictly increasing timestamps so `created_at` ordering is total.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + chrono::Duration::milliseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn with_defaults(&mut self, table: Table, row: Value) -> Value {
        let mut object = match row {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        if table != Table::Profiles && !object.contains_key("id") {
            object.insert(
                "id".into(),
                Value::String(uuid::Uuid::new_v4().to_string()),
            );
        }

        if table != Table::Profiles && !object.contains_key("created_at") {
            let stamp = iso_timestamp(self.next_stamp());
            object.insert("created_at".into(), Value::String(stamp));
        }

        match table {
            Table::Files if !object.contains_key("updated_at") => {
                let created = object["created_at"].clone();
                object.insert("updated_at".into(), created);
            }
            Table::Notifications if !object.contains_key("is_read") => {
                object.insert("is_read".into(), Value::Bool(false));
            }
            _ => {}
        }

        Value::Object(object)
    }
}

fn matches_all(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|f| f.matches(row))
}

/// Total order over JSON scalars; nulls sort after everything.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn project(row: &Value, columns: Option<&[String]>) -> Value {
    match columns {
        Some(columns) if !columns.is_empty() => {
            let object = columns
                .iter()
                .map(|c| (c.clone(), row.get(c).cloned().unwrap_or(Value::Null)))
                .collect();
            Value::Object(object)
        }
        _ => row.clone(),
    }
}

#[async_trait]
impl DataClient for MemoryBackend {
    async fn select(&self, table: Table, query: &Query) -> BackendResult<QueryResponse> {
        self.begin(table, Operation::Select, None, query.filters())
            .await?;

        let inner = self.inner.lock();
        let mut rows: Vec<Value> = inner
            .tables
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_all(row, query.filters()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let count = query.wants_count().then_some(rows.len() as u64);

        if let Some(order) = query.order() {
            let column = order.column.as_str();
            rows.sort_by(|a, b| {
                let (x, y) = (
                    a.get(column).unwrap_or(&Value::Null),
                    b.get(column).unwrap_or(&Value::Null),
                );
                match (order.direction, x.is_null() || y.is_null()) {
                    (Direction::Descending, false) => compare_values(y, x),
                    _ => compare_values(x, y),
                }
            });
        }

        if let Some(limit) = query.row_limit() {
            rows.truncate(limit);
        }

        let rows = rows
            .iter()
            .map(|row| project(row, query.selected_columns()))
            .collect();

        Ok(QueryResponse { rows, count })
    }

    async fn insert(&self, table: Table, row: Value) -> BackendResult<Vec<Value>> {
        self.begin(table, Operation::Insert, Some(row.clone()), &[])
            .await?;

        let mut inner = self.inner.lock();
        let row = inner.with_defaults(table, row);
        inner.tables.entry(table).or_default().push(row.clone());
        Ok(vec![row])
    }

    async fn update(
        &self,
        table: Table,
        patch: Value,
        filters: &[Filter],
    ) -> BackendResult<Vec<Value>> {
        self.begin(table, Operation::Update, Some(patch.clone()), filters)
            .await?;

        let mut inner = self.inner.lock();
        let touch = (table == Table::Files && patch.get("updated_at").is_none())
            .then(|| iso_timestamp(inner.next_stamp()));

        let mut updated = Vec::new();
        if let Some(rows) = inner.tables.get_mut(&table) {
            for row in rows.iter_mut().filter(|row| matches_all(row, filters)) {
                if let (Value::Object(target), Value::Object(changes)) = (&mut *row, &patch) {
                    for (key, value) in changes {
                        target.insert(key.clone(), value.clone());
                    }
                    if let Some(stamp) = &touch {
                        target.insert("updated_at".into(), Value::String(stamp.clone()));
                    }
                }
                updated.push(row.clone());
            }
        }

        Ok(updated)
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> BackendResult<Vec<Value>> {
        self.begin(table, Operation::Delete, None, filters).await?;

        let mut inner = self.inner.lock();
        let mut deleted = Vec::new();
        if let Some(rows) = inner.tables.get_mut(&table) {
            rows.retain(|row| {
                if matches_all(row, filters) {
                    deleted.push(row.clone());
                    false
                } else {
                    true
                }
            });
        }

        Ok(deleted)
    }
}
