// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query model: projection, equality filters, ordering, limit and count.

use serde_json::Value;

/// Equality filter on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    /// `column = value`. A `null` value matches rows where the column is null.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether `row` satisfies the filter. Missing columns read as null.
    pub fn matches(&self, row: &Value) -> bool {
        row.get(&self.column).unwrap_or(&Value::Null) == &self.value
    }

    /// REST query parameter for this filter.
    pub fn to_param(&self) -> (String, String) {
        let op = match &self.value {
            Value::Null => "is.null".to_string(),
            value => format!("eq.{}", encode_value(value)),
        };
        (self.column.clone(), op)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering on one column. Nulls always sort last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

/// A select query against one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    columns: Option<Vec<String>>,
    filters: Vec<Filter>,
    order: Option<Order>,
    limit: Option<usize>,
    count: bool,
}

impl Query {
    /// Selects all columns of all rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the common "rows owned by this user" query.
    pub fn owned_by(user_id: &str) -> Self {
        Self::new().eq("user_id", user_id)
    }

    /// Restricts the returned columns.
    pub fn columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = Some(columns.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    /// Adds an equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    /// Orders the results.
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    /// Newest first on `column`.
    pub fn newest_first(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Descending)
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Requests the exact number of matching rows (ignoring the limit).
    pub fn with_count(mut self) -> Self {
        self.count = true;
        self
    }

    pub fn selected_columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn wants_count(&self) -> bool {
        self.count
    }

    /// REST query parameters, in a stable order.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let select = match &self.columns {
            Some(columns) if !columns.is_empty() => columns.join(","),
            _ => "*".to_string(),
        };

        let mut params = vec![("select".to_string(), select)];
        params.extend(self.filters.iter().map(Filter::to_param));

        if let Some(order) = &self.order {
            let value = match order.direction {
                Direction::Ascending => format!("{}.asc", order.column),
                Direction::Descending => format!("{}.desc.nullslast", order.column),
            };
            params.push(("order".to_string(), value));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}

/// Renders a filter value the way the REST API expects it.
pub(crate) fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_default_selects_everything() {
        let params = Query::new().to_params();
        assert_eq!(params, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_dashboard_recent_files_params() {
        let params = Query::owned_by("u1")
            .columns(&["id", "title", "file_type", "created_at"])
            .newest_first("created_at")
            .limit(5)
            .to_params();

        assert_eq!(param(&params, "select"), Some("id,title,file_type,created_at"));
        assert_eq!(param(&params, "user_id"), Some("eq.u1"));
        assert_eq!(param(&params, "order"), Some("created_at.desc.nullslast"));
        assert_eq!(param(&params, "limit"), Some("5"));
    }

    #[test]
    fn test_filter_value_encoding() {
        assert_eq!(Filter::eq("is_read", false).to_param().1, "eq.false");
        assert_eq!(Filter::eq("file_size", 10).to_param().1, "eq.10");
        assert_eq!(Filter::eq("synced_at", Value::Null).to_param().1, "is.null");
    }

    #[test]
    fn test_filter_matches_missing_column_as_null() {
        let row = json!({"id": "f1"});
        assert!(Filter::eq("synced_at", Value::Null).matches(&row));
        assert!(!Filter::eq("id", "f2").matches(&row));
        assert!(Filter::eq("id", "f1").matches(&row));
    }

    #[test]
    fn test_count_does_not_change_params() {
        let query = Query::owned_by("u1").with_count();
        assert!(query.wants_count());
        assert_eq!(query.to_params().len(), 2);
    }
}
