// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! REST data client
//!
//! [`DataClient`] over the hosted REST data API:
//! - `GET/POST/PATCH/DELETE {url}/rest/v1/{table}` with query-string filters
//! - `apikey` header plus the session's bearer token (anon key when signed out)
//! - `Prefer: return=representation` on writes, `count=exact` on counted selects

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::error::{BackendError, BackendResult};
use super::query::{Filter, Query};
use super::{DataClient, QueryResponse, Table};
use crate::auth::SessionStore;
use crate::config::BackendConfig;

/// HTTP client for the REST data API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    anon_key: String,
    session: SessionStore,
}

/// Error body returned by the data API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
    hint: Option<String>,
}

impl RestClient {
    /// Create a new client from config, reading tokens from `session`.
    pub fn new(config: &BackendConfig, session: SessionStore) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "Staffdesk/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self {
            client,
            base_url: config.rest_url(),
            anon_key: config.anon_key.clone(),
            session,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, table: Table) -> RequestBuilder {
        let token = self
            .session
            .access_token()
            .unwrap_or_else(|| self.anon_key.clone());

        self.client
            .request(method, format!("{}/{}", self.base_url, table.as_str()))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    async fn write(
        &self,
        method: Method,
        table: Table,
        body: Option<Value>,
        filters: &[Filter],
    ) -> BackendResult<Vec<Value>> {
        let params: Vec<(String, String)> = filters.iter().map(Filter::to_param).collect();
        let mut request = self
            .request(method.clone(), table)
            .header("Prefer", "return=representation")
            .query(&params);

        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!("{} {} ({} filters)", method, table, filters.len());
        let response = check_status(request.send().await?).await?;
        parse_rows(response).await
    }
}

/// Turns a non-success response into [`BackendError::Status`].
async fn check_status(response: Response) -> BackendResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|err| err.message.or(err.error).or(err.hint))
        .unwrap_or(body);

    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn parse_rows(response: Response) -> BackendResult<Vec<Value>> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(&body)? {
        Value::Array(rows) => Ok(rows),
        Value::Null => Ok(Vec::new()),
        row => Ok(vec![row]),
    }
}

/// Total from a `Content-Range` header such as `0-9/42` or `*/0`.
pub(crate) fn parse_content_range(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

#[async_trait]
impl DataClient for RestClient {
    async fn select(&self, table: Table, query: &Query) -> BackendResult<QueryResponse> {
        let mut request = self.request(Method::GET, table).query(&query.to_params());
        if query.wants_count() {
            request = request.header("Prefer", "count=exact");
        }

        debug!("GET {} {:?}", table, query.to_params());
        let response = check_status(request.send().await?).await?;

        let count = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range);

        let rows = parse_rows(response).await?;
        Ok(QueryResponse { rows, count })
    }

    async fn insert(&self, table: Table, row: Value) -> BackendResult<Vec<Value>> {
        self.write(Method::POST, table, Some(row), &[]).await
    }

    async fn update(
        &self,
        table: Table,
        patch: Value,
        filters: &[Filter],
    ) -> BackendResult<Vec<Value>> {
        self.write(Method::PATCH, table, Some(patch), filters).await
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> BackendResult<Vec<Value>> {
        self.write(Method::DELETE, table, None, filters).await
    }
}
