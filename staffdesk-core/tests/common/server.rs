// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stub Backend Server
//!
//! Local axum server that records every request and answers with canned
//! responses keyed by path.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use serde_json::Value;

/// A request as the stub saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: String,
}

impl SeenRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
    content_range: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    replies: Arc<Mutex<HashMap<String, Reply>>>,
}

pub struct StubServer {
    pub url: String,
    state: StubState,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubServer {
            url: format!("http://{}", addr),
            state,
        }
    }

    pub fn reply(&self, path: &str, status: u16, body: Value) {
        self.insert(path, status, body, None);
    }

    pub fn reply_with_range(&self, path: &str, status: u16, body: Value, range: &str) {
        self.insert(path, status, body, Some(range.to_string()));
    }

    pub fn reply_empty(&self, path: &str, status: u16) {
        self.state.replies.lock().insert(
            path.to_string(),
            Reply {
                status,
                body: String::new(),
                content_range: None,
            },
        );
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().clone()
    }

    pub fn last_request(&self) -> SeenRequest {
        self.requests().pop().expect("no request recorded")
    }

    fn insert(&self, path: &str, status: u16, body: Value, content_range: Option<String>) {
        self.state.replies.lock().insert(
            path.to_string(),
            Reply {
                status,
                body: body.to_string(),
                content_range,
            },
        );
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.seen.lock().push(SeenRequest {
        method,
        path: path.clone(),
        params,
        headers,
        body,
    });

    let reply = state.replies.lock().get(&path).cloned().unwrap_or(Reply {
        status: 404,
        body: r#"{"message":"no stub for path"}"#.to_string(),
        content_range: None,
    });

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, reply.body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    if let Some(range) = reply.content_range {
        if let Ok(value) = HeaderValue::from_str(&range) {
            response.headers_mut().insert(header::CONTENT_RANGE, value);
        }
    }
    response
}
