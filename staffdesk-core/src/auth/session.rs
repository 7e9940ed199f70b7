// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session state shared between the auth provider and the data client.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// The authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed-in session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl Session {
    /// True once `expires_at` has passed. Sessions without expiry never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Cloneable handle to the current session.
///
/// The auth provider writes it on sign-in/sign-out; the REST client reads
/// the access token from it on every request.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Creates an empty (signed-out) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set(session);
        store
    }

    /// Replaces the current session.
    pub fn set(&self, session: Session) {
        *self.inner.write() = Some(session);
    }

    /// Clears the session, returning the previous one.
    pub fn clear(&self) -> Option<Session> {
        self.inner.write().take()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<AuthUser> {
        self.inner.read().as_ref().map(|s| s.user.clone())
    }

    /// Bearer token of the current session.
    pub fn access_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().is_some()
    }
}
