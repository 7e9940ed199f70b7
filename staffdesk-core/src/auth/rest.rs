// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Auth provider backed by the hosted auth API.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::error::AuthError;
use super::session::{AuthUser, Session, SessionStore};
use super::AuthProvider;
use crate::backend::{DataClient, Query, Table};
use crate::config::BackendConfig;
use crate::records::Profile;

/// [`AuthProvider`] over `{url}/auth/v1`, with profiles read through a
/// [`DataClient`].
pub struct RestAuth {
    client: Client,
    auth_url: String,
    anon_key: String,
    session: SessionStore,
    data: Arc<dyn DataClient>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl RestAuth {
    /// Create a provider sharing `session` with the data client.
    pub fn new(
        config: &BackendConfig,
        session: SessionStore,
        data: Arc<dyn DataClient>,
    ) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            auth_url: config.auth_url(),
            anon_key: config.anon_key.clone(),
            session,
            data,
        })
    }

    /// Handle to the shared session.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn post(&self, path: &str, body: Value, bearer: Option<&str>) -> Result<Response, AuthError> {
        let token = bearer.unwrap_or(&self.anon_key);
        let response = self
            .client
            .post(format!("{}/{}", self.auth_url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<AuthErrorBody>(&body).ok();

    if status.as_u16() == 400
        && parsed
            .as_ref()
            .and_then(|e| e.error.as_deref())
            .is_some_and(|e| e == "invalid_grant")
    {
        return Err(AuthError::InvalidCredentials);
    }

    let message = parsed
        .and_then(|e| e.error_description.or(e.msg).or(e.message).or(e.error))
        .unwrap_or(body);

    Err(AuthError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Sign-up answers with either a bare user or a session wrapping one.
fn user_from_signup(body: Value) -> Result<AuthUser, AuthError> {
    let user = match body.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => body,
    };
    serde_json::from_value(user).map_err(|e| AuthError::Malformed(e.to_string()))
}

#[async_trait]
impl AuthProvider for RestAuth {
    fn current_user(&self) -> Option<AuthUser> {
        self.session.user()
    }

    async fn profile(&self) -> Result<Option<Profile>, AuthError> {
        let user = self.current_user().ok_or(AuthError::NotSignedIn)?;

        let response = self
            .data
            .select(Table::Profiles, &Query::new().eq("id", user.id).limit(1))
            .await?;

        Ok(response.decode::<Profile>()?.into_iter().next())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthUser, AuthError> {
        let body = json!({
            "email": email.trim(),
            "password": password,
            "data": { "full_name": full_name.trim() },
        });

        let response = self.post("signup", body, None).await?;
        let user = user_from_signup(response.json().await?)?;
        info!("Registered account {}", user.id);
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = json!({ "email": email.trim(), "password": password });
        let response = self
            .post("token?grant_type=password", body, None)
            .await?;

        let token: TokenResponse = response.json().await?;
        let session = Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: token
                .expires_in
                .map(|secs| Utc::now() + chrono::Duration::seconds(secs)),
            user: token.user,
        };

        self.session.set(session.clone());
        debug!("Signed in as {}", session.user.id);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.session.clear() else {
            return Ok(());
        };

        if let Err(e) = self
            .post("logout", json!({}), Some(&session.access_token))
            .await
        {
            warn!("Server-side sign-out failed: {}", e);
            return Err(e);
        }

        info!("Signed out {}", session.user.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_signup_accepts_both_shapes() {
        let bare = json!({"id": "u1", "email": "a@corp.example"});
        assert_eq!(user_from_signup(bare).unwrap().id, "u1");

        let wrapped = json!({
            "access_token": "t",
            "user": {"id": "u2", "email": "b@corp.example"}
        });
        assert_eq!(user_from_signup(wrapped).unwrap().id, "u2");

        assert!(matches!(
            user_from_signup(json!({"nope": true})),
            Err(AuthError::Malformed(_))
        ));
    }
}
