//! CLI Commands

pub mod auth;
pub mod backup;
pub mod contacts;
pub mod dashboard;
pub mod files;
pub mod notifications;
pub mod sync;

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::Utc;
use staffdesk_core::{
    AuthUser, DataClient, EventDispatcher, RestAuth, RestClient, SessionStore,
};
use tracing::debug;

use crate::config::CliConfig;

/// Clients wired to the persisted session.
pub struct App {
    pub session: SessionStore,
    pub client: Arc<dyn DataClient>,
    pub auth: RestAuth,
    pub events: Arc<EventDispatcher>,
}

impl App {
    /// Builds the clients, restoring the persisted session if present.
    pub fn open(config: &CliConfig) -> Result<Self> {
        let session = match config.load_session()? {
            Some(s) => {
                debug!("Restored session for {}", s.user.id);
                SessionStore::with_session(s)
            }
            None => SessionStore::new(),
        };

        let client: Arc<dyn DataClient> =
            Arc::new(RestClient::new(&config.backend, session.clone())?);
        let auth = RestAuth::new(&config.backend, session.clone(), Arc::clone(&client))?;

        Ok(App {
            session,
            client,
            auth,
            events: Arc::new(EventDispatcher::new()),
        })
    }

    /// The signed-in user, or an error telling the user to log in.
    pub fn require_user(&self) -> Result<AuthUser> {
        let Some(session) = self.session.current() else {
            bail!("Not signed in. Run 'staffdesk login' first.");
        };
        if session.is_expired(Utc::now()) {
            bail!("Session expired. Run 'staffdesk login' again.");
        }
        Ok(session.user)
    }
}
