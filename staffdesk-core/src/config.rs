// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the hosted backend connection

use std::env;
use std::time::Duration;

/// Default interval between automatic sync passes (15 minutes).
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Shortest interval the sync scheduler accepts.
pub const MIN_SYNC_INTERVAL: Duration = Duration::from_secs(1);

/// Connection and scheduling settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL (e.g., "https://example.supabase.co")
    pub url: String,

    /// Public (anon) API key sent with every request
    pub anon_key: String,

    /// HTTP timeout for backend calls
    pub timeout: Duration,

    /// Interval between automatic sync passes
    pub sync_interval: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
            timeout: Duration::from_secs(30),
            sync_interval: DEFAULT_SYNC_INTERVAL,
        }
    }
}

impl BackendConfig {
    /// Builds a configuration from `STAFFDESK_*` environment variables,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let secs = |name: &str| get(name).and_then(|v| v.trim().parse::<u64>().ok());

        if let Some(url) = get("STAFFDESK_URL") {
            config.url = url;
        }
        if let Some(key) = get("STAFFDESK_ANON_KEY") {
            config.anon_key = key;
        }
        if let Some(s) = secs("STAFFDESK_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(s);
        }
        // Zero would mean no schedule at all; keep the default instead.
        if let Some(s) = secs("STAFFDESK_SYNC_INTERVAL_SECS").filter(|s| *s > 0) {
            config.sync_interval = Duration::from_secs(s);
        }

        config
    }

    /// Set the project URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the anon key
    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = key.into();
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the automatic sync interval
    pub fn with_sync_interval(mut self, interval: Duration) -> Self {
        self.sync_interval = interval;
        self
    }

    /// Base URL of the REST data API.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Base URL of the auth API.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url.trim_end_matches('/'))
    }
}
