//! CLI Configuration

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use staffdesk_core::{BackendConfig, Session};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for the persisted session.
    pub data_dir: PathBuf,
    /// Backend connection settings.
    pub backend: BackendConfig,
}

impl CliConfig {
    /// Returns the session file path.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    /// Returns true if a session file exists.
    pub fn is_signed_in(&self) -> bool {
        self.session_path().exists()
    }

    /// Loads the persisted session, if any.
    pub fn load_session(&self) -> Result<Option<Session>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let session = serde_json::from_str(&data)
            .with_context(|| format!("Corrupt session file {}", path.display()))?;
        Ok(Some(session))
    }

    /// Persists the session, creating the data directory if needed.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;
        fs::write(self.session_path(), serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Removes the persisted session. Returns whether one existed.
    pub fn clear_session(&self) -> Result<bool> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}
