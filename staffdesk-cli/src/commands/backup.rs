//! Backup Command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use staffdesk_core::SyncService;

use super::App;
use crate::config::CliConfig;
use crate::display;

/// Exports all files and contacts as JSON to `output` or stdout.
pub async fn create(config: &CliConfig, output: Option<&Path>) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let service = SyncService::new(
        app.client.clone(),
        app.events.clone(),
        config.backend.sync_interval,
    );

    let snapshot = service.create_backup(&user.id).await?;
    let json = snapshot.to_json()?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            display::success(&format!(
                "Backup written to {} ({} files, {} contacts)",
                path.display(),
                snapshot.files_count(),
                snapshot.contacts_count()
            ));
        }
        // Stdout carries only the JSON.
        None => println!("{}", json),
    }

    Ok(())
}
