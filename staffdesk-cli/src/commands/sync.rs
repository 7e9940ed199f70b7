//! Sync Command
//!
//! Stamps the user's files with the current sync time, once or on a timer.

use std::sync::Arc;

use anyhow::Result;
use staffdesk_core::{CallbackHandler, EventDispatcher, StaffdeskEvent, SyncService};

use super::App;
use crate::config::CliConfig;
use crate::display;

/// Runs one sync pass.
pub async fn now(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let service = SyncService::new(
        app.client.clone(),
        app.events.clone(),
        config.backend.sync_interval,
    );

    let pb = display::spinner("Syncing...");
    let result = service.sync_now(&user.id).await;
    pb.finish_and_clear();

    let report = result?;
    display::success(&format!(
        "Synced {} file(s) at {}",
        report.files_synced,
        display::format_time(&report.synced_at)
    ));

    Ok(())
}

/// Prints pass outcomes as they happen.
fn report_event(event: StaffdeskEvent) {
    match event {
        StaffdeskEvent::SyncCompleted { synced_at, .. } => {
            display::success(&format!("Synced at {}", display::format_time(&synced_at)));
        }
        StaffdeskEvent::SyncFailed { error, .. } => {
            display::error(&format!("Sync failed: {}", error));
        }
        StaffdeskEvent::SyncSkipped { .. } => {
            display::warning("Previous sync still running, tick skipped");
        }
        _ => {}
    }
}

/// Syncs now and then on every interval until Ctrl+C.
pub async fn watch(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;

    let mut events = EventDispatcher::new();
    events.add_handler(Arc::new(CallbackHandler::new(report_event)));
    let service = SyncService::new(
        app.client.clone(),
        Arc::new(events),
        config.backend.sync_interval,
    );

    let started = service.start_auto_sync(&user.id).await?;
    display::info(&format!(
        "Auto-sync every {}s for {}. Press Ctrl+C to stop.",
        service.interval().as_secs(),
        user.email.as_deref().unwrap_or(&started.user_id)
    ));

    tokio::signal::ctrl_c().await?;
    service.stop_auto_sync();
    println!();
    display::info("Auto-sync stopped");

    Ok(())
}

/// Shows when the user's files were last synced.
pub async fn status(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let service = SyncService::new(
        app.client.clone(),
        app.events.clone(),
        config.backend.sync_interval,
    );

    match service.last_synced_at(&user.id).await? {
        Some(at) => display::info(&format!("Last synced: {}", display::format_time(&at))),
        None => display::info("Never synced"),
    }
    println!(
        "  Auto-sync interval: {}s",
        service.interval().as_secs()
    );

    Ok(())
}
