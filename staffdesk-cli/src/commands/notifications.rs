//! Notifications Command

use anyhow::Result;
use staffdesk_core::NotificationCenter;

use super::App;
use crate::config::CliConfig;
use crate::display;

/// Lists unread notifications.
pub async fn list(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let unread = NotificationCenter::new(app.client.clone())
        .unread(&user.id)
        .await?;

    if unread.is_empty() {
        display::info("No unread notifications");
        return Ok(());
    }

    println!();
    println!("Unread ({}):", unread.len());
    println!();
    display::display_notifications(&unread);
    println!();

    Ok(())
}

/// Marks a notification as read.
pub async fn read(config: &CliConfig, id: &str) -> Result<()> {
    let app = App::open(config)?;
    app.require_user()?;

    NotificationCenter::new(app.client.clone())
        .mark_read(id)
        .await?;
    display::success("Marked as read");

    Ok(())
}
