//! Dashboard Command

use anyhow::Result;
use staffdesk_core::{AuthProvider, Dashboard};

use super::App;
use crate::config::CliConfig;
use crate::display;

/// Shows counts, storage, recent files and notifications.
pub async fn show(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;

    let profile = match app.auth.profile().await {
        Ok(profile) => profile,
        Err(e) => {
            display::warning(&format!("Could not load profile: {}", e));
            None
        }
    };

    let snapshot = Dashboard::new(app.client.clone())
        .load(&user.id, profile.as_ref())
        .await?;

    let name = profile
        .as_ref()
        .map(|p| p.full_name.clone())
        .or(user.email)
        .unwrap_or(user.id);

    println!();
    display::display_dashboard(&name, &snapshot);
    println!();

    Ok(())
}
