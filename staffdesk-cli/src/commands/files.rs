//! Files Command
//!
//! List, add, edit and remove file records.

use anyhow::Result;
use dialoguer::Confirm;
use staffdesk_core::{FileDraft, FileManager, FileType};

use super::App;
use crate::config::CliConfig;
use crate::display;

fn manager(app: &App) -> FileManager {
    FileManager::new(app.client.clone(), app.events.clone())
}

/// Lists all files.
pub async fn list(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let files = manager(&app).list(&user.id).await?;

    if files.is_empty() {
        display::info("No files yet. Add one with:");
        println!("  staffdesk files add <title> <url>");
        return Ok(());
    }

    println!();
    println!("Files ({}):", files.len());
    println!();
    display::display_files_table(&files);
    println!();

    Ok(())
}

/// Adds a file record.
pub async fn add(
    config: &CliConfig,
    title: &str,
    url: &str,
    file_type: FileType,
    description: Option<String>,
) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;

    let mut draft = FileDraft::new(title, url).with_type(file_type);
    draft.description = description;

    let file = manager(&app).create(&user.id, &draft).await?;
    display::success(&format!("Added file: {}", file.title));
    display::display_file_details(&file);

    Ok(())
}

/// Fields to change on an existing file. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct FileEdit {
    pub title: Option<String>,
    pub url: Option<String>,
    pub file_type: Option<FileType>,
    pub description: Option<String>,
}

/// Edits a file record.
pub async fn edit(config: &CliConfig, id: &str, changes: FileEdit) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let files = manager(&app);

    let current = files.get(&user.id, id).await?;
    let mut draft = FileDraft::from(&current);
    if let Some(title) = changes.title {
        draft.title = title;
    }
    if let Some(url) = changes.url {
        draft.file_url = url;
    }
    if let Some(file_type) = changes.file_type {
        draft.file_type = file_type;
    }
    if let Some(description) = changes.description {
        draft.description = Some(description);
    }

    let file = files.update(&user.id, id, &draft).await?;
    display::success(&format!("Updated file: {}", file.title));

    Ok(())
}

/// Removes a file record after confirmation.
pub async fn remove(config: &CliConfig, id: &str, yes: bool) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let files = manager(&app);

    let file = files.get(&user.id, id).await?;
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", file.title))
            .default(false)
            .interact()?;
        if !confirm {
            display::info("Cancelled");
            return Ok(());
        }
    }

    let deleted = files.delete(&user.id, id).await?;
    display::success(&format!("Removed file: {}", deleted.title));

    Ok(())
}
