//! Contacts Command
//!
//! List, search, and manage the employee directory.

use anyhow::Result;
use dialoguer::Confirm;
use staffdesk_core::{ContactDraft, ContactManager};

use super::App;
use crate::config::CliConfig;
use crate::display;

fn manager(app: &App) -> ContactManager {
    ContactManager::new(app.client.clone(), app.events.clone())
}

/// Contact fields given on the command line. `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct ContactFields {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
}

impl ContactFields {
    fn apply(self, draft: &mut ContactDraft) {
        let ContactFields {
            email,
            phone,
            position,
            department,
            notes,
        } = self;

        for (value, slot) in [
            (email, &mut draft.email),
            (phone, &mut draft.phone),
            (position, &mut draft.position),
            (department, &mut draft.department),
            (notes, &mut draft.notes),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

/// Lists all contacts.
pub async fn list(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let contacts = manager(&app).list(&user.id).await?;

    if contacts.is_empty() {
        display::info("No contacts yet. Add one with:");
        println!("  staffdesk contacts add <name> --email <email>");
        return Ok(());
    }

    println!();
    println!("Contacts ({}):", contacts.len());
    println!();
    display::display_contacts_table(&contacts);
    println!();

    Ok(())
}

/// Searches contacts by query.
pub async fn search(config: &CliConfig, query: &str) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let results = manager(&app).search(&user.id, query).await?;

    if results.is_empty() {
        display::info(&format!("No contacts matching '{}'", query));
        return Ok(());
    }

    println!();
    println!("Search results for '{}':", query);
    println!();
    display::display_contacts_table(&results);
    println!();

    Ok(())
}

/// Adds a contact.
pub async fn add(config: &CliConfig, name: &str, fields: ContactFields) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;

    let mut draft = ContactDraft::new(name);
    fields.apply(&mut draft);

    let contact = manager(&app).create(&user.id, &draft).await?;
    display::success(&format!("Added contact: {}", contact.name));

    Ok(())
}

/// Edits a contact.
pub async fn edit(
    config: &CliConfig,
    id: &str,
    name: Option<String>,
    fields: ContactFields,
) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let contacts = manager(&app);

    let current = contacts.get(&user.id, id).await?;
    let mut draft = ContactDraft::from(&current);
    if let Some(name) = name {
        draft.name = name;
    }
    fields.apply(&mut draft);

    let contact = contacts.update(id, &draft).await?;
    display::success(&format!("Updated contact: {}", contact.name));

    Ok(())
}

/// Removes a contact after confirmation.
pub async fn remove(config: &CliConfig, id: &str, yes: bool) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;
    let contacts = manager(&app);

    let contact = contacts.get(&user.id, id).await?;
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!("Remove {}?", contact.name))
            .default(false)
            .interact()?;
        if !confirm {
            display::info("Cancelled");
            return Ok(());
        }
    }

    contacts.delete(id).await?;
    display::success(&format!("Removed contact: {}", contact.name));

    Ok(())
}
