//! Auth Commands
//!
//! Register, log in, log out and show the current account.

use anyhow::Result;
use dialoguer::{Input, Password};
use staffdesk_core::auth::{validate_sign_in, RegistrationForm};
use staffdesk_core::AuthProvider;

use super::App;
use crate::config::CliConfig;
use crate::display;

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Creates an account. Does not sign in.
pub async fn register(
    config: &CliConfig,
    email: Option<String>,
    full_name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let full_name = prompt_if_missing(full_name, "Full name")?;
    let email = prompt_if_missing(email, "Email")?;

    let (password, confirm_password) = match password {
        Some(p) => (p.clone(), p),
        None => {
            let password = Password::new().with_prompt("Password").interact()?;
            let confirm = Password::new().with_prompt("Confirm password").interact()?;
            (password, confirm)
        }
    };

    let form = RegistrationForm {
        full_name,
        email,
        password,
        confirm_password,
    };
    form.validate()?;

    let app = App::open(config)?;
    let user = app
        .auth
        .sign_up(&form.email, &form.password, &form.full_name)
        .await?;

    display::success(&format!("Account created for {}", form.email.trim()));
    display::info("Confirm your email if required, then sign in:");
    println!(
        "  staffdesk login --email {}",
        user.email.as_deref().unwrap_or(form.email.trim())
    );

    Ok(())
}

/// Signs in and persists the session.
pub async fn login(
    config: &CliConfig,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = prompt_if_missing(email, "Email")?;
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };
    validate_sign_in(&email, &password)?;

    let app = App::open(config)?;
    let session = app.auth.sign_in(&email, &password).await?;
    config.save_session(&session)?;

    display::success(&format!(
        "Signed in as {}",
        session.user.email.as_deref().unwrap_or(&session.user.id)
    ));
    Ok(())
}

/// Signs out. The local session is removed even if the server call fails.
pub async fn logout(config: &CliConfig) -> Result<()> {
    if !config.is_signed_in() {
        display::info("Not signed in.");
        return Ok(());
    }

    let app = App::open(config)?;
    let result = app.auth.sign_out().await;
    config.clear_session()?;

    match result {
        Ok(()) => display::success("Signed out"),
        Err(e) => display::warning(&format!("Signed out locally; server reported: {}", e)),
    }
    Ok(())
}

/// Shows the signed-in account and profile.
pub async fn whoami(config: &CliConfig) -> Result<()> {
    let app = App::open(config)?;
    let user = app.require_user()?;

    println!();
    println!("  {:12} {}", "User ID", user.id);
    if let Some(email) = &user.email {
        println!("  {:12} {}", "Email", email);
    }

    match app.auth.profile().await? {
        Some(profile) => {
            println!("  {:12} {}", "Name", profile.full_name);
            println!("  {:12} {}", "Role", profile.role);
            if let Some(department) = &profile.department {
                println!("  {:12} {}", "Department", department);
            }
            println!(
                "  {:12} {}",
                "Storage",
                display::format_bytes(profile.storage_used)
            );
        }
        None => display::warning("No profile found for this account"),
    }
    println!();

    Ok(())
}
