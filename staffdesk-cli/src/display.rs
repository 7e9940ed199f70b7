//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use staffdesk_core::{
    ContactRecord, DashboardSnapshot, FileRecord, Notification, NotificationKind, RecentFile,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Starts a spinner with `msg`. Call `finish_and_clear` when done.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        pb.set_style(template);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Human-readable byte count (1024-based).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

/// Local date and time.
pub fn format_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    file_type: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Synced")]
    synced: String,
}

/// Displays files as a table.
pub fn display_files_table(files: &[FileRecord]) {
    let rows = files.iter().map(|f| FileRow {
        id: f.id.clone(),
        title: f.title.clone(),
        file_type: f.file_type.to_string(),
        size: format_bytes(f.file_size),
        created: format_time(&f.created_at),
        synced: f
            .synced_at
            .as_ref()
            .map(format_time)
            .unwrap_or_else(|| "never".to_string()),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));
}

/// Displays one file in detail.
pub fn display_file_details(file: &FileRecord) {
    println!();
    println!("  {}", style(&file.title).bold().cyan());
    println!("  {:12} {}", style("ID").dim(), file.id);
    println!("  {:12} {}", style("Type").dim(), file.file_type);
    println!("  {:12} {}", style("URL").dim(), file.file_url);
    if let Some(description) = &file.description {
        println!("  {:12} {}", style("Description").dim(), description);
    }
    println!();
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

/// Displays contacts as a table.
pub fn display_contacts_table(contacts: &[ContactRecord]) {
    let rows = contacts.iter().map(|c| ContactRow {
        id: c.id.clone(),
        name: c.name.clone(),
        position: or_dash(&c.position),
        department: or_dash(&c.department),
        email: or_dash(&c.email),
        phone: or_dash(&c.phone),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));
}

fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::FileUpload => "upload",
        NotificationKind::FileUpdate => "edit",
        NotificationKind::FileDelete => "delete",
        NotificationKind::General => "info",
    }
}

/// Displays notifications as a compact list.
pub fn display_notifications(notifications: &[Notification]) {
    for n in notifications {
        println!(
            "  {:7} {} {}",
            style(notification_icon(n.kind)).dim(),
            style(&n.title).bold(),
            n.message
        );
        println!(
            "          {}  {}",
            style(format_time(&n.created_at)).dim(),
            style(&n.id).dim()
        );
    }
}

fn display_recent_files(files: &[RecentFile]) {
    for f in files {
        println!(
            "  {:10} {}  {}",
            style(f.file_type.as_str()).dim(),
            f.title,
            style(format_time(&f.created_at)).dim()
        );
    }
}

/// Displays the dashboard.
pub fn display_dashboard(name: &str, snapshot: &DashboardSnapshot) {
    let stats = &snapshot.stats;
    let width = 40;

    println!("{}", "─".repeat(width));
    println!("  Welcome, {}", style(name).bold().cyan());
    println!("{}", "─".repeat(width));
    println!("  {:16} {}", style("Files").dim(), stats.total_files);
    println!("  {:16} {}", style("Contacts").dim(), stats.total_contacts);
    println!(
        "  {:16} {}",
        style("Unread").dim(),
        stats.unread_notifications
    );
    println!(
        "  {:16} {}",
        style("Storage used").dim(),
        format_bytes(stats.storage_used)
    );
    println!("{}", "─".repeat(width));

    println!();
    println!("Recent files:");
    if snapshot.recent_files.is_empty() {
        println!("  {}", style("(none)").dim());
    } else {
        display_recent_files(&snapshot.recent_files);
    }

    println!();
    println!("Notifications:");
    if snapshot.notifications.is_empty() {
        println!("  {}", style("(none)").dim());
    } else {
        display_notifications(&snapshot.notifications);
    }
}
