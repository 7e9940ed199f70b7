//! Staffdesk CLI
//!
//! Command-line interface for Staffdesk - employee files and contacts.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use staffdesk_core::{BackendConfig, FileType};
use tracing_subscriber::EnvFilter;

use commands::contacts::ContactFields;
use commands::files::FileEdit;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "staffdesk")]
#[command(version, about = "Employee file and contact management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir/staffdesk)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Backend URL (overrides STAFFDESK_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Anonymous API key (overrides STAFFDESK_ANON_KEY)
    #[arg(long, global = true)]
    anon_key: Option<String>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        /// Account email
        #[arg(long)]
        email: Option<String>,

        /// Your full name
        #[arg(long)]
        name: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign in
    Login {
        /// Account email
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out and forget the local session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show counts, recent files and notifications
    Dashboard,

    /// Manage file records
    #[command(subcommand)]
    Files(FileCommands),

    /// Manage contacts
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Show and acknowledge notifications
    #[command(subcommand)]
    Notifications(NotificationCommands),

    /// Stamp files with the current sync time
    #[command(subcommand)]
    Sync(SyncCommands),

    /// Export all files and contacts as JSON
    Backup {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum FileCommands {
    /// List all files
    List,

    /// Add a file record
    Add {
        /// File title
        title: String,

        /// Location of the file
        url: String,

        /// File type (document, image, pdf, other)
        #[arg(long = "type", value_name = "TYPE", default_value = "document")]
        file_type: FileType,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a file record
    Edit {
        /// File ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        file_type: Option<FileType>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a file record
    Remove {
        /// File ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// List all contacts
    List,

    /// Search contacts by name, email or department
    Search {
        /// Search query
        query: String,
    },

    /// Add a contact
    Add {
        /// Contact name
        name: String,

        #[command(flatten)]
        fields: ContactArgs,
    },

    /// Edit a contact
    Edit {
        /// Contact ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: ContactArgs,
    },

    /// Remove a contact
    Remove {
        /// Contact ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Args)]
struct ContactArgs {
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    position: Option<String>,

    #[arg(long)]
    department: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl From<ContactArgs> for ContactFields {
    fn from(args: ContactArgs) -> Self {
        ContactFields {
            email: args.email,
            phone: args.phone,
            position: args.position,
            department: args.department,
            notes: args.notes,
        }
    }
}

#[derive(Subcommand)]
enum NotificationCommands {
    /// List unread notifications
    List,

    /// Mark a notification as read
    Read {
        /// Notification ID
        id: String,
    },
}

#[derive(Subcommand)]
enum SyncCommands {
    /// Run one sync pass
    Now,

    /// Sync now and on every interval until Ctrl+C
    Watch {
        /// Seconds between passes (default: STAFFDESK_SYNC_INTERVAL_SECS or 900)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Show when files were last synced
    Status,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "staffdesk_cli=info,staffdesk_core=info"
    } else {
        "staffdesk_cli=warn,staffdesk_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("staffdesk")
    });

    let mut backend = BackendConfig::from_env();
    if let Some(url) = cli.url {
        backend = backend.with_url(url);
    }
    if let Some(key) = cli.anon_key {
        backend = backend.with_anon_key(key);
    }

    let mut config = CliConfig { data_dir, backend };

    match cli.command {
        Commands::Register {
            email,
            name,
            password,
        } => {
            commands::auth::register(&config, email, name, password).await?;
        }
        Commands::Login { email, password } => {
            commands::auth::login(&config, email, password).await?;
        }
        Commands::Logout => commands::auth::logout(&config).await?,
        Commands::Whoami => commands::auth::whoami(&config).await?,
        Commands::Dashboard => commands::dashboard::show(&config).await?,
        Commands::Files(cmd) => match cmd {
            FileCommands::List => commands::files::list(&config).await?,
            FileCommands::Add {
                title,
                url,
                file_type,
                description,
            } => {
                commands::files::add(&config, &title, &url, file_type, description).await?;
            }
            FileCommands::Edit {
                id,
                title,
                url,
                file_type,
                description,
            } => {
                let changes = FileEdit {
                    title,
                    url,
                    file_type,
                    description,
                };
                commands::files::edit(&config, &id, changes).await?;
            }
            FileCommands::Remove { id, yes } => {
                commands::files::remove(&config, &id, yes).await?;
            }
        },
        Commands::Contacts(cmd) => match cmd {
            ContactCommands::List => commands::contacts::list(&config).await?,
            ContactCommands::Search { query } => {
                commands::contacts::search(&config, &query).await?;
            }
            ContactCommands::Add { name, fields } => {
                commands::contacts::add(&config, &name, fields.into()).await?;
            }
            ContactCommands::Edit { id, name, fields } => {
                commands::contacts::edit(&config, &id, name, fields.into()).await?;
            }
            ContactCommands::Remove { id, yes } => {
                commands::contacts::remove(&config, &id, yes).await?;
            }
        },
        Commands::Notifications(cmd) => match cmd {
            NotificationCommands::List => commands::notifications::list(&config).await?,
            NotificationCommands::Read { id } => {
                commands::notifications::read(&config, &id).await?;
            }
        },
        Commands::Sync(cmd) => match cmd {
            SyncCommands::Now => commands::sync::now(&config).await?,
            SyncCommands::Watch { interval } => {
                if let Some(secs) = interval {
                    config.backend = config
                        .backend
                        .with_sync_interval(Duration::from_secs(secs.max(1)));
                }
                commands::sync::watch(&config).await?;
            }
            SyncCommands::Status => commands::sync::status(&config).await?,
        },
        Commands::Backup { output } => {
            commands::backup::create(&config, output.as_deref()).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "staffdesk", &mut io::stdout());
        }
    }

    Ok(())
}
