//! Mercadito CLI - account management from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Create the demo accounts (first run only)
//! mercadito seed
//!
//! # Register an account
//! mercadito register -n "Ana Martínez" -e ana@test.com -p 'Secret1!' \
//!     --phone "+56 9 6543 2109" --user-type buyer
//!
//! # Log in, inspect the session, log out
//! mercadito login -e ana@test.com -p 'Secret1!'
//! mercadito whoami
//! mercadito logout --yes
//! ```
//!
//! # Commands
//!
//! - `register` - Create an account
//! - `login` / `logout` / `whoami` - Session management
//! - `users` - List registered accounts
//! - `seed` - Create demo accounts
//! - `watch` - Follow the session slot and react when it changes
//!
//! Account data is stored as JSON documents under the directory named by
//! `MERCADITO_DATA_DIR` (default `.mercadito`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use mercadito_auth::{AuthService, FileStorage};
use mercadito_core::UserType;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "mercadito")]
#[command(author, version, about = "Mercadito account tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register(RegisterArgs),
    /// Log in with an email and password
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Close the active session
    Logout {
        /// Confirm the logout without prompting
        #[arg(long)]
        yes: bool,
    },
    /// Show the profile of the active session
    Whoami,
    /// List registered accounts
    Users,
    /// Create the demo accounts (no-op after the first run)
    Seed,
    /// Follow the session slot and react when it changes
    Watch,
}

/// Arguments for `mercadito register`.
#[derive(Args)]
struct RegisterArgs {
    /// Full name
    #[arg(short, long)]
    name: String,

    /// Email address (unique, case-insensitive)
    #[arg(short, long)]
    email: String,

    /// Password (at least 6 characters)
    #[arg(short, long)]
    password: String,

    /// Repeat of the password; defaults to the password itself
    #[arg(long)]
    confirm_password: Option<String>,

    /// Chilean mobile number, e.g. "+56 9 1234 5678"
    #[arg(long)]
    phone: String,

    /// Account type (buyer or seller)
    #[arg(long, default_value = "buyer")]
    user_type: UserType,

    /// Business name (sellers)
    #[arg(long)]
    business_name: Option<String>,

    /// Tax id (sellers)
    #[arg(long)]
    tax_id: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env();
    let storage = Arc::new(FileStorage::open(&config.data_dir)?);
    let service = AuthService::new(storage);

    match cli.command {
        Commands::Register(args) => commands::account::register(&service, args).await?,
        Commands::Login { email, password } => {
            commands::account::login(&service, &email, password).await?;
        }
        Commands::Logout { yes } => commands::account::logout(&service, yes)?,
        Commands::Whoami => commands::account::whoami(&service)?,
        Commands::Users => commands::account::users(&service)?,
        Commands::Seed => commands::seed::demo_accounts(&service).await?,
        Commands::Watch => commands::watch::session(&service).await?,
    }
    Ok(())
}
