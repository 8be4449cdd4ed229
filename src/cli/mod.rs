//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod cities;
pub mod config;
pub mod contact;
pub mod locate;
pub mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Lawyer discovery for the Justicaa legal-services app
#[derive(Parser)]
#[command(name = "justicaa-discovery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the lawyer directory
    Search(search::SearchArgs),

    /// Resolve a location input to coordinates
    Locate(locate::LocateArgs),

    /// Contact actions (call, directions) for one lawyer
    Contact(contact::ContactArgs),

    /// List supported cities
    Cities(cities::CitiesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Locate(args) => locate::run(args).await,
        Commands::Contact(args) => contact::run(args),
        Commands::Cities(args) => cities::run(args),
        Commands::Config(args) => config::run(args),
    }
}
