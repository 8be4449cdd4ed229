//! justicaa-discovery CLI entry point
//!
//! Lawyer discovery and ranking - CLI driver for the library

use justicaa_discovery::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
