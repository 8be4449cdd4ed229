//! Locate command handler
//!
//! Resolves a location input without running a search. Mirrors the
//! resolver surface the UI uses: free-text manual entry or IP fallback.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{self, cities};
use clap::Args;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// City name or 6-digit pincode
    #[arg(conflicts_with = "here")]
    pub input: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long)]
    pub here: bool,
}

/// Run the locate command
pub async fn run(args: LocateArgs) -> Result<()> {
    let resolved = if args.here {
        let config = Config::load()?;
        geo::get_ip_locator(&config).locate().await?
    } else if let Some(input) = &args.input {
        cities::resolve_free_text(input)?
    } else {
        return Err(Error::LocationNotFound(
            "provide a city name, a pincode, or --here".to_string(),
        ));
    };

    println!("{}", resolved.label);
    println!("  lat: {}", resolved.coords.lat);
    println!("  lng: {}", resolved.coords.lng);
    println!("  source: {}", resolved.source);

    Ok(())
}
