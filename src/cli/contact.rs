//! Contact command handler
//!
//! Shows the call and directions actions for one lawyer, the way the UI
//! would construct them.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::present::{call_action, dial_uri, directions, CallAction, DirectionsAction};
use clap::Args;

/// Contact command arguments
#[derive(Args)]
pub struct ContactArgs {
    /// Lawyer record id (e.g. "L001")
    pub id: String,

    /// Origin latitude for routing
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Origin longitude for routing
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Treat the client as mobile-class (direct dial)
    #[arg(long)]
    pub mobile: bool,
}

/// Run the contact command
pub fn run(args: ContactArgs) -> Result<()> {
    let config = Config::load()?;
    let directory = super::search::load_directory(&config)?;

    let lawyer = directory
        .all()
        .iter()
        .find(|l| l.id == args.id)
        .ok_or_else(|| Error::Directory(format!("No lawyer with id '{}'", args.id)))?;

    println!("{} ({})", lawyer.name, lawyer.city);

    match call_action(lawyer, args.mobile) {
        CallAction::Dial { number, direct } => {
            println!("  call: {} ({})", number, if direct { "direct dial" } else { "manual dial" });
            println!("  uri:  {}", dial_uri(&number));
        }
        CallAction::Unavailable { lawyer_name } => {
            println!("  call: number unavailable for {}", lawyer_name);
        }
    }

    let origin = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let coords = Coordinates::new(lat, lng);
            coords.validate()?;
            Some(coords)
        }
        _ => None,
    };

    match directions(&config, origin, lawyer)? {
        DirectionsAction::Route { url } => println!("  route:  {}", url),
        DirectionsAction::Search { url } => println!("  search: {}", url),
    }

    Ok(())
}
