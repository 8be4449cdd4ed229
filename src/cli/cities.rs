//! Cities command handler
//!
//! Lists the supported-cities table manual entry resolves against.

use crate::error::Result;
use crate::geo::cities::SUPPORTED_CITIES;
use clap::Args;

/// Cities command arguments
#[derive(Args)]
pub struct CitiesArgs {
    /// Include coordinates in the listing
    #[arg(long)]
    pub coords: bool,
}

/// Run the cities command
pub fn run(args: CitiesArgs) -> Result<()> {
    for city in SUPPORTED_CITIES {
        if args.coords {
            println!("{:<12} {:.4}, {:.4}", city.name, city.lat, city.lng);
        } else {
            println!("{}", city.name);
        }
    }
    Ok(())
}
