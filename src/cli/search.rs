//! Search command handler
//!
//! Runs a directory query from one of the supported location inputs.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::directory::Directory;
use crate::error::Result;
use crate::format::{available_formats, get_formatter, SearchResponse};
use crate::geo::{self, cities};
use crate::query::{self, LawyerQuery};
use clap::Args;
use std::path::Path;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Origin latitude
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Origin longitude
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// City name or 6-digit pincode, resolved to city-center coordinates
    #[arg(long, conflicts_with_all = ["lat", "lng", "here", "city"])]
    pub at: Option<String>,

    /// Exact city filter without distance ranking
    #[arg(long, conflicts_with_all = ["lat", "lng", "here"])]
    pub city: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub here: bool,

    /// Category filter (e.g. "Business Law" or an AI topic like "criminal")
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Specialization filter (exact match; "all" disables)
    #[arg(long, short = 's')]
    pub specialization: Option<String>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    if args.list_formats {
        for info in available_formats() {
            println!("{:<8} {}", info.name, info.description);
        }
        return Ok(());
    }

    let config = Config::load()?;
    let directory = load_directory(&config)?;

    // Determine the query origin
    let mut query = LawyerQuery::default();
    if args.here {
        let location = geo::get_ip_locator(&config).locate().await?;
        eprintln!("Using IP location: {}", location.label);
        query.origin = Some(location.coords);
    } else if let Some(input) = &args.at {
        let location = cities::resolve_free_text(input)?;
        eprintln!("Resolved to: {}", location.label);
        query.origin = Some(location.coords);
    } else if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let origin = Coordinates::new(lat, lng);
        origin.validate()?;
        query.origin = Some(origin);
    } else if let Some(city) = &args.city {
        query.city = Some(city.clone());
    }

    query.category = args.category;
    query.specialization = args.specialization;

    let mut results = query::run(directory.all(), &query);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    let response = SearchResponse::new(query, results);

    let formatter = get_formatter(&args.format).ok_or_else(|| {
        crate::error::Error::Config(format!("Unknown output format: {}", args.format))
    })?;
    print!("{}", formatter.format(&response)?);

    Ok(())
}

/// Load the directory, honoring the configured dataset override
pub fn load_directory(config: &Config) -> Result<Directory> {
    if config.directory.path.is_empty() {
        Directory::load_embedded()
    } else {
        Directory::from_path(Path::new(&config.directory.path))
    }
}
