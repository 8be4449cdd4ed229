//! justicaa-discovery: Lawyer Discovery and Ranking
//!
//! A library and CLI tool for the Justicaa legal-services app: given a
//! user's location (device coordinates, a named city, or free-text
//! city/pincode) and optional category/specialization filters, produce a
//! ranked, distance-annotated list of lawyers from a static directory.
//!
//! ## Features
//!
//! - Location resolution with a device → IP → manual-entry fallback chain
//! - Haversine distance ranking within a fixed 50 km radius
//! - Category and specialization filtering with a permissive mapping table
//! - Contact actions (call, directions) for the host UI
//!
//! ## Quick Start
//!
//! ```rust
//! use justicaa_discovery::coord::Coordinates;
//! use justicaa_discovery::directory::Directory;
//! use justicaa_discovery::query::{self, LawyerQuery};
//!
//! let directory = Directory::load_embedded().unwrap();
//! let gwalior = Coordinates::new(26.2183, 78.1828);
//!
//! // Nearest lawyers within 50 km, best rated first on ties
//! let results = query::run(directory.all(), &LawyerQuery::near(gwalior));
//! for r in &results {
//!     println!("{} - {:.1} km", r.lawyer.name, r.distance.unwrap());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod directory;
pub mod error;
pub mod format;
pub mod geo;
pub mod present;
pub mod query;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use directory::{Directory, Lawyer};
pub use error::{Error, Result};
pub use geo::{LocationSource, ResolvedLocation};
pub use query::{LawyerQuery, RankedLawyer};
