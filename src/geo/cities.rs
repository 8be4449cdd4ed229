//! Supported-city and pincode tables
//!
//! Manual location entry resolves against these fixed tables. City names
//! match case-insensitively; pincodes are exact 6-digit lookups that
//! delegate to the city table. Coverage is a handful of Indian cities the
//! directory dataset spans; the tables are static and swappable only by
//! editing this module.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{LocationSource, ResolvedLocation};

/// A supported city with precomputed center coordinates
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Cities with precomputed center coordinates
pub const SUPPORTED_CITIES: &[City] = &[
    City { name: "Gwalior", lat: 26.2183, lng: 78.1828 },
    City { name: "Morena", lat: 26.4948, lng: 77.9921 },
    City { name: "Dabra", lat: 25.8857, lng: 78.3322 },
    City { name: "Agra", lat: 27.1767, lng: 78.0081 },
    City { name: "Delhi", lat: 28.6139, lng: 77.209 },
    City { name: "Mumbai", lat: 19.076, lng: 72.8777 },
    City { name: "Bengaluru", lat: 12.9716, lng: 77.5946 },
    City { name: "Indore", lat: 22.7196, lng: 75.8577 },
    City { name: "Bhopal", lat: 23.2599, lng: 77.4126 },
    City { name: "Jaipur", lat: 26.9124, lng: 75.7873 },
    City { name: "Lucknow", lat: 26.8467, lng: 80.9462 },
    City { name: "Pune", lat: 18.5204, lng: 73.8567 },
    City { name: "Chennai", lat: 13.0827, lng: 80.2707 },
    City { name: "Hyderabad", lat: 17.385, lng: 78.4867 },
    City { name: "Kolkata", lat: 22.5726, lng: 88.3639 },
];

/// Pincode to city name
fn city_for_pincode(pincode: &str) -> Option<&'static str> {
    match pincode {
        "474001" | "474002" | "474006" | "474011" => Some("Gwalior"),
        "476001" => Some("Morena"),
        "475110" => Some("Dabra"),
        "282001" | "282002" => Some("Agra"),
        "110001" => Some("Delhi"),
        "400001" => Some("Mumbai"),
        "560001" => Some("Bengaluru"),
        "452001" | "452010" => Some("Indore"),
        "462001" | "462011" => Some("Bhopal"),
        "302001" => Some("Jaipur"),
        "226001" => Some("Lucknow"),
        "411001" => Some("Pune"),
        "600001" => Some("Chennai"),
        "500001" => Some("Hyderabad"),
        "700001" => Some("Kolkata"),
        _ => None,
    }
}

/// Resolve a city name against the supported-cities table
///
/// Matching is case-insensitive; the resolved label carries the canonical
/// casing from the table.
pub fn resolve_city(name: &str) -> Result<ResolvedLocation> {
    let trimmed = name.trim();
    SUPPORTED_CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(trimmed))
        .map(|city| ResolvedLocation {
            coords: Coordinates::new(city.lat, city.lng),
            source: LocationSource::City,
            label: city.name.to_string(),
        })
        .ok_or_else(|| Error::LocationNotFound(format!("city '{}' is not supported", trimmed)))
}

/// Resolve free-text manual input: a 6-digit pincode or a city name
pub fn resolve_free_text(input: &str) -> Result<ResolvedLocation> {
    let trimmed = input.trim();

    if is_pincode(trimmed) {
        return match city_for_pincode(trimmed) {
            Some(city) => resolve_city(city),
            None => Err(Error::LocationNotFound(format!(
                "pincode '{}' is not in the coverage area",
                trimmed
            ))),
        };
    }

    resolve_city(trimmed)
}

fn is_pincode(input: &str) -> bool {
    input.len() == 6 && input.chars().all(|c| c.is_ascii_digit())
}
