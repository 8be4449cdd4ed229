//! Great-circle distance (haversine formula)
//!
//! Distances are in kilometers. Callers are trusted to pass coordinates in
//! valid ranges; behavior on out-of-range input is unspecified.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;
use std::f64::consts::PI;

/// Calculate the great-circle distance between two points in kilometers
///
/// # Algorithm
/// Standard haversine:
/// - a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
/// - d = 2·R·atan2(√a, √(1-a)) with R = 6371 km
pub fn haversine_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat * PI / 180.0;
    let lat2 = p2.lat * PI / 180.0;
    let delta_lat = (p2.lat - p1.lat) * PI / 180.0;
    let delta_lng = (p2.lng - p1.lng) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two points in kilometers, rounded to one decimal place.
///
/// This is the display form attached to ranked results. Radius filtering
/// uses [`haversine_km`] directly so rounding can never admit a record that
/// is actually beyond the radius.
pub fn distance_km(p1: Coordinates, p2: Coordinates) -> f64 {
    round_tenth(haversine_km(p1, p2))
}

/// Round to one decimal place
pub fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_to_self_is_zero() {
        let gwalior = Coordinates::new(26.2183, 78.1828);
        assert_eq!(haversine_km(gwalior, gwalior), 0.0);
        assert_eq!(distance_km(gwalior, gwalior), 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let gwalior = Coordinates::new(26.2183, 78.1828);
        let agra = Coordinates::new(27.1767, 78.0081);
        assert_relative_eq!(
            haversine_km(gwalior, agra),
            haversine_km(agra, gwalior),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_distance_non_negative() {
        let points = [
            Coordinates::new(26.2183, 78.1828),
            Coordinates::new(-33.8688, 151.2093),
            Coordinates::new(0.0, 0.0),
            Coordinates::new(89.9, -179.9),
        ];
        for a in points {
            for b in points {
                assert!(haversine_km(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude is approximately 111 km
        let a = Coordinates::new(26.0, 78.0);
        let b = Coordinates::new(27.0, 78.0);
        let d = haversine_km(a, b);
        assert!((d - 111.0).abs() < 1.0, "distance {} should be ~111 km", d);
    }

    #[test]
    fn test_gwalior_to_agra() {
        // Known city pair, roughly 107 km apart
        let gwalior = Coordinates::new(26.2183, 78.1828);
        let agra = Coordinates::new(27.1767, 78.0081);
        let d = haversine_km(gwalior, agra);
        assert!((d - 107.0).abs() < 3.0, "distance {} should be ~107 km", d);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        assert_eq!(round_tenth(12.34), 12.3);
        assert_eq!(round_tenth(12.35), 12.4);
        assert_eq!(round_tenth(0.04), 0.0);
    }
}
