//! Filter & rank engine
//!
//! The central query operation: given the directory and one query, produce
//! a ranked, distance-annotated list of matching lawyers. The engine is a
//! pure function over the input slice; it never mutates records and cannot
//! fail on well-formed input. An empty result is a valid outcome, not an
//! error.

use crate::constants::search::SEARCH_RADIUS_KM;
use crate::coord::distance::{haversine_km, round_tenth};
use crate::coord::Coordinates;
use crate::directory::{categories, Lawyer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Sentinel specialization value meaning "no specialization filter"
const SPECIALIZATION_ALL: &str = "all";

/// One search action's parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LawyerQuery {
    /// Point distances are measured from; absent for city-only filtering
    pub origin: Option<Coordinates>,
    /// Exact-match city filter, used only when `origin` is absent
    pub city: Option<String>,
    /// Coarse category, resolved via the category mapping table
    pub category: Option<String>,
    /// Exact specialization filter; the sentinel "all" disables it
    pub specialization: Option<String>,
    /// Only applied when `origin` is present
    pub radius_km: f64,
}

impl Default for LawyerQuery {
    fn default() -> Self {
        Self {
            origin: None,
            city: None,
            category: None,
            specialization: None,
            radius_km: SEARCH_RADIUS_KM,
        }
    }
}

impl LawyerQuery {
    /// Query everything within the standard radius of an origin point
    pub fn near(origin: Coordinates) -> Self {
        Self {
            origin: Some(origin),
            ..Self::default()
        }
    }

    /// Query by exact city name, without distance annotation
    pub fn in_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }
}

/// A lawyer record with its per-query distance annotation
///
/// `distance` is kilometers from the query origin, rounded to one decimal;
/// `None` when the query had no origin coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLawyer {
    #[serde(flatten)]
    pub lawyer: Lawyer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Run a query against the directory records
///
/// Stages run in a fixed order: distance/city filtering, category
/// filtering, specialization filtering, then the two-tier sort (distance
/// ascending, rating descending as tie-break).
pub fn run(lawyers: &[Lawyer], query: &LawyerQuery) -> Vec<RankedLawyer> {
    let mut results: Vec<RankedLawyer> = match query.origin {
        Some(origin) => annotate_within_radius(lawyers, origin, query.radius_km),
        None => filter_by_city(lawyers, query.city.as_deref()),
    };

    if let Some(category) = query.category.as_deref() {
        let mapped = categories::specializations_for(category);
        // An unmapped category is a no-op, not a filter-everything-out
        if !mapped.is_empty() {
            results.retain(|r| {
                r.lawyer
                    .specialization
                    .iter()
                    .any(|s| mapped.contains(&s.as_str()))
            });
        }
    }

    if let Some(specialization) = query.specialization.as_deref() {
        if !specialization.eq_ignore_ascii_case(SPECIALIZATION_ALL) {
            results.retain(|r| {
                r.lawyer
                    .specialization
                    .iter()
                    .any(|s| s == specialization)
            });
        }
    }

    results.sort_by(compare_ranked);

    debug!(
        matched = results.len(),
        total = lawyers.len(),
        "ranked lawyer query"
    );
    results
}

/// Attach rounded distances and drop records beyond the radius
///
/// Filtering compares the raw haversine value so rounding can never admit
/// a record whose true distance exceeds the radius.
fn annotate_within_radius(
    lawyers: &[Lawyer],
    origin: Coordinates,
    radius_km: f64,
) -> Vec<RankedLawyer> {
    lawyers
        .iter()
        .filter_map(|lawyer| {
            let km = haversine_km(origin, lawyer.coords());
            if km <= radius_km {
                Some(RankedLawyer {
                    lawyer: lawyer.clone(),
                    distance: Some(round_tenth(km)),
                })
            } else {
                None
            }
        })
        .collect()
}

/// City branch: exact match on the controlled city vocabulary, no distances
fn filter_by_city(lawyers: &[Lawyer], city: Option<&str>) -> Vec<RankedLawyer> {
    lawyers
        .iter()
        .filter(|lawyer| city.map_or(true, |c| lawyer.city == c))
        .map(|lawyer| RankedLawyer {
            lawyer: lawyer.clone(),
            distance: None,
        })
        .collect()
}

/// Two-tier ordering: distance ascending, then rating descending
///
/// A record with a distance sorts before one without. The surrounding sort
/// is stable, so equal keys keep dataset order.
fn compare_ranked(a: &RankedLawyer, b: &RankedLawyer) -> Ordering {
    match (a.distance, b.distance) {
        (Some(da), Some(db)) => da
            .total_cmp(&db)
            .then_with(|| b.lawyer.rating.total_cmp(&a.lawyer.rating)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.lawyer.rating.total_cmp(&a.lawyer.rating),
    }
}
