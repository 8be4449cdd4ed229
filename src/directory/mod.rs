//! Lawyer directory store
//!
//! The directory is the static collection of lawyer records the query
//! engine runs over. It is loaded once at startup and is read-only for the
//! process lifetime; any load or validation failure is fatal to the
//! subsystem (there is no meaningful partial directory).

pub mod categories;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Dataset bundled with the crate, used unless a path override is given
const EMBEDDED_DATASET: &str = include_str!("../../data/lawyers.json");

/// A lawyer record
///
/// Field names match the Justicaa UI dataset exactly. Records are immutable
/// once loaded; per-query data such as distance lives on the ranked result,
/// never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: String,
    pub name: String,
    /// Areas of practice; always non-empty
    pub specialization: Vec<String>,
    pub city: String,
    /// Neighborhood or area within the city
    pub location: String,
    pub pincode: String,
    pub address: String,
    /// Contact number; may be empty
    #[serde(default)]
    pub phone: String,
    /// Years of practice
    pub experience: u32,
    /// In [0, 5]; tie-break key in ranking, never a primary filter
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Display-only; not load-bearing in ranking
    pub verified: bool,
}

impl Lawyer {
    /// Coordinates of this lawyer's office
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// The read-only lawyer directory
#[derive(Debug, Clone)]
pub struct Directory {
    lawyers: Vec<Lawyer>,
}

impl Directory {
    /// Load the dataset bundled with the crate
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Directory(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON array of lawyer records
    pub fn from_json(json: &str) -> Result<Self> {
        let lawyers: Vec<Lawyer> = serde_json::from_str(json)
            .map_err(|e| Error::Directory(format!("Failed to parse dataset: {}", e)))?;

        for lawyer in &lawyers {
            validate_record(lawyer)?;
        }

        info!(count = lawyers.len(), "loaded lawyer directory");
        Ok(Self { lawyers })
    }

    /// All records, in dataset order
    pub fn all(&self) -> &[Lawyer] {
        &self.lawyers
    }

    pub fn len(&self) -> usize {
        self.lawyers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lawyers.is_empty()
    }
}

/// Validate a single record; any violation is fatal at load time
fn validate_record(lawyer: &Lawyer) -> Result<()> {
    lawyer.coords().validate().map_err(|e| {
        Error::Directory(format!("Record {}: {}", lawyer.id, e))
    })?;

    if lawyer.specialization.is_empty() {
        return Err(Error::Directory(format!(
            "Record {}: specialization must be non-empty",
            lawyer.id
        )));
    }

    if lawyer.rating < 0.0 || lawyer.rating > 5.0 {
        return Err(Error::Directory(format!(
            "Record {}: rating {} is out of range [0, 5]",
            lawyer.id, lawyer.rating
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Lawyer {
        Lawyer {
            id: id.to_string(),
            name: "Adv. Test".to_string(),
            specialization: vec!["Family Law".to_string()],
            city: "Gwalior".to_string(),
            location: "Lashkar".to_string(),
            pincode: "474001".to_string(),
            address: "Test address".to_string(),
            phone: String::new(),
            experience: 5,
            rating: 4.0,
            latitude: 26.2183,
            longitude: 78.1828,
            verified: false,
        }
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let directory = Directory::load_embedded().unwrap();
        assert!(!directory.is_empty());
        // Every record passes validation by construction of load
        for lawyer in directory.all() {
            assert!(!lawyer.specialization.is_empty());
            assert!(lawyer.rating >= 0.0 && lawyer.rating <= 5.0);
        }
    }

    #[test]
    fn test_embedded_dataset_has_gwalior_cluster() {
        let directory = Directory::load_embedded().unwrap();
        let gwalior = directory
            .all()
            .iter()
            .filter(|l| l.city == "Gwalior")
            .count();
        assert!(gwalior >= 3);
    }

    #[test]
    fn test_missing_phone_defaults_to_empty() {
        let json = r#"[{
            "id": "X1", "name": "Adv. No Phone",
            "specialization": ["Criminal Law"],
            "city": "Gwalior", "location": "Morar", "pincode": "474006",
            "address": "somewhere", "experience": 3, "rating": 3.5,
            "latitude": 26.23, "longitude": 78.22, "verified": false
        }]"#;
        let directory = Directory::from_json(json).unwrap();
        assert_eq!(directory.all()[0].phone, "");
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let mut lawyer = record("X1");
        lawyer.rating = 5.1;
        let json = serde_json::to_string(&vec![lawyer]).unwrap();
        assert!(Directory::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let mut lawyer = record("X1");
        lawyer.latitude = 95.0;
        let json = serde_json::to_string(&vec![lawyer]).unwrap();
        assert!(Directory::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_empty_specialization() {
        let mut lawyer = record("X1");
        lawyer.specialization.clear();
        let json = serde_json::to_string(&vec![lawyer]).unwrap();
        assert!(Directory::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Directory::from_json("not json").is_err());
    }
}
