//! Output formatters
//!
//! Provides trait-based output formatting for search results.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::query::{LawyerQuery, RankedLawyer};
use serde::{Deserialize, Serialize};

/// A search result set with its originating query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: LawyerQuery,
    pub count: usize,
    pub results: Vec<RankedLawyer>,
}

impl SearchResponse {
    pub fn new(query: LawyerQuery, results: Vec<RankedLawyer>) -> Self {
        Self {
            count: results.len(),
            query,
            results,
        }
    }
}

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the search response
    fn format(&self, response: &SearchResponse) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON response".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable listing".to_string(),
        },
    ]
}
