//! JSON output formatter

use crate::error::Result;
use crate::format::{OutputFormatter, SearchResponse};

/// JSON formatter - full response, pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &SearchResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}
