//! Human-readable text formatter

use crate::error::Result;
use crate::format::{OutputFormatter, SearchResponse};
use std::fmt::Write;

/// Text formatter - one block per lawyer, nearest first
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable listing"
    }

    fn format(&self, response: &SearchResponse) -> Result<String> {
        let mut out = String::new();

        if response.results.is_empty() {
            out.push_str("No matching lawyers found.\n");
            return Ok(out);
        }

        let _ = writeln!(out, "{} lawyer(s) found:\n", response.count);

        for (i, result) in response.results.iter().enumerate() {
            let lawyer = &result.lawyer;
            let _ = writeln!(out, "{}. {}", i + 1, lawyer.name);
            let _ = writeln!(out, "   {}", lawyer.specialization.join(", "));
            let _ = writeln!(out, "   {}, {} {}", lawyer.location, lawyer.city, lawyer.pincode);

            if let Some(km) = result.distance {
                let _ = writeln!(out, "   {:.1} km away", km);
            }

            let _ = writeln!(
                out,
                "   {:.1}/5 | {} yrs{}",
                lawyer.rating,
                lawyer.experience,
                if lawyer.verified { " | verified" } else { "" }
            );

            if lawyer.phone.trim().is_empty() {
                let _ = writeln!(out, "   phone: unavailable");
            } else {
                let _ = writeln!(out, "   phone: {}", lawyer.phone);
            }

            out.push('\n');
        }

        Ok(out)
    }
}
