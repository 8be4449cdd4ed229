//! Category to specialization mapping
//!
//! Maps a coarse user-facing category (e.g. "Business Law") or an
//! AI-detected topic keyword (e.g. "criminal") to the set of lawyer
//! specializations it covers.
//!
//! Unknown keys map to the empty slice. Downstream filtering treats an
//! empty mapping as a no-op, so an unrecognized category shows everything
//! rather than nothing. That default is load-bearing; do not turn it into
//! an error.

/// Specializations covered by a category or topic keyword
///
/// Coarse categories are matched as-is; topic keywords from the AI chat
/// are lowercase single words.
pub fn specializations_for(category: &str) -> &'static [&'static str] {
    match category {
        "Business Law" => &[
            "Business Law",
            "Corporate Law",
            "Tax Law",
            "Contract Law",
            "Intellectual Property",
        ],
        "Family Law" => &["Family Law", "Divorce Law", "Child Custody"],
        "Criminal Law" => &["Criminal Law", "Bail Matters"],
        "Property Law" => &["Property Law", "Real Estate Law", "Land Disputes"],
        "Employment Law" => &["Employment Law", "Labour Law"],
        "Consumer Protection" => &["Consumer Law", "Consumer Protection"],
        "Cyber Law" => &["Cyber Law"],

        // AI-detected topic keywords
        "business" => &["Business Law", "Corporate Law", "Contract Law"],
        "family" => &["Family Law", "Divorce Law", "Child Custody"],
        "criminal" => &["Criminal Law", "Bail Matters"],
        "property" => &["Property Law", "Real Estate Law", "Land Disputes"],
        "employment" => &["Employment Law", "Labour Law"],
        "consumer" => &["Consumer Law", "Consumer Protection"],
        "cyber" => &["Cyber Law"],
        "tax" => &["Tax Law"],

        _ => &[],
    }
}
