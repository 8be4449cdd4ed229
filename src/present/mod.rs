//! Presentation adapter
//!
//! Maps a ranked lawyer to the contact actions the host UI executes: a
//! telephony dial intent and a map routing/search URL. The adapter only
//! constructs the actions; dialing and navigation happen in the platform
//! layer.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::directory::Lawyer;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The "call" action for one lawyer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CallAction {
    /// A usable number exists; `direct` is true on mobile-class clients
    /// that can place the call themselves, false when the UI should show
    /// the number for manual dialing.
    Dial { number: String, direct: bool },
    /// No usable number on record; show an informational message instead
    Unavailable { lawyer_name: String },
}

/// The "directions" action for one lawyer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DirectionsAction {
    /// Origin coordinates known: origin-to-destination routing
    Route { url: String },
    /// No origin: destination-only search over the lawyer's address text
    Search { url: String },
}

/// Build the call action for a lawyer
///
/// An empty or whitespace phone field never reaches a dial intent.
pub fn call_action(lawyer: &Lawyer, is_mobile_like: bool) -> CallAction {
    let number = lawyer.phone.trim();
    if number.is_empty() {
        CallAction::Unavailable {
            lawyer_name: lawyer.name.clone(),
        }
    } else {
        CallAction::Dial {
            number: number.to_string(),
            direct: is_mobile_like,
        }
    }
}

/// `tel:` URI for a dialable number, with separators stripped
pub fn dial_uri(number: &str) -> String {
    let cleaned: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", cleaned)
}

/// Build the directions action for a lawyer
///
/// With a known origin this is a routing request; otherwise a map search
/// over the lawyer's street address and city.
pub fn directions(
    config: &Config,
    origin: Option<Coordinates>,
    lawyer: &Lawyer,
) -> Result<DirectionsAction> {
    let provider = config.url_provider(None)?;

    match origin {
        Some(origin) => {
            let url = provider
                .directions
                .replace("{olat}", &origin.lat.to_string())
                .replace("{olng}", &origin.lng.to_string())
                .replace("{dlat}", &lawyer.latitude.to_string())
                .replace("{dlng}", &lawyer.longitude.to_string());
            Ok(DirectionsAction::Route { url })
        }
        None => {
            let query = format!("{}, {}", lawyer.address, lawyer.city);
            let url = provider
                .search
                .replace("{query}", &urlencoding::encode(&query));
            Ok(DirectionsAction::Search { url })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lawyer(phone: &str) -> Lawyer {
        Lawyer {
            id: "L001".to_string(),
            name: "Adv. Ramesh Sharma".to_string(),
            specialization: vec!["Criminal Law".to_string()],
            city: "Gwalior".to_string(),
            location: "Lashkar".to_string(),
            pincode: "474001".to_string(),
            address: "12 Jayendraganj, Lashkar".to_string(),
            phone: phone.to_string(),
            experience: 15,
            rating: 4.6,
            latitude: 26.2124,
            longitude: 78.1772,
            verified: true,
        }
    }

    #[test]
    fn test_call_action_with_number() {
        let action = call_action(&lawyer("+91 98260 11223"), true);
        assert_eq!(
            action,
            CallAction::Dial {
                number: "+91 98260 11223".to_string(),
                direct: true,
            }
        );
    }

    #[test]
    fn test_call_action_desktop_is_not_direct() {
        match call_action(&lawyer("+91 98260 11223"), false) {
            CallAction::Dial { direct, .. } => assert!(!direct),
            other => panic!("expected dial, got {:?}", other),
        }
    }

    #[test]
    fn test_call_action_empty_phone() {
        let action = call_action(&lawyer(""), true);
        assert_eq!(
            action,
            CallAction::Unavailable {
                lawyer_name: "Adv. Ramesh Sharma".to_string(),
            }
        );
    }

    #[test]
    fn test_call_action_whitespace_phone() {
        assert!(matches!(
            call_action(&lawyer("   "), true),
            CallAction::Unavailable { .. }
        ));
    }

    #[test]
    fn test_dial_uri_strips_separators() {
        assert_eq!(dial_uri("+91 98260 11223"), "tel:+919826011223");
        assert_eq!(dial_uri("0751-244-1122"), "tel:07512441122");
    }

    #[test]
    fn test_directions_with_origin_routes() {
        let config = Config::default();
        let origin = Coordinates::new(26.2183, 78.1828);
        let action = directions(&config, Some(origin), &lawyer("x")).unwrap();

        match action {
            DirectionsAction::Route { url } => {
                assert!(url.contains("origin=26.2183,78.1828"));
                assert!(url.contains("destination=26.2124,78.1772"));
            }
            other => panic!("expected route, got {:?}", other),
        }
    }

    #[test]
    fn test_directions_without_origin_searches() {
        let config = Config::default();
        let action = directions(&config, None, &lawyer("x")).unwrap();

        match action {
            DirectionsAction::Search { url } => {
                assert!(url.starts_with("https://www.google.com/maps/search/"));
                // Address is percent-encoded
                assert!(url.contains("query=12%20Jayendraganj"));
            }
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_directions_respects_provider() {
        let mut config = Config::default();
        config.set("url.default", "openstreetmap").unwrap();
        let origin = Coordinates::new(26.2183, 78.1828);

        match directions(&config, Some(origin), &lawyer("x")).unwrap() {
            DirectionsAction::Route { url } => assert!(url.contains("openstreetmap.org")),
            other => panic!("expected route, got {:?}", other),
        }
    }

    #[test]
    fn test_call_action_serialization() {
        let action = call_action(&lawyer(""), false);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "unavailable");
        assert_eq!(json["lawyer_name"], "Adv. Ramesh Sharma");
    }
}
