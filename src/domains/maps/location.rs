//! Location descriptor resolution.
//!
//! Clients may hand us either a free-text address or a literal
//! `"lat, lng"` string; this module turns both into a [`Coordinate`].
//! Coordinate strings are parsed locally, free text is delegated to the
//! geocoding adapter. One attempt per call, no caching.

use schemars::JsonSchema;
use serde::Deserialize;

use super::client::MapsClient;
use super::error::{MapsError, MapsResult};
use super::types::Coordinate;

/// A client-supplied location: free text to geocode, or a literal
/// coordinate pair when `is_coordinates` is set.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LocationDescriptor {
    /// Address text, or a `"latitude, longitude"` string.
    #[schemars(description = "Address text, or 'latitude, longitude' when isCoordinates is true")]
    pub value: String,

    /// Whether `value` is a literal coordinate pair.
    #[serde(default, alias = "isCoordinates")]
    #[schemars(description = "Set to true when value is a 'latitude, longitude' pair")]
    pub is_coordinates: bool,
}

/// Parse a `"lat, lng"` string into a coordinate.
///
/// Requires exactly two comma-separated numeric tokens; whitespace around
/// tokens is ignored. Values outside valid latitude/longitude ranges are
/// rejected.
pub fn parse_coordinates(coord_string: &str) -> MapsResult<Coordinate> {
    let tokens: Vec<&str> = coord_string.split(',').collect();
    if tokens.len() != 2 {
        return Err(MapsError::invalid_input(format!(
            "expected 'latitude, longitude', got '{coord_string}'"
        )));
    }

    let mut values = [0.0_f64; 2];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token.trim().parse().map_err(|_| {
            MapsError::invalid_input(format!("'{}' is not a number", token.trim()))
        })?;
    }

    let coordinate = Coordinate {
        lat: values[0],
        lng: values[1],
    };
    check_range(coordinate.lat, coordinate.lng)?;
    Ok(coordinate)
}

/// Reject out-of-range latitude/longitude values.
pub fn check_range(lat: f64, lng: f64) -> MapsResult<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(MapsError::invalid_input(format!(
            "latitude {lat} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(MapsError::invalid_input(format!(
            "longitude {lng} outside [-180, 180]"
        )));
    }
    Ok(())
}

/// Resolve a descriptor to a coordinate: parse it when it claims to be a
/// coordinate pair, otherwise geocode it through the client.
pub fn resolve(client: &MapsClient, descriptor: &LocationDescriptor) -> MapsResult<Coordinate> {
    if descriptor.is_coordinates {
        parse_coordinates(&descriptor.value)
    } else {
        Ok(client.geocode(&descriptor.value)?.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pair() {
        let coord = parse_coordinates("37.4224764, -122.0842499").unwrap();
        assert_eq!(coord.lat, 37.4224764);
        assert_eq!(coord.lng, -122.0842499);
    }

    #[test]
    fn test_parse_without_whitespace() {
        let coord = parse_coordinates("-33.86,151.21").unwrap();
        assert_eq!(coord.lat, -33.86);
        assert_eq!(coord.lng, 151.21);
    }

    #[test]
    fn test_parse_extreme_but_valid_values() {
        assert!(parse_coordinates("90, 180").is_ok());
        assert!(parse_coordinates("-90, -180").is_ok());
        assert!(parse_coordinates("0, 0").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        assert!(matches!(
            parse_coordinates("37.42"),
            Err(MapsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_coordinates("37.42, -122.08, 15.0"),
            Err(MapsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_coordinates(""),
            Err(MapsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_tokens() {
        assert!(matches!(
            parse_coordinates("north, south"),
            Err(MapsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_coordinates("37.42, east"),
            Err(MapsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_coordinates("91, 0"),
            Err(MapsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_coordinates("0, 181"),
            Err(MapsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_coordinates("-90.5, 0"),
            Err(MapsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_descriptor_accepts_camel_case_flag() {
        let descriptor: LocationDescriptor =
            serde_json::from_str(r#"{"value": "25.03, 121.56", "isCoordinates": true}"#).unwrap();
        assert!(descriptor.is_coordinates);
    }

    #[test]
    fn test_descriptor_flag_defaults_to_false() {
        let descriptor: LocationDescriptor =
            serde_json::from_str(r#"{"value": "Taipei 101"}"#).unwrap();
        assert!(!descriptor.is_coordinates);
    }
}
