//! Google Maps wire and output types.
//!
//! Two families live here:
//!
//! - **Output types**: the stable, client-facing schemas returned by the
//!   tools. These carry `Serialize` and `JsonSchema` and never change shape
//!   with provider quirks.
//! - **Wire types**: deserialization targets for the provider's JSON
//!   responses. Optional everywhere the provider may omit a field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output types
// ============================================================================

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Travel mode for directions and distance-matrix requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// The provider's wire name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

/// A latitude/longitude input point, as supplied to the elevation tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// A `{value, text}` pair as reported by the provider for distances
/// (meters) and durations (seconds). The two are always reported together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextValue {
    /// Numeric value in provider units (meters or seconds).
    pub value: i64,
    /// Localized, human-readable rendering.
    pub text: String,
}

/// Result of a forward geocode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeocodeResult {
    pub location: Coordinate,
    pub formatted_address: String,
    pub place_id: String,
}

/// One component of a structured address (street, locality, country, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Result of a reverse geocode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReverseGeocodeResult {
    pub formatted_address: String,
    pub place_id: String,
    pub address_components: Vec<AddressComponent>,
}

/// Summary projection of a place, as returned by nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceSummary {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub address: Option<String>,
    pub location: Option<Coordinate>,
    pub rating: Option<f64>,
    pub total_ratings: Option<u64>,
    pub open_now: Option<bool>,
    pub types: Vec<String>,
    pub price_level: Option<u8>,
    pub vicinity: Option<String>,
}

/// A photo reference with its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PhotoInfo {
    pub photo_reference: Option<String>,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

/// A user review attached to a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewInfo {
    pub rating: Option<f64>,
    pub text: Option<String>,
    /// Review timestamp in epoch seconds.
    pub time: Option<i64>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub language: Option<String>,
    pub profile_photo_url: Option<String>,
    pub relative_time_description: Option<String>,
}

/// Detailed projection of a place, as returned by the place-details tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub place_id: String,
    pub address: Option<String>,
    pub location: Option<Coordinate>,
    pub rating: Option<f64>,
    pub total_ratings: Option<u64>,
    pub open_now: Option<bool>,
    pub opening_hours: Vec<String>,
    pub phone: Option<String>,
    pub international_phone: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub price_level: Option<u8>,
    pub types: Vec<String>,
    pub photos: Vec<PhotoInfo>,
    pub reviews: Vec<ReviewInfo>,
}

/// Result of a directions request, truncated to the first route's first leg.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteResult {
    pub summary: String,
    pub total_distance: TextValue,
    pub total_duration: TextValue,
    /// `YYYY-MM-DD HH:MM:SS` local time, or empty when the provider
    /// reported no arrival time.
    pub arrival_time: String,
    /// `YYYY-MM-DD HH:MM:SS` local time, or empty when the provider
    /// reported no departure time.
    pub departure_time: String,
    /// The provider's raw routes array, passed through for consumers that
    /// need legs, steps, or polylines.
    pub routes: serde_json::Value,
}

/// Result of a distance-matrix request.
///
/// `distances` and `durations` are parallel arrays indexed
/// `[origin][destination]`; a `None` cell means the provider found no route
/// between that pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistanceMatrixResult {
    pub distances: Vec<Vec<Option<TextValue>>>,
    pub durations: Vec<Vec<Option<TextValue>>>,
    pub origin_addresses: Vec<String>,
    pub destination_addresses: Vec<String>,
}

/// Elevation of a single point, order-preserving with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ElevationSample {
    /// Elevation in meters above sea level.
    pub elevation: f64,
    pub location: Coordinate,
}

// ============================================================================
// Wire types (provider JSON)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeEntry {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesNearbyResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceEntry {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub types: Vec<String>,
    pub price_level: Option<u8>,
    pub vicinity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub result: Option<PlaceDetailEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetailEntry {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub opening_hours: Option<OpeningHours>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PhotoEntry>,
    #[serde(default)]
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoEntry {
    pub photo_reference: Option<String>,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEntry {
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub time: Option<i64>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub language: Option<String>,
    pub profile_photo_url: Option<String>,
    pub relative_time_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub origin_addresses: Vec<String>,
    #[serde(default)]
    pub destination_addresses: Vec<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<LegEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegEntry {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub arrival_time: Option<TimeInfo>,
    pub departure_time: Option<TimeInfo>,
}

/// A provider timestamp: epoch seconds plus a localized rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeInfo {
    pub value: Option<i64>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevationResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<ElevationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevationEntry {
    pub elevation: f64,
    pub location: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocode_response_parses_full_entry() {
        let resp: GeocodeResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA",
                "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
                "geometry": { "location": { "lat": 37.4224764, "lng": -122.0842499 } },
                "address_components": [
                    { "long_name": "1600", "short_name": "1600", "types": ["street_number"] }
                ]
            }]
        }))
        .unwrap();

        assert_eq!(resp.status, "OK");
        let entry = &resp.results[0];
        assert_eq!(entry.geometry.location.lat, 37.4224764);
        assert_eq!(entry.address_components[0].long_name, "1600");
    }

    #[test]
    fn test_geocode_response_zero_results_has_empty_vec() {
        let resp: GeocodeResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.error_message.is_none());
    }

    #[test]
    fn test_place_entry_tolerates_missing_fields() {
        let entry: PlaceEntry = serde_json::from_value(json!({
            "name": "Blue Bottle Coffee",
            "types": ["cafe", "food"]
        }))
        .unwrap();
        assert_eq!(entry.name.as_deref(), Some("Blue Bottle Coffee"));
        assert!(entry.rating.is_none());
        assert_eq!(entry.types.len(), 2);
    }

    #[test]
    fn test_matrix_element_not_found_cell() {
        let element: MatrixElement =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();
        assert!(element.distance.is_none());
        assert!(element.duration.is_none());
    }

    #[test]
    fn test_travel_mode_wire_names() {
        let mode: TravelMode = serde_json::from_value(json!("transit")).unwrap();
        assert_eq!(mode, TravelMode::Transit);
        assert_eq!(TravelMode::default().as_str(), "driving");
        assert!(serde_json::from_value::<TravelMode>(json!("flying")).is_err());
    }

    #[test]
    fn test_route_result_serializes_stable_field_names() {
        let result = RouteResult {
            summary: "US-101 S".to_string(),
            total_distance: TextValue {
                value: 6300,
                text: "6.3 km".to_string(),
            },
            total_duration: TextValue {
                value: 540,
                text: "9 mins".to_string(),
            },
            arrival_time: String::new(),
            departure_time: String::new(),
            routes: json!([]),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["total_distance"]["value"], 6300);
        assert_eq!(value["total_duration"]["text"], "9 mins");
        assert_eq!(value["arrival_time"], "");
    }
}
