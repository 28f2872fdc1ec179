//! Google Maps Web Services client.
//!
//! One method per capability; each issues exactly one blocking HTTP GET,
//! validates the provider's per-call `status`, and reshapes the wire
//! response into the stable output schema. Query-parameter assembly and
//! response reshaping are pure functions so the provider contract can be
//! tested without a network.
//!
//! Calls are attempted exactly once: no retry, no backoff, no client-side
//! timeout override. Callers on the async runtime must move calls onto a
//! dedicated thread (reqwest's blocking client cannot run inside tokio).

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{MapsError, MapsResult};
use super::types::{
    Coordinate, DirectionsResponse, DistanceMatrixResponse, DistanceMatrixResult, ElevationResponse,
    ElevationSample, GeocodeResponse, GeocodeResult, LatLng, PlaceDetail, PlaceDetailsResponse,
    PlaceSummary, PlacesNearbyResponse, ReverseGeocodeResult, RouteResult, TravelMode,
};

/// Base URL for all Google Maps Web Service endpoints.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from the place-details endpoint. Matches the
/// [`PlaceDetail`] projection.
const PLACE_DETAIL_FIELDS: &[&str] = &[
    "name",
    "place_id",
    "rating",
    "formatted_address",
    "geometry",
    "opening_hours",
    "reviews",
    "formatted_phone_number",
    "international_phone_number",
    "website",
    "url",
    "price_level",
    "type",
    "photo",
    "user_ratings_total",
];

/// The Google Maps provider adapter.
///
/// Holds the API credential and default response language for the process
/// lifetime. Immutable after construction and safe to share across
/// concurrent tool invocations without locking.
pub struct MapsClient {
    http: reqwest::blocking::Client,
    api_key: String,
    language: String,
    base_url: String,
}

impl MapsClient {
    /// Create a new client with the given credential and default language.
    pub fn new(api_key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            language: language.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the provider base URL.
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The default response language sent with every provider call.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Convert an address or place name to a coordinate.
    pub fn geocode(&self, address: &str) -> MapsResult<GeocodeResult> {
        if address.trim().is_empty() {
            return Err(MapsError::invalid_input("address must not be empty"));
        }
        let params = geocode_params(address, &self.language);
        let response: GeocodeResponse = self.fetch("geocode/json", &params)?;
        shape_geocode(response)
    }

    /// Convert a coordinate to its nearest address.
    pub fn reverse_geocode(&self, lat: f64, lng: f64) -> MapsResult<ReverseGeocodeResult> {
        super::location::check_range(lat, lng)?;
        let params = reverse_geocode_params(lat, lng, &self.language);
        let response: GeocodeResponse = self.fetch("geocode/json", &params)?;
        shape_reverse_geocode(response)
    }

    /// Search for places around a coordinate.
    ///
    /// An empty result set is a success (empty list), never a failure.
    /// When `min_rating` is given, results are post-filtered client-side;
    /// places without a rating count as rated 0.
    pub fn nearby_search(
        &self,
        location: Coordinate,
        radius: u32,
        keyword: Option<&str>,
        open_now: bool,
        min_rating: Option<f64>,
    ) -> MapsResult<Vec<PlaceSummary>> {
        let params = nearby_params(location, radius, keyword, open_now, &self.language);
        let response: PlacesNearbyResponse = self.fetch("place/nearbysearch/json", &params)?;
        shape_nearby(response, min_rating)
    }

    /// Fetch the detailed projection of a single place.
    pub fn place_details(&self, place_id: &str) -> MapsResult<PlaceDetail> {
        if place_id.trim().is_empty() {
            return Err(MapsError::invalid_input("place_id must not be empty"));
        }
        let params = place_details_params(place_id, &self.language);
        let response: PlaceDetailsResponse = self.fetch("place/details/json", &params)?;
        shape_place_details(response, place_id)
    }

    /// Compute distances and durations between each origin/destination pair.
    pub fn distance_matrix(
        &self,
        origins: &[String],
        destinations: &[String],
        mode: TravelMode,
    ) -> MapsResult<DistanceMatrixResult> {
        if origins.is_empty() || destinations.is_empty() {
            return Err(MapsError::invalid_input(
                "origins and destinations must not be empty",
            ));
        }
        let params = distance_matrix_params(origins, destinations, mode, &self.language);
        let response: DistanceMatrixResponse = self.fetch("distancematrix/json", &params)?;
        shape_distance_matrix(response)
    }

    /// Fetch directions between two points, truncated to the first route's
    /// first leg. `departure` and `arrival` are epoch seconds; when both are
    /// supplied, departure wins and arrival is ignored.
    pub fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
        departure: Option<i64>,
        arrival: Option<i64>,
    ) -> MapsResult<RouteResult> {
        let params = directions_params(origin, destination, mode, departure, arrival, &self.language);
        let raw: serde_json::Value = self.fetch("directions/json", &params)?;
        shape_directions(raw)
    }

    /// Fetch elevation samples for the given points, order-preserving.
    pub fn elevation(&self, locations: &[LatLng]) -> MapsResult<Vec<ElevationSample>> {
        if locations.is_empty() {
            return Err(MapsError::invalid_input("locations must not be empty"));
        }
        let params = elevation_params(locations);
        let response: ElevationResponse = self.fetch("elevation/json", &params)?;
        shape_elevation(response)
    }

    /// Issue one GET against a provider endpoint and decode the JSON body.
    fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> MapsResult<T> {
        let mut query = params.to_vec();
        query.push(("key", self.api_key.clone()));

        let query = serde_urlencoded::to_string(&query)
            .map_err(|e| MapsError::invalid_input(e.to_string()))?;
        let url = format!("{}/{}?{}", self.base_url, endpoint, query);

        debug!("GET {}/{}", self.base_url, endpoint);
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ============================================================================
// Query parameter assembly (pure)
// ============================================================================

fn geocode_params(address: &str, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("address", address.to_string()),
        ("language", language.to_string()),
    ]
}

fn reverse_geocode_params(lat: f64, lng: f64, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("latlng", format!("{lat},{lng}")),
        ("language", language.to_string()),
    ]
}

fn nearby_params(
    location: Coordinate,
    radius: u32,
    keyword: Option<&str>,
    open_now: bool,
    language: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("location", format!("{},{}", location.lat, location.lng)),
        ("radius", radius.to_string()),
        ("language", language.to_string()),
    ];
    if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
        params.push(("keyword", keyword.to_string()));
    }
    if open_now {
        params.push(("opennow", "true".to_string()));
    }
    params
}

fn place_details_params(place_id: &str, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("place_id", place_id.to_string()),
        ("fields", PLACE_DETAIL_FIELDS.join(",")),
        ("language", language.to_string()),
    ]
}

fn distance_matrix_params(
    origins: &[String],
    destinations: &[String],
    mode: TravelMode,
    language: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("origins", origins.join("|")),
        ("destinations", destinations.join("|")),
        ("mode", mode.as_str().to_string()),
        ("language", language.to_string()),
    ]
}

fn directions_params(
    origin: &str,
    destination: &str,
    mode: TravelMode,
    departure: Option<i64>,
    arrival: Option<i64>,
    language: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("origin", origin.to_string()),
        ("destination", destination.to_string()),
        ("mode", mode.as_str().to_string()),
        ("language", language.to_string()),
    ];
    // Mutually exclusive; departure wins when both were supplied.
    if let Some(departure) = departure {
        params.push(("departure_time", departure.to_string()));
    } else if let Some(arrival) = arrival {
        params.push(("arrival_time", arrival.to_string()));
    }
    params
}

fn elevation_params(locations: &[LatLng]) -> Vec<(&'static str, String)> {
    let joined = locations
        .iter()
        .map(|l| format!("{},{}", l.latitude, l.longitude))
        .collect::<Vec<_>>()
        .join("|");
    vec![("locations", joined)]
}

// ============================================================================
// Response reshaping (pure)
// ============================================================================

/// Map a provider status onto the error taxonomy. `ZERO_RESULTS` becomes the
/// given not-found message; every other non-OK status is a provider error.
fn ensure_ok(status: &str, error_message: Option<String>, not_found: &str) -> MapsResult<()> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" => Err(MapsError::not_found(not_found)),
        other => Err(MapsError::provider(other, error_message)),
    }
}

fn shape_geocode(response: GeocodeResponse) -> MapsResult<GeocodeResult> {
    ensure_ok(&response.status, response.error_message.clone(), "Address not found")?;
    let entry = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::not_found("Address not found"))?;

    Ok(GeocodeResult {
        location: entry.geometry.location,
        formatted_address: entry.formatted_address,
        place_id: entry.place_id,
    })
}

fn shape_reverse_geocode(response: GeocodeResponse) -> MapsResult<ReverseGeocodeResult> {
    ensure_ok(
        &response.status,
        response.error_message.clone(),
        "No address found for coordinates",
    )?;
    let entry = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::not_found("No address found for coordinates"))?;

    Ok(ReverseGeocodeResult {
        formatted_address: entry.formatted_address,
        place_id: entry.place_id,
        address_components: entry.address_components,
    })
}

fn shape_nearby(
    response: PlacesNearbyResponse,
    min_rating: Option<f64>,
) -> MapsResult<Vec<PlaceSummary>> {
    // Empty result sets are an empty success for nearby search.
    if response.status != "OK" && response.status != "ZERO_RESULTS" {
        return Err(MapsError::provider(response.status, response.error_message));
    }

    let places = response
        .results
        .into_iter()
        .filter(|place| match min_rating {
            Some(min) => place.rating.unwrap_or(0.0) >= min,
            None => true,
        })
        .map(|place| PlaceSummary {
            name: place.name,
            place_id: place.place_id,
            address: place.formatted_address,
            location: place.geometry.map(|g| g.location),
            rating: place.rating,
            total_ratings: place.user_ratings_total,
            open_now: place.opening_hours.and_then(|h| h.open_now),
            types: place.types,
            price_level: place.price_level,
            vicinity: place.vicinity,
        })
        .collect();

    Ok(places)
}

fn shape_place_details(response: PlaceDetailsResponse, place_id: &str) -> MapsResult<PlaceDetail> {
    if response.status != "OK" {
        return Err(MapsError::provider(response.status, response.error_message));
    }
    let entry = response.result.ok_or_else(|| {
        MapsError::provider("OK", Some("response carried no result object".to_string()))
    })?;

    let (open_now, opening_hours) = match entry.opening_hours {
        Some(hours) => (hours.open_now, hours.weekday_text),
        None => (None, Vec::new()),
    };

    Ok(PlaceDetail {
        name: entry.name,
        place_id: place_id.to_string(),
        address: entry.formatted_address,
        location: entry.geometry.map(|g| g.location),
        rating: entry.rating,
        total_ratings: entry.user_ratings_total,
        open_now,
        opening_hours,
        phone: entry.formatted_phone_number,
        international_phone: entry.international_phone_number,
        website: entry.website,
        url: entry.url,
        price_level: entry.price_level,
        types: entry.types,
        photos: entry
            .photos
            .into_iter()
            .map(|p| super::types::PhotoInfo {
                photo_reference: p.photo_reference,
                height: p.height,
                width: p.width,
            })
            .collect(),
        reviews: entry
            .reviews
            .into_iter()
            .map(|r| super::types::ReviewInfo {
                rating: r.rating,
                text: r.text,
                time: r.time,
                author_name: r.author_name,
                author_url: r.author_url,
                language: r.language,
                profile_photo_url: r.profile_photo_url,
                relative_time_description: r.relative_time_description,
            })
            .collect(),
    })
}

fn shape_distance_matrix(response: DistanceMatrixResponse) -> MapsResult<DistanceMatrixResult> {
    if response.status != "OK" {
        return Err(MapsError::provider(response.status, response.error_message));
    }

    let mut distances = Vec::with_capacity(response.rows.len());
    let mut durations = Vec::with_capacity(response.rows.len());

    for row in response.rows {
        let mut distance_row = Vec::with_capacity(row.elements.len());
        let mut duration_row = Vec::with_capacity(row.elements.len());

        for element in row.elements {
            // Per-cell failures degrade to null, never a whole-call failure.
            if element.status == "OK" {
                distance_row.push(element.distance);
                duration_row.push(element.duration);
            } else {
                distance_row.push(None);
                duration_row.push(None);
            }
        }

        distances.push(distance_row);
        durations.push(duration_row);
    }

    Ok(DistanceMatrixResult {
        distances,
        durations,
        origin_addresses: response.origin_addresses,
        destination_addresses: response.destination_addresses,
    })
}

fn shape_directions(raw: serde_json::Value) -> MapsResult<RouteResult> {
    let response: DirectionsResponse = serde_json::from_value(raw.clone())?;
    ensure_ok(&response.status, response.error_message.clone(), "No route found")?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::not_found("No route found"))?;
    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::not_found("No route found"))?;

    let missing = |field: &str| {
        MapsError::provider("OK", Some(format!("leg is missing its {field}")))
    };

    Ok(RouteResult {
        summary: route.summary,
        total_distance: leg.distance.ok_or_else(|| missing("distance"))?,
        total_duration: leg.duration.ok_or_else(|| missing("duration"))?,
        arrival_time: format_epoch(leg.arrival_time.and_then(|t| t.value)),
        departure_time: format_epoch(leg.departure_time.and_then(|t| t.value)),
        routes: raw.get("routes").cloned().unwrap_or_default(),
    })
}

fn shape_elevation(response: ElevationResponse) -> MapsResult<Vec<ElevationSample>> {
    if response.status != "OK" {
        return Err(MapsError::provider(response.status, response.error_message));
    }

    Ok(response
        .results
        .into_iter()
        .map(|entry| ElevationSample {
            elevation: entry.elevation,
            location: entry.location,
        })
        .collect())
}

// ============================================================================
// Time helpers
// ============================================================================

/// Parse an ISO-8601 timestamp into epoch seconds. Accepts RFC 3339 strings
/// (`2024-05-01T08:30:00Z`, with offset) and naive local timestamps
/// (`2024-05-01T08:30:00` or without seconds).
pub fn parse_time(input: &str) -> MapsResult<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.timestamp());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            if let Some(dt) = naive.and_local_timezone(Local).earliest() {
                return Ok(dt.timestamp());
            }
        }
    }
    Err(MapsError::invalid_input(format!(
        "'{input}' is not an ISO 8601 timestamp"
    )))
}

/// Format epoch seconds as a `YYYY-MM-DD HH:MM:SS` local-time string.
/// An absent timestamp yields an empty string.
fn format_epoch(value: Option<i64>) -> String {
    value
        .and_then(|v| Local.timestamp_opt(v, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params_map(params: &[(&'static str, String)]) -> std::collections::HashMap<&'static str, String> {
        params.iter().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Query assembly
    // ------------------------------------------------------------------

    #[test]
    fn test_directions_departure_wins_over_arrival() {
        let params = directions_params(
            "Taipei Main Station",
            "Taoyuan Airport",
            TravelMode::Transit,
            Some(1_700_000_000),
            Some(1_700_003_600),
            "zh-TW",
        );
        let map = params_map(&params);
        assert_eq!(map.get("departure_time").map(String::as_str), Some("1700000000"));
        assert!(!map.contains_key("arrival_time"));
    }

    #[test]
    fn test_directions_arrival_used_when_alone() {
        let params = directions_params(
            "A",
            "B",
            TravelMode::Driving,
            None,
            Some(1_700_003_600),
            "en",
        );
        let map = params_map(&params);
        assert_eq!(map.get("arrival_time").map(String::as_str), Some("1700003600"));
        assert!(!map.contains_key("departure_time"));
    }

    #[test]
    fn test_directions_no_time_params_when_unset() {
        // Provider defaults the departure time to "now" when neither is sent.
        let params = directions_params("A", "B", TravelMode::Walking, None, None, "en");
        let map = params_map(&params);
        assert!(!map.contains_key("departure_time"));
        assert!(!map.contains_key("arrival_time"));
        assert_eq!(map.get("mode").map(String::as_str), Some("walking"));
    }

    #[test]
    fn test_nearby_params_optional_fields() {
        let center = Coordinate { lat: 25.0478, lng: 121.5170 };
        let bare = nearby_params(center, 1000, None, false, "zh-TW");
        let map = params_map(&bare);
        assert_eq!(map.get("radius").map(String::as_str), Some("1000"));
        assert!(!map.contains_key("keyword"));
        assert!(!map.contains_key("opennow"));

        let full = nearby_params(center, 500, Some("cafe"), true, "zh-TW");
        let map = params_map(&full);
        assert_eq!(map.get("keyword").map(String::as_str), Some("cafe"));
        assert_eq!(map.get("opennow").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_distance_matrix_params_join_with_pipe() {
        let params = distance_matrix_params(
            &["Taipei".to_string(), "25.03,121.56".to_string()],
            &["Kaohsiung".to_string()],
            TravelMode::Driving,
            "zh-TW",
        );
        let map = params_map(&params);
        assert_eq!(map.get("origins").map(String::as_str), Some("Taipei|25.03,121.56"));
        assert_eq!(map.get("destinations").map(String::as_str), Some("Kaohsiung"));
        assert_eq!(map.get("mode").map(String::as_str), Some("driving"));
    }

    #[test]
    fn test_elevation_params_preserve_order() {
        let params = elevation_params(&[
            LatLng { latitude: 36.578581, longitude: 138.0 },
            LatLng { latitude: -36.0, longitude: 175.0 },
        ]);
        assert_eq!(params[0].1, "36.578581,138|-36,175");
    }

    // ------------------------------------------------------------------
    // Reshaping
    // ------------------------------------------------------------------

    fn geocode_fixture() -> GeocodeResponse {
        serde_json::from_value(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Mountain View, CA, USA",
                "place_id": "ChIJiQHsW0m3j4ARm69rRkrUF3w",
                "geometry": { "location": { "lat": 37.3861, "lng": -122.0839 } },
                "address_components": [
                    { "long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality"] }
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_shape_geocode_takes_first_result() {
        let result = shape_geocode(geocode_fixture()).unwrap();
        assert_eq!(result.location, Coordinate { lat: 37.3861, lng: -122.0839 });
        assert_eq!(result.formatted_address, "Mountain View, CA, USA");
        assert_eq!(result.place_id, "ChIJiQHsW0m3j4ARm69rRkrUF3w");
    }

    #[test]
    fn test_shape_geocode_is_deterministic() {
        let a = shape_geocode(geocode_fixture()).unwrap();
        let b = shape_geocode(geocode_fixture()).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_shape_geocode_zero_results_is_not_found() {
        let response: GeocodeResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();
        assert!(matches!(shape_geocode(response), Err(MapsError::NotFound(_))));
    }

    #[test]
    fn test_shape_geocode_denied_is_provider_error() {
        let response: GeocodeResponse = serde_json::from_value(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }))
        .unwrap();
        match shape_geocode(response) {
            Err(MapsError::Provider { status, detail }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(detail.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_reverse_geocode_components() {
        let result = shape_reverse_geocode(geocode_fixture()).unwrap();
        assert_eq!(result.formatted_address, "Mountain View, CA, USA");
        assert_eq!(result.address_components.len(), 1);
        assert_eq!(result.address_components[0].types, vec!["locality"]);
    }

    fn nearby_fixture() -> PlacesNearbyResponse {
        serde_json::from_value(json!({
            "status": "OK",
            "results": [
                { "name": "High", "rating": 4.8, "types": ["cafe"] },
                { "name": "Mid", "rating": 4.5, "types": ["cafe"] },
                { "name": "Low", "rating": 3.9, "types": ["cafe"] },
                { "name": "Unrated", "types": ["cafe"] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_shape_nearby_min_rating_filter() {
        let places = shape_nearby(nearby_fixture(), Some(4.5)).unwrap();
        let names: Vec<_> = places.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["High", "Mid"]);
        assert!(places.iter().all(|p| p.rating.unwrap_or(0.0) >= 4.5));
    }

    #[test]
    fn test_shape_nearby_unrated_counts_as_zero() {
        let places = shape_nearby(nearby_fixture(), Some(0.0)).unwrap();
        assert_eq!(places.len(), 4);
        let places = shape_nearby(nearby_fixture(), Some(0.1)).unwrap();
        assert_eq!(places.len(), 3);
    }

    #[test]
    fn test_shape_nearby_zero_results_is_empty_success() {
        let response: PlacesNearbyResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();
        assert!(shape_nearby(response, None).unwrap().is_empty());
    }

    #[test]
    fn test_shape_nearby_quota_status_fails() {
        let response: PlacesNearbyResponse =
            serde_json::from_value(json!({ "status": "OVER_QUERY_LIMIT" })).unwrap();
        assert!(matches!(
            shape_nearby(response, None),
            Err(MapsError::Provider { .. })
        ));
    }

    #[test]
    fn test_shape_place_details_projection() {
        let response: PlaceDetailsResponse = serde_json::from_value(json!({
            "status": "OK",
            "result": {
                "name": "Din Tai Fung",
                "formatted_address": "No. 194, Xinyi Rd",
                "geometry": { "location": { "lat": 25.0330, "lng": 121.5300 } },
                "rating": 4.4,
                "user_ratings_total": 12000,
                "opening_hours": {
                    "open_now": true,
                    "weekday_text": ["Monday: 10:00 AM – 9:00 PM"]
                },
                "formatted_phone_number": "02 2321 8928",
                "website": "https://www.dintaifung.com.tw/",
                "photos": [{ "photo_reference": "ref123", "height": 1200, "width": 1600 }],
                "reviews": [{
                    "rating": 5.0,
                    "text": "Great dumplings",
                    "time": 1683000000,
                    "author_name": "A. Diner",
                    "relative_time_description": "a year ago"
                }]
            }
        }))
        .unwrap();

        let detail = shape_place_details(response, "place-123").unwrap();
        assert_eq!(detail.place_id, "place-123");
        assert_eq!(detail.open_now, Some(true));
        assert_eq!(detail.opening_hours.len(), 1);
        assert_eq!(detail.photos[0].photo_reference.as_deref(), Some("ref123"));
        assert_eq!(detail.reviews[0].time, Some(1683000000));
        assert!(detail.international_phone.is_none());
    }

    #[test]
    fn test_shape_place_details_not_found_status() {
        let response: PlaceDetailsResponse =
            serde_json::from_value(json!({ "status": "NOT_FOUND" })).unwrap();
        assert!(matches!(
            shape_place_details(response, "x"),
            Err(MapsError::Provider { .. })
        ));
    }

    fn matrix_fixture() -> DistanceMatrixResponse {
        serde_json::from_value(json!({
            "status": "OK",
            "origin_addresses": ["Taipei, Taiwan", "Hualien, Taiwan"],
            "destination_addresses": ["Kaohsiung, Taiwan", "Green Island, Taiwan", "Kinmen, Taiwan"],
            "rows": [
                { "elements": [
                    { "status": "OK", "distance": { "value": 350000, "text": "350 km" },
                      "duration": { "value": 14400, "text": "4 hours" } },
                    { "status": "ZERO_RESULTS" },
                    { "status": "NOT_FOUND" }
                ]},
                { "elements": [
                    { "status": "OK", "distance": { "value": 280000, "text": "280 km" },
                      "duration": { "value": 12600, "text": "3.5 hours" } },
                    { "status": "ZERO_RESULTS" },
                    { "status": "ZERO_RESULTS" }
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_shape_matrix_dimensions_survive_failed_cells() {
        let result = shape_distance_matrix(matrix_fixture()).unwrap();
        assert_eq!(result.distances.len(), 2);
        assert_eq!(result.durations.len(), 2);
        for row in result.distances.iter().chain(result.durations.iter()) {
            assert_eq!(row.len(), 3);
        }
        assert!(result.distances[0][0].is_some());
        assert!(result.distances[0][1].is_none());
        assert!(result.distances[0][2].is_none());
        assert_eq!(result.durations[1][0].as_ref().unwrap().value, 12600);
    }

    #[test]
    fn test_shape_matrix_echoes_provider_addresses() {
        let result = shape_distance_matrix(matrix_fixture()).unwrap();
        assert_eq!(result.origin_addresses.len(), 2);
        assert_eq!(result.destination_addresses[1], "Green Island, Taiwan");
    }

    #[test]
    fn test_shape_matrix_top_level_failure() {
        let response: DistanceMatrixResponse = serde_json::from_value(json!({
            "status": "MAX_ELEMENTS_EXCEEDED"
        }))
        .unwrap();
        assert!(matches!(
            shape_distance_matrix(response),
            Err(MapsError::Provider { .. })
        ));
    }

    #[test]
    fn test_shape_directions_first_route_first_leg() {
        let raw = json!({
            "status": "OK",
            "routes": [
                {
                    "summary": "National Freeway 1",
                    "legs": [
                        { "distance": { "value": 350000, "text": "350 km" },
                          "duration": { "value": 14400, "text": "4 hours" } },
                        { "distance": { "value": 1, "text": "1 m" },
                          "duration": { "value": 1, "text": "1 min" } }
                    ]
                },
                { "summary": "Provincial Highway 9", "legs": [] }
            ]
        });

        let result = shape_directions(raw).unwrap();
        assert_eq!(result.summary, "National Freeway 1");
        assert_eq!(result.total_distance.value, 350000);
        assert_eq!(result.total_duration.text, "4 hours");
        assert_eq!(result.arrival_time, "");
        assert_eq!(result.departure_time, "");
        // Raw routes array passes through untruncated.
        assert_eq!(result.routes.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_shape_directions_formats_leg_timestamps() {
        let raw = json!({
            "status": "OK",
            "routes": [{
                "summary": "",
                "legs": [{
                    "distance": { "value": 100, "text": "100 m" },
                    "duration": { "value": 60, "text": "1 min" },
                    "departure_time": { "value": 1700000000, "text": "10:13 PM" },
                    "arrival_time": { "value": 1700000060, "text": "10:14 PM" }
                }]
            }]
        });

        let result = shape_directions(raw).unwrap();
        // Exact rendering depends on the local zone; pin shape, not zone.
        assert_eq!(result.departure_time.len(), 19);
        assert!(result.departure_time.contains(' '));
        assert_ne!(result.departure_time, result.arrival_time);
    }

    #[test]
    fn test_shape_directions_no_route() {
        let raw = json!({ "status": "ZERO_RESULTS", "routes": [] });
        assert!(matches!(shape_directions(raw), Err(MapsError::NotFound(_))));

        let raw = json!({ "status": "OK", "routes": [] });
        assert!(matches!(shape_directions(raw), Err(MapsError::NotFound(_))));
    }

    #[test]
    fn test_shape_elevation_preserves_order() {
        let response: ElevationResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": [
                { "elevation": 3952.0, "location": { "lat": 23.47, "lng": 120.957 } },
                { "elevation": 10.3, "location": { "lat": 25.04, "lng": 121.51 } }
            ]
        }))
        .unwrap();

        let samples = shape_elevation(response).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].elevation, 3952.0);
        assert_eq!(samples[1].location.lat, 25.04);
    }

    // ------------------------------------------------------------------
    // Time helpers
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_time_rfc3339() {
        assert_eq!(parse_time("2023-11-14T22:13:20Z").unwrap(), 1_700_000_000);
        assert_eq!(parse_time("2023-11-15T06:13:20+08:00").unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_parse_time_naive_local() {
        // Naive timestamps are interpreted in the local zone; just require
        // that they parse and round to whole minutes/seconds sensibly.
        let with_secs = parse_time("2024-05-01T08:30:00").unwrap();
        let without_secs = parse_time("2024-05-01T08:30").unwrap();
        assert_eq!(with_secs, without_secs);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(matches!(parse_time("tomorrow"), Err(MapsError::InvalidInput(_))));
        assert!(matches!(parse_time(""), Err(MapsError::InvalidInput(_))));
    }

    #[test]
    fn test_format_epoch_absent_is_empty() {
        assert_eq!(format_epoch(None), "");
    }

    #[test]
    fn test_format_epoch_shape() {
        let formatted = format_epoch(Some(1_700_000_000));
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------

    #[test]
    fn test_geocode_rejects_empty_address() {
        let client = MapsClient::new("test-key", "en");
        assert!(matches!(
            client.geocode("   "),
            Err(MapsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reverse_geocode_rejects_out_of_range() {
        let client = MapsClient::new("test-key", "en");
        assert!(matches!(
            client.reverse_geocode(120.0, 25.0),
            Err(MapsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_distance_matrix_rejects_empty_lists() {
        let client = MapsClient::new("test-key", "en");
        assert!(matches!(
            client.distance_matrix(&[], &["Taipei".to_string()], TravelMode::Driving),
            Err(MapsError::InvalidInput(_))
        ));
    }

    // Integration tests (require network and a real key, run with:
    // GOOGLE_MAPS_API_KEY=... cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_live_geocode_google_headquarters() {
        let key = std::env::var("GOOGLE_MAPS_API_KEY").expect("GOOGLE_MAPS_API_KEY not set");
        let client = MapsClient::new(key, "en");
        let result = client.geocode("Google Headquarters").unwrap();
        // Mountain View, CA neighborhood.
        assert!((result.location.lat - 37.42).abs() < 0.5);
        assert!((result.location.lng + 122.08).abs() < 0.5);
    }
}
