//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod directions;
pub mod distance_matrix;
pub mod elevation;
pub mod geocode;
pub mod place_details;
pub mod reverse_geocode;
pub mod search_nearby;

pub use directions::{DirectionsParams, DirectionsTool};
pub use distance_matrix::{DistanceMatrixParams, DistanceMatrixTool};
pub use elevation::{ElevationParams, ElevationTool};
pub use geocode::{GeocodeParams, GeocodeTool};
pub use place_details::{PlaceDetailsParams, PlaceDetailsTool};
pub use reverse_geocode::{ReverseGeocodeParams, ReverseGeocodeTool};
pub use search_nearby::{SearchNearbyParams, SearchNearbyTool};
