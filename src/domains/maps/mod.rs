//! Maps domain: the Google Maps provider adapter.
//!
//! ## Architecture
//!
//! - `client.rs` - the provider adapter, one method per capability
//! - `types.rs` - wire (provider JSON) and output (client schema) types
//! - `location.rs` - coordinate/address descriptor resolution
//! - `context.rs` - the injected per-process adapter handle
//! - `probe.rs` - credential/reachability health probe
//! - `error.rs` - maps-specific error taxonomy

pub mod client;
pub mod context;
pub mod error;
pub mod location;
pub mod probe;
pub mod types;

pub use client::MapsClient;
pub use context::MapsContext;
pub use error::{MapsError, MapsResult};
pub use location::LocationDescriptor;
pub use probe::{ProbeReport, probe};
pub use types::{
    Coordinate, DistanceMatrixResult, ElevationSample, GeocodeResult, LatLng, PlaceDetail,
    PlaceSummary, ReverseGeocodeResult, RouteResult, TravelMode,
};
