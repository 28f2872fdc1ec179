//! Nearby place search tool.
//!
//! Resolves the search center (free text or literal coordinates), queries
//! the Places nearby-search endpoint, and applies the optional client-side
//! minimum-rating filter.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::domains::maps::{
    Coordinate, LocationDescriptor, MapsContext, MapsError, MapsResult, PlaceSummary, location,
};

use super::common::{error_result, structured_result};

/// Parameters for the nearby search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNearbyParams {
    /// Search center: free-text address or a literal coordinate pair.
    #[schemars(description = "Search center, as an address or a 'latitude, longitude' pair")]
    pub center: LocationDescriptor,

    /// Optional search keyword (e.g. "restaurant", "cafe").
    #[schemars(description = "Search keyword, e.g. 'restaurant' or 'cafe'")]
    pub keyword: Option<String>,

    /// Search radius in meters (default: 1000).
    #[serde(default = "default_radius")]
    #[schemars(description = "Search radius in meters (default: 1000)")]
    pub radius: u32,

    /// Only return places that are open right now.
    #[serde(default, alias = "openNow")]
    #[schemars(description = "Only return places that are open now (default: false)")]
    pub open_now: bool,

    /// Minimum rating filter, 0 to 5.
    #[serde(alias = "minRating")]
    #[schemars(description = "Minimum rating requirement, 0-5 (optional)")]
    pub min_rating: Option<f64>,
}

fn default_radius() -> u32 {
    1000
}

/// Structured output for nearby search.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SearchNearbyOutput {
    pub location: Coordinate,
    pub places: Vec<PlaceSummary>,
    pub total_results: usize,
}

#[derive(Debug, Clone)]
pub struct SearchNearbyTool;

impl SearchNearbyTool {
    pub const NAME: &'static str = "search_nearby";

    pub const DESCRIPTION: &'static str = "Search for places near a location. The center can be a free-text \
         address or a literal 'latitude, longitude' pair. Supports keyword, radius (meters), open-now, and \
         minimum-rating filters. Returns the resolved center plus a list of place summaries.";

    /// Execute the tool logic, collapsing any failure to a uniform message.
    pub fn execute(params: &SearchNearbyParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(output) => {
                let summary = format!("Found {} place(s)", output.total_results);
                structured_result(summary, &output)
            }
            Err(e) => error_result(&format!("Search failed: {e}")),
        }
    }

    fn run(params: &SearchNearbyParams, ctx: &MapsContext) -> MapsResult<SearchNearbyOutput> {
        if let Some(min_rating) = params.min_rating
            && !(0.0..=5.0).contains(&min_rating)
        {
            return Err(MapsError::invalid_input(format!(
                "min_rating {min_rating} outside [0, 5]"
            )));
        }

        let client = ctx.client()?;
        let center = location::resolve(client, &params.center)?;

        info!(
            "Nearby search around {},{} radius {}m",
            center.lat, center.lng, params.radius
        );

        let places = client.nearby_search(
            center,
            params.radius,
            params.keyword.as_deref(),
            params.open_now,
            params.min_rating,
        )?;

        Ok(SearchNearbyOutput {
            location: center,
            total_results: places.len(),
            places,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchNearbyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(ctx: Arc<MapsContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = call.arguments.clone().unwrap_or_default();
            async move {
                let params: SearchNearbyParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // The maps client uses reqwest::blocking, which cannot run
                // inside the tokio runtime; give it its own OS thread.
                let handle = std::thread::spawn(move || Self::execute(&params, &ctx));

                handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))
            }
            .boxed()
        })
    }
}
