//! Directions tool.
//!
//! Departure and arrival times are mutually exclusive; when a caller
//! supplies both, the departure time wins and the arrival time is ignored.
//! When neither is given the provider defaults the departure to "now".

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domains::maps::{MapsContext, MapsResult, RouteResult, TravelMode, client};

use super::common::{error_result, structured_result};

/// Parameters for the directions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DirectionsParams {
    /// Origin address or `"lat,lng"` coordinate string.
    #[schemars(description = "Origin address or 'lat,lng' coordinate string")]
    pub origin: String,

    /// Destination address or `"lat,lng"` coordinate string.
    #[schemars(description = "Destination address or 'lat,lng' coordinate string")]
    pub destination: String,

    /// Travel mode (default: driving).
    #[serde(default)]
    #[schemars(description = "Travel mode: driving, walking, bicycling, or transit (default: driving)")]
    pub mode: TravelMode,

    /// Departure time in ISO 8601 format.
    #[serde(alias = "departureTime")]
    #[schemars(description = "Departure time in ISO 8601 format (optional)")]
    pub departure_time: Option<String>,

    /// Arrival time in ISO 8601 format; ignored when a departure time is
    /// also supplied.
    #[serde(alias = "arrivalTime")]
    #[schemars(description = "Arrival time in ISO 8601 format (optional, mutually exclusive with departure time)")]
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DirectionsTool;

impl DirectionsTool {
    pub const NAME: &'static str = "maps_directions";

    pub const DESCRIPTION: &'static str = "Get navigation directions between two points. Returns the primary \
         route's summary, total distance and duration, departure/arrival times, and the raw route structure. \
         Departure and arrival time are mutually exclusive; departure wins when both are given.";

    pub fn execute(params: &DirectionsParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(route) => {
                let summary = format!(
                    "Route from '{}' to '{}': {} ({})",
                    params.origin, params.destination, route.total_distance.text, route.total_duration.text
                );
                structured_result(summary, &route)
            }
            Err(e) => error_result(&format!("Failed to get directions: {e}")),
        }
    }

    fn run(params: &DirectionsParams, ctx: &MapsContext) -> MapsResult<RouteResult> {
        let departure = params
            .departure_time
            .as_deref()
            .map(client::parse_time)
            .transpose()?;
        let arrival = params
            .arrival_time
            .as_deref()
            .map(client::parse_time)
            .transpose()?;

        if departure.is_some() && arrival.is_some() {
            warn!("Both departure and arrival time supplied; ignoring arrival time");
        }

        info!(
            "Directions from '{}' to '{}', mode {}",
            params.origin,
            params.destination,
            params.mode.as_str()
        );

        ctx.client()?.directions(
            &params.origin,
            &params.destination,
            params.mode,
            departure,
            arrival,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DirectionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(ctx: Arc<MapsContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = call.arguments.clone().unwrap_or_default();
            async move {
                let params: DirectionsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let handle = std::thread::spawn(move || Self::execute(&params, &ctx));

                handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))
            }
            .boxed()
        })
    }
}
