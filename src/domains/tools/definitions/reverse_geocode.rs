//! Reverse geocoding tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::maps::{MapsContext, MapsResult, ReverseGeocodeResult};

use super::common::{error_result, structured_result};

/// Parameters for the reverse geocode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReverseGeocodeParams {
    /// Latitude of the point, -90 to 90.
    #[schemars(description = "Latitude coordinate")]
    pub latitude: f64,

    /// Longitude of the point, -180 to 180.
    #[schemars(description = "Longitude coordinate")]
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct ReverseGeocodeTool;

impl ReverseGeocodeTool {
    pub const NAME: &'static str = "maps_reverse_geocode";

    pub const DESCRIPTION: &'static str = "Convert geographic coordinates to the nearest address. Returns the \
         formatted address, the place ID, and the structured address components.";

    pub fn execute(params: &ReverseGeocodeParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(result) => {
                let summary = format!(
                    "Resolved {},{} to '{}'",
                    params.latitude, params.longitude, result.formatted_address
                );
                structured_result(summary, &result)
            }
            Err(e) => error_result(&format!("Reverse geocoding failed: {e}")),
        }
    }

    fn run(params: &ReverseGeocodeParams, ctx: &MapsContext) -> MapsResult<ReverseGeocodeResult> {
        info!(
            "Reverse geocoding {},{}",
            params.latitude, params.longitude
        );
        ctx.client()?
            .reverse_geocode(params.latitude, params.longitude)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReverseGeocodeParams>(),
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
                let params: ReverseGeocodeParams =
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
