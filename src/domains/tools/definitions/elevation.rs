//! Elevation tool.

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

use crate::domains::maps::{ElevationSample, LatLng, MapsContext, MapsResult};

use super::common::{error_result, structured_result};

/// Parameters for the elevation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ElevationParams {
    /// Points to sample, in request order.
    #[schemars(description = "List of {latitude, longitude} points to sample")]
    pub locations: Vec<LatLng>,
}

/// Structured output for elevation sampling; order matches the request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ElevationOutput {
    pub samples: Vec<ElevationSample>,
}

#[derive(Debug, Clone)]
pub struct ElevationTool;

impl ElevationTool {
    pub const NAME: &'static str = "maps_elevation";

    pub const DESCRIPTION: &'static str = "Get elevation data (meters above sea level) for a list of points. \
         Results are returned in the same order as the request.";

    pub fn execute(params: &ElevationParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(samples) => {
                let summary = format!("Fetched {} elevation sample(s)", samples.len());
                structured_result(summary, &ElevationOutput { samples })
            }
            Err(e) => error_result(&format!("Failed to get elevation data: {e}")),
        }
    }

    fn run(params: &ElevationParams, ctx: &MapsContext) -> MapsResult<Vec<ElevationSample>> {
        info!("Elevation request for {} point(s)", params.locations.len());
        ctx.client()?.elevation(&params.locations)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ElevationParams>(),
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
                let params: ElevationParams =
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_parse_point_list() {
        let params: ElevationParams = serde_json::from_str(
            r#"{"locations": [
                {"latitude": 23.47, "longitude": 120.957},
                {"latitude": 25.04, "longitude": 121.51}
            ]}"#,
        )
        .unwrap();
        assert_eq!(params.locations.len(), 2);
        assert_eq!(params.locations[0].latitude, 23.47);
    }

    #[test]
    fn test_empty_location_list_fails_uniformly() {
        let params = ElevationParams { locations: vec![] };
        let ctx = MapsContext::new(crate::domains::maps::MapsClient::new("test-key", "en"));
        let result = ElevationTool::execute(&params, &ctx);
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_uninitialized_context_fails_uniformly() {
        let params = ElevationParams {
            locations: vec![LatLng {
                latitude: 23.47,
                longitude: 120.957,
            }],
        };
        let result = ElevationTool::execute(&params, &MapsContext::uninitialized());
        assert_eq!(result.is_error, Some(true));
    }
}
