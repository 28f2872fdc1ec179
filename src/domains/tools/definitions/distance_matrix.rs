//! Distance matrix tool.

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

use crate::domains::maps::{DistanceMatrixResult, MapsContext, MapsResult, TravelMode};

use super::common::{error_result, structured_result};

/// Parameters for the distance matrix tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DistanceMatrixParams {
    /// Origin addresses or `"lat,lng"` coordinate strings.
    #[schemars(description = "List of origin addresses or 'lat,lng' coordinate strings")]
    pub origins: Vec<String>,

    /// Destination addresses or `"lat,lng"` coordinate strings.
    #[schemars(description = "List of destination addresses or 'lat,lng' coordinate strings")]
    pub destinations: Vec<String>,

    /// Travel mode (default: driving).
    #[serde(default)]
    #[schemars(description = "Travel mode: driving, walking, bicycling, or transit (default: driving)")]
    pub mode: TravelMode,
}

#[derive(Debug, Clone)]
pub struct DistanceMatrixTool;

impl DistanceMatrixTool {
    pub const NAME: &'static str = "maps_distance_matrix";

    pub const DESCRIPTION: &'static str = "Calculate distances and travel times between multiple origins and \
         destinations. Returns parallel distance and duration matrices indexed [origin][destination]; a null \
         cell means no route exists between that pair.";

    pub fn execute(params: &DistanceMatrixParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(result) => {
                let summary = format!(
                    "Computed {}x{} distance matrix ({})",
                    params.origins.len(),
                    params.destinations.len(),
                    params.mode.as_str()
                );
                structured_result(summary, &result)
            }
            Err(e) => error_result(&format!("Distance matrix calculation failed: {e}")),
        }
    }

    fn run(params: &DistanceMatrixParams, ctx: &MapsContext) -> MapsResult<DistanceMatrixResult> {
        info!(
            "Distance matrix: {} origin(s) x {} destination(s), mode {}",
            params.origins.len(),
            params.destinations.len(),
            params.mode.as_str()
        );
        ctx.client()?
            .distance_matrix(&params.origins, &params.destinations, params.mode)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DistanceMatrixParams>(),
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
                let params: DistanceMatrixParams =
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
