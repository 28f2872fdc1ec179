//! Forward geocoding tool.

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

use crate::domains::maps::{GeocodeResult, MapsContext, MapsResult};

use super::common::{error_result, structured_result};

/// Parameters for the geocode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeocodeParams {
    /// Address or landmark name to convert to coordinates.
    #[schemars(description = "Address or landmark name to convert to coordinates")]
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct GeocodeTool;

impl GeocodeTool {
    pub const NAME: &'static str = "maps_geocode";

    pub const DESCRIPTION: &'static str = "Convert an address or landmark name to geographic coordinates. \
         Returns the location, the provider-formatted address, and the place ID.";

    pub fn execute(params: &GeocodeParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(result) => {
                let summary = format!("Geocoded '{}'", params.address);
                structured_result(summary, &result)
            }
            Err(e) => error_result(&format!("Geocoding failed: {e}")),
        }
    }

    fn run(params: &GeocodeParams, ctx: &MapsContext) -> MapsResult<GeocodeResult> {
        info!("Geocoding address: {}", params.address);
        ctx.client()?.geocode(&params.address)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeocodeParams>(),
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
                let params: GeocodeParams =
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
    fn test_params_require_address() {
        assert!(serde_json::from_str::<GeocodeParams>("{}").is_err());
        let params: GeocodeParams =
            serde_json::from_str(r#"{"address": "Taipei Main Station"}"#).unwrap();
        assert_eq!(params.address, "Taipei Main Station");
    }

    #[test]
    fn test_uninitialized_context_fails_uniformly() {
        let params = GeocodeParams {
            address: "Taipei Main Station".to_string(),
        };
        let result = GeocodeTool::execute(&params, &MapsContext::uninitialized());
        assert_eq!(result.is_error, Some(true));
    }
}
