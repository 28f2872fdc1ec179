//! Place details tool.

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

use crate::domains::maps::{MapsContext, MapsResult, PlaceDetail};

use super::common::{error_result, structured_result};

/// Parameters for the place details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlaceDetailsParams {
    /// Google Maps place ID, as returned by search or geocode tools.
    #[serde(alias = "placeId")]
    #[schemars(description = "Google Maps place ID")]
    pub place_id: String,
}

#[derive(Debug, Clone)]
pub struct PlaceDetailsTool;

impl PlaceDetailsTool {
    pub const NAME: &'static str = "get_place_details";

    pub const DESCRIPTION: &'static str = "Get detailed information about a place by its place ID: contact \
         details, website, opening hours, price level, photo references, and user reviews.";

    pub fn execute(params: &PlaceDetailsParams, ctx: &MapsContext) -> CallToolResult {
        match Self::run(params, ctx) {
            Ok(detail) => {
                let summary = match &detail.name {
                    Some(name) => format!("Details for '{name}'"),
                    None => format!("Details for place {}", params.place_id),
                };
                structured_result(summary, &detail)
            }
            Err(e) => error_result(&format!("Failed to get place details: {e}")),
        }
    }

    fn run(params: &PlaceDetailsParams, ctx: &MapsContext) -> MapsResult<PlaceDetail> {
        info!("Fetching place details for {}", params.place_id);
        ctx.client()?.place_details(&params.place_id)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PlaceDetailsParams>(),
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
                let params: PlaceDetailsParams =
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
