//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires the
//! shared maps context through and keeps the full list in one place.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::maps::MapsContext;

use super::definitions::{
    DirectionsTool, DistanceMatrixTool, ElevationTool, GeocodeTool, PlaceDetailsTool,
    ReverseGeocodeTool, SearchNearbyTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<MapsContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchNearbyTool::create_route(ctx.clone()))
        .with_route(PlaceDetailsTool::create_route(ctx.clone()))
        .with_route(GeocodeTool::create_route(ctx.clone()))
        .with_route(ReverseGeocodeTool::create_route(ctx.clone()))
        .with_route(DistanceMatrixTool::create_route(ctx.clone()))
        .with_route(DirectionsTool::create_route(ctx.clone()))
        .with_route(ElevationTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_ctx() -> Arc<MapsContext> {
        Arc::new(MapsContext::uninitialized())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_nearby"));
        assert!(names.contains(&"get_place_details"));
        assert!(names.contains(&"maps_geocode"));
        assert!(names.contains(&"maps_reverse_geocode"));
        assert!(names.contains(&"maps_distance_matrix"));
        assert!(names.contains(&"maps_directions"));
        assert!(names.contains(&"maps_elevation"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry = ToolRegistry::new(test_ctx());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_every_tool_has_description_and_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(!tool.input_schema.is_empty(), "{} has no schema", tool.name);
        }
    }
}
