//! Tool Registry - central registration and metadata for all tools.

use std::sync::Arc;

use rmcp::model::Tool;

use crate::domains::maps::MapsContext;

use super::definitions::{
    DirectionsTool, DistanceMatrixTool, ElevationTool, GeocodeTool, PlaceDetailsTool,
    ReverseGeocodeTool, SearchNearbyTool,
};

/// Tool registry - manages all available tools.
///
/// The single source of truth for tool names and metadata; the router and
/// the registry must always agree (enforced by tests in `router.rs`).
pub struct ToolRegistry {
    #[allow(dead_code)]
    ctx: Arc<MapsContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: Arc<MapsContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchNearbyTool::NAME,
            PlaceDetailsTool::NAME,
            GeocodeTool::NAME,
            ReverseGeocodeTool::NAME,
            DistanceMatrixTool::NAME,
            DirectionsTool::NAME,
            ElevationTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchNearbyTool::to_tool(),
            PlaceDetailsTool::to_tool(),
            GeocodeTool::to_tool(),
            ReverseGeocodeTool::to_tool(),
            DistanceMatrixTool::to_tool(),
            DirectionsTool::to_tool(),
            ElevationTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> Arc<MapsContext> {
        Arc::new(MapsContext::uninitialized())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_ctx());
        let names = registry.tool_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"search_nearby"));
        assert!(names.contains(&"get_place_details"));
        assert!(names.contains(&"maps_geocode"));
        assert!(names.contains(&"maps_reverse_geocode"));
        assert!(names.contains(&"maps_distance_matrix"));
        assert!(names.contains(&"maps_directions"));
        assert!(names.contains(&"maps_elevation"));
    }

    #[test]
    fn test_metadata_names_match_registry() {
        let registry = ToolRegistry::new(test_ctx());
        let names = registry.tool_names();
        for tool in ToolRegistry::get_all_tools() {
            assert!(names.contains(&tool.name.as_ref()));
        }
    }
}
