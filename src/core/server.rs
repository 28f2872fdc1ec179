//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built dynamically in `domains/tools/router.rs` around a
//! single [`MapsContext`] constructed here at startup and injected into every
//! route. **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::maps::{MapsClient, MapsContext};
use crate::domains::{resources::ResourceService, tools::build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the tools gateway and the resource service.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The injected maps adapter handle, shared with router and resources.
    maps_context: Arc<MapsContext>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Constructs the maps adapter once from the configured credential;
    /// a missing credential is a configuration error, not a warning.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let api_key = config
            .credentials
            .google_maps_api_key
            .clone()
            .ok_or_else(|| {
                Error::config(
                    "Google Maps API key is required. \
                     Set the GOOGLE_MAPS_API_KEY environment variable.",
                )
            })?;

        let client = MapsClient::new(api_key, config.maps.language.clone());
        Ok(Self::with_context(config, Arc::new(MapsContext::new(client))))
    }

    /// Create a server around an existing maps context.
    pub fn with_context(config: Config, maps_context: Arc<MapsContext>) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(maps_context.clone()));

        Self {
            tool_router: build_tool_router::<Self>(maps_context.clone()),
            config,
            maps_context,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared maps adapter handle.
    pub fn maps_context(&self) -> &Arc<MapsContext> {
        &self.maps_context
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Google Maps MCP server. Provides geocoding, reverse geocoding, nearby place \
                 search, place details, directions, distance matrices, and elevation data. \
                 Read google-maps://status to check provider connectivity."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
