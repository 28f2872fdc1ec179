//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::maps::{MapsContext, probe};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Shared maps adapter handle, used by dynamic resources.
    ctx: Arc<MapsContext>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server identification and configuration summary.
    ServerInfo,

    /// Live provider health probe.
    ProviderStatus,
}

impl ResourceService {
    /// Create a new ResourceService sharing the given maps context.
    pub fn new(ctx: Arc<MapsContext>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            ctx,
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                    "language": self.ctx.client().map(|c| c.language().to_string()).ok(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
            DynamicResourceType::ProviderStatus => {
                let status = match self.ctx.client() {
                    Ok(_) => {
                        // The probe issues a blocking provider call; keep it
                        // off the async runtime.
                        let ctx = self.ctx.clone();
                        std::thread::spawn(move || {
                            ctx.client().map(|client| probe(client).status_line())
                        })
                        .join()
                        .map_err(|_| ResourceError::internal("status probe thread panicked"))?
                        .map_err(|e| ResourceError::internal(e.to_string()))?
                    }
                    Err(e) => e.to_string(),
                };

                Ok(ResourceContents::text(status, uri))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        ResourceService::new(Arc::new(MapsContext::uninitialized()))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = test_service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = test_service();
        let result = service.read_resource("maps://server/info").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_status_without_client_reports_uninitialized() {
        let service = test_service();
        let result = service.read_resource("google-maps://status").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("not initialized"));
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = test_service();
        let result = service.read_resource("maps://server/nonexistent").await;
        assert!(result.is_err());
    }
}
