//! Provider status resource definition.
//!
//! Reading this resource runs the health probe (a cheap geocode call) and
//! reports whether the provider is reachable and the credential is valid.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Provider health status resource (dynamic).
pub struct StatusResource;

impl ResourceDefinition for StatusResource {
    const URI: &'static str = "google-maps://status";
    const NAME: &'static str = "Google Maps Status";
    const DESCRIPTION: &'static str =
        "Current status of the Google Maps provider connection and credential";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ProviderStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_metadata() {
        assert_eq!(StatusResource::URI, "google-maps://status");
        assert_eq!(StatusResource::MIME_TYPE, "text/plain");
    }
}
