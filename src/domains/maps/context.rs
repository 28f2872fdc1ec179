//! Explicit adapter handle threaded through the tool router.
//!
//! The adapter is constructed once at process start and injected into the
//! gateway; tools never reach for global state. A context without a client
//! (possible in tests, or if construction is deferred) makes every tool
//! call fail fast with [`MapsError::NotInitialized`].

use std::sync::Arc;

use super::client::MapsClient;
use super::error::{MapsError, MapsResult};

/// Holds the single per-process [`MapsClient`].
pub struct MapsContext {
    client: Option<Arc<MapsClient>>,
}

impl MapsContext {
    /// Wrap a constructed client.
    pub fn new(client: MapsClient) -> Self {
        Self {
            client: Some(Arc::new(client)),
        }
    }

    /// A context with no client; every [`Self::client`] call fails.
    pub fn uninitialized() -> Self {
        Self { client: None }
    }

    /// Borrow the client, or fail with `NotInitialized`.
    pub fn client(&self) -> MapsResult<&MapsClient> {
        self.client
            .as_deref()
            .ok_or(MapsError::NotInitialized)
    }
}
