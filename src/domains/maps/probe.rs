//! Provider health probe.
//!
//! Issues a known-cheap geocode call to assert that the provider is
//! reachable and the credential is valid. Used as a warn-only startup
//! self-check and as the backing for the status resource.

use tracing::debug;

use super::client::MapsClient;

/// Address used for the probe; cheap, cacheable, always resolvable.
const PROBE_ADDRESS: &str = "Google";

/// Outcome of a health probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub ok: bool,
    pub detail: String,
}

impl ProbeReport {
    /// Render the report as the plain-text status string served to clients.
    pub fn status_line(&self) -> String {
        if self.ok {
            "Google Maps API is working correctly".to_string()
        } else {
            format!("Google Maps API error: {}", self.detail)
        }
    }
}

/// Run the probe against the given client.
pub fn probe(client: &MapsClient) -> ProbeReport {
    debug!("Probing provider with geocode(\"{}\")", PROBE_ADDRESS);
    match client.geocode(PROBE_ADDRESS) {
        Ok(_) => ProbeReport {
            ok: true,
            detail: String::new(),
        },
        Err(e) => ProbeReport {
            ok: false,
            detail: e.to_string(),
        },
    }
}
