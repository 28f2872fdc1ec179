//! Common utilities shared across the maps tools.
//!
//! Every tool collapses its failures through [`error_result`] so callers
//! see one uniform shape: a message string plus the MCP error flag, never
//! a provider-internal error structure.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying a one-line summary followed by the
/// pretty-printed structured payload.
pub fn structured_result<T: Serialize>(summary: impl Into<String>, data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(json) => CallToolResult::success(vec![Content::text(summary.into()), Content::text(json)]),
        Err(e) => error_result(&format!("Failed to serialize tool result: {e}")),
    }
}
