//! Domains module containing business logic organized by bounded contexts.
//!
//! - **maps**: the Google Maps provider adapter and location resolution
//! - **tools**: the tool-invocation gateway exposed to MCP clients
//! - **resources**: readable status and server-info resources

pub mod maps;
pub mod resources;
pub mod tools;
