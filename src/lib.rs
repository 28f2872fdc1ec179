//! Google Maps MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing Google
//! Maps location intelligence as tools: geocoding, reverse geocoding, nearby
//! place search, place details, directions, distance matrices, and elevation.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **maps**: The Google Maps Web Services adapter and its types
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use maps_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
