//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes dowsing to AI assistants over stdio, in place of a web endpoint.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{DowserMcpServer, run_server};
