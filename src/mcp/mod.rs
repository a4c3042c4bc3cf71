//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants, tool inputs and outputs)
//! - RPC helpers (success/error responses, tool results)
//! - Tool declarations with their schemas
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod tools;

// Re-export commonly used types and functions
pub use handlers::routes;
