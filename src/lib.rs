//! Animal Rescue Library
//!
//! This library provides a small catalog of rescue animals and the adoption
//! workflow, exposed to tool-calling agents over MCP (Model Context Protocol).

// Domain modules
pub mod mcp;
pub mod rescue;

// Infrastructure
pub mod config;
pub mod router;
pub mod state;
