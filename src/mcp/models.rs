//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification, plus the typed arguments and
//! results of the rescue tools.

use crate::rescue::{AdoptionCertificate, Animal};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool listing available animals
pub const LIST_ANIMALS_TOOL: &str = "list_animals";
/// Tool fetching one animal by id
pub const GET_ANIMAL_BY_ID_TOOL: &str = "get_animal_by_id";
/// Tool fetching one animal by name
pub const SEARCH_BY_NAME_TOOL: &str = "search_animals_by_name";
/// Tool adopting an animal
pub const ADOPT_PET_TOOL: &str = "adopt_pet";
/// Server identifier
pub const SERVER_NAME: &str = "Animal Rescue";
/// Server version reported during the handshake
pub const SERVER_VERSION: &str = "1.0.0";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// JSON-RPC: request body is not valid JSON
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC: unknown method
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC: bad parameters
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier, absent for notifications
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications expect no response body.
    pub fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with("notifications/")
    }
}

/// Failures of a `tools/call` request.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

impl ToolError {
    /// JSON-RPC error code reported for this failure.
    pub const fn code(&self) -> i32 {
        INVALID_PARAMS
    }
}

// =============================================================================
// Tool Arguments
// =============================================================================

/// Arguments for tools addressing an animal by id
#[derive(Debug, Deserialize)]
pub struct IdInput {
    pub id: String,
}

/// Arguments for the name search tool
#[derive(Debug, Deserialize)]
pub struct NameInput {
    pub name: String,
}

// =============================================================================
// Tool Results
// =============================================================================

/// `structuredContent` of `list_animals`
#[derive(Debug, Serialize)]
pub struct AnimalsOutput {
    pub animals: Vec<Animal>,
}

/// `structuredContent` of the single-animal lookups
#[derive(Debug, Serialize)]
pub struct AnimalOutput {
    pub animal: Option<Animal>,
}

/// `structuredContent` of `adopt_pet`
#[derive(Debug, Serialize)]
pub struct AdoptionOutput {
    pub certificate: Option<AdoptionCertificate>,
    pub success: bool,
}

impl From<Option<AdoptionCertificate>> for AdoptionOutput {
    fn from(certificate: Option<AdoptionCertificate>) -> Self {
        Self {
            success: certificate.is_some(),
            certificate,
        }
    }
}
