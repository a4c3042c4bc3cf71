//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the animal
//! rescue server. It exports `handle_tool_call` publicly to make it
//! accessible for tests.

use super::{helpers::*, models::*, tools::tool_declarations};
use crate::rescue::RescueService;
use crate::state::SharedState;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/sse", axum::routing::get(handle_legacy_sse))
        .route("/sse/message", post(handle_mcp))
}

/// Announces the POST endpoint to clients that open with `GET /mcp`.
async fn handle_mcp_sse() -> impl IntoResponse {
    sse_endpoint_event("/mcp")
}

/// Same handshake for clients of the older `/sse` transport.
async fn handle_legacy_sse() -> impl IntoResponse {
    sse_endpoint_event("/sse/message")
}

fn sse_endpoint_event(endpoint: &str) -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        format!("event: endpoint\ndata: {endpoint}\n\n"),
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    if req.is_notification() {
        info!("MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!("MCP call: {} (id: {})", method_name, id);

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, json!({ "tools": tool_declarations() })),
        "resources/list" => rpc_success(id, json!({ "resources": [] })),
        "tools/call" => {
            let (tool_name, args) = tool_call_parts(&params);

            match handle_tool_call(&state.rescue, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    warn!("Tool call {} failed: {}", tool_name, err);
                    rpc_error(id, err.code(), err.to_string())
                }
            }
        }
        _ => {
            warn!("Unknown method: {}", method_name);
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "title": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(rescue: &RescueService, name: &str, args: Value) -> Result<Value, ToolError> {
    match name {
        LIST_ANIMALS_TOOL => Ok(tool_result(AnimalsOutput {
            animals: rescue.list_animals(),
        })),
        GET_ANIMAL_BY_ID_TOOL => {
            let input: IdInput = parse_arguments(args)?;
            Ok(tool_result(AnimalOutput {
                animal: rescue.get_animal_by_id(&input.id),
            }))
        }
        SEARCH_BY_NAME_TOOL => {
            let input: NameInput = parse_arguments(args)?;
            Ok(tool_result(AnimalOutput {
                animal: rescue.get_animal_by_name(&input.name),
            }))
        }
        ADOPT_PET_TOOL => handle_adopt_pet_tool(rescue, args),
        _ => Err(ToolError::UnknownTool(name.to_owned())),
    }
}

/// Handles the adopt_pet tool functionality
///
/// A refused adoption is a normal result with `success: false`.
fn handle_adopt_pet_tool(rescue: &RescueService, args: Value) -> Result<Value, ToolError> {
    let input: IdInput = parse_arguments(args)?;
    let target = resolve_adoption_target(rescue, &input.id);

    let certificate = rescue.adopt_animal(&target).ok();
    Ok(tool_result(AdoptionOutput::from(certificate)))
}

/// Agents often pass a name where an id is expected. If nothing has `key` as
/// its id but an animal has it as its name, adopt that animal instead.
fn resolve_adoption_target(rescue: &RescueService, key: &str) -> String {
    if rescue.get_animal_by_id(key).is_some() {
        return key.to_owned();
    }

    match rescue.get_animal_by_name(key) {
        Some(animal) => {
            info!("Resolved adoption target '{}' -> {}", key, animal.id);
            animal.id
        }
        None => key.to_owned(),
    }
}

fn parse_arguments<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    Ok(serde_json::from_value(args)?)
}
