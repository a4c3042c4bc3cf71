//! Integration tests for the MCP (Model Context Protocol) server
//!
//! These tests verify the complete MCP protocol implementation including:
//! - Server initialization and handshake
//! - Tool discovery and listing
//! - Tool execution (list, lookups, adoption)
//! - Error handling, notifications, unknown paths and CORS

use animal_rescue::config::{AllowedOrigins, Config};
use animal_rescue::router::create_app_router;
use animal_rescue::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

const ALLOWED_ORIGIN: &str = "https://playground.ai.cloudflare.com";

/// Helper function to create a test app instance over the default catalog
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::with_default_catalog().unwrap());
    create_app_router(state, &Config::default().allowed_origins)
}

async fn read_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

/// Calls a tool and returns its `structuredContent`
async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("error").is_none(), "unexpected error: {body}");
    body["result"]["structuredContent"].clone()
}

fn listed_ids(structured: &Value) -> Vec<String> {
    structured["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|animal| animal["id"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app();

    for (uri, endpoint) in [("/mcp", "data: /mcp"), ("/sse", "data: /sse/message")] {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(content_type, "text/event-stream");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

        assert!(body_str.contains("event: endpoint"));
        assert!(body_str.contains(endpoint));
    }
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "Animal Rescue");
    assert_eq!(result["serverInfo"]["version"], "1.0.0");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        ["list_animals", "get_animal_by_id", "search_animals_by_name", "adopt_pet"]
    );

    for tool in tools {
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert_eq!(tool["outputSchema"]["type"], "object");
    }
    assert_eq!(tools[1]["inputSchema"]["required"], json!(["id"]));
    assert_eq!(tools[2]["inputSchema"]["required"], json!(["name"]));
}

#[tokio::test]
async fn test_mcp_resources_list_is_empty() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 3).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["resources"], json!([]));
}

#[tokio::test]
async fn test_mcp_tool_call_list_animals() {
    let app = create_test_app();

    let params = json!({ "name": "list_animals", "arguments": {} });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 4).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];

    let content = &result["content"][0];
    assert_eq!(content["type"], "text");
    let text: Value = serde_json::from_str(content["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, result["structuredContent"]);

    let animals = result["structuredContent"]["animals"].as_array().unwrap();
    assert_eq!(animals.len(), 8);
    let max = &animals[0];
    assert_eq!(max["id"], "dog-001");
    assert_eq!(max["name"], "Max");
    assert_eq!(max["spayedNeutered"], true);
    assert_eq!(max["energyLevel"], "high");
    assert_eq!(max["dateArrived"], "2024-01-15");
    assert_eq!(max["adopted"], false);
}

#[tokio::test]
async fn test_mcp_tool_call_get_animal_by_id() {
    let app = create_test_app();

    let found = call_tool(&app, "get_animal_by_id", json!({ "id": "cat-001" }), 5).await;
    assert_eq!(found["animal"]["name"], "Luna");

    let missing = call_tool(&app, "get_animal_by_id", json!({ "id": "nonexistent-id" }), 6).await;
    assert!(missing["animal"].is_null());
}

#[tokio::test]
async fn test_mcp_tool_call_search_by_name_is_case_insensitive() {
    let app = create_test_app();

    let upper = call_tool(&app, "search_animals_by_name", json!({ "name": "Max" }), 7).await;
    let lower = call_tool(&app, "search_animals_by_name", json!({ "name": "max" }), 8).await;

    assert_eq!(upper["animal"]["id"], "dog-001");
    assert_eq!(upper, lower);

    let missing = call_tool(
        &app,
        "search_animals_by_name",
        json!({ "name": "NonexistentName" }),
        9,
    )
    .await;
    assert!(missing["animal"].is_null());
}

#[tokio::test]
async fn test_mcp_adoption_workflow() {
    let app = create_test_app();

    let adopted = call_tool(&app, "adopt_pet", json!({ "id": "dog-003" }), 10).await;
    assert_eq!(adopted["success"], true);
    let certificate = &adopted["certificate"];
    assert_eq!(certificate["animalId"], "dog-003");
    assert_eq!(certificate["pickupLocation"], "123 Main St, Anytown, USA");
    assert!(chrono::DateTime::parse_from_rfc3339(certificate["timestamp"].as_str().unwrap()).is_ok());

    // Second attempt fails without a JSON-RPC error
    let again = call_tool(&app, "adopt_pet", json!({ "id": "dog-003" }), 11).await;
    assert_eq!(again["success"], false);
    assert!(again["certificate"].is_null());

    // Gone from the listing, still visible by id
    let listed = call_tool(&app, "list_animals", json!({}), 12).await;
    let ids = listed_ids(&listed);
    assert_eq!(ids.len(), 7);
    assert!(!ids.contains(&"dog-003".to_owned()));

    let record = call_tool(&app, "get_animal_by_id", json!({ "id": "dog-003" }), 13).await;
    assert_eq!(record["animal"]["adopted"], true);
}

#[tokio::test]
async fn test_mcp_adopt_by_name() {
    let app = create_test_app();

    let adopted = call_tool(&app, "adopt_pet", json!({ "id": "cocoa" }), 14).await;
    assert_eq!(adopted["success"], true);
    assert_eq!(adopted["certificate"]["animalId"], "rabbit-001");
}

#[tokio::test]
async fn test_mcp_adopt_unknown_animal() {
    let app = create_test_app();

    let result = call_tool(&app, "adopt_pet", json!({ "id": "nonexistent-id" }), 15).await;
    assert_eq!(result["success"], false);
    assert!(result["certificate"].is_null());

    let listed = call_tool(&app, "list_animals", json!({}), 16).await;
    assert_eq!(listed_ids(&listed).len(), 8);
}

#[tokio::test]
async fn test_mcp_concurrent_adoptions_issue_one_certificate() {
    let app = create_test_app();

    let attempts = (0..10).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            call_tool(&app, "adopt_pet", json!({ "id": "dog-004" }), 100 + i).await["success"]
                == true
        })
    });

    let mut successes = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        if attempt.await.unwrap() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 17).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 17);

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app();

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let params = json!({ "name": "unknown_tool", "arguments": {} });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 18).await;

    assert_eq!(status, StatusCode::OK);
    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_arguments() {
    let app = create_test_app();

    let params = json!({
        "name": "get_animal_by_id",
        "arguments": { "wrong_param": "dog-001" }
    });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 19).await;

    assert_eq!(status, StatusCode::OK);
    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("Invalid arguments"));
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 20).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 20);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body_bytes.is_empty());
}

#[tokio::test]
async fn test_legacy_sse_message_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/sse/message")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "method": "ping", "id": 21 }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["id"], 21);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/nowhere")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn preflight(app: &axum::Router, origin: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/mcp")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_cors_allows_only_configured_origins() {
    let app = create_test_app();

    let allowed = preflight(&app, ALLOWED_ORIGIN).await;
    assert_eq!(
        allowed.headers().get("access-control-allow-origin").unwrap(),
        ALLOWED_ORIGIN
    );

    let denied = preflight(&app, "https://evil.example").await;
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_wildcard() {
    let state = Arc::new(AppState::with_default_catalog().unwrap());
    let app = create_app_router(state, &AllowedOrigins::Any);

    let response = preflight(&app, "https://anywhere.example").await;
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
