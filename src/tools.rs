//! MCP tool surface: schema derivation and call dispatch.
//!
//! Both halves are driven by the route table in [`crate::endpoints`]:
//! [`tool_definitions`] derives one JSON schema per route, and
//! [`handle_tool_call`] resolves a tool name back to its route, builds the
//! upstream request, and executes it. Adding an operation is a table edit;
//! nothing here changes.
//!
//! Failures keep the upstream wire shape: the content block is a pretty
//! printed `{"error": true, "status"?, "message", "data"?}` object and the
//! MCP `isError` flag is set. Structural failures (unknown tool, missing
//! path parameter) are reported the same way but never reach the network.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::client::{ApiOutcome, DomotzClient};
use crate::endpoints::{self, RouteSpec, BODY_DESCRIPTION};
use crate::request::{self, StructuralError};

/// Result of an MCP tool call, ready to be serialized into a JSON-RPC response.
pub struct ToolResult {
    /// MCP content blocks (a single `{"type":"text","text":"..."}` entry).
    pub content: Vec<Value>,
    /// Whether the tool call failed (maps to `isError` in the MCP response).
    pub is_error: bool,
}

impl ToolResult {
    fn success(value: Value) -> Self {
        let text = serde_json::to_string_pretty(&value).unwrap_or_default();
        Self {
            content: vec![json!({ "type": "text", "text": text })],
            is_error: false,
        }
    }

    fn failure(info: Value) -> Self {
        let text = serde_json::to_string_pretty(&info).unwrap_or_default();
        Self {
            content: vec![json!({ "type": "text", "text": text })],
            is_error: true,
        }
    }

    fn structural(err: StructuralError) -> Self {
        Self::failure(error_info(None, err.to_string(), None))
    }
}

/// Builds the caller-facing error object.
fn error_info(status: Option<u16>, message: String, data: Option<Value>) -> Value {
    let mut obj = Map::new();
    obj.insert("error".to_string(), Value::Bool(true));
    if let Some(status) = status {
        obj.insert("status".to_string(), json!(status));
    }
    obj.insert("message".to_string(), Value::String(message));
    if let Some(data) = data {
        obj.insert("data".to_string(), data);
    }
    Value::Object(obj)
}

/// One tool definition per route, in table order.
pub fn tool_definitions() -> Vec<Value> {
    endpoints::ROUTES.iter().map(definition).collect()
}

fn definition(route: &RouteSpec) -> Value {
    let mut properties = Map::new();
    for param in route.path_params.iter().chain(route.query_params) {
        properties.insert(
            param.name.to_string(),
            json!({ "type": param.kind.json_type(), "description": param.description }),
        );
    }
    if route.has_body {
        properties.insert(
            "body".to_string(),
            json!({ "type": "object", "description": BODY_DESCRIPTION }),
        );
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !route.path_params.is_empty() {
        let required: Vec<Value> = route
            .path_params
            .iter()
            .map(|p| Value::String(p.name.to_string()))
            .collect();
        schema.insert("required".to_string(), Value::Array(required));
    }

    json!({
        "name": route.name,
        "description": route.description,
        "inputSchema": Value::Object(schema),
    })
}

/// Handle a tool call and return MCP content.
///
/// Unknown names and malformed arguments fail fast; the upstream API is
/// only reached once a complete request could be built.
pub async fn handle_tool_call(name: &str, args: &Value, client: &DomotzClient) -> ToolResult {
    let Some(route) = endpoints::find_route(name) else {
        return ToolResult::structural(StructuralError::UnknownOperation(name.to_string()));
    };

    let empty = Map::new();
    let bag = match args {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => {
            return ToolResult::structural(StructuralError::InvalidArguments(
                "tool arguments must be a JSON object".to_string(),
            ))
        }
    };

    let built = match request::build(route, bag) {
        Ok(built) => built,
        Err(err) => return ToolResult::structural(err),
    };

    debug!(tool = name, method = route.method.as_str(), path = %built.path, "dispatching upstream call");
    match client.invoke(&built).await {
        ApiOutcome::Success(payload) => ToolResult::success(payload),
        ApiOutcome::Failure { status, message, raw } => {
            ToolResult::failure(error_info(status, message, raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn idle_client() -> DomotzClient {
        // Any unreachable base works: these tests must never hit the network.
        DomotzClient::new("http://127.0.0.1:9", "k").unwrap()
    }

    fn text_of(result: &ToolResult) -> &str {
        result.content[0]["text"].as_str().unwrap()
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_without_network() {
        let client = idle_client();
        let result = handle_tool_call("nonexistent_op", &json!({}), &client).await;
        assert!(result.is_error);
        assert!(text_of(&result).contains("Unknown tool: nonexistent_op"));
        assert_eq!(client.calls_attempted(), 0);
    }

    #[tokio::test]
    async fn missing_parameter_fails_before_network() {
        let client = idle_client();
        let result = handle_tool_call("get_agent", &json!({}), &client).await;
        assert!(result.is_error);
        assert!(text_of(&result).contains("Missing required parameter: agent_id"));
        assert_eq!(client.calls_attempted(), 0);
    }

    #[tokio::test]
    async fn non_object_arguments_are_rejected() {
        let client = idle_client();
        let result = handle_tool_call("get_user", &json!("nope"), &client).await;
        assert!(result.is_error);
        assert!(text_of(&result).contains("Invalid arguments"));
        assert_eq!(client.calls_attempted(), 0);
    }

    #[tokio::test]
    async fn success_renders_pretty_payload() {
        let app = Router::new().route("/user", get(|| async { Json(json!({ "name": "Ada" })) }));
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let result = handle_tool_call("get_user", &json!({}), &client).await;
        assert!(!result.is_error);
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&json!({ "name": "Ada" })).unwrap()
        );
        assert_eq!(client.calls_attempted(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_renders_error_object() {
        let app = Router::new().route(
            "/agent/7",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))) }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let result = handle_tool_call("get_agent", &json!({ "agent_id": 7 }), &client).await;
        assert!(result.is_error);
        let info: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(
            info,
            json!({
                "error": true,
                "status": 404,
                "message": "not found",
                "data": { "message": "not found" }
            })
        );
    }

    #[test]
    fn definitions_cover_every_route() {
        let defs = tool_definitions();
        assert_eq!(defs.len(), endpoints::ROUTES.len());
        assert_eq!(defs[0]["name"], "list_agents");
        // Query-only routes advertise no required list at all.
        assert!(defs[0]["inputSchema"].get("required").is_none());
    }

    #[test]
    fn definitions_require_exactly_the_path_parameters() {
        let defs = tool_definitions();
        let get_agent = defs.iter().find(|d| d["name"] == "get_agent").unwrap();
        assert_eq!(get_agent["inputSchema"]["required"], json!(["agent_id"]));
        assert_eq!(
            get_agent["inputSchema"]["properties"]["agent_id"]["type"],
            "integer"
        );
    }

    #[test]
    fn body_routes_advertise_a_body_property() {
        let defs = tool_definitions();
        let create = defs
            .iter()
            .find(|d| d["name"] == "create_eye_s_n_m_p_trigger")
            .unwrap();
        let body = &create["inputSchema"]["properties"]["body"];
        assert_eq!(body["type"], "object");
        assert!(create["inputSchema"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p != "body"));
    }
}
