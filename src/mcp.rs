//! MCP (Model Context Protocol) JSON-RPC handler.
//!
//! Implements the [MCP specification](https://spec.modelcontextprotocol.io/):
//! [`handle_message`] processes one parsed JSON-RPC 2.0 message and is shared
//! by both transports, the stdio loop here and the SSE sessions in
//! [`crate::sse`]. [`run_stdio`] reads requests from stdin (one per line) and
//! writes responses to stdout; diagnostics go to stderr only.
//!
//! ## Supported methods
//!
//! | Method              | Description                      |
//! |---------------------|----------------------------------|
//! | `initialize`        | Handshake, returns capabilities  |
//! | `tools/list`        | List available tool definitions  |
//! | `tools/call`        | Execute a tool and return result |
//! | `ping`              | Liveness check                   |
//!
//! Notifications (`notifications/initialized`, `notifications/cancelled`) are
//! consumed silently and produce no response.

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::client::DomotzClient;
use crate::tools;

const SERVER_NAME: &str = "domotz-mcp-server";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Handles one JSON-RPC message.
///
/// Returns `None` for notifications (no id), `Some(response)` otherwise.
/// Every failure mode maps to a well-formed JSON-RPC response; nothing
/// escapes as a fault.
pub async fn handle_message(message: &Value, client: &DomotzClient) -> Option<Value> {
    let id = message.get("id").cloned();
    let method = message.get("method").and_then(Value::as_str).unwrap_or("");

    // Notifications carry no id and get no response
    if id.is_none() {
        match method {
            "notifications/initialized" | "notifications/cancelled" => {}
            _ => debug!(method, "ignoring unknown notification"),
        }
        return None;
    }

    let response = match method {
        "initialize" => handle_initialize(),
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tools_call(message, client).await,
        "ping" => json!({ "jsonrpc": "2.0", "result": {} }),
        _ => json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32601,
                "message": format!("Method not found: {}", method)
            }
        }),
    };
    Some(inject_id(response, id))
}

/// Run the MCP server on stdio, processing JSON-RPC requests until EOF.
pub async fn run_stdio(client: DomotzClient) {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("domotz-mcp: stdin read error: {}", e);
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(response) = handle_line(trimmed, &client).await {
            write_response(&mut stdout, &response).await;
        }
    }
}

/// Parses one transport line and produces the response, if any.
///
/// A line that is not valid JSON gets a `-32700` parse error with a null id,
/// since the request id (if any) could not be recovered.
async fn handle_line(line: &str, client: &DomotzClient) -> Option<Value> {
    let message: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            return Some(json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {
                    "code": -32700,
                    "message": format!("Parse error: {}", e)
                }
            }));
        }
    };
    handle_message(&message, client).await
}

/// Answers `initialize` with the protocol version, capabilities, and server info.
fn handle_initialize() -> Value {
    json!({
        "jsonrpc": "2.0",
        "result": {
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            }
        }
    })
}

/// Answers `tools/list` with the definitions derived from the route table.
fn handle_tools_list() -> Value {
    json!({
        "jsonrpc": "2.0",
        "result": {
            "tools": tools::tool_definitions()
        }
    })
}

/// Dispatches `tools/call` to the route-driven tool handler.
async fn handle_tools_call(message: &Value, client: &DomotzClient) -> Value {
    let Some(params) = message.get("params").filter(|p| p.is_object()) else {
        return json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params: expected an object with tool name and arguments"
            }
        });
    };
    let name = params.get("name").and_then(Value::as_str).unwrap_or("");
    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    let result = tools::handle_tool_call(name, &args, client).await;

    let mut response_result = json!({
        "content": result.content
    });
    if result.is_error {
        response_result["isError"] = json!(true);
    }

    json!({
        "jsonrpc": "2.0",
        "result": response_result
    })
}

/// Inject the request `id` into a response object.
fn inject_id(mut response: Value, id: Option<Value>) -> Value {
    if let Some(id) = id {
        response["id"] = id;
    }
    response
}

/// Write a JSON-RPC response to stdout (one line, flushed immediately).
async fn write_response(stdout: &mut tokio::io::Stdout, response: &Value) {
    let mut output = serde_json::to_string(response).unwrap_or_default();
    output.push('\n');
    if let Err(e) = stdout.write_all(output.as_bytes()).await {
        eprintln!("domotz-mcp: stdout write error: {}", e);
    }
    if let Err(e) = stdout.flush().await {
        eprintln!("domotz-mcp: stdout flush error: {}", e);
    }
}
