//! MCP (Model Context Protocol) server implementation

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use trendkit::{
    ReadmeRequest, Tool, TrendingRequest, README_TOOL_DESCRIPTION, TRENDING_TOOL_DESCRIPTION,
};

/// JSON-RPC 2.0 request
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

/// MCP Server implementation
struct McpServer {
    tool: Tool,
}

impl McpServer {
    fn new() -> Self {
        Self {
            tool: Tool::default(),
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            "notifications/initialized" => {
                // This is a notification, no response needed
                JsonRpcResponse::success(request.id, json!(null))
            }
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "trendkit",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "tools": [
                    {
                        "name": "get_github_trending",
                        "description": TRENDING_TOOL_DESCRIPTION,
                        "inputSchema": self.tool.trending_input_schema()
                    },
                    {
                        "name": "get_repository_readme",
                        "description": README_TOOL_DESCRIPTION,
                        "inputSchema": self.tool.readme_input_schema()
                    }
                ]
            }),
        )
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        // Tool methods never fail: every failure class is already rendered
        // into the report text.
        let report = match tool_name {
            "get_github_trending" => {
                let request: TrendingRequest = match serde_json::from_value(arguments) {
                    Ok(req) => req,
                    Err(e) => {
                        return JsonRpcResponse::error(
                            id,
                            -32602,
                            format!("Invalid arguments: {}", e),
                        );
                    }
                };
                self.tool.get_github_trending(request).await
            }
            "get_repository_readme" => {
                let request: ReadmeRequest = match serde_json::from_value(arguments) {
                    Ok(req) => req,
                    Err(e) => {
                        return JsonRpcResponse::error(
                            id,
                            -32602,
                            format!("Invalid arguments: {}", e),
                        );
                    }
                };
                self.tool.get_repository_readme(request).await
            }
            other => {
                return JsonRpcResponse::error(id, -32602, format!("Unknown tool: {}", other));
            }
        };

        JsonRpcResponse::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": report
                }]
            }),
        )
    }
}

/// Run the MCP server over stdio
pub async fn run_server() {
    let server = McpServer::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                let response = JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e));
                let json = serde_json::to_string(&response).unwrap_or_default();
                let _ = writeln!(stdout, "{}", json);
                let _ = stdout.flush();
                continue;
            }
        };

        // Skip notifications (no id)
        if request.id.is_none() && request.method.starts_with("notifications/") {
            continue;
        }

        let response = server.handle_request(request).await;
        let json = serde_json::to_string(&response).unwrap_or_default();
        let _ = writeln!(stdout, "{}", json);
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_list_exposes_both_tools() {
        let server = McpServer::new();
        let response = server.handle_tools_list(Some(json!(1)));

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "get_github_trending");
        assert_eq!(tools[1]["name"], "get_repository_readme");
        assert!(tools[0]["inputSchema"]["properties"]["since"].is_object());
        assert!(tools[1]["inputSchema"]["properties"]["repositories"].is_object());
    }

    #[test]
    fn test_initialize_response() {
        let server = McpServer::new();
        let response = server.handle_initialize(Some(json!(1)));

        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "trendkit");
        assert_eq!(result["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_rejected() {
        let server = McpServer::new();
        let response = server
            .handle_tools_call(
                Some(json!(2)),
                json!({"name": "does_not_exist", "arguments": {}}),
            )
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("does_not_exist"));
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let server = McpServer::new();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(3)),
            method: "resources/list".to_string(),
            params: json!({}),
        };
        let response = server.handle_request(request).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
    }

    #[tokio::test]
    async fn test_bad_arguments_are_rejected() {
        let server = McpServer::new();
        let response = server
            .handle_tools_call(
                Some(json!(4)),
                json!({"name": "get_repository_readme", "arguments": {"repositories": "not-a-list"}}),
            )
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("Invalid arguments"));
    }

    #[tokio::test]
    async fn test_invalid_since_returns_report_text_not_error() {
        let server = McpServer::new();
        let response = server
            .handle_tools_call(
                Some(json!(5)),
                json!({"name": "get_github_trending", "arguments": {"since": "hourly"}}),
            )
            .await;

        // Validation failures stay inside the text payload
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("❌ Error:"));
    }
}
