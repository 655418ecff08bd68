//! MCP Server implementation
//!
//! The server owns the immutable tool registry, the case profile, and the
//! clock, and routes JSON-RPC messages read from stdin to the dispatcher.
//! Responses and logs never share a stream: stdout carries the protocol,
//! stderr carries diagnostics.

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::case::CaseProfile;
use crate::clock::{Clock, SystemClock};
use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability, error_codes,
};
use crate::tools::{ToolDefinition, ToolResult, tool_definitions};
use crate::{Error, Result};

const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server for custody case support tools.
///
/// Every invocation is stateless: handlers read their arguments, the static
/// tables, and the clock, and return a text report. The registry is built in
/// the constructor and never mutated afterwards.
pub struct CustodyMcpServer {
    profile: CaseProfile,
    clock: Box<dyn Clock>,
    tools: Vec<ToolDefinition>,
}

impl CustodyMcpServer {
    /// Create a server with the system clock.
    pub fn new(profile: CaseProfile) -> Self {
        Self::with_clock(profile, Box::new(SystemClock))
    }

    /// Create a server with an injected clock; tests use this for
    /// deterministic ids and deadline math.
    pub fn with_clock(profile: CaseProfile, clock: Box<dyn Clock>) -> Self {
        Self {
            profile,
            clock,
            tools: tool_definitions(),
        }
    }

    /// Run the server loop over stdio until the host closes the channel or a
    /// termination signal arrives.
    ///
    /// Each response is flushed before the next line is read, and stdout is
    /// shut down before returning so no in-flight response is dropped.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!(case = %self.profile.case_number, "MCP server ready, listening on stdio");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::info!("stdin closed, shutting down");
                        break;
                    };
                    if line.is_empty() {
                        continue;
                    }

                    tracing::debug!(request = %line, "Received message");

                    let response = match self.handle_message(&line) {
                        Ok(response) => response,
                        Err(e) => {
                            // Transport-layer fault: log it, answer it, keep going.
                            tracing::error!(error = %e, "Failed to handle message");
                            let error_response = JsonRpcResponse::error(
                                None,
                                error_codes::PARSE_ERROR,
                                format!("Parse error: {e}"),
                            );
                            Some(serde_json::to_string(&error_response)?)
                        }
                    };

                    if let Some(response) = response {
                        stdout.write_all(response.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("termination signal received, closing channel");
                    break;
                }
            }
        }

        stdout.shutdown().await?;
        Ok(())
    }

    /// Handle a single JSON-RPC message.
    ///
    /// Returns `None` for notifications (no response expected) and `Err` only
    /// when the message itself cannot be parsed.
    pub fn handle_message(&self, message: &str) -> Result<Option<String>> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(None),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map(Some).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "custody-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools_value: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools_value }))
    }

    fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                );
            }
        };

        // Tool failures surface as MCP tool errors (is_error: true), not as
        // JSON-RPC errors: the session survives every bad call.
        let tool_result = match handle_tool_call(
            &self.profile,
            self.clock.as_ref(),
            &tool_params.name,
            &tool_params.arguments,
        ) {
            Ok(report) => ToolResult::text(report),
            Err(e) => ToolResult::error(e.to_string()),
        };

        match serde_json::to_value(&tool_result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {e}"),
            ),
        }
    }

    /// Registered tool descriptors, in `tools/list` order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::clock::test_support::SteppingClock;

    use super::*;

    fn test_server() -> CustodyMcpServer {
        let clock = SteppingClock::starting_at(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        CustodyMcpServer::with_clock(CaseProfile::default(), Box::new(clock))
    }

    fn handle(server: &CustodyMcpServer, message: &str) -> Value {
        let response = server.handle_message(message).unwrap().unwrap();
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn registry_is_populated_at_construction() {
        let server = test_server();
        assert_eq!(server.tools().len(), 5);
        assert_eq!(server.tools()[0].name, "analyze_case");
    }

    #[test]
    fn initialize_reports_server_info_and_capabilities() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
        );

        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "custody-mcp");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[test]
    fn notifications_produce_no_response() {
        let server = test_server();
        for message in [
            r#"{"jsonrpc":"2.0","method":"initialized"}"#,
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        ] {
            assert!(server.handle_message(message).unwrap().is_none());
        }
    }

    #[test]
    fn ping_returns_empty_result() {
        let server = test_server();
        let response = handle(&server, r#"{"jsonrpc":"2.0","id":9,"method":"ping"}"#);
        assert_eq!(response["id"], 9);
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn unknown_method_returns_method_not_found() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":4,"method":"unknown/method","params":{}}"#,
        );
        assert_eq!(response["error"]["code"], -32601);
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("unknown/method")
        );
    }

    #[test]
    fn tools_list_returns_all_five_tools() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
        );

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 5);
        for tool in tools {
            assert!(tool["name"].is_string());
            assert!(tool["description"].is_string());
            assert!(tool["inputSchema"].is_object());
        }
    }

    #[test]
    fn tools_call_unknown_tool_is_a_tool_error_not_a_crash() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nonexistent_tool","arguments":{}}}"#,
        );

        assert_eq!(response["result"]["is_error"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("unknown tool: nonexistent_tool"));
    }

    #[test]
    fn tools_call_renders_a_report() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"analyze_case","arguments":{"analysis_type":"strengths"}}}"#,
        );

        assert!(response.get("error").is_none());
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("# Case Analysis Report"));
        assert!(text.contains("Analysis ID: CA-"));
    }

    #[test]
    fn tools_call_with_invalid_params_returns_invalid_params() {
        let server = test_server();
        let response = handle(
            &server,
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":"not-an-object"}"#,
        );
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let server = test_server();
        assert!(server.handle_message(r#"{"not valid json"#).is_err());
    }
}
