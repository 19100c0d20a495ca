// SPDX-License-Identifier: MIT
//
// Stdio tool server — newline-delimited JSON-RPC 2.0.
//
// One request per line on the input, one response per line on the
// output. The loop is synchronous: read a line, dispatch it, write the
// reply, flush. Notifications (messages without an `id`) are handled
// silently. Logging goes to stderr so stdout stays a clean protocol
// channel.
//
// # Methods
//
//   initialize  → protocol version, capabilities, server info
//   ping        → {}
//   tools/list  → the tool catalog
//   tools/call  → run a tool; tool failures come back as a normal
//                 result flagged `isError`, not as a protocol error
//
// # Error codes
//
//   -32700  line is not JSON
//   -32600  JSON but not a request object
//   -32601  unknown method
//   -32602  bad `tools/call` params

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::tools;

/// Protocol revision announced in `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

// ─── Wire types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Request {
    /// Absent for notifications. An explicit `null` is still a request.
    #[serde(default, deserialize_with = "present")]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

/// Wrap any value that is present in the message, `null` included.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl Response {
    const fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

// ─── Server ─────────────────────────────────────────────────────────────────

/// The request loop and its small amount of session state.
#[derive(Debug, Default)]
pub struct Server {
    initialized: bool,
    handled: u64,
}

impl Server {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve until `input` reaches end of file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        info!(protocol = PROTOCOL_VERSION, "tool server listening on stdio");
        let result = self.run_inner(input, &mut output);
        info!(requests = self.handled, "tool server stopped");
        result
    }

    fn run_inner(&mut self, mut input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "request line is not UTF-8");
                    Some(Response::failure(Value::Null, PARSE_ERROR, format!("Parse error: {e}")))
                }
            };
            if let Some(response) = response {
                serde_json::to_writer(&mut *output, &response)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
        }
    }

    /// Handle one raw line. `None` means no reply is due.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable request line");
                return Some(Response::failure(Value::Null, PARSE_ERROR, format!("Parse error: {e}")));
            }
        };

        let request: Request = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "malformed request");
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(Response::failure(id, INVALID_REQUEST, format!("Invalid request: {e}")));
            }
        };

        self.handled += 1;
        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        debug!(method = %request.method, %id, "request");
        Some(match Self::dispatch(&request.method, request.params) {
            Ok(result) => Response::success(id, result),
            Err(error) => {
                warn!(method = %request.method, code = error.code, "request rejected");
                Response::failure(id, error.code, error.message)
            }
        })
    }

    fn handle_notification(&mut self, method: &str) {
        if method == "notifications/initialized" {
            self.initialized = true;
        }
        debug!(method, "notification");
    }

    fn dispatch(method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tools::list() })),
            "tools/call" => Self::call_tool(params),
            _ => Err(RpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {method}"),
            }),
        }
    }

    fn call_tool(params: Value) -> Result<Value, RpcError> {
        let params: CallParams = serde_json::from_value(params).map_err(|e| RpcError {
            code: INVALID_PARAMS,
            message: format!("Invalid params: {e}"),
        })?;

        Ok(match tools::call(&params.name, params.arguments) {
            Ok(text) => json!({ "content": [{ "type": "text", "text": text }] }),
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool failed");
                json!({ "content": [{ "type": "text", "text": format!("Error: {e}") }], "isError": true })
            }
        })
    }

    /// Whether the client has sent `notifications/initialized`.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    /// Feed `lines` through a fresh server and parse each reply line.
    fn exchange(lines: &[Value]) -> Vec<Value> {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let mut output = Vec::new();
        Server::new().run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn request(id: i64, method: &str, params: Value) -> Value {
        json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params })
    }

    #[test]
    fn initialize_handshake() {
        let replies = exchange(&[
            request(1, "initialize", json!({ "protocolVersion": PROTOCOL_VERSION })),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            request(2, "ping", json!({})),
        ]);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(replies[0]["result"]["capabilities"], json!({ "tools": {} }));
        assert_eq!(replies[0]["result"]["serverInfo"]["name"], "tint");
        assert_eq!(replies[1], json!({ "jsonrpc": "2.0", "id": 2, "result": {} }));
    }

    #[test]
    fn notification_marks_session_initialized() {
        let mut server = Server::new();
        assert!(!server.is_initialized());
        let reply = server.handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);
        assert_eq!(reply, None);
        assert!(server.is_initialized());
    }

    #[test]
    fn tools_list_has_schemas() {
        let replies = exchange(&[request(7, "tools/list", Value::Null)]);
        let tools = replies[0]["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 8);
        assert_eq!(tools[0]["name"], "generate_palette");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["brandColor"]));
    }

    #[test]
    fn tools_call_success() {
        let replies = exchange(&[request(
            3,
            "tools/call",
            json!({ "name": "suggest_secondary_color", "arguments": { "seedColor": "#3b82f6" } }),
        )]);
        let result = &replies[0]["result"];
        assert!(result.get("isError").is_none());
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"secondaryColor\": \"#523cf6\""), "{text}");
    }

    #[test]
    fn tool_failure_is_a_result_not_an_error() {
        let replies = exchange(&[request(
            4,
            "tools/call",
            json!({ "name": "generate_color_scale", "arguments": { "seedColor": "#12345" } }),
        )]);
        assert!(replies[0].get("error").is_none());
        assert_eq!(replies[0]["result"]["isError"], true);
        assert_eq!(
            replies[0]["result"]["content"][0]["text"],
            "Error: invalid hex color: #12345"
        );

        let replies = exchange(&[request(5, "tools/call", json!({ "name": "nope", "arguments": {} }))]);
        assert_eq!(replies[0]["result"]["content"][0]["text"], "Error: unknown tool: nope");
    }

    #[test]
    fn protocol_errors() {
        let mut server = Server::new();

        let reply = server.handle_line("{not json").unwrap();
        assert_eq!(reply.id, Value::Null);
        assert_eq!(reply.error.as_ref().map(|e| e.code), Some(PARSE_ERROR));

        let reply = server.handle_line(r#"{"jsonrpc":"2.0","id":9}"#).unwrap();
        assert_eq!(reply.id, json!(9));
        assert_eq!(reply.error.as_ref().map(|e| e.code), Some(INVALID_REQUEST));

        let reply = server.handle_line(r#"{"jsonrpc":"2.0","id":10,"method":"resources/list"}"#).unwrap();
        assert_eq!(reply.error.as_ref().map(|e| e.code), Some(METHOD_NOT_FOUND));
        assert_eq!(reply.result, None);

        let reply = server.handle_line(r#"{"jsonrpc":"2.0","id":11,"method":"tools/call","params":{}}"#).unwrap();
        assert_eq!(reply.error.as_ref().map(|e| e.code), Some(INVALID_PARAMS));
    }

    #[test]
    fn error_reply_has_no_result_field() {
        let replies = exchange(&[request(12, "bogus", Value::Null)]);
        assert_eq!(
            replies[0],
            json!({ "jsonrpc": "2.0", "id": 12, "error": { "code": -32601, "message": "Method not found: bogus" } })
        );
    }

    #[test]
    fn invalid_utf8_line_gets_parse_error_and_loop_continues() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n");
        let mut output = Vec::new();
        Server::new().run(Cursor::new(input), &mut output).unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], Value::Null);
        assert_eq!(replies[0]["error"]["code"], PARSE_ERROR);
        assert_eq!(replies[1], json!({ "jsonrpc": "2.0", "id": 2, "result": {} }));
    }

    #[test]
    fn null_id_is_a_request_not_a_notification() {
        let mut server = Server::new();
        let reply = server.handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#).unwrap();
        assert_eq!(reply.id, Value::Null);
        assert_eq!(reply.result, Some(json!({})));

        assert_eq!(server.handle_line(r#"{"jsonrpc":"2.0","method":"ping"}"#), None);
    }

    #[test]
    fn final_line_without_newline_is_answered() {
        let mut output = Vec::new();
        Server::new()
            .run(Cursor::new("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}"), &mut output)
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}\n");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut output = Vec::new();
        Server::new()
            .run(Cursor::new("\n   \n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n"), &mut output)
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}\n");
    }
}
