// crates/ord-bridge-mcp/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server implementations for stdio and HTTP transports.
// Purpose: Expose ORD Bridge tools via JSON-RPC 2.0.
// Dependencies: ord-bridge-config, ord-bridge-providers, axum, tokio
// ============================================================================

//! ## Overview
//! The MCP server exposes the ORD registration tools using JSON-RPC 2.0 over
//! stdio (Content-Length framed) or HTTP. All calls route through
//! [`crate::tools::ToolRouter`]; malformed requests and oversized bodies are
//! rejected with JSON-RPC errors before any tool runs.
//! Security posture: request bodies are untrusted and size-capped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use ord_bridge_config::OrdConfig;
use ord_bridge_config::ServerTransport;
use ord_bridge_contract::ToolDefinition;
use ord_bridge_providers::provider_from_config;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;

use crate::telemetry::StderrTelemetry;
use crate::tools::ToolError;
use crate::tools::ToolRouter;

// ============================================================================
// SECTION: MCP Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Server configuration.
    config: OrdConfig,
    /// Tool router for request dispatch.
    router: Arc<ToolRouter>,
}

impl McpServer {
    /// Builds a new MCP server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when initialization fails.
    pub fn from_config(config: OrdConfig) -> Result<Self, McpServerError> {
        config.validate().map_err(|err| McpServerError::Config(err.to_string()))?;
        let provider =
            provider_from_config(&config).map_err(|err| McpServerError::Init(err.to_string()))?;
        let router =
            ToolRouter::new(provider, Arc::new(StderrTelemetry), config.limits.max_name_length)
                .map_err(|err| McpServerError::Init(err.to_string()))?;
        Ok(Self {
            config,
            router: Arc::new(router),
        })
    }

    /// Serves requests using the configured transport.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when the server fails.
    pub async fn serve(self) -> Result<(), McpServerError> {
        let max_body_bytes = self.config.server.max_body_bytes;
        match self.config.server.transport {
            ServerTransport::Stdio => serve_stdio(&self.router, max_body_bytes).await,
            ServerTransport::Http => serve_http(self.config, self.router).await,
        }
    }
}

// ============================================================================
// SECTION: Stdio Transport
// ============================================================================

/// Serves JSON-RPC requests over stdin/stdout until stdin closes.
async fn serve_stdio(router: &ToolRouter, max_body_bytes: usize) -> Result<(), McpServerError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    loop {
        let Some(bytes) = read_framed(&mut reader, max_body_bytes).await? else {
            return Ok(());
        };
        let response = match serde_json::from_slice::<JsonRpcRequest>(&bytes) {
            Ok(request) => handle_request(router, request).await.1,
            Err(_) => invalid_request_response(),
        };
        let payload = serde_json::to_vec(&response)
            .map_err(|_| McpServerError::Transport("json-rpc serialization failed".to_string()))?;
        write_framed(&mut writer, &payload).await?;
    }
}

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Serves JSON-RPC requests over HTTP.
async fn serve_http(config: OrdConfig, router: Arc<ToolRouter>) -> Result<(), McpServerError> {
    let bind = config
        .server
        .bind
        .as_ref()
        .ok_or_else(|| McpServerError::Config("bind address required".to_string()))?;
    let addr: SocketAddr =
        bind.parse().map_err(|_| McpServerError::Config("invalid bind address".to_string()))?;
    let state = Arc::new(ServerState {
        router,
        max_body_bytes: config.server.max_body_bytes,
    });
    let app = Router::new().route("/rpc", post(handle_http)).with_state(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| McpServerError::Transport("http bind failed".to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|_| McpServerError::Transport("http server failed".to_string()))
}

/// Shared server state for HTTP handlers.
struct ServerState {
    /// Tool router for request dispatch.
    router: Arc<ToolRouter>,
    /// Maximum allowed request body size.
    max_body_bytes: usize,
}

/// Handles HTTP JSON-RPC requests.
async fn handle_http(State(state): State<Arc<ServerState>>, bytes: Bytes) -> impl IntoResponse {
    let response = parse_request(&state, &bytes).await;
    (response.0, axum::Json(response.1))
}

// ============================================================================
// SECTION: JSON-RPC Handling
// ============================================================================

/// Incoming JSON-RPC request payload.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    jsonrpc: String,
    /// Request identifier.
    id: Value,
    /// Method name.
    method: String,
    /// Optional parameters payload.
    params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Human-readable error message.
    message: String,
}

/// Tool call parameters for JSON-RPC requests.
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    /// Tool name.
    name: String,
    /// Raw JSON arguments.
    arguments: Value,
}

/// Tool list response payload.
#[derive(Debug, Serialize)]
struct ToolListResult {
    /// Registered tool definitions.
    tools: Vec<ToolDefinition>,
}

/// Tool call response payload.
#[derive(Debug, Serialize)]
struct ToolCallResult {
    /// Tool output content.
    content: Vec<ToolContent>,
}

/// Tool output payloads for JSON-RPC responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ToolContent {
    /// JSON tool output.
    Json {
        /// JSON payload.
        json: Value,
    },
}

/// Dispatches a JSON-RPC request to the tool router.
async fn handle_request(
    router: &ToolRouter,
    request: JsonRpcRequest,
) -> (StatusCode, JsonRpcResponse) {
    if request.jsonrpc != "2.0" {
        return (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32600,
                    message: "invalid json-rpc version".to_string(),
                }),
            },
        );
    }
    match request.method.as_str() {
        "tools/list" => match serde_json::to_value(ToolListResult {
            tools: router.list_tools(),
        }) {
            Ok(value) => (
                StatusCode::OK,
                JsonRpcResponse {
                    jsonrpc: "2.0",
                    id: request.id,
                    result: Some(value),
                    error: None,
                },
            ),
            Err(_) => jsonrpc_error(request.id, &ToolError::Serialization),
        },
        "tools/call" => {
            let id = request.id;
            let params = request.params.unwrap_or(Value::Null);
            match serde_json::from_value::<ToolCallParams>(params) {
                Ok(call) => match router.handle_tool_call(&call.name, call.arguments).await {
                    Ok(result) => match serde_json::to_value(ToolCallResult {
                        content: vec![ToolContent::Json {
                            json: result,
                        }],
                    }) {
                        Ok(value) => (
                            StatusCode::OK,
                            JsonRpcResponse {
                                jsonrpc: "2.0",
                                id,
                                result: Some(value),
                                error: None,
                            },
                        ),
                        Err(_) => jsonrpc_error(id, &ToolError::Serialization),
                    },
                    Err(err) => jsonrpc_error(id, &err),
                },
                Err(_) => (
                    StatusCode::BAD_REQUEST,
                    JsonRpcResponse {
                        jsonrpc: "2.0",
                        id,
                        result: None,
                        error: Some(JsonRpcError {
                            code: -32602,
                            message: "invalid tool params".to_string(),
                        }),
                    },
                ),
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32601,
                    message: "method not found".to_string(),
                }),
            },
        ),
    }
}

/// Parses and validates a JSON-RPC request payload.
async fn parse_request(state: &ServerState, bytes: &Bytes) -> (StatusCode, JsonRpcResponse) {
    if bytes.len() > state.max_body_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: Value::Null,
                result: None,
                error: Some(JsonRpcError {
                    code: -32070,
                    message: "request body too large".to_string(),
                }),
            },
        );
    }
    match serde_json::from_slice::<JsonRpcRequest>(bytes.as_ref()) {
        Ok(request) => handle_request(&state.router, request).await,
        Err(_) => (StatusCode::BAD_REQUEST, invalid_request_response()),
    }
}

/// Builds the response for a request that failed JSON-RPC parsing.
fn invalid_request_response() -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0",
        id: Value::Null,
        result: None,
        error: Some(JsonRpcError {
            code: -32600,
            message: "invalid json-rpc request".to_string(),
        }),
    }
}

/// Builds a JSON-RPC error response for a tool failure.
fn jsonrpc_error(id: Value, error: &ToolError) -> (StatusCode, JsonRpcResponse) {
    let (status, code, message) = match error {
        ToolError::UnknownTool => (StatusCode::BAD_REQUEST, -32601, "unknown tool".to_string()),
        ToolError::InvalidParams(message) => (StatusCode::BAD_REQUEST, -32602, message.clone()),
        ToolError::Unauthenticated => {
            (StatusCode::UNAUTHORIZED, -32001, "unauthenticated".to_string())
        }
        ToolError::Unauthorized => (StatusCode::FORBIDDEN, -32003, "unauthorized".to_string()),
        ToolError::Internal(message) => (StatusCode::OK, -32050, message.clone()),
        ToolError::Serialization => (StatusCode::OK, -32060, "serialization failed".to_string()),
    };
    (
        status,
        JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
            }),
        },
    )
}

// ============================================================================
// SECTION: Framing Helpers
// ============================================================================

/// Reads a framed stdio payload using MCP Content-Length headers.
///
/// Returns `Ok(None)` when the stream closes cleanly before a frame starts.
async fn read_framed<R>(
    reader: &mut R,
    max_body_bytes: usize,
) -> Result<Option<Vec<u8>>, McpServerError>
where
    R: AsyncBufRead + Unpin,
{
    let mut content_length: Option<usize> = None;
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .await
            .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
        if bytes == 0 {
            if content_length.is_none() {
                return Ok(None);
            }
            return Err(McpServerError::Transport("stdio closed mid-frame".to_string()));
        }
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| McpServerError::Transport("invalid content length".to_string()))?;
            content_length = Some(parsed);
        }
    }
    let len = content_length
        .ok_or_else(|| McpServerError::Transport("missing content length".to_string()))?;
    if len > max_body_bytes {
        return Err(McpServerError::Transport("payload too large".to_string()));
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .await
        .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
    Ok(Some(buf))
}

/// Writes a framed stdio payload using MCP Content-Length headers.
async fn write_framed<W>(writer: &mut W, payload: &[u8]) -> Result<(), McpServerError>
where
    W: AsyncWrite + Unpin,
{
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer
        .write_all(header.as_bytes())
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .write_all(payload)
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .flush()
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// MCP server errors.
#[derive(Debug, thiserror::Error)]
pub enum McpServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::missing_docs_in_private_items,
        reason = "Test-only framing assertions."
    )]

    use std::io::Cursor;

    use tokio::io::BufReader;

    use super::read_framed;
    use super::write_framed;

    /// Frames a payload the way a stdio client would.
    fn framed(payload: &[u8]) -> Vec<u8> {
        format!("Content-Length: {}\r\n\r\n{}", payload.len(), String::from_utf8_lossy(payload))
            .into_bytes()
    }

    #[tokio::test]
    async fn read_framed_rejects_payload_over_limit() {
        let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let mut reader = BufReader::new(Cursor::new(framed(payload)));
        let result = read_framed(&mut reader, payload.len() - 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn read_framed_accepts_payload_at_limit() {
        let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let mut reader = BufReader::new(Cursor::new(framed(payload)));
        let result = read_framed(&mut reader, payload.len()).await;
        let bytes = result.expect("frame read").expect("frame present");
        assert_eq!(bytes, payload);
    }

    #[tokio::test]
    async fn read_framed_reports_clean_end_of_stream() {
        let mut reader = BufReader::new(Cursor::new(Vec::new()));
        let result = read_framed(&mut reader, 1024).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn read_framed_requires_content_length() {
        let mut reader = BufReader::new(Cursor::new(b"X-Other: 1\r\n\r\n{}".to_vec()));
        let result = read_framed(&mut reader, 1024).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn write_framed_round_trips_through_read_framed() {
        let payload = br#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#;
        let mut buffer = Vec::new();
        write_framed(&mut buffer, payload).await.expect("write");
        let mut reader = BufReader::new(Cursor::new(buffer));
        let bytes = read_framed(&mut reader, 1024).await.expect("read").expect("frame");
        assert_eq!(bytes, payload);
    }
}
