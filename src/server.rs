//! Stdio JSON-RPC server loop.
//!
//! Reads one request per line from stdin, writes one response per line to
//! stdout. stdout carries nothing but protocol traffic; all logging goes
//! through tracing.

use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use mention_protocols::mcp::{
    CallToolParams, CallToolResult, InitializeResult, McpError, McpMethod, McpRequest,
    McpResponse, RequestId, ServerCapabilities, ServerInfo, ToolsCapability, ToolsListResult,
    PROTOCOL_VERSION,
};
use mention_protocols::ToolError;
use mention_tools::ToolRegistry;

pub struct McpServer {
    name: String,
    version: String,
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        registry: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            registry,
        }
    }

    /// Serve requests until stdin reaches EOF.
    pub async fn serve_stdio(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!(name = %self.name, version = %self.version, "serving MCP over stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                match serde_json::to_string(&response) {
                    Ok(json) => {
                        stdout.write_all(json.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                    Err(e) => error!(error = %e, "failed to serialize response"),
                }
            }
        }

        Ok(())
    }

    async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                error!(error = %e, "malformed request line");
                Some(McpResponse::error(RequestId::Null, McpError::parse_error()))
            }
        }
    }

    /// Dispatch a single request. Notifications yield no response.
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        debug!(method = %request.method, "handling request");

        let method = McpMethod::parse(&request.method);

        let Some(id) = request.id else {
            // Notifications carry no id; nothing to answer even for
            // methods we don't recognize.
            return None;
        };

        let response = match method {
            Some(McpMethod::Initialize) => self.handle_initialize(id),
            Some(McpMethod::ListTools) => self.handle_list_tools(id),
            Some(McpMethod::CallTool) => self.handle_call_tool(id, request.params).await,
            Some(McpMethod::Ping) => McpResponse::success(id, serde_json::json!({})),
            Some(McpMethod::Initialized) | None => {
                McpResponse::error(id, McpError::method_not_found(&request.method))
            }
        };

        Some(response)
    }

    fn handle_initialize(&self, id: RequestId) -> McpResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
            server_info: ServerInfo {
                name: self.name.clone(),
                version: self.version.clone(),
            },
        };
        success_json(id, &result)
    }

    fn handle_list_tools(&self, id: RequestId) -> McpResponse {
        let result = ToolsListResult {
            tools: self.registry.list(),
        };
        success_json(id, &result)
    }

    async fn handle_call_tool(
        &self,
        id: RequestId,
        params: Option<serde_json::Value>,
    ) -> McpResponse {
        let params: CallToolParams =
            match serde_json::from_value(params.unwrap_or(serde_json::Value::Null)) {
                Ok(params) => params,
                Err(e) => return McpResponse::error(id, McpError::invalid_params(e.to_string())),
            };

        let Some(tool) = self.registry.get(&params.name) else {
            return McpResponse::error(
                id,
                McpError::invalid_params(format!("unknown tool: {}", params.name)),
            );
        };

        info!(tool = %params.name, "calling tool");

        match tool.execute(params.arguments).await {
            Ok(result) => success_json(id, &CallToolResult::text(result.content, result.is_error)),
            Err(ToolError::InvalidParameters(message)) => {
                McpResponse::error(id, McpError::invalid_params(message))
            }
            Err(err) => {
                error!(tool = %params.name, error = %err, "tool execution failed");
                McpResponse::error(id, McpError::internal_error(err.to_string()))
            }
        }
    }
}

fn success_json<T: Serialize>(id: RequestId, value: &T) -> McpResponse {
    match serde_json::to_value(value) {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
