//! purgekit MCP server
//!
//! MCP server implementation on the official rmcp SDK. Runs over the stdio
//! transport and exposes each cache-management ability as a tool, so an MCP
//! host can purge the Cloudflare cache or toggle development mode for the
//! configured zone. Input schemas come straight from the ability input types.

use anyhow::Result;
use purgekit_abilities::{AbilityService, ClearCacheInput, Outcome, SetDevelopmentModeInput};
use purgekit_config::Settings;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_router,
};
use tracing::error;

/// purgekit MCP server
#[derive(Clone)]
pub struct PurgekitServer {
    tool_router: ToolRouter<Self>,
}

impl Default for PurgekitServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PurgekitServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    fn service() -> Result<AbilityService, String> {
        let settings = Settings::load().map_err(|e| format!("Failed to load settings: {}", e))?;
        Ok(AbilityService::new(settings))
    }

    /// Purge the Cloudflare cache
    #[tool(
        description = "Purges the Cloudflare cache for the configured zone. By default purges everything; pass files, tags, or hosts to scope the purge. Requires Cloudflare API credentials to be configured."
    )]
    async fn cloudflare_clear_cache(
        &self,
        params: Parameters<ClearCacheInput>,
    ) -> Result<String, String> {
        let service = Self::service()?;
        render(service.clear_cache(&params.0).await)
    }

    /// Read zone information
    #[tool(
        description = "Reads status, plan, paused state, and name servers of the configured Cloudflare zone."
    )]
    async fn cloudflare_zone_info(&self) -> Result<String, String> {
        let service = Self::service()?;
        render(service.zone_info().await)
    }

    /// Read the development mode setting
    #[tool(
        description = "Reads whether the Cloudflare zone is in development mode (cache bypassed) and how long until it switches off."
    )]
    async fn cloudflare_get_development_mode(&self) -> Result<String, String> {
        let service = Self::service()?;
        render(service.get_development_mode().await)
    }

    /// Toggle the development mode setting
    #[tool(
        description = "Turns Cloudflare development mode on or off for the configured zone. When on, Cloudflare bypasses its cache and switches the mode off automatically after three hours."
    )]
    async fn cloudflare_set_development_mode(
        &self,
        params: Parameters<SetDevelopmentModeInput>,
    ) -> Result<String, String> {
        let service = Self::service()?;
        render(service.set_development_mode(&params.0).await)
    }
}

/// Render an outcome as tool output; failed outcomes become tool errors
fn render(outcome: Outcome) -> Result<String, String> {
    if !outcome.success {
        return Err(outcome.message);
    }
    match &outcome.detail {
        Some(detail) => {
            let pretty = serde_json::to_string_pretty(detail)
                .unwrap_or_else(|_| detail.to_string());
            Ok(format!("{}\n\n{}", outcome.message, pretty))
        }
        None => Ok(outcome.message),
    }
}

impl ServerHandler for PurgekitServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "purgekit MCP server. Cloudflare cache management for the configured zone: \
             purge cache, read zone info, get/set development mode."
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }
}

/// Run the MCP server on the stdio transport
pub async fn run_server() -> Result<()> {
    let server = PurgekitServer::new();
    let transport = (tokio::io::stdin(), tokio::io::stdout());

    let service = server.serve(transport).await.map_err(|e| {
        error!("MCP server initialization failed: {}", e);
        anyhow::anyhow!("MCP server initialization failed: {}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP server error: {}", e);
        anyhow::anyhow!("MCP server error: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_success_without_detail() {
        let rendered = render(Outcome::ok("Purged entire Cloudflare cache for example.com."));
        assert_eq!(
            rendered.unwrap(),
            "Purged entire Cloudflare cache for example.com."
        );
    }

    #[test]
    fn test_render_success_with_detail() {
        let rendered = render(Outcome::ok_with_detail(
            "Zone example.com (z1) is active on the Free plan.",
            serde_json::json!({"id": "z1"}),
        ))
        .unwrap();
        assert!(rendered.starts_with("Zone example.com"));
        assert!(rendered.contains("\"id\": \"z1\""));
    }

    #[test]
    fn test_render_failure_is_a_tool_error() {
        let rendered = render(Outcome::fail("Cloudflare API error: Authentication error"));
        assert_eq!(
            rendered.unwrap_err(),
            "Cloudflare API error: Authentication error"
        );
    }

    #[test]
    fn test_all_abilities_have_a_tool() {
        let server = PurgekitServer::new();
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), purgekit_abilities::catalog().len());
    }
}
