use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiError, Backend};
use crate::config::Config;
use crate::format;
use crate::registry;
use crate::types::{ApiEnvelope, ImagePage, ImageRecord, LibraryStats, TagRecord};

/// Everything a tool call can fail with. All variants are recovered at the
/// dispatch boundary and rendered as response text; none reach the MCP layer.
#[derive(Debug, Error)]
enum ToolError {
    #[error("error: missing {0}")]
    MissingArgument(&'static str),
    #[error("{action} failed: {message}")]
    Backend {
        action: &'static str,
        message: String,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{action} returned an unexpected payload: {source}")]
    Payload {
        action: &'static str,
        source: serde_json::Error,
    },
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Read-only MCP bridge to the image library backend. Holds no state across
/// calls; every tool invocation is a single independent round trip.
#[derive(Clone)]
pub struct ImageMcpServer<B> {
    backend: B,
    config: Config,
}

impl<B: Backend> ImageMcpServer<B> {
    pub fn new(backend: B, config: Config) -> Self {
        Self { backend, config }
    }

    /// Single error-to-text stage wrapping every tool handler: whatever a
    /// handler fails with becomes response text, so no tool call ever
    /// produces a protocol-level error.
    pub async fn dispatch(&self, name: &str, args: &JsonObject) -> String {
        match self.run_tool(name, args).await {
            Ok(text) => text,
            Err(err) => err.to_string(),
        }
    }

    async fn run_tool(&self, name: &str, args: &JsonObject) -> Result<String, ToolError> {
        match name {
            "search_images" => self.search_images(args).await,
            "list_images" => self.list_images(args).await,
            "get_image_detail" => self.get_image_detail(args).await,
            "list_tags" => self.list_tags().await,
            "search_images_by_tag" => self.search_images_by_tag(args).await,
            "search_tags" => self.search_tags(args).await,
            "get_stats" => self.get_stats().await,
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    async fn search_images(&self, args: &JsonObject) -> Result<String, ToolError> {
        const ACTION: &str = "image search";
        let page = page_arg(args);
        let page_size = page_size_arg(args);
        let mut query = page_query(page, page_size);
        if let Some(keyword) = keyword_arg(args) {
            query.push(("keyword", keyword));
        }
        let envelope = self.backend.get("/mcp/images/search", &query).await?;
        let page_data: ImagePage = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_image_list(
            &page_data.records,
            page_data.total,
            page,
            page_size,
        ))
    }

    async fn list_images(&self, args: &JsonObject) -> Result<String, ToolError> {
        const ACTION: &str = "image listing";
        let page = page_arg(args);
        let page_size = page_size_arg(args);
        let query = page_query(page, page_size);
        let envelope = self.backend.get("/mcp/images", &query).await?;
        let page_data: ImagePage = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_image_list(
            &page_data.records,
            page_data.total,
            page,
            page_size,
        ))
    }

    async fn get_image_detail(&self, args: &JsonObject) -> Result<String, ToolError> {
        const ACTION: &str = "image detail lookup";
        let image_id = require_id(args, "imageId", "image id")?;
        let endpoint = format!("/mcp/images/{image_id}");
        let envelope = self.backend.get(&endpoint, &[]).await?;
        let image: ImageRecord = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_image(&image, &self.config))
    }

    async fn list_tags(&self) -> Result<String, ToolError> {
        const ACTION: &str = "tag listing";
        let envelope = self.backend.get("/mcp/tags", &[]).await?;
        let tags: Vec<TagRecord> = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_tag_list(&tags))
    }

    async fn search_images_by_tag(&self, args: &JsonObject) -> Result<String, ToolError> {
        const ACTION: &str = "image search by tag";
        let tag_id = require_id(args, "tagId", "tag id")?;
        let page = page_arg(args);
        let page_size = page_size_arg(args);
        let query = page_query(page, page_size);
        let endpoint = format!("/mcp/tags/{tag_id}/images");
        let envelope = self.backend.get(&endpoint, &query).await?;
        let page_data: ImagePage = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_image_list(
            &page_data.records,
            page_data.total,
            page,
            page_size,
        ))
    }

    async fn search_tags(&self, args: &JsonObject) -> Result<String, ToolError> {
        const ACTION: &str = "tag search";
        let mut query = Vec::new();
        if let Some(keyword) = keyword_arg(args) {
            query.push(("keyword", keyword));
        }
        let envelope = self.backend.get("/mcp/tags/search", &query).await?;
        let tags: Vec<TagRecord> = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_tag_list(&tags))
    }

    async fn get_stats(&self) -> Result<String, ToolError> {
        const ACTION: &str = "stats lookup";
        let envelope = self.backend.get("/mcp/stats", &[]).await?;
        let stats: LibraryStats = parse_data(expect_success(envelope, ACTION)?, ACTION)?;
        Ok(format::format_stats(&stats))
    }
}

/// `page = max(1, supplied or 1)`; zero and negative values fall back to 1.
fn page_arg(args: &JsonObject) -> u64 {
    args.get("page")
        .and_then(Value::as_i64)
        .map(|page| page.max(1))
        .unwrap_or(1) as u64
}

/// `page_size = min(50, max(1, supplied or 10))`; zero means "not supplied".
fn page_size_arg(args: &JsonObject) -> u64 {
    args.get("pageSize")
        .and_then(Value::as_i64)
        .filter(|&size| size != 0)
        .unwrap_or(10)
        .clamp(1, 50) as u64
}

fn keyword_arg(args: &JsonObject) -> Option<String> {
    args.get("keyword")
        .and_then(Value::as_str)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
}

fn page_query(page: u64, page_size: u64) -> Vec<(&'static str, String)> {
    vec![("current", page.to_string()), ("size", page_size.to_string())]
}

/// Identifier arguments fail fast before any backend call; absent, null and
/// zero all count as missing.
fn require_id(args: &JsonObject, key: &str, label: &'static str) -> Result<i64, ToolError> {
    match args.get(key).and_then(Value::as_i64) {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ToolError::MissingArgument(label)),
    }
}

/// `code == 200` is the sole success discriminator; everything else carries
/// the backend's message or a fixed fallback.
fn expect_success(envelope: ApiEnvelope, action: &'static str) -> Result<Value, ToolError> {
    if envelope.code != 200 {
        return Err(ToolError::Backend {
            action,
            message: envelope
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    envelope.data.ok_or(ToolError::Backend {
        action,
        message: "unknown error".to_string(),
    })
}

fn parse_data<T: serde::de::DeserializeOwned>(
    data: Value,
    action: &'static str,
) -> Result<T, ToolError> {
    serde_json::from_value(data).map_err(|source| ToolError::Payload { action, source })
}

impl<B: Backend + Send + Sync + 'static> ServerHandler for ImageMcpServer<B> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Read-only bridge to an image library backend. Search and browse \
                 images, inspect one image in detail, explore tags and fetch \
                 library statistics."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(registry::catalog()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        let text = self.dispatch(request.name.as_ref(), &args).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
