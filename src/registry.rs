//! Static catalog of the tools exposed to MCP clients. Tool and argument
//! names here must stay in sync with the dispatch table in `mcp_server`;
//! a test over there guards the pairing.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::json;

fn tool(name: &'static str, description: &'static str, schema: serde_json::Value) -> Tool {
    Tool::new(
        name,
        description,
        Arc::new(serde_json::from_value(schema).unwrap()),
    )
}

pub fn catalog() -> Vec<Tool> {
    vec![
        tool(
            "search_images",
            "Search images by keyword across title, description and file name. \
             Returns a paginated list of matches.",
            json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "Search keyword, matched against image title, description or file name"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number, starting at 1",
                        "default": 1
                    },
                    "pageSize": {
                        "type": "number",
                        "description": "Results per page, default 10, maximum 50",
                        "default": 10
                    }
                },
                "required": []
            }),
        ),
        tool(
            "list_images",
            "List images in the library, newest uploads first.",
            json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "number",
                        "description": "Page number, starting at 1",
                        "default": 1
                    },
                    "pageSize": {
                        "type": "number",
                        "description": "Results per page, default 10, maximum 50",
                        "default": 10
                    }
                },
                "required": []
            }),
        ),
        tool(
            "get_image_detail",
            "Get full details for one image: title, description, dimensions, \
             EXIF fields, tags and asset links.",
            json!({
                "type": "object",
                "properties": {
                    "imageId": {
                        "type": "number",
                        "description": "Image ID"
                    }
                },
                "required": ["imageId"]
            }),
        ),
        tool(
            "list_tags",
            "List every available image tag. Useful to discover how the library is organized.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        tool(
            "search_images_by_tag",
            "Find images carrying a given tag. Use list_tags first to discover tag IDs.",
            json!({
                "type": "object",
                "properties": {
                    "tagId": {
                        "type": "number",
                        "description": "Tag ID"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number, starting at 1",
                        "default": 1
                    },
                    "pageSize": {
                        "type": "number",
                        "description": "Results per page, default 10, maximum 50",
                        "default": 10
                    }
                },
                "required": ["tagId"]
            }),
        ),
        tool(
            "search_tags",
            "Search tags by name keyword.",
            json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "Tag name keyword"
                    }
                },
                "required": []
            }),
        ),
        tool(
            "get_stats",
            "Get library statistics: total image and tag counts.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
