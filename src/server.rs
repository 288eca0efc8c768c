//! MCP server exposing topic search and outline control.

use crate::state::NavState;
use crate::tools::outline::{
    HoverSectionRequest, ToggleSectionRequest, handle_hover_section, handle_outline,
    handle_toggle_section,
};
use crate::tools::search::{SearchRequest, handle_navigate, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for documentation site navigation
#[derive(Clone)]
pub struct NavServer {
    /// Shared navigation state (record store, search session, outline)
    state: Arc<NavState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for NavServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl NavServer {
    /// Create a new NavServer over prepared state.
    pub fn new(state: NavState) -> Self {
        Self {
            state: Arc::new(state),
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared NavState.
    pub fn nav_state(&self) -> &Arc<NavState> {
        &self.state
    }

    #[tool(
        description = "Search the documentation topics. Every word of the query must appear (case-insensitive) in a topic's title or keywords. Results keep table order; the first match becomes the navigation choice.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Return the page to open for the most recent search: the first matching topic's name with the site's page suffix."
    )]
    async fn navigate(&self) -> std::result::Result<String, String> {
        handle_navigate(&self.state).await
    }

    #[tool(
        description = "Expand or collapse one table-of-contents section (1-based index). The outline state is saved after every toggle.",
        input_schema = inline_schema_for_type::<ToggleSectionRequest>()
    )]
    async fn toggle_section(
        &self,
        Parameters(request): Parameters<ToggleSectionRequest>,
    ) -> std::result::Result<String, String> {
        handle_toggle_section(&self.state, request).await
    }

    #[tool(
        description = "Report a pointer entering or leaving a table-of-contents section. Only the section's indicator changes; nothing is saved.",
        input_schema = inline_schema_for_type::<HoverSectionRequest>()
    )]
    async fn hover_section(
        &self,
        Parameters(request): Parameters<HoverSectionRequest>,
    ) -> std::result::Result<String, String> {
        handle_hover_section(&self.state, request).await
    }

    #[tool(description = "Show every table-of-contents section with its expanded/collapsed state.")]
    async fn outline(&self) -> std::result::Result<String, String> {
        handle_outline(&self.state).await
    }
}

#[tool_handler]
impl ServerHandler for NavServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "docnav-mcp: Keyword search and table-of-contents control for a generated documentation site. \
                 Use search to find topics, navigate to get the page for the best match, \
                 and toggle_section/outline to work with the collapsible contents.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline definitions instead of $ref patterns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
