//! MCP (Model Context Protocol) server.
//!
//! Exposes the writing analysis to AI assistants over stdio. Tools delegate to
//! `remarq-core` the same way the CLI commands do; nothing here analyzes text
//! on its own.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use remarq_core::{Document, Lexicon, Processor};

use crate::commands::suggest::Suggestion;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze. Paragraphs are separated by newlines.
    pub text: String,
    /// Treat the text as Markdown and analyze only its prose.
    #[serde(default)]
    pub markdown: bool,
}

/// Parameters for the `suggest_alternatives` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestAlternativesParams {
    /// Complex phrases to look up, e.g. "in order to".
    pub phrases: Vec<String>,
}

/// MCP server exposing the analyzer.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    lexicon: Arc<Lexicon>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Lexicon::builtin().clone(),
            Some(remarq_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server using `lexicon`, rejecting text larger than `max_input_bytes`.
    pub fn new(lexicon: Lexicon, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            lexicon: Arc::new(lexicon),
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Annotate text and count its problems.
    #[tool(
        description = "Analyze prose for hard-to-read sentences, adverbs, passive voice, qualifiers, complex phrases and weak openers. Returns annotated paragraphs, statistics and every finding."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            bytes = params.text.len(),
            markdown = params.markdown,
            "executing MCP tool"
        );

        if let Some(limit) = self.max_input_bytes
            && params.text.len() > limit
        {
            return Err(McpError::invalid_params(
                format!(
                    "text is {} bytes, exceeding the {limit} byte limit",
                    params.text.len()
                ),
                None,
            ));
        }

        let document = if params.markdown {
            Document::from_markdown(&params.text)
        } else {
            Document::from_plain_text(&params.text)
        };
        let processed = Processor::new(&self.lexicon)
            .process(document.paragraphs())
            .into_plain();

        let json = serde_json::to_string_pretty(&processed)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            sentences = processed.statistics.total_sentences,
            findings = processed.findings.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Look up simpler alternatives for complex phrases.
    #[tool(
        description = "Suggest simpler alternatives for complex phrases such as \"in order to\" or \"utilize\"."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn suggest_alternatives(
        &self,
        Parameters(params): Parameters<SuggestAlternativesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "suggest_alternatives",
            phrases = params.phrases.len(),
            "executing MCP tool"
        );

        let suggestions: Vec<Suggestion> = params
            .phrases
            .iter()
            .map(|p| Suggestion::lookup(&self.lexicon, p))
            .collect();

        let json = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "suggest_alternatives", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text to review prose and suggest_alternatives for simpler wording.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
