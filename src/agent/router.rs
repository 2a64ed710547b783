// src/agent/router.rs
//
// The per-request pipeline: resolve a candidate tool, check required
// parameters, execute, optionally summarize. Every failure below this
// boundary is converted into a plain-language diagnostic; nothing
// propagates to the HTTP layer as an error.

use serde_json::Value;
use tracing::{error, info};

use crate::tools::MoralisClient;

use super::matcher::{MatchError, ToolMatcher};
use super::registry::ToolRegistry;
use super::summarizer::Summarizer;

/// Outcome of routing one prompt: either a recovered-failure diagnostic or
/// the executed tool's serialized payload plus an optional prose summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutedResult {
    Diagnostic(String),
    Executed { data: String, summary: String },
}

impl RoutedResult {
    fn diagnostic(message: impl Into<String>) -> Self {
        RoutedResult::Diagnostic(message.into())
    }
}

pub struct AgentRouter {
    registry: ToolRegistry,
    matcher: Box<dyn ToolMatcher>,
    api: MoralisClient,
    summarizer: Option<Summarizer>,
}

impl AgentRouter {
    pub fn new(registry: ToolRegistry, matcher: Box<dyn ToolMatcher>, api: MoralisClient) -> Self {
        Self {
            registry,
            matcher,
            api,
            summarizer: None,
        }
    }

    /// Enables the best-effort summarization step.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Routes one prompt through match → presence check → execute →
    /// summarize. Never returns an error; see [`RoutedResult`].
    pub async fn handle_prompt(&self, prompt: &str) -> RoutedResult {
        let resolved = match self.matcher.resolve(prompt, &self.registry).await {
            Ok(Some(resolved)) => resolved,
            Ok(None) => return RoutedResult::diagnostic("No tool matched this prompt"),
            Err(MatchError::UnknownChain(chain)) => {
                return RoutedResult::diagnostic(format!("Invalid chain specified: {}", chain));
            }
            Err(e) => {
                error!("matcher failed: {}", e);
                return RoutedResult::diagnostic(format!(
                    "Failed to parse AI result or run tool: {}",
                    e
                ));
            }
        };

        info!("resolved tool '{}' with params {:?}", resolved.tool, resolved.params);

        let Some(descriptor) = self.registry.lookup(&resolved.tool) else {
            return RoutedResult::diagnostic(format!(
                "No tool matched the name \"{}\"",
                resolved.tool
            ));
        };

        // The central guarantee: no executor runs with a declared-required
        // parameter absent.
        let missing = descriptor.missing_params(&resolved.params);
        if !missing.is_empty() {
            return RoutedResult::diagnostic(format!(
                "This prompt requires these fields: [{}]",
                missing.join(", ")
            ));
        }

        let result = match descriptor.execute(&self.api, &resolved.params).await {
            Ok(result) => result,
            Err(e) => {
                error!("tool '{}' failed: {}", resolved.tool, e);
                return RoutedResult::diagnostic(format!(
                    "Failed to parse AI result or run tool: {}",
                    e
                ));
            }
        };

        let summary = self.summarize(&result).await;
        let data = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|_| result.to_string());

        RoutedResult::Executed { data, summary }
    }

    async fn summarize(&self, result: &Value) -> String {
        match &self.summarizer {
            Some(summarizer) => summarizer.summarize(result).await,
            None => String::new(),
        }
    }
}
