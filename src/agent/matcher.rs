// src/agent/matcher.rs
//
// The two interchangeable matching strategies behind one trait: a
// deterministic keyword scan paired with local parameter extraction, and a
// single chat-completion call that proposes both the tool and its
// parameters.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::llm::{LlmError, OpenAiClient};

use super::chains::normalize_chain;
use super::extract::extract;
use super::keywords::{match_rules, KeywordRule, KEYWORD_RULES};
use super::registry::{ToolParams, ToolRegistry};

/// A resolved candidate: the tool to run and the parameters gathered for it.
/// Presence of required parameters is checked by the router, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCall {
    pub tool: String,
    pub params: ToolParams,
}

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("chat completion failed: {0}")]
    Llm(#[from] LlmError),
    #[error("model output is not valid JSON: {0}")]
    MalformedOutput(String),
    #[error("model output has an unexpected shape: {0}")]
    InvalidShape(String),
    #[error("invalid chain '{0}'")]
    UnknownChain(String),
}

/// Maps a prompt to at most one tool candidate.
#[async_trait]
pub trait ToolMatcher: Send + Sync {
    async fn resolve(
        &self,
        prompt: &str,
        registry: &ToolRegistry,
    ) -> Result<Option<ResolvedCall>, MatchError>;
}

// --- Strategy A: keyword table ---

/// First-match-wins substring scan over an ordered rule list; parameters
/// come from the local extractor. Rule order is load-bearing.
pub struct KeywordMatcher {
    rules: Vec<KeywordRule>,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self {
            rules: KEYWORD_RULES.to_vec(),
        }
    }

    pub fn with_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolMatcher for KeywordMatcher {
    async fn resolve(
        &self,
        prompt: &str,
        _registry: &ToolRegistry,
    ) -> Result<Option<ResolvedCall>, MatchError> {
        Ok(match_rules(&self.rules, prompt).map(|tool| ResolvedCall {
            tool: tool.to_string(),
            params: extract(prompt),
        }))
    }
}

// --- Strategy B: model proposal ---

/// Delegates both matching and parameter extraction to the chat model. One
/// call, temperature zero, JSON out.
pub struct ModelMatcher {
    llm: OpenAiClient,
}

impl ModelMatcher {
    pub fn new(llm: OpenAiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ToolMatcher for ModelMatcher {
    async fn resolve(
        &self,
        prompt: &str,
        registry: &ToolRegistry,
    ) -> Result<Option<ResolvedCall>, MatchError> {
        let instruction = selection_instruction(registry, prompt);
        let raw = self.llm.generate(&instruction, 0.0).await?;
        debug!("model proposed: {}", raw);
        parse_model_output(&raw)
    }
}

/// Builds the selection instruction: every registered tool with its required
/// parameters and schema hint, followed by the verbatim user prompt.
fn selection_instruction(registry: &ToolRegistry, prompt: &str) -> String {
    let mut tools: Vec<_> = registry.iter().collect();
    tools.sort_by_key(|d| d.name().to_string());

    let mut out = String::from(
        "You route blockchain data questions to exactly one registered tool.\n\
         \n\
         Registered tools:\n",
    );
    for descriptor in tools {
        out.push_str(&format!(
            "- {} (required params: {}) -> {}\n",
            descriptor.name(),
            descriptor.required_params().join(", "),
            descriptor.schema_hint(),
        ));
    }
    out.push_str(
        "\nRespond with only a JSON object of the form \
         {\"tool\": \"<name>\", \"params\": {\"<param>\": \"<value>\"}}.\n\
         All parameter values must be strings. Use {\"tool\": null, \"params\": {}} \
         when no registered tool matches. Never invent tool names.\n\
         \nUser prompt:\n",
    );
    out.push_str(prompt);
    out
}

/// Strips a surrounding markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Parses and validates the model's `{tool, params}` proposal. Anything
/// outside the expected shape fails closed with a `MatchError` rather than
/// being passed along to execution.
fn parse_model_output(raw: &str) -> Result<Option<ResolvedCall>, MatchError> {
    let stripped = strip_code_fences(raw);
    let value: Value = serde_json::from_str(stripped)
        .map_err(|e| MatchError::MalformedOutput(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| MatchError::InvalidShape("expected a JSON object".to_string()))?;

    let tool = match object.get("tool") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(name)) if name.is_empty() => return Ok(None),
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(MatchError::InvalidShape(format!(
                "'tool' must be a string, got {}",
                other
            )))
        }
    };

    let mut params = ToolParams::new();
    match object.get("params") {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for (key, value) in map {
                let value = match value {
                    Value::String(s) => s.clone(),
                    // Models routinely emit bare numbers for numeric params.
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(MatchError::InvalidShape(format!(
                            "param '{}' must be a scalar, got {}",
                            key, other
                        )))
                    }
                };
                params.insert(key.clone(), value);
            }
        }
        Some(other) => {
            return Err(MatchError::InvalidShape(format!(
                "'params' must be an object, got {}",
                other
            )))
        }
    }

    if let Some(chain) = params.get("chain").map(str::to_string) {
        match normalize_chain(&chain) {
            Some(id) => params.insert("chain", id),
            None => return Err(MatchError::UnknownChain(chain)),
        }
    }

    Ok(Some(ResolvedCall { tool, params }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keyword_matcher_pairs_rule_with_extraction() {
        let matcher = KeywordMatcher::new();
        let registry = ToolRegistry::new();
        let resolved = matcher
            .resolve(
                "price of 0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
                &registry,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.tool, "getTokenPrice");
        assert_eq!(
            resolved.params.get("address"),
            Some("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA")
        );
        assert_eq!(resolved.params.get("chain"), Some("0x1"));
    }

    #[tokio::test]
    async fn keyword_matcher_returns_none_without_match() {
        let matcher = KeywordMatcher::new();
        let registry = ToolRegistry::new();
        let resolved = matcher.resolve("tell me a story", &registry).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn custom_rule_order_shadows_later_rules() {
        let matcher = KeywordMatcher::with_rules(vec![
            KeywordRule {
                keyword: "price",
                tool: "getTokenPrice",
            },
            KeywordRule {
                keyword: "price chart",
                tool: "getPairCandlesticks",
            },
        ]);
        let registry = ToolRegistry::new();
        let resolved = matcher
            .resolve("show me the price chart", &registry)
            .await
            .unwrap()
            .unwrap();
        // The generic rule sits first, so it captures the prompt.
        assert_eq!(resolved.tool, "getTokenPrice");
    }

    #[test]
    fn fences_are_stripped_before_parsing() {
        let raw = "```json\n{\"tool\": \"getTokenPrice\", \"params\": {\"chain\": \"eth\", \"address\": \"0xabc\"}}\n```";
        let resolved = parse_model_output(raw).unwrap().unwrap();
        assert_eq!(resolved.tool, "getTokenPrice");
        assert_eq!(resolved.params.get("chain"), Some("0x1"));
        assert_eq!(resolved.params.get("address"), Some("0xabc"));
    }

    #[test]
    fn null_tool_means_no_match() {
        assert!(parse_model_output("{\"tool\": null, \"params\": {}}")
            .unwrap()
            .is_none());
    }

    #[test]
    fn invalid_json_fails_closed() {
        assert!(matches!(
            parse_model_output("the tool you want is getTokenPrice"),
            Err(MatchError::MalformedOutput(_))
        ));
    }

    #[test]
    fn composite_param_values_fail_closed() {
        let raw = "{\"tool\": \"getFilteredTokens\", \"params\": {\"filters\": [\"a\", \"b\"]}}";
        assert!(matches!(
            parse_model_output(raw),
            Err(MatchError::InvalidShape(_))
        ));
    }

    #[test]
    fn numeric_params_are_coerced_to_strings() {
        let raw = "{\"tool\": \"getTopGainersTokens\", \"params\": {\"min_market_cap\": 50000000}}";
        let resolved = parse_model_output(raw).unwrap().unwrap();
        assert_eq!(resolved.params.get("min_market_cap"), Some("50000000"));
    }

    #[test]
    fn unknown_chain_names_are_rejected() {
        let raw = "{\"tool\": \"getTokenPrice\", \"params\": {\"chain\": \"dogechain\", \"address\": \"0xabc\"}}";
        assert!(matches!(
            parse_model_output(raw),
            Err(MatchError::UnknownChain(_))
        ));
    }

    #[test]
    fn chain_display_names_are_normalized() {
        let raw = "{\"tool\": \"getTokenPrice\", \"params\": {\"chain\": \"Polygon Mainnet\", \"address\": \"0xabc\"}}";
        let resolved = parse_model_output(raw).unwrap().unwrap();
        assert_eq!(resolved.params.get("chain"), Some("0x89"));
    }
}
