// src/agent/registry.rs

use std::collections::HashMap;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::tools::MoralisClient;

// --- Error type for tool execution ---

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("missing required parameter '{0}'")]
    MissingParam(String),
    #[error("request to data provider failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("data provider returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("data provider API key is not configured")]
    MissingApiKey,
}

/// Request-scoped mapping from parameter name to string value.
///
/// Built per request from extraction or model proposal, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolParams(HashMap<String, String>);

impl ToolParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Looks up a parameter the descriptor declared as required. The router
    /// checks presence before executing, so a miss here indicates a
    /// mis-declared descriptor rather than user input.
    pub fn req(&self, key: &str) -> Result<&str, ToolError> {
        self.get(key)
            .ok_or_else(|| ToolError::MissingParam(key.to_string()))
    }

    /// Returns the value for `key`, or `default` when unbound.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for ToolParams {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ToolParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// The asynchronous execute capability of a tool. Takes the shared data
/// client plus a fully populated parameter mapping and yields the raw JSON
/// payload of the upstream call.
pub type Executor =
    Box<dyn Fn(MoralisClient, ToolParams) -> BoxFuture<'static, Result<Value, ToolError>> + Send + Sync>;

/// Immutable record describing one tool: a unique name, the parameters that
/// must be present before execution, a display hint forwarded to clients
/// untouched, and the executor itself.
pub struct ToolDescriptor {
    name: String,
    required_params: Vec<String>,
    schema_hint: String,
    executor: Executor,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        required_params: &[&str],
        schema_hint: impl Into<String>,
        executor: Executor,
    ) -> Self {
        Self {
            name: name.into(),
            required_params: required_params.iter().map(|p| p.to_string()).collect(),
            schema_hint: schema_hint.into(),
            executor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_params(&self) -> &[String] {
        &self.required_params
    }

    pub fn schema_hint(&self) -> &str {
        &self.schema_hint
    }

    /// Required parameters absent from `params`, in declared order.
    pub fn missing_params(&self, params: &ToolParams) -> Vec<&str> {
        self.required_params
            .iter()
            .map(String::as_str)
            .filter(|p| !params.contains(p))
            .collect()
    }

    pub async fn execute(
        &self,
        api: &MoralisClient,
        params: &ToolParams,
    ) -> Result<Value, ToolError> {
        (self.executor)(api.clone(), params.clone()).await
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("required_params", &self.required_params)
            .field("schema_hint", &self.schema_hint)
            .finish_non_exhaustive()
    }
}

/// Static mapping from tool name to descriptor. Populated once at startup,
/// immutable afterwards.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its name. Cannot fail; a duplicate name
    /// silently replaces the earlier entry (last registration wins).
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        if let Some(previous) = self.tools.insert(descriptor.name.clone(), descriptor) {
            debug!("tool '{}' re-registered, replacing earlier entry", previous.name);
        }
    }

    pub fn register_all(&mut self, descriptors: impl IntoIterator<Item = ToolDescriptor>) {
        for descriptor in descriptors {
            self.register(descriptor);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
