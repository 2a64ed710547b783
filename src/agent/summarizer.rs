// src/agent/summarizer.rs

use serde_json::Value;
use tracing::warn;

use crate::llm::OpenAiClient;

/// Formatting instruction prepended to the serialized tool result.
const SUMMARY_INSTRUCTION: &str = "\
You turn raw blockchain API results into a short plain-language answer.
Format large numbers with thousands separators. Render timestamps as
relative times (e.g. \"3 hours ago\"). Where values are denominated in wei
or token base units, convert to a human currency amount when possible.
Never include raw JSON, code fences, or field names in your answer.";

/// Best-effort prose rendering of a tool result. A failed call degrades to
/// a fixed placeholder and never blocks the primary data payload.
pub struct Summarizer {
    llm: OpenAiClient,
}

impl Summarizer {
    pub fn new(llm: OpenAiClient) -> Self {
        Self { llm }
    }

    pub async fn summarize(&self, result: &Value) -> String {
        let request = format!("{}\n\n{}", SUMMARY_INSTRUCTION, result);
        match self.llm.generate(&request, 0.3).await {
            Ok(text) => text,
            Err(e) => {
                warn!("summarization failed: {}", e);
                "Error".to_string()
            }
        }
    }
}
