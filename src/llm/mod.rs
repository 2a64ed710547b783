//! Chat-completions client used by the model matcher and the summarizer.

pub mod openai;

pub use openai::{LlmError, OpenAiClient, OPENAI_API_BASE_URL};
