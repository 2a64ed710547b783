//! # Agent Module
//!
//! The prompt-routing core: a static tool registry, a parameter extractor,
//! two interchangeable matching strategies, and the orchestrator that wires
//! them into a single synchronous pipeline per request.

pub mod chains;
pub mod extract;
pub mod keywords;
pub mod matcher;
pub mod registry;
pub mod router;
pub mod summarizer;

pub use matcher::{KeywordMatcher, MatchError, ModelMatcher, ResolvedCall, ToolMatcher};
pub use registry::{Executor, ToolDescriptor, ToolError, ToolParams, ToolRegistry};
pub use router::{AgentRouter, RoutedResult};
pub use summarizer::Summarizer;
