//! # API Module
//!
//! HTTP handlers for the chat server.
//!
//! ## Available Endpoints
//!
//! - `GET /` - Health probe
//! - `GET /api/samples` - Sample prompts a client can offer as suggestions
//! - `POST /api/prompt` - Route a free-text prompt through the agent
//!
//! Routing-level failures (no match, missing fields, upstream errors) are
//! delivered as HTTP 200 with a diagnostic message in the body; only a
//! missing prompt maps to a non-200 status.

pub mod health;
pub mod prompt;
pub mod samples;
