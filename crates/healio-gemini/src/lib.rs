//! Gemini adapter for the Healio [`ReasoningGateway`].
//!
//! Calls the `generateContent` REST endpoint directly. One request per
//! utterance, no retries, no conversation state.
//!
//! [`ReasoningGateway`]: healio_core::gateway::ReasoningGateway

mod client;
mod wire;

pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiGateway};
pub use error::{Error, Result};
