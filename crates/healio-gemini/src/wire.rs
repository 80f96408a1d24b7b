//! `generateContent` request and response bodies, plus the helpers that turn
//! a response into reply text or a [`GatewayError`].

use healio_core::GatewayError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
  pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
  pub role:  &'static str,
  pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
  pub text: String,
}

impl GenerateContentRequest {
  /// A single user turn carrying `text`.
  pub fn user_text(text: String) -> Self {
    Self {
      contents: vec![Content { role: "user", parts: vec![Part { text }] }],
    }
  }
}

// ─── Response ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
  pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
  pub content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ContentResponse {
  #[serde(default)]
  pub parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PartResponse {
  pub text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
  error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
  message: Option<String>,
  status:  Option<String>,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Text of the first candidate, its parts concatenated. Missing or blank text
/// is an error.
pub fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
  let text: String = response
    .candidates
    .and_then(|candidates| candidates.into_iter().next())
    .and_then(|candidate| candidate.content)
    .map(|content| {
      content.parts.into_iter().filter_map(|part| part.text).collect()
    })
    .unwrap_or_default();

  if text.trim().is_empty() {
    return Err(GatewayError::Error(
      "gemini returned no text in the response candidates".into(),
    ));
  }
  Ok(text)
}

/// Turn a non-success response into an error carrying the service's message
/// when the body has one.
pub fn map_http_error(status: StatusCode, body: &str) -> GatewayError {
  let message = serde_json::from_str::<ErrorWrapper>(body)
    .ok()
    .and_then(|wrapper| {
      let message = wrapper.error.message?;
      Some(match wrapper.error.status {
        Some(status_text) if !status_text.is_empty() => {
          format!("{status_text}: {message}")
        }
        _ => message,
      })
    })
    .unwrap_or_else(|| body.trim().to_owned());

  GatewayError::Error(format!("gemini returned {status}: {message}"))
}
