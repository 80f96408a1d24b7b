//! Error types for `healio-core`.

use thiserror::Error;

use crate::locale::TemplateKey;

#[derive(Debug, Error)]
pub enum Error {
  /// The default-language table lacks a key. Fatal at startup.
  #[error("default language table is missing template key {0:?}")]
  MissingTemplate(TemplateKey),

  #[error("unknown language: {0:?}")]
  UnknownLanguage(String),

  #[error("unknown template key: {0:?}")]
  UnknownTemplateKey(String),

  #[error("utterance is empty")]
  EmptyUtterance,

  /// The runtime shut down before the turn finished.
  #[error("triage was cancelled before a reply was recorded")]
  TurnCancelled,
}

impl Error {
  /// Whether this error indicates an incomplete or invalid configuration
  /// rather than a per-request condition.
  pub fn is_configuration(&self) -> bool {
    matches!(
      self,
      Self::MissingTemplate(_)
        | Self::UnknownLanguage(_)
        | Self::UnknownTemplateKey(_)
    )
  }
}

/// Failure of a [`ReasoningGateway`](crate::gateway::ReasoningGateway) call.
///
/// The orchestrator folds both variants into a single fallback reply; the
/// distinction only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
  /// The service could not be reached (offline, connect failure, timeout).
  #[error("remote service unavailable: {0}")]
  Unavailable(String),

  /// The service answered but the answer was unusable (error status,
  /// malformed body, no text).
  #[error("remote service error: {0}")]
  Error(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
