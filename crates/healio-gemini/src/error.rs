//! Error type for `healio-gemini`.
//!
//! Only construction can fail here; per-call failures are reported as
//! [`healio_core::GatewayError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
