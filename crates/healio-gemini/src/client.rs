//! [`GeminiGateway`]: the Gemini implementation of [`ReasoningGateway`].

use std::time::Duration;

use healio_core::{
  GatewayError,
  gateway::{Instructions, ReasoningGateway},
  language::Language,
};
use reqwest::Client;

use crate::{
  Result,
  wire::{GenerateContentRequest, GenerateContentResponse, extract_text, map_http_error},
};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str =
  "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
  pub api_key:  String,
  pub model:    String,
  pub base_url: String,
  /// Transport timeout for each request, including the probe.
  pub timeout:  Duration,
}

impl GeminiConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:  api_key.into(),
      model:    DEFAULT_MODEL.to_owned(),
      base_url: DEFAULT_BASE_URL.to_owned(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct GeminiGateway {
  client:       Client,
  config:       GeminiConfig,
  instructions: Instructions,
}

impl GeminiGateway {
  pub fn new(config: GeminiConfig, instructions: Instructions) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config, instructions })
  }

  pub fn model(&self) -> &str { &self.config.model }

  fn endpoint(&self) -> String {
    format!(
      "{}/{}:generateContent",
      self.config.base_url.trim_end_matches('/'),
      self.config.model
    )
  }

  /// Whether the service answers at all. Any HTTP response counts, even an
  /// error status; only a transport failure means unreachable.
  pub async fn probe(&self) -> bool {
    match self.client.get(&self.config.base_url).send().await {
      Ok(_) => true,
      Err(err) => {
        tracing::debug!(error = %err, "gemini probe failed");
        false
      }
    }
  }

  async fn send(&self, body: &GenerateContentRequest) -> Result<String, GatewayError> {
    let response = self
      .client
      .post(self.endpoint())
      .query(&[("key", self.config.api_key.as_str())])
      .json(body)
      .send()
      .await
      .map_err(|err| {
        // Any transport failure means the service was not reached.
        GatewayError::Unavailable(format!("gemini request failed: {}", err.without_url()))
      })?;

    let status = response.status();
    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|_| "failed to read gemini error body".to_owned());
      return Err(map_http_error(status, &body));
    }

    // A body that stalls or breaks off is a transport failure; one that
    // arrives but does not parse is not.
    let bytes = response.bytes().await.map_err(|err| {
      GatewayError::Unavailable(format!("gemini response interrupted: {}", err.without_url()))
    })?;
    let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
      .map_err(|err| GatewayError::Error(format!("failed to parse gemini response: {err}")))?;
    extract_text(parsed)
  }
}

impl ReasoningGateway for GeminiGateway {
  async fn ask(&self, utterance: &str, language: Language) -> Result<String, GatewayError> {
    let request = GenerateContentRequest::user_text(self.instructions.build(utterance, language));
    tracing::debug!(model = %self.config.model, %language, "asking gemini");
    self.send(&request).await
  }
}

#[cfg(test)]
mod tests {
  use axum::{Json, Router, http::StatusCode, routing::post};
  use serde_json::{Value, json};

  use super::*;

  fn instructions() -> Instructions {
    Instructions::new("Consult a doctor.", "This may be serious.")
  }

  /// Serve `router` on an ephemeral port and return its base URL.
  async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}/v1beta/models")
  }

  fn gateway(base_url: String) -> GeminiGateway {
    let config = GeminiConfig {
      base_url,
      model: "test-model".into(),
      timeout: Duration::from_secs(5),
      ..GeminiConfig::new("secret")
    };
    GeminiGateway::new(config, instructions()).unwrap()
  }

  #[tokio::test]
  async fn answers_with_candidate_text() {
    let router = Router::new().route(
      "/v1beta/models/{action}",
      post(|Json(body): Json<Value>| async move {
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
        assert!(prompt.contains("USER INPUT: \"naku jwaram vundi\""));
        Json(json!({
          "candidates": [{ "content": { "parts": [{ "text": "Vishranti teesukondi." }] } }]
        }))
      }),
    );
    let gw = gateway(serve(router).await);

    let reply = gw.ask("naku jwaram vundi", Language::Telugu).await.unwrap();
    assert_eq!(reply, "Vishranti teesukondi.");
  }

  #[tokio::test]
  async fn error_status_is_error() {
    let router = Router::new().route(
      "/v1beta/models/{action}",
      post(|| async {
        (
          StatusCode::FORBIDDEN,
          Json(json!({ "error": { "code": 403, "message": "denied", "status": "PERMISSION_DENIED" } })),
        )
      }),
    );
    let gw = gateway(serve(router).await);

    let err = gw.ask("hello", Language::English).await.unwrap_err();
    let GatewayError::Error(message) = err else { panic!("expected Error") };
    assert!(message.contains("PERMISSION_DENIED: denied"));
  }

  #[tokio::test]
  async fn malformed_body_is_error() {
    let router = Router::new()
      .route("/v1beta/models/{action}", post(|| async { "not json" }));
    let gw = gateway(serve(router).await);

    assert!(matches!(
      gw.ask("hello", Language::English).await,
      Err(GatewayError::Error(_))
    ));
  }

  #[tokio::test]
  async fn stalled_body_is_unavailable() {
    use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};

    // Headers promise more body than is ever sent.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();
      let mut buf = vec![0; 64 * 1024];
      let _ = socket.read(&mut buf).await;
      socket
        .write_all(
          b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
            content-length: 1000\r\n\r\n{\"candidates\": [",
        )
        .await
        .unwrap();
      tokio::time::sleep(Duration::from_secs(10)).await;
      drop(socket);
    });

    let gw = GeminiGateway::new(
      GeminiConfig {
        base_url: format!("http://{addr}/v1beta/models"),
        timeout: Duration::from_millis(300),
        ..GeminiConfig::new("secret")
      },
      instructions(),
    )
    .unwrap();

    let err = gw.ask("hello", Language::English).await.unwrap_err();
    assert!(matches!(err, GatewayError::Unavailable(_)), "got {err:?}");
  }

  #[tokio::test]
  async fn unreachable_service_is_unavailable() {
    // Bind then drop so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gw = gateway(format!("http://{addr}/v1beta/models"));
    assert!(matches!(
      gw.ask("hello", Language::English).await,
      Err(GatewayError::Unavailable(_))
    ));
    assert!(!gw.probe().await);
  }

  #[tokio::test]
  async fn probe_accepts_any_http_response() {
    // No GET route: the server answers 404, which still means reachable.
    let router = Router::new()
      .route("/v1beta/models/{action}", post(|| async { "unused" }));
    let gw = gateway(serve(router).await);
    assert!(gw.probe().await);
  }
}
