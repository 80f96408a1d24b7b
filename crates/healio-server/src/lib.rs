//! HTTP server wiring for Healio.
//!
//! Mounts the JSON API under `/api` with request tracing. The binary in
//! `main.rs` owns configuration loading, store opening and the background
//! tasks.

pub mod config;
pub mod probe;
pub mod sweep;

pub use config::ServerConfig;

use axum::Router;
use healio_api::{AppState, api_router};
use healio_core::{gateway::ReasoningGateway, store::KnowledgeStore};
use tower_http::trace::TraceLayer;

/// Build the top-level [`Router`] for the Healio server.
pub fn router<S, G>(state: AppState<S, G>) -> Router
where
  S: KnowledgeStore + 'static,
  G: ReasoningGateway + 'static,
{
  Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
  };
  use healio_core::{
    GatewayError,
    connectivity::ConnectivitySignal,
    language::Language,
    locale::Localizer,
    triage::TriageEngine,
  };
  use healio_store_sqlite::SqliteStore;
  use tower::ServiceExt;

  use super::*;

  struct Offline;

  impl ReasoningGateway for Offline {
    async fn ask(&self, _: &str, _: Language) -> Result<String, GatewayError> {
      Err(GatewayError::Unavailable("no network".into()))
    }
  }

  async fn state() -> AppState<SqliteStore, Offline> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let records = store.list_diseases().await.unwrap();
    let engine =
      TriageEngine::new(records, Arc::new(Localizer::builtin().unwrap()), Offline);
    AppState::new(
      Arc::new(store),
      Arc::new(engine),
      Arc::new(ConnectivitySignal::new(false)),
    )
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let app = router(state().await);
    let req = Request::builder()
      .uri("/api/diseases/covid")
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["name"], "COVID-19");
  }

  #[tokio::test]
  async fn unprefixed_path_is_404() {
    let app = router(state().await);
    let req = Request::builder().uri("/diseases").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
