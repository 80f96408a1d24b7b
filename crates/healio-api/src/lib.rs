//! JSON REST API for Healio.
//!
//! Exposes an axum [`Router`] backed by any
//! [`KnowledgeStore`](healio_core::store::KnowledgeStore) and
//! [`ReasoningGateway`](healio_core::gateway::ReasoningGateway). TLS and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", healio_api::api_router(state))
//! ```

pub mod conversations;
pub mod diseases;
pub mod error;
pub mod registry;
pub mod status;
pub mod tips;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use healio_core::{
  connectivity::ConnectivitySignal,
  gateway::ReasoningGateway,
  locale::Localizer,
  store::KnowledgeStore,
  triage::TriageEngine,
};

pub use error::ApiError;
pub use registry::ConversationRegistry;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S, G> {
  pub store:            Arc<S>,
  pub engine:           Arc<TriageEngine<G>>,
  /// Host connectivity; every conversation holds its own subscription.
  pub connectivity:     Arc<ConnectivitySignal>,
  pub conversations:    Arc<ConversationRegistry<G>>,
  /// Queue utterances per conversation so replies follow submission order.
  pub serialize_triage: bool,
}

impl<S, G> AppState<S, G> {
  pub fn new(
    store: Arc<S>,
    engine: Arc<TriageEngine<G>>,
    connectivity: Arc<ConnectivitySignal>,
  ) -> Self {
    Self {
      store,
      engine,
      connectivity,
      conversations: Arc::new(ConversationRegistry::default()),
      serialize_triage: false,
    }
  }

  pub fn serialize_triage(mut self, serialize: bool) -> Self {
    self.serialize_triage = serialize;
    self
  }
}

impl<S, G: ReasoningGateway> AppState<S, G> {
  pub fn localizer(&self) -> &Localizer { self.engine.localizer() }
}

// Manual impl: cloning the state never requires cloning `S` or `G`.
impl<S, G> Clone for AppState<S, G> {
  fn clone(&self) -> Self {
    Self {
      store:            self.store.clone(),
      engine:           self.engine.clone(),
      connectivity:     self.connectivity.clone(),
      conversations:    self.conversations.clone(),
      serialize_triage: self.serialize_triage,
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, G>(state: AppState<S, G>) -> Router<()>
where
  S: KnowledgeStore + 'static,
  G: ReasoningGateway + 'static,
{
  Router::new()
    // Knowledge
    .route("/diseases", get(diseases::list::<S, G>))
    .route("/diseases/{name}", get(diseases::get_one::<S, G>))
    .route("/health-tips", get(tips::random::<S, G>))
    // Status
    .route("/seasonal-alert", get(status::seasonal_alert::<S, G>))
    .route("/languages", get(status::languages))
    .route("/connectivity", get(status::connectivity::<S, G>))
    // Conversations
    .route("/conversations", post(conversations::create::<S, G>))
    .route(
      "/conversations/{id}",
      get(conversations::get_one::<S, G>).delete(conversations::delete_one::<S, G>),
    )
    .route("/conversations/{id}/messages", post(conversations::submit::<S, G>))
    .route("/conversations/{id}/emergency", post(conversations::emergency::<S, G>))
    .with_state(state)
}
