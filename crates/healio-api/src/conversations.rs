//! Handlers for `/conversations` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/conversations` | Body: `{"language":"Hindi"}` (optional field); 201 |
//! | `GET`    | `/conversations/{id}` | 404 if not found |
//! | `DELETE` | `/conversations/{id}` | 204; 404 if not found |
//! | `POST`   | `/conversations/{id}/messages` | Body: `{"text":"...","language":"..."}`; 400 if blank |
//! | `POST`   | `/conversations/{id}/emergency` | Optional `?language=` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use healio_core::{
  conversation::{Conversation, Exchange},
  gateway::ReasoningGateway,
  language::Language,
  message::Message,
  triage::OutcomeKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

// ─── Views ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationView {
  pub id:         Uuid,
  pub language:   Language,
  pub created_at: DateTime<Utc>,
  pub online:     bool,
  pub messages:   Vec<Message>,
}

impl<G> From<&Conversation<G>> for ConversationView {
  fn from(c: &Conversation<G>) -> Self {
    Self {
      id:         c.id(),
      language:   c.language(),
      created_at: c.created_at(),
      online:     c.is_online(),
      messages:   c.history().snapshot(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExchangeView {
  pub user_message: Message,
  pub outcome:      OutcomeKind,
  pub reply:        Message,
}

impl From<Exchange> for ExchangeView {
  fn from(e: Exchange) -> Self {
    Self {
      user_message: e.user_message,
      outcome:      e.outcome.kind(),
      reply:        e.reply,
    }
  }
}

fn lookup<S, G>(
  state: &AppState<S, G>,
  id: Uuid,
) -> Result<Arc<Conversation<G>>, ApiError> {
  state
    .conversations
    .get(id)
    .ok_or_else(|| ApiError::NotFound(format!("conversation {id} not found")))
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
  pub language: Option<Language>,
}

/// `POST /conversations`
pub async fn create<S, G>(
  State(state): State<AppState<S, G>>,
  Json(body): Json<CreateBody>,
) -> impl IntoResponse
where
  G: ReasoningGateway,
{
  let mut conversation = Conversation::open(
    state.engine.clone(),
    state.connectivity.subscribe(),
    body.language.unwrap_or_default(),
  );
  if state.serialize_triage {
    conversation = conversation.serialized();
  }

  let conversation = state.conversations.insert(conversation);
  tracing::info!(
    conversation = %conversation.id(),
    open = state.conversations.len(),
    "conversation created"
  );
  (StatusCode::CREATED, Json(ConversationView::from(&*conversation)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /conversations/{id}`
pub async fn get_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ConversationView>, ApiError> {
  let conversation = lookup(&state, id)?;
  Ok(Json(ConversationView::from(&*conversation)))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /conversations/{id}`
pub async fn delete_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
  state
    .conversations
    .remove(id)
    .ok_or_else(|| ApiError::NotFound(format!("conversation {id} not found")))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Submit ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub text:     String,
  /// Defaults to the conversation's language.
  pub language: Option<Language>,
}

/// `POST /conversations/{id}/messages`
pub async fn submit<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<Uuid>,
  Json(body): Json<SubmitBody>,
) -> Result<Json<ExchangeView>, ApiError>
where
  G: ReasoningGateway + 'static,
{
  let conversation = lookup(&state, id)?;
  let language = body.language.unwrap_or(conversation.language());
  let exchange = conversation.submit(&body.text, language).await?;
  Ok(Json(exchange.into()))
}

// ─── Emergency ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EmergencyParams {
  pub language: Option<Language>,
}

/// `POST /conversations/{id}/emergency[?language=<lang>]`
pub async fn emergency<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<Uuid>,
  Query(params): Query<EmergencyParams>,
) -> Result<Json<ExchangeView>, ApiError>
where
  G: ReasoningGateway,
{
  let conversation = lookup(&state, id)?;
  let language = params.language.unwrap_or(conversation.language());
  Ok(Json(conversation.raise_emergency(language).into()))
}
