//! `GET /health-tips`: one random tip, `{"tip": "..."}`.

use axum::{
  Json,
  extract::{Query, State},
};
use healio_core::{
  gateway::ReasoningGateway,
  language::Language,
  locale::TemplateKey,
  store::KnowledgeStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct TipParams {
  pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TipBody {
  pub tip: String,
}

/// Falls back to a localized stock tip when the pool is empty.
pub async fn random<S, G>(
  State(state): State<AppState<S, G>>,
  Query(params): Query<TipParams>,
) -> Result<Json<TipBody>, ApiError>
where
  S: KnowledgeStore,
  G: ReasoningGateway,
{
  let tip = match state.store.random_tip().await.map_err(ApiError::store)? {
    Some(tip) => tip,
    None => state
      .localizer()
      .resolve(params.language.unwrap_or_default(), TemplateKey::HealthTipFallback)
      .to_owned(),
  };
  Ok(Json(TipBody { tip }))
}
