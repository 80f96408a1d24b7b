//! Handlers for `/diseases` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/diseases` | Store order |
//! | `GET`  | `/diseases/{name}` | Case-insensitive name fragment; 404 if no record |

use axum::{
  Json,
  extract::{Path, State},
};
use healio_core::{disease::DiseaseRecord, gateway::ReasoningGateway, store::KnowledgeStore};

use crate::{AppState, error::ApiError};

pub const NOT_FOUND_MESSAGE: &str = "Disease not found in local database";

/// `GET /diseases`
pub async fn list<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Vec<DiseaseRecord>>, ApiError>
where
  S: KnowledgeStore,
  G: ReasoningGateway,
{
  let records = state.store.list_diseases().await.map_err(ApiError::store)?;
  Ok(Json(records))
}

/// `GET /diseases/{name}`
pub async fn get_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(name): Path<String>,
) -> Result<Json<DiseaseRecord>, ApiError>
where
  S: KnowledgeStore,
  G: ReasoningGateway,
{
  let record = state
    .store
    .find_by_name_fragment(&name)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_owned()))?;
  Ok(Json(record))
}
