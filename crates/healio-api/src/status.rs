//! Handlers for the status endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/seasonal-alert` | `?language=`, `?month=1..12`; `null` out of season |
//! | `GET`  | `/languages` | Supported interface languages, default first |
//! | `GET`  | `/connectivity` | `?language=`; `{"online": bool, "label": "..."}` |

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{Datelike, Local, NaiveDate};
use healio_core::{
  gateway::ReasoningGateway,
  language::Language,
  locale::TemplateKey,
  seasonal::{Season, SeasonalAlert},
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{AppState, error::ApiError};

// ─── Seasonal alert ──────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AlertParams {
  pub language: Option<Language>,
  /// Overrides the server's current month.
  pub month:    Option<u32>,
}

/// `GET /seasonal-alert[?language=<lang>][&month=<1..12>]`
pub async fn seasonal_alert<S, G>(
  State(state): State<AppState<S, G>>,
  Query(params): Query<AlertParams>,
) -> Result<Json<Option<SeasonalAlert>>, ApiError>
where
  G: ReasoningGateway,
{
  let today = Local::now().date_naive();
  let date = match params.month {
    None => today,
    Some(month) => NaiveDate::from_ymd_opt(today.year(), month, 1)
      .ok_or_else(|| ApiError::BadRequest(format!("invalid month: {month}")))?,
  };

  let alert = Season::for_date(date).map(|season| {
    SeasonalAlert::localized(
      season,
      state.localizer(),
      params.language.unwrap_or_default(),
    )
  });
  Ok(Json(alert))
}

// ─── Languages ───────────────────────────────────────────────────────────────

/// `GET /languages`
pub async fn languages() -> Json<Vec<Language>> { Json(Language::iter().collect()) }

// ─── Connectivity ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ConnectivityParams {
  pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectivityBody {
  pub online: bool,
  /// Localized "online mode" / "offline mode" indicator text.
  pub label:  String,
}

/// `GET /connectivity[?language=<lang>]`
pub async fn connectivity<S, G>(
  State(state): State<AppState<S, G>>,
  Query(params): Query<ConnectivityParams>,
) -> Json<ConnectivityBody>
where
  G: ReasoningGateway,
{
  let online = state.connectivity.is_online();
  let key = if online { TemplateKey::OnlineMode } else { TemplateKey::OfflineMode };
  let label = state
    .localizer()
    .resolve(params.language.unwrap_or_default(), key)
    .to_owned();
  Json(ConnectivityBody { online, label })
}
