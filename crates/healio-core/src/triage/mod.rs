//! Utterance classification and reply composition.
//!
//! Order of checks, each short-circuiting the rest:
//!
//! 1. emergency phrase → [`Outcome::Emergency`]
//! 2. disease name in the utterance → [`Outcome::LocalMatch`]
//! 3. offline → [`Outcome::OfflineUnknown`]
//! 4. remote gateway → [`Outcome::RemoteAnswer`] or [`Outcome::RemoteFailure`]
//!
//! Steps 1–3 never touch the network, so an emergency reply is never held up
//! by a slow or missing remote service.

pub mod compose;
pub mod emergency;
pub mod matcher;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  GatewayError,
  connectivity::ConnectivityWatch,
  disease::DiseaseRecord,
  gateway::ReasoningGateway,
  language::Language,
  locale::Localizer,
};

pub use compose::Composer;
pub use emergency::EmergencyDetector;
pub use matcher::find_match;

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// The classification decision for one utterance. Consumed once by the
/// composer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Emergency,
  LocalMatch(DiseaseRecord),
  RemoteAnswer(String),
  OfflineUnknown,
  RemoteFailure,
}

/// Payload-free discriminant of [`Outcome`], reported to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
  Emergency,
  LocalMatch,
  RemoteAnswer,
  OfflineUnknown,
  RemoteFailure,
}

impl Outcome {
  pub fn kind(&self) -> OutcomeKind {
    match self {
      Self::Emergency => OutcomeKind::Emergency,
      Self::LocalMatch(_) => OutcomeKind::LocalMatch,
      Self::RemoteAnswer(_) => OutcomeKind::RemoteAnswer,
      Self::OfflineUnknown => OutcomeKind::OfflineUnknown,
      Self::RemoteFailure => OutcomeKind::RemoteFailure,
    }
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Stateless triage pipeline shared by every conversation.
///
/// Holds a snapshot of the knowledge base taken at startup; the store itself
/// is not consulted per utterance.
pub struct TriageEngine<G> {
  detector: EmergencyDetector,
  records:  Vec<DiseaseRecord>,
  composer: Composer,
  gateway:  G,
}

impl<G: ReasoningGateway> TriageEngine<G> {
  pub fn new(
    records: Vec<DiseaseRecord>,
    localizer: Arc<Localizer>,
    gateway: G,
  ) -> Self {
    let composer = Composer::new(localizer, &records);
    Self { detector: EmergencyDetector::default(), records, composer, gateway }
  }

  pub fn records(&self) -> &[DiseaseRecord] { &self.records }

  pub fn localizer(&self) -> &Localizer { self.composer.localizer() }

  pub fn gateway(&self) -> &G { &self.gateway }

  /// Whether `utterance` contains an emergency phrase. Never touches the
  /// network.
  pub fn detects_emergency(&self, utterance: &str) -> bool {
    self.detector.matched(utterance).is_some()
  }

  /// Decide how to answer `utterance`.
  ///
  /// Connectivity is read at decision time, after the local checks. Gateway
  /// errors are logged and folded into an outcome; they never escape.
  pub async fn classify(
    &self,
    utterance: &str,
    language: Language,
    connectivity: &ConnectivityWatch,
  ) -> Outcome {
    if let Some(phrase) = self.detector.matched(utterance) {
      tracing::info!(phrase, "emergency phrase detected");
      return Outcome::Emergency;
    }

    if let Some(record) = find_match(utterance, &self.records) {
      tracing::debug!(disease = %record.name, "local knowledge match");
      return Outcome::LocalMatch(record.clone());
    }

    if !connectivity.is_online() {
      tracing::debug!("offline with no local match");
      return Outcome::OfflineUnknown;
    }

    match self.gateway.ask(utterance, language).await {
      Ok(text) if !text.trim().is_empty() => Outcome::RemoteAnswer(text),
      Ok(_) => {
        tracing::warn!("remote reasoning returned blank text");
        Outcome::RemoteFailure
      }
      // Connectivity dropped between the decision and the call: same as an
      // offline miss.
      Err(GatewayError::Unavailable(reason)) if !connectivity.is_online() => {
        tracing::warn!(%reason, "remote reasoning unavailable after going offline");
        Outcome::OfflineUnknown
      }
      Err(err) => {
        match &err {
          GatewayError::Unavailable(reason) => {
            tracing::warn!(%reason, "remote reasoning unavailable")
          }
          GatewayError::Error(reason) => {
            tracing::warn!(%reason, "remote reasoning failed")
          }
        }
        Outcome::RemoteFailure
      }
    }
  }

  pub fn compose(&self, outcome: &Outcome, language: Language) -> String {
    self.composer.compose(outcome, language)
  }
}
