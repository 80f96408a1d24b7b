//! One chat session: its history, its connectivity subscription, and the
//! per-utterance triage state machine.
//!
//! ```text
//! Idle ──submit──▶ Classifying ──outcome──▶ Responding ──append──▶ Idle
//! ```
//!
//! The user's message is appended before classification starts. By default
//! several utterances may be in flight at once and bot replies land in
//! completion order; [`Conversation::serialized`] queues triage so replies
//! follow submission order instead. Emergency utterances never wait in that
//! queue.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
  Error, Result,
  connectivity::ConnectivityWatch,
  gateway::ReasoningGateway,
  language::Language,
  locale::TemplateKey,
  message::{ConversationHistory, Message, Sender},
  triage::{Outcome, TriageEngine},
};

/// Text recorded as the user's turn when the emergency button is pressed.
pub const EMERGENCY_BUTTON_TEXT: &str = "EMERGENCY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Idle,
  Classifying,
  Responding,
}

/// The result of one turn: the user's message, the decision, and the reply.
#[derive(Debug, Clone)]
pub struct Exchange {
  pub user_message: Message,
  pub outcome:      Outcome,
  pub reply:        Message,
}

pub struct Conversation<G> {
  id:           Uuid,
  language:     Language,
  created_at:   DateTime<Utc>,
  history:      ConversationHistory,
  connectivity: ConnectivityWatch,
  engine:       Arc<TriageEngine<G>>,
  /// Present when triage is serialized; FIFO so queued turns keep order.
  gate:         Option<Mutex<()>>,
}

impl<G> Conversation<G> {
  pub fn id(&self) -> Uuid { self.id }

  pub fn language(&self) -> Language { self.language }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn history(&self) -> &ConversationHistory { &self.history }

  pub fn is_online(&self) -> bool { self.connectivity.is_online() }

  pub fn engine(&self) -> &TriageEngine<G> { &self.engine }
}

impl<G: ReasoningGateway> Conversation<G> {
  /// Start a conversation. The history opens with a localized greeting.
  pub fn open(
    engine: Arc<TriageEngine<G>>,
    connectivity: ConnectivityWatch,
    language: Language,
  ) -> Self {
    let history = ConversationHistory::new();
    let loc = engine.localizer();
    history.append(
      Sender::Bot,
      format!(
        "{}! {}",
        loc.resolve(language, TemplateKey::Welcome),
        loc.resolve(language, TemplateKey::Tagline)
      ),
    );

    let id = Uuid::new_v4();
    tracing::debug!(conversation = %id, %language, "conversation opened");
    Self {
      id,
      language,
      created_at: Utc::now(),
      history,
      connectivity,
      engine,
      gate: None,
    }
  }

  /// Process one utterance at a time, in submission order. Emergency
  /// utterances are still answered immediately.
  pub fn serialized(mut self) -> Self {
    self.gate = Some(Mutex::new(()));
    self
  }

  /// Run one utterance through triage and append both sides of the turn.
  ///
  /// Only an empty utterance is an error; remote failures become fallback
  /// replies. The turn runs on its own task: once the user's message is
  /// appended, the reply is appended too, even if this future is dropped.
  pub async fn submit(
    self: &Arc<Self>,
    utterance: &str,
    language: Language,
  ) -> Result<Exchange>
  where
    G: 'static,
  {
    if utterance.trim().is_empty() {
      return Err(Error::EmptyUtterance);
    }

    let user_message = self.history.append(Sender::User, utterance);
    let turn = tokio::spawn({
      let this = Arc::clone(self);
      let utterance = utterance.to_owned();
      async move { this.run_turn(utterance, language).await }
    });

    match turn.await {
      Ok((outcome, reply)) => Ok(Exchange { user_message, outcome, reply }),
      Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
      Err(_) => Err(Error::TurnCancelled),
    }
  }

  async fn run_turn(
    &self,
    utterance: String,
    language: Language,
  ) -> (Outcome, Message) {
    // Emergencies skip the queue.
    let _turn = match &self.gate {
      Some(gate) if !self.engine.detects_emergency(&utterance) => {
        Some(gate.lock().await)
      }
      _ => None,
    };

    self.transition(Phase::Idle, Phase::Classifying);
    let outcome = self
      .engine
      .classify(&utterance, language, &self.connectivity)
      .await;

    self.transition(Phase::Classifying, Phase::Responding);
    let reply = self
      .history
      .append(Sender::Bot, self.engine.compose(&outcome, language));
    tracing::info!(
      conversation = %self.id,
      outcome = ?outcome.kind(),
      "utterance triaged"
    );

    self.transition(Phase::Responding, Phase::Idle);
    (outcome, reply)
  }

  /// The emergency button: records the press and replies with the emergency
  /// action without classifying anything.
  pub fn raise_emergency(&self, language: Language) -> Exchange {
    let user_message = self.history.append(Sender::User, EMERGENCY_BUTTON_TEXT);
    let outcome = Outcome::Emergency;
    let reply = self
      .history
      .append(Sender::Bot, self.engine.compose(&outcome, language));
    tracing::info!(conversation = %self.id, "emergency button pressed");
    Exchange { user_message, outcome, reply }
  }

  fn transition(&self, from: Phase, to: Phase) {
    tracing::debug!(conversation = %self.id, ?from, ?to, "triage phase");
  }
}

impl<G> Drop for Conversation<G> {
  fn drop(&mut self) {
    tracing::debug!(conversation = %self.id, "conversation closed");
  }
}
