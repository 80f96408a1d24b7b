//! Chat messages and the append-only conversation history.
//!
//! Messages are immutable. The history only ever grows; nothing already
//! appended is rewritten or removed.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
  User,
  Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub id:        String,
  pub text:      String,
  pub sender:    Sender,
  /// Milliseconds since the Unix epoch.
  pub timestamp: i64,
}

/// The ordered message log of one conversation.
///
/// Cloning is cheap and yields a handle to the same log. The lock is never
/// held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
  messages: Arc<Mutex<Vec<Message>>>,
}

impl ConversationHistory {
  pub fn new() -> Self { Self::default() }

  /// Create a message with a fresh id and the current time, append it, and
  /// return a copy.
  ///
  /// Timestamps never decrease along the log: if the wall clock has stepped
  /// backwards the new message reuses the previous timestamp.
  pub fn append(&self, sender: Sender, text: impl Into<String>) -> Message {
    let mut messages =
      self.messages.lock().unwrap_or_else(PoisonError::into_inner);
    let now = Utc::now().timestamp_millis();
    let timestamp = messages.last().map_or(now, |last| now.max(last.timestamp));
    let message = Message {
      id: Uuid::new_v4().to_string(),
      text: text.into(),
      sender,
      timestamp,
    };
    messages.push(message.clone());
    message
  }

  /// A copy of every message in insertion order.
  pub fn snapshot(&self) -> Vec<Message> {
    self
      .messages
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  pub fn len(&self) -> usize {
    self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Timestamp of the most recent message, if any.
  pub fn last_timestamp(&self) -> Option<i64> {
    self
      .messages
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .last()
      .map(|m| m.timestamp)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn append_preserves_order_and_assigns_ids() {
    let history = ConversationHistory::new();
    history.append(Sender::User, "hello");
    history.append(Sender::Bot, "hi there");

    let messages = history.snapshot();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_ne!(messages[0].id, messages[1].id);
  }

  #[test]
  fn timestamps_never_decrease() {
    let history = ConversationHistory::new();
    for i in 0..200 {
      history.append(Sender::User, format!("m{i}"));
    }
    let messages = history.snapshot();
    assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
  }

  #[test]
  fn clones_share_the_same_log() {
    let history = ConversationHistory::new();
    let handle = history.clone();
    handle.append(Sender::Bot, "shared");
    assert_eq!(history.len(), 1);
  }

  #[test]
  fn ids_are_unique() {
    let history = ConversationHistory::new();
    let ids: HashSet<_> = (0..50)
      .map(|_| history.append(Sender::User, "x").id)
      .collect();
    assert_eq!(ids.len(), 50);
  }

  #[test]
  fn last_timestamp_tracks_latest_append() {
    let history = ConversationHistory::new();
    assert_eq!(history.last_timestamp(), None);
    history.append(Sender::User, "a");
    let latest = history.append(Sender::Bot, "b");
    assert_eq!(history.last_timestamp(), Some(latest.timestamp));
  }

  #[test]
  fn sender_serializes_lowercase() {
    let json = serde_json::to_string(&Sender::Bot).unwrap();
    assert_eq!(json, "\"bot\"");
  }
}
