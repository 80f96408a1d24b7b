//! Open conversations, keyed by id.

use std::{
  collections::HashMap,
  sync::{Arc, PoisonError, RwLock},
  time::Duration,
};

use chrono::Utc;
use healio_core::conversation::Conversation;
use uuid::Uuid;

/// Removing an entry drops the registry's handle; the conversation (and its
/// connectivity subscription) goes away once in-flight requests finish.
/// Entries leave on `DELETE` or through [`ConversationRegistry::evict_idle`].
pub struct ConversationRegistry<G> {
  inner: RwLock<HashMap<Uuid, Arc<Conversation<G>>>>,
}

impl<G> Default for ConversationRegistry<G> {
  fn default() -> Self { Self { inner: RwLock::new(HashMap::new()) } }
}

impl<G> ConversationRegistry<G> {
  pub fn insert(&self, conversation: Conversation<G>) -> Arc<Conversation<G>> {
    let conversation = Arc::new(conversation);
    self
      .inner
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .insert(conversation.id(), conversation.clone());
    conversation
  }

  pub fn get(&self, id: Uuid) -> Option<Arc<Conversation<G>>> {
    self
      .inner
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .get(&id)
      .cloned()
  }

  pub fn remove(&self, id: Uuid) -> Option<Arc<Conversation<G>>> {
    self
      .inner
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .remove(&id)
  }

  pub fn len(&self) -> usize {
    self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Drop every conversation whose last message is at least `max_idle` old
  /// and which no request or turn is still holding. Returns how many went.
  pub fn evict_idle(&self, max_idle: Duration) -> usize {
    let max_idle = i64::try_from(max_idle.as_millis()).unwrap_or(i64::MAX);
    let cutoff = Utc::now().timestamp_millis().saturating_sub(max_idle);

    let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
    let before = inner.len();
    inner.retain(|_, conversation| {
      let last_active = conversation
        .history()
        .last_timestamp()
        .unwrap_or_else(|| conversation.created_at().timestamp_millis());
      Arc::strong_count(conversation) > 1 || last_active > cutoff
    });
    before - inner.len()
  }
}
