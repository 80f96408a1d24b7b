//! Periodic eviction of idle conversations.

use std::{sync::Arc, time::Duration};

use healio_api::ConversationRegistry;
use tokio::{task::JoinHandle, time::MissedTickBehavior};

/// Evict conversations idle for `max_idle`, checking every `every`. Runs
/// until the returned task is aborted.
pub fn spawn<G>(
  registry: Arc<ConversationRegistry<G>>,
  max_idle: Duration,
  every: Duration,
) -> JoinHandle<()>
where
  G: Send + Sync + 'static,
{
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
      ticker.tick().await;
      let evicted = registry.evict_idle(max_idle);
      if evicted > 0 {
        tracing::info!(evicted, open = registry.len(), "idle conversations evicted");
      }
    }
  })
}
