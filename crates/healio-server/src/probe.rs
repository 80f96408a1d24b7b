//! Background reachability probe that drives the host connectivity signal.

use std::{future::Future, sync::Arc, time::Duration};

use healio_core::connectivity::ConnectivitySignal;
use tokio::{task::JoinHandle, time::MissedTickBehavior};

/// Run `check` every `interval`, starting immediately, and publish each
/// result to `signal`. Runs until the returned task is aborted.
pub fn spawn<F, Fut>(
  signal: Arc<ConnectivitySignal>,
  interval: Duration,
  mut check: F,
) -> JoinHandle<()>
where
  F: FnMut() -> Fut + Send + 'static,
  Fut: Future<Output = bool> + Send,
{
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
      ticker.tick().await;
      let online = check().await;
      signal.set_online(online);
    }
  })
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::*;

  #[tokio::test]
  async fn publishes_probe_results() {
    let signal = Arc::new(ConnectivitySignal::new(true));
    let mut watch = signal.subscribe();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let task = spawn(signal.clone(), Duration::from_millis(10), move || {
      let n = counter.fetch_add(1, Ordering::SeqCst);
      // offline on the first probe, online afterwards
      async move { n > 0 }
    });

    assert_eq!(watch.changed().await, Some(false));
    assert_eq!(watch.changed().await, Some(true));
    assert!(calls.load(Ordering::SeqCst) >= 2);
    task.abort();
  }
}
