//! Reachability of the remote reasoning service.
//!
//! A single [`ConnectivitySignal`] is owned by whatever observes the host
//! network (the server's probe task). Every conversation holds its own
//! [`ConnectivityWatch`]; dropping the watch is the unsubscribe.

use tokio::sync::watch;

/// The writer side. Not `Clone`: there is exactly one writer.
#[derive(Debug)]
pub struct ConnectivitySignal {
  tx: watch::Sender<bool>,
}

impl ConnectivitySignal {
  pub fn new(online: bool) -> Self {
    let (tx, _) = watch::channel(online);
    Self { tx }
  }

  /// Publish the current reachability. Returns `true` if the value changed.
  pub fn set_online(&self, online: bool) -> bool {
    let changed = self.tx.send_if_modified(|current| {
      if *current == online {
        false
      } else {
        *current = online;
        true
      }
    });
    if changed {
      tracing::info!(online, "connectivity changed");
    }
    changed
  }

  pub fn is_online(&self) -> bool { *self.tx.borrow() }

  pub fn subscribe(&self) -> ConnectivityWatch {
    ConnectivityWatch { rx: self.tx.subscribe() }
  }

  /// Number of live [`ConnectivityWatch`] handles.
  pub fn subscriber_count(&self) -> usize { self.tx.receiver_count() }
}

/// A reader subscription. Cloning creates another subscription.
#[derive(Debug, Clone)]
pub struct ConnectivityWatch {
  rx: watch::Receiver<bool>,
}

impl ConnectivityWatch {
  /// A watch pinned to `online` with no writer. Useful for tests and for
  /// running without a probe.
  pub fn fixed(online: bool) -> Self {
    let (_, rx) = watch::channel(online);
    Self { rx }
  }

  pub fn is_online(&self) -> bool { *self.rx.borrow() }

  /// Wait for the next transition and return the new value. Returns `None`
  /// once the writer is gone.
  pub async fn changed(&mut self) -> Option<bool> {
    self.rx.changed().await.ok()?;
    Some(*self.rx.borrow_and_update())
  }
}
