//! Interval-driven notification polling.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, warn};

use dormhub_auth::epoch::{Epoch, EpochCounter};
use dormhub_entity::notification::{self, Notification};

use crate::services::NotificationService;

/// One successful poll.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSnapshot {
    /// Epoch the fetch was started under.
    pub epoch: Epoch,
    pub notifications: Vec<Notification>,
    pub unread: usize,
    pub fetched_at: DateTime<Utc>,
}

/// Background task re-fetching notifications on a fixed interval.
///
/// The task stops when the poller is dropped. Results of fetches started
/// before the last [`NotificationPoller::invalidate`] are discarded.
#[derive(Debug)]
pub struct NotificationPoller {
    handle: JoinHandle<()>,
    epochs: Arc<EpochCounter>,
    updates: watch::Receiver<Option<NotificationSnapshot>>,
}

impl NotificationPoller {
    /// Start polling `service` every `interval`. The first fetch is immediate.
    pub fn spawn(service: NotificationService, interval: Duration) -> Self {
        let epochs = Arc::new(EpochCounter::new());
        let (tx, updates) = watch::channel(None);

        let handle = tokio::spawn(run_poller(service, interval, Arc::clone(&epochs), tx));

        Self {
            handle,
            epochs,
            updates,
        }
    }

    /// Receiver for published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Option<NotificationSnapshot>> {
        self.updates.clone()
    }

    /// The most recent snapshot, if any fetch has completed.
    pub fn latest(&self) -> Option<NotificationSnapshot> {
        self.updates.borrow().clone()
    }

    /// Discard any fetch currently in flight.
    pub fn invalidate(&self) {
        self.epochs.advance();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.epochs.advance();
        self.handle.abort();
    }
}

async fn run_poller(
    service: NotificationService,
    interval: Duration,
    epochs: Arc<EpochCounter>,
    tx: watch::Sender<Option<NotificationSnapshot>>,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let epoch = epochs.advance();
        let result = service.list().await;

        if !epochs.is_current(epoch) {
            debug!(epoch = epoch.value(), "Discarding stale notification poll");
            continue;
        }

        match result {
            Ok(notifications) => {
                let snapshot = NotificationSnapshot {
                    epoch,
                    unread: notification::unread(&notifications),
                    notifications,
                    fetched_at: Utc::now(),
                };
                if tx.send(Some(snapshot)).is_err() {
                    debug!("No notification subscribers left; stopping poller");
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Notification poll failed");
            }
        }
    }
}
