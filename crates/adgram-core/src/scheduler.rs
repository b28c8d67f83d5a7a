//! Periodic reconciliation while a deals view is active.

use crate::engine::SyncEngine;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

/// Two-state timer driving the reconciliation cycle: Idle (no task) and
/// Active (one interval task).
///
/// Arming and disarming are idempotent, guarded by a presence check on the
/// stored task handle; at most one timer task exists at a time. Firings are
/// not re-entrancy-guarded: overlapping cycles resolve by last-write-wins on
/// the engine's snapshot.
pub struct PollScheduler {
    engine: Arc<SyncEngine>,
    period: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl PollScheduler {
    pub fn new(engine: Arc<SyncEngine>, period: Duration) -> Self {
        Self {
            engine,
            period,
            timer: Mutex::new(None),
        }
    }

    /// Arm the timer. No-op when already armed.
    ///
    /// The first cycle fires one full period after arming; view entry is
    /// expected to pair this with an immediate `engine.refresh()`.
    pub fn arm(&self) {
        let mut timer = self.timer.lock().unwrap();
        if timer.is_some() {
            return;
        }

        debug!("Arming poll timer ({}ms)", self.period.as_millis());
        let engine = Arc::clone(&self.engine);
        let period = self.period;
        *timer = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval fires immediately; skip that first tick
            ticker.tick().await;
            loop {
                ticker.tick().await;
                engine.reconcile(false).await;
            }
        }));
    }

    /// Disarm the timer. No-op when already disarmed. An in-flight fetch
    /// still completes and still overwrites the snapshot.
    pub fn disarm(&self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            debug!("Disarming poll timer");
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.timer.lock().unwrap().is_some()
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.disarm();
    }
}
