//! Shared tick driver.
//!
//! One tokio task advances every running timer once per second via the
//! registry's `tick()`. There are no per-timer scheduling handles, so
//! pausing, resetting, or deleting a timer leaves nothing behind to
//! cancel. User operations and ticks serialize through the one mutex, so
//! no caller ever observes a half-advanced timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::events::Event;
use crate::store::BlobStore;
use crate::timer::TimerRegistry;

/// One tick per second; the system's only notion of time progression.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running tick task.
///
/// Dropping the handle does not stop the task; call [`stop`](Self::stop)
/// or [`join`](Self::join).
#[derive(Debug)]
pub struct Ticker {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
    events: broadcast::Sender<Event>,
}

impl Ticker {
    /// Spawn the shared tick task for `registry` at the standard
    /// one-second period.
    pub fn spawn<S>(registry: Arc<Mutex<TimerRegistry<S>>>) -> Self
    where
        S: BlobStore + Send + 'static,
    {
        Self::spawn_with_period(registry, TICK_PERIOD)
    }

    /// Spawn with a custom period. Exists for tests and simulations; the
    /// engine's observable contract assumes one tick per second.
    pub fn spawn_with_period<S>(registry: Arc<Mutex<TimerRegistry<S>>>, period: Duration) -> Self
    where
        S: BlobStore + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (events_tx, _) = broadcast::channel(64);
        let events = events_tx.clone();

        let handle = tokio::spawn(async move {
            info!(period_ms = period.as_millis() as u64, "tick task started");
            let mut interval = tokio::time::interval(period);
            // A missed period is dropped, not replayed in a burst.
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let emitted = match registry.lock() {
                            Ok(mut reg) => reg.tick(),
                            Err(e) => {
                                warn!("registry lock poisoned, stopping tick task: {e}");
                                break;
                            }
                        };
                        for event in emitted {
                            // Fails only when nobody is subscribed.
                            let _ = events_tx.send(event);
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            debug!("tick task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            shutdown: shutdown_tx,
            handle,
            events,
        }
    }

    /// Subscribe to events emitted by ticks (halfway signals and
    /// completions).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Signal the tick task to stop. Idempotent.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Stop the tick task and wait for it to exit.
    pub async fn join(self) {
        self.stop();
        let _ = self.handle.await;
    }
}
