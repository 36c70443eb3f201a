use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every state change in the registry produces an Event.
/// The UI polls for events; the notification layer subscribes to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        id: Uuid,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        id: Uuid,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        id: Uuid,
        at: DateTime<Utc>,
    },
    TimerDeleted {
        id: Uuid,
        at: DateTime<Utc>,
    },
    /// Remaining time first dropped to or below half the full duration.
    /// Fires at most once per run-to-completion cycle.
    HalfwayReached {
        id: Uuid,
        name: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        id: Uuid,
        name: String,
        category: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// All timers, history, and persisted blobs were dropped.
    DataCleared {
        at: DateTime<Utc>,
    },
}
