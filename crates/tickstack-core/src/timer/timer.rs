use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

/// A single countdown timer.
///
/// Owned exclusively by the [`TimerRegistry`](super::TimerRegistry);
/// callers observe timers by reference or clone and mutate them only
/// through registry operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Full length in seconds, fixed at creation.
    pub duration: u64,
    /// Seconds left; decremented by exactly one per tick while running.
    pub remaining: u64,
    pub status: TimerStatus,
    pub created_at: DateTime<Utc>,
    /// Signal once when `remaining` first drops to or below `duration / 2`.
    #[serde(default)]
    pub halfway_alert: bool,
    #[serde(default)]
    pub halfway_alert_triggered: bool,
}

impl Timer {
    pub(crate) fn new(name: String, duration: u64, category: String, halfway_alert: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            duration,
            remaining: duration,
            status: TimerStatus::Idle,
            created_at: Utc::now(),
            halfway_alert,
            halfway_alert_triggered: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        1.0 - (self.remaining as f64 / self.duration as f64)
    }
}
