use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timer::Timer;

/// Immutable record of one completed countdown.
///
/// The history log keeps entries newest first and never mutates them;
/// the only way an entry disappears is a full data clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub duration: u64,
    pub completed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub(crate) fn capture(timer: &Timer, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: timer.name.clone(),
            category: timer.category.clone(),
            duration: timer.duration,
            completed_at,
        }
    }
}
