//! Timer registry implementation.
//!
//! The registry owns the timer set and the history log, and advances every
//! running timer from one shared `tick()` -- there is no per-timer
//! scheduling resource to clean up on pause, reset, or delete.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |
//!           v (automatic on reaching zero)
//!        Completed
//! ```
//!
//! `reset` returns any state to `Idle` with a full countdown. Completion is
//! never user-invoked: only `tick()` moves a timer to `Completed`, and it
//! appends the matching history entry in the same step.
//!
//! Every mutation is followed by a best-effort write through the store
//! adapter; a failed write is logged and in-memory state stays
//! authoritative for the rest of the session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::history::HistoryEntry;
use super::timer::{Timer, TimerStatus};
use crate::categories::{self, CategoryView};
use crate::config::Config;
use crate::error::ValidationError;
use crate::events::Event;
use crate::store::{BlobStore, StoreAdapter, KEY_HISTORY, KEY_TIMERS};

#[derive(Serialize)]
struct ExportSnapshot<'a> {
    timers: &'a [Timer],
    history: &'a [HistoryEntry],
    #[serde(rename = "exportedAt")]
    exported_at: DateTime<Utc>,
}

/// Owns all timers, the completion history, and the category expansion
/// flags. Construct one per session and inject it; it is not a singleton.
#[derive(Debug)]
pub struct TimerRegistry<S: BlobStore> {
    timers: Vec<Timer>,
    /// Newest first.
    history: Vec<HistoryEntry>,
    expanded: HashMap<String, bool>,
    store: StoreAdapter<S>,
    default_category: String,
}

impl<S: BlobStore> TimerRegistry<S> {
    /// Open a registry backed by `store`, loading any persisted timers and
    /// history. Corrupt or absent blobs fall back to empty sets.
    pub fn open(store: S) -> Self {
        Self::with_config(store, &Config::default())
    }

    /// Like [`open`](Self::open), honoring configured defaults.
    pub fn with_config(store: S, config: &Config) -> Self {
        let adapter = StoreAdapter::new(store);
        let timers: Vec<Timer> = adapter.load_or(KEY_TIMERS, Vec::new());
        let history: Vec<HistoryEntry> = adapter.load_or(KEY_HISTORY, Vec::new());
        Self {
            timers,
            history,
            expanded: HashMap::new(),
            store: adapter,
            default_category: config.default_category.clone(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn get(&self, id: Uuid) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    /// Derived category grouping in first-seen order. Read-only view;
    /// never a source of truth.
    pub fn categories(&self) -> Vec<CategoryView> {
        categories::project(&self.timers, &self.expanded)
    }

    /// Pretty-printed `{ timers, history, exportedAt }` JSON. Pure read;
    /// never written to storage.
    pub fn export_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ExportSnapshot {
            timers: &self.timers,
            history: &self.history,
            exported_at: Utc::now(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create a timer in the `Idle` state with a full countdown and mark
    /// its category expanded.
    ///
    /// # Errors
    ///
    /// Declines with a [`ValidationError`] for an empty (after trimming)
    /// name or a zero duration; registry state is left unchanged.
    pub fn create(
        &mut self,
        name: &str,
        duration_secs: u64,
        category: &str,
        halfway_alert: bool,
    ) -> Result<&Timer, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if duration_secs == 0 {
            return Err(ValidationError::InvalidDuration(duration_secs));
        }

        let category = if category.trim().is_empty() {
            self.default_category.clone()
        } else {
            category.to_string()
        };
        self.expanded.insert(category.clone(), true);
        self.timers
            .push(Timer::new(name.to_string(), duration_secs, category, halfway_alert));
        self.persist_timers();
        Ok(&self.timers[self.timers.len() - 1])
    }

    /// `Idle`/`Paused` with time left -> `Running`. Anything else is a
    /// no-op, including unknown ids.
    pub fn start(&mut self, id: Uuid) -> Option<Event> {
        let event = self.start_inner(id)?;
        self.persist_timers();
        Some(event)
    }

    /// `Running` -> `Paused`; halts this timer's countdown without
    /// touching the others.
    pub fn pause(&mut self, id: Uuid) -> Option<Event> {
        let event = self.pause_inner(id)?;
        self.persist_timers();
        Some(event)
    }

    /// Any state -> `Idle` with a full countdown and a cleared halfway
    /// trigger. Idempotent.
    pub fn reset(&mut self, id: Uuid) -> Option<Event> {
        let event = self.reset_inner(id)?;
        self.persist_timers();
        Some(event)
    }

    /// Remove the timer unconditionally. Deleting an unknown (or already
    /// deleted) id is a silent no-op; no tick or signal references the id
    /// afterward.
    pub fn delete(&mut self, id: Uuid) -> Option<Event> {
        let len_before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        if self.timers.len() == len_before {
            return None;
        }
        self.persist_timers();
        Some(Event::TimerDeleted { id, at: Utc::now() })
    }

    /// Start every startable timer in `category`; completed and
    /// zero-remaining timers are skipped.
    pub fn start_all_in_category(&mut self, category: &str) -> Vec<Event> {
        let events = self.apply_in_category(category, Self::start_inner);
        if !events.is_empty() {
            self.persist_timers();
        }
        events
    }

    /// Pause every running timer in `category`.
    pub fn pause_all_in_category(&mut self, category: &str) -> Vec<Event> {
        let events = self.apply_in_category(category, Self::pause_inner);
        if !events.is_empty() {
            self.persist_timers();
        }
        events
    }

    /// Reset every timer in `category` to a full, idle countdown.
    pub fn reset_all_in_category(&mut self, category: &str) -> Vec<Event> {
        let events = self.apply_in_category(category, Self::reset_inner);
        if !events.is_empty() {
            self.persist_timers();
        }
        events
    }

    /// Flip the expansion flag for a category. Unseen categories start
    /// expanded, so the first toggle collapses. Timers are untouched.
    pub fn toggle_expansion(&mut self, category: &str) {
        let flag = self.expanded.entry(category.to_string()).or_insert(true);
        *flag = !*flag;
    }

    /// Advance every running timer by exactly one second.
    ///
    /// All timers are advanced from one consistent snapshot of the prior
    /// state: the updated set replaces the old one in a single assignment,
    /// so no caller ever observes a partially advanced registry. Returns
    /// the halfway and completion events this step produced.
    pub fn tick(&mut self) -> Vec<Event> {
        let now = Utc::now();
        let mut events = Vec::new();
        let mut completed = Vec::new();
        let mut changed = false;

        let updated: Vec<Timer> = self
            .timers
            .iter()
            .map(|timer| {
                if timer.status != TimerStatus::Running || timer.remaining == 0 {
                    return timer.clone();
                }
                changed = true;
                let mut t = timer.clone();
                t.remaining = t.remaining.saturating_sub(1);

                if t.halfway_alert
                    && !t.halfway_alert_triggered
                    && t.remaining <= t.duration / 2
                    && t.remaining > 0
                {
                    t.halfway_alert_triggered = true;
                    events.push(Event::HalfwayReached {
                        id: t.id,
                        name: t.name.clone(),
                        remaining_secs: t.remaining,
                        at: now,
                    });
                }

                if t.remaining == 0 {
                    t.status = TimerStatus::Completed;
                    completed.push(HistoryEntry::capture(&t, now));
                    events.push(Event::TimerCompleted {
                        id: t.id,
                        name: t.name.clone(),
                        category: t.category.clone(),
                        duration_secs: t.duration,
                        at: now,
                    });
                }
                t
            })
            .collect();

        if changed {
            self.timers = updated;
            if !completed.is_empty() {
                // History is appended in the same step that detects
                // completion, exactly once per completion event.
                for entry in completed {
                    self.history.insert(0, entry);
                }
                self.persist_history();
            }
            self.persist_timers();
        }
        events
    }

    /// Drop all timers, history, expansion state, and both persisted
    /// blobs. Subsequent loads observe empty data.
    pub fn clear_all(&mut self) -> Event {
        self.timers.clear();
        self.history.clear();
        self.expanded.clear();
        if let Err(e) = self.store.clear(&[KEY_TIMERS, KEY_HISTORY]) {
            warn!("failed to clear persisted data: {e}");
        }
        Event::DataCleared { at: Utc::now() }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn start_inner(&mut self, id: Uuid) -> Option<Event> {
        let timer = self.timers.iter_mut().find(|t| t.id == id)?;
        let startable = matches!(timer.status, TimerStatus::Idle | TimerStatus::Paused);
        if !startable || timer.remaining == 0 {
            return None;
        }
        timer.status = TimerStatus::Running;
        Some(Event::TimerStarted {
            id,
            remaining_secs: timer.remaining,
            at: Utc::now(),
        })
    }

    fn pause_inner(&mut self, id: Uuid) -> Option<Event> {
        let timer = self.timers.iter_mut().find(|t| t.id == id)?;
        if timer.status != TimerStatus::Running {
            return None;
        }
        timer.status = TimerStatus::Paused;
        Some(Event::TimerPaused {
            id,
            remaining_secs: timer.remaining,
            at: Utc::now(),
        })
    }

    fn reset_inner(&mut self, id: Uuid) -> Option<Event> {
        let timer = self.timers.iter_mut().find(|t| t.id == id)?;
        timer.status = TimerStatus::Idle;
        timer.remaining = timer.duration;
        timer.halfway_alert_triggered = false;
        Some(Event::TimerReset { id, at: Utc::now() })
    }

    fn apply_in_category(
        &mut self,
        category: &str,
        op: fn(&mut Self, Uuid) -> Option<Event>,
    ) -> Vec<Event> {
        let ids: Vec<Uuid> = self
            .timers
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.id)
            .collect();
        ids.into_iter().filter_map(|id| op(self, id)).collect()
    }

    fn persist_timers(&mut self) {
        if let Err(e) = self.store.save(KEY_TIMERS, &self.timers) {
            warn!("failed to persist timers: {e}");
        }
    }

    fn persist_history(&mut self) {
        if let Err(e) = self.store.save(KEY_HISTORY, &self.history) {
            warn!("failed to persist history: {e}");
        }
    }
}
