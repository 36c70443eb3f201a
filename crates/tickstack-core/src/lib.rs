//! # Tickstack Core Library
//!
//! This library provides the core business logic for Tickstack, a personal
//! multi-timer application: users create named, categorized countdown
//! timers, run several concurrently, and review completion history. The
//! presentation layer is a thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Timer Registry**: owns the timer set and history log; a single
//!   shared `tick()` advances every running timer once per second
//! - **Storage**: JSON key-value blobs behind a [`BlobStore`] trait,
//!   plus TOML-based configuration
//! - **Events**: every state change produces an [`Event`]; the UI polls
//!   for them and the notification layer subscribes to them
//!
//! ## Key Components
//!
//! - [`TimerRegistry`]: core timer state machine and history log
//! - [`Ticker`]: the shared one-second tick task
//! - [`StoreAdapter`]: JSON persistence with safe fallbacks
//! - [`Config`]: application configuration management

pub mod categories;
pub mod config;
pub mod duration;
pub mod error;
pub mod events;
pub mod palette;
pub mod store;
pub mod ticker;
pub mod timer;

pub use categories::CategoryView;
pub use config::Config;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use store::{BlobStore, FileStore, MemoryStore, StoreAdapter, KEY_HISTORY, KEY_TIMERS};
pub use ticker::Ticker;
pub use timer::{HistoryEntry, Timer, TimerRegistry, TimerStatus};
