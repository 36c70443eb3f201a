mod history;
mod registry;
mod timer;

pub use history::HistoryEntry;
pub use registry::TimerRegistry;
pub use timer::{Timer, TimerStatus};
