//! Derived category grouping for display.
//!
//! The projection is recomputed from the registry's timer set on demand;
//! it holds copies, never mutates timers, and is not a source of truth.

use std::collections::HashMap;

use crate::palette;
use crate::timer::Timer;

/// One category bucket: timers in registry iteration order, plus the
/// persisted expansion flag (unseen categories start expanded).
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub timers: Vec<Timer>,
    pub is_expanded: bool,
}

impl CategoryView {
    /// Deterministic display color for this category.
    pub fn color(&self) -> &'static str {
        palette::color_for(&self.name)
    }
}

/// Group `timers` by category, preserving first-seen order.
pub(crate) fn project(timers: &[Timer], expanded: &HashMap<String, bool>) -> Vec<CategoryView> {
    let mut order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, Vec<Timer>> = HashMap::new();

    for timer in timers {
        let bucket = buckets.entry(timer.category.as_str()).or_insert_with(|| {
            order.push(timer.category.as_str());
            Vec::new()
        });
        bucket.push(timer.clone());
    }

    order
        .into_iter()
        .map(|name| CategoryView {
            name: name.to_string(),
            timers: buckets.remove(name).unwrap_or_default(),
            is_expanded: expanded.get(name).copied().unwrap_or(true),
        })
        .collect()
}
