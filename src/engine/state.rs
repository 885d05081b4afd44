use std::collections::HashMap;

use crate::models::entry::CookieEntry;

/// State of the cookie engine, owning per-cookie occurrence counts for the
/// filtered entries.
pub struct State {
    counts: HashMap<String, u64>,
}

impl State {
    pub fn new() -> Self {
        State {
            counts: HashMap::new(),
        }
    }

    /// Count a single entry that matched the target date.
    pub fn process_single_entry(&mut self, entry: CookieEntry) {
        *self.counts.entry(entry.cookie).or_insert(0) += 1;
    }

    /// Every cookie whose count equals the maximum count, in unspecified
    /// order. Empty when nothing was counted.
    pub fn most_active_cookies(&self) -> Vec<String> {
        let Some(max_count) = self.counts.values().copied().max() else {
            return Vec::new();
        };

        self.counts
            .iter()
            .filter(|(_, count)| **count == max_count)
            .map(|(cookie, _)| cookie.clone())
            .collect()
    }
}
