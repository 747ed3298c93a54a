// src/crawl/frontier.rs
// =============================================================================
// The set of URLs waiting to be fetched.
//
// A HashSet answers "is this URL already queued?" and a Vec holds the same
// URLs for popping, so both insert and pop are O(1). Pops come off the end
// of the Vec; callers must not rely on any particular order.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Frontier {
    pending: Vec<String>,
    queued: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `url` unless it is already waiting. Returns true if it was added.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.queued.contains(url) {
            return false;
        }
        self.queued.insert(url.to_string());
        self.pending.push(url.to_string());
        true
    }

    /// Removes and returns one waiting URL
    pub fn pop(&mut self) -> Option<String> {
        let url = self.pending.pop()?;
        self.queued.remove(&url);
        Some(url)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
