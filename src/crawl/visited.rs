// src/crawl/visited.rs
// =============================================================================
// The visited set: every link path the crawl has ever queued.
//
// This is the one place that decides "is this link new?". Fetch tasks of the
// same level call `insert_if_absent` concurrently, so check-and-insert happens
// under a single lock; two tasks finding the same path can never both win.
//
// The set only grows. Entries keep insertion order (IndexMap) so reports list
// links in the order they were discovered.
//
// Rust concepts:
// - Mutex: mutual exclusion for data shared between tasks
// - IndexMap: a HashMap that remembers insertion order
// =============================================================================

use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct VisitedSet {
    // path -> "has been queued"; always true once present
    links: Mutex<IndexMap<String, bool>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking fetch task must not wedge the rest of the crawl, and the
    // map is never left half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, bool>> {
        self.links.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `path` and returns true if it was not already present.
    /// Returns false and changes nothing otherwise.
    pub fn insert_if_absent(&self, path: &str) -> bool {
        let mut links = self.lock();
        if links.contains_key(path) {
            return false;
        }
        links.insert(path.to_string(), true);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Copy of every path seen so far, in discovery order.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }
}
