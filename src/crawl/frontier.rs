// src/crawl/frontier.rs
// =============================================================================
// The frontier: addresses waiting to be fetched in the next level.
//
// A level starts by draining the frontier with `take_all`. While that level's
// fetches are in flight, their discoveries are pushed back in, and those
// belong to the *next* level. Pushes come from many tasks at once, so the
// queue sits behind a Mutex.
// =============================================================================

use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct Frontier {
    addresses: Mutex<Vec<String>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.addresses.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an address for the next level.
    pub fn push(&self, address: String) {
        self.lock().push(address);
    }

    /// Returns every queued address (in push order) and leaves the frontier empty.
    pub fn take_all(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
