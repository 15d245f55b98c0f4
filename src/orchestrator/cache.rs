//! Session-lifetime breach cache.

use std::collections::HashMap;

use crate::models::BreachCount;

/// Exact-match map from password to the last known breach count.
///
/// Keys are compared byte for byte (no case folding, no trimming). Only
/// known counts are stored, so an outage can never be replayed from here.
#[derive(Debug, Default, Clone)]
pub struct BreachCache {
    entries: HashMap<String, u64>,
}

impl BreachCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, password: &str) -> Option<BreachCount> {
        self.entries.get(password).copied().map(BreachCount::Known)
    }

    /// Store a lookup result. Returns `false` (and stores nothing) for
    /// [`BreachCount::Unavailable`].
    pub fn insert(&mut self, password: impl Into<String>, count: BreachCount) -> bool {
        match count {
            BreachCount::Known(count) => {
                self.entries.insert(password.into(), count);
                true
            }
            BreachCount::Unavailable => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
