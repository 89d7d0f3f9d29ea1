use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;

struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

/// Keyed response store shared by all clones of a client.
///
/// Entries never leave on their own: a lookup given a maximum age evicts
/// the entry it finds too old, and invalidation removes a single key. There
/// is no background sweeper.
#[derive(Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Returns the value stored for `key` unless it is older than
    /// `max_age`. An entry past its age is removed.
    pub fn lookup(&self, key: &str, max_age: Option<Duration>) -> Option<Value> {
        let mut entries = self.entries.lock();

        let expired = match (entries.get(key), max_age) {
            (Some(entry), Some(max_age)) => entry.stored_at.elapsed() > max_age,
            (Some(_), None) => false,
            (None, _) => return None,
        };

        if expired {
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn store(&self, key: String, value: Value) {
        let mut entries = self.entries.lock();
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
