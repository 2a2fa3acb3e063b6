//! Processed-key cache for generated notifications.

use std::collections::HashSet;
use std::sync::Mutex;

/// Set of `(rule, entity)` keys that already produced a notification.
///
/// Keys are never evicted: once a key is recorded, the same rule never fires
/// again for the same entity for the life of the process. Memory grows with
/// the number of distinct pairs seen.
#[derive(Debug, Default)]
pub struct ProcessedKeys {
    seen: Mutex<HashSet<String>>,
}

impl ProcessedKeys {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a key from a rule tag and an entity id, e.g. `inicio-42`.
    pub fn make_key(rule_tag: &str, entity_id: i64) -> String {
        format!("{}-{}", rule_tag, entity_id)
    }

    /// Whether `key` was already recorded.
    pub fn contains(&self, key: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }

    /// Record `key`. Returns `true` the first time, `false` for a duplicate.
    pub fn claim(&self, key: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string())
    }

    /// Forget every recorded key.
    pub fn reset(&self) {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Number of recorded keys.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no key has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
