use std::collections::HashMap;

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::model::{EnrichedRecord, GradeWeights};

/// Identity key for an upload: lowercase hex SHA-256 of the raw bytes.
/// Re-uploading identical bytes maps to the same cache entry.
pub fn content_key(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// The last enriched table computed for an upload, with the inputs it was
/// computed under. A lookup only counts as a hit when both match, since
/// durations depend on the reference date.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub as_of: NaiveDate,
    pub weights: GradeWeights,
    pub rows: Vec<EnrichedRecord>,
}

/// Explicit memoization map from content key to the last computed
/// enriched table. Invalidated explicitly on a refresh action; there is
/// no implicit expiry.
#[derive(Debug, Default)]
pub struct EnrichedCache {
    entries: HashMap<String, CacheEntry>,
}

impl EnrichedCache {
    pub fn get(&self, key: &str, as_of: NaiveDate, weights: &GradeWeights) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| entry.as_of == as_of && entry.weights == *weights)
    }

    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    /// Drop the entry for `key`. Returns whether one existed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
