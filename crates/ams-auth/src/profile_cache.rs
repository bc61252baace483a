use crate::RemoteIdentityRecord;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    record: RemoteIdentityRecord,
    inserted_at: Instant,
}

/// Process-wide TTL cache for remote profile lookups, keyed by external
/// id. Staleness within the TTL is accepted; there is no invalidation
/// beyond expiry.
pub struct ProfileCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, external_id: &str) -> Option<RemoteIdentityRecord> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        match entries.get(external_id) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.record.clone()),
            Some(_) => {
                entries.remove(external_id);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, external_id: &str, record: RemoteIdentityRecord) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        entries.insert(
            external_id.to_string(),
            CacheEntry {
                record,
                inserted_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}
