// ABOUTME: In-memory cache of list responses keyed by filter parameters
// ABOUTME: Entries go stale after a fixed window; no other eviction

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::{ListParams, NotePage};

/// How long a fetched page stays fresh before the controller refetches.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(60);

/// The tuple of filter/pagination parameters identifying one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub tag: String,
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

impl QueryKey {
    pub fn new(tag: &str, page: u32, per_page: u32, search: &str) -> Self {
        Self {
            tag: tag.to_string(),
            page,
            per_page,
            search: search.to_string(),
        }
    }

    /// Request parameters matching this key. The `all` tag and blank
    /// search are dropped by [`ListParams::query_pairs`] at send time.
    pub fn to_params(&self) -> ListParams {
        let mut params = ListParams::default()
            .page(self.page)
            .per_page(self.per_page)
            .search(self.search.clone());
        if !self.tag.is_empty() {
            params = params.tag(self.tag.clone());
        }
        params
    }
}

struct CacheEntry {
    page: NotePage,
    fetched_at: Instant,
}

/// Response cache used by the list view. Accessed only from the event
/// loop, so no locking.
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_after: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_stale_after(DEFAULT_STALE_AFTER)
    }

    pub fn with_stale_after(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    /// Returns the cached page for `key` if it is still fresh at `now`.
    pub fn get(&self, key: &QueryKey, now: Instant) -> Option<&NotePage> {
        self.entries
            .get(key)
            .filter(|entry| now.duration_since(entry.fetched_at) < self.stale_after)
            .map(|entry| &entry.page)
    }

    /// Stores a freshly fetched page, replacing any previous entry.
    pub fn insert(&mut self, key: QueryKey, page: NotePage, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                page,
                fetched_at: now,
            },
        );
    }

    /// Drops every entry. Used after a create or delete, when any cached
    /// page may no longer reflect the server.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawNotesPayload;

    fn empty_page() -> NotePage {
        NotePage::from_raw(RawNotesPayload::default())
    }

    #[test]
    fn test_get_fresh_entry() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("all", 1, 12, "");
        let now = Instant::now();
        cache.insert(key.clone(), empty_page(), now);
        assert!(cache.get(&key, now).is_some());
    }

    #[test]
    fn test_get_stale_entry_returns_none() {
        let mut cache = QueryCache::with_stale_after(Duration::from_secs(60));
        let key = QueryKey::new("all", 1, 12, "");
        let now = Instant::now();
        cache.insert(key.clone(), empty_page(), now);

        let later = now + Duration::from_secs(61);
        assert!(cache.get(&key, later).is_none());
    }

    #[test]
    fn test_get_just_inside_window() {
        let mut cache = QueryCache::with_stale_after(Duration::from_secs(60));
        let key = QueryKey::new("all", 1, 12, "");
        let now = Instant::now();
        cache.insert(key.clone(), empty_page(), now);

        let later = now + Duration::from_secs(59);
        assert!(cache.get(&key, later).is_some());
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut cache = QueryCache::new();
        let now = Instant::now();
        let page1 = QueryKey::new("all", 1, 12, "");
        let page2 = QueryKey::new("all", 2, 12, "");
        cache.insert(page1.clone(), empty_page(), now);

        assert!(cache.get(&page1, now).is_some());
        assert!(cache.get(&page2, now).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("Work", 1, 12, "q");
        let now = Instant::now();
        cache.insert(key.clone(), empty_page(), now);
        cache.insert(key.clone(), empty_page(), now + Duration::from_secs(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_to_params_keeps_tag() {
        let key = QueryKey::new("Work", 3, 12, "meeting");
        let params = key.to_params();
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 12);
        assert_eq!(params.search.as_deref(), Some("meeting"));
        assert_eq!(params.tag.as_deref(), Some("Work"));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = QueryCache::new();
        let now = Instant::now();
        cache.insert(QueryKey::new("all", 1, 12, ""), empty_page(), now);
        cache.insert(QueryKey::new("all", 2, 12, ""), empty_page(), now);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_key_equality_and_hash() {
        let a = QueryKey::new("all", 1, 12, "x");
        let b = QueryKey::new("all", 1, 12, "x");
        let c = QueryKey::new("all", 1, 12, "y");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
