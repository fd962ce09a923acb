//! Per-classifier local catalog index.

use std::collections::HashMap;
use std::sync::OnceLock;

use devicematch_core::DeviceId;
use devicematch_matchers::{ld, ris};

/// Mapping from normalized reference user agent to identity, plus a lazily
/// built sorted view of the keys for prefix search.
///
/// The sorted view is invalidated on every insert and rebuilt on the next
/// read, so bulk registration stays O(1) per record and the view, once
/// built, is an immutable snapshot safe for concurrent readers.
#[derive(Debug, Default)]
pub struct LocalIndex {
    entries: HashMap<String, DeviceId>,
    sorted: OnceLock<Vec<String>>,
}

impl LocalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a normalized user agent. Last write for a given key wins.
    pub fn insert(&mut self, user_agent: String, device_id: DeviceId) {
        self.entries.insert(user_agent, device_id);
        self.sorted = OnceLock::new();
    }

    /// Exact lookup.
    pub fn get(&self, user_agent: &str) -> Option<DeviceId> {
        self.entries.get(user_agent).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered user agents in ascending lexicographic order.
    pub fn sorted_view(&self) -> &[String] {
        self.sorted.get_or_init(|| {
            let mut uas: Vec<String> = self.entries.keys().cloned().collect();
            uas.sort();
            uas
        })
    }

    /// Iterate the registered user agents in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Prefix search against the sorted view; resolves the matched user
    /// agent back to its identity.
    pub fn ris_lookup(&self, needle: &str, tolerance: usize) -> Option<DeviceId> {
        ris::search(self.sorted_view(), needle, tolerance)
            .and_then(|ua| self.entries.get(ua).cloned())
    }

    /// Edit-distance search against the sorted view.
    pub fn ld_lookup(&self, needle: &str, tolerance: usize) -> Option<DeviceId> {
        ld::search(self.sorted_view(), needle, tolerance)
            .and_then(|ua| self.entries.get(ua).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_view_tracks_inserts() {
        let mut index = LocalIndex::new();
        index.insert("NokiaN95/2.0".into(), "nokia_n95".into());
        assert_eq!(index.sorted_view(), ["NokiaN95/2.0"]);

        index.insert("Nokia6680/1.0".into(), "nokia_6680".into());
        assert_eq!(index.sorted_view(), ["Nokia6680/1.0", "NokiaN95/2.0"]);
    }

    #[test]
    fn last_write_wins() {
        let mut index = LocalIndex::new();
        index.insert("NokiaN95/2.0".into(), "old".into());
        index.insert("NokiaN95/2.0".into(), "new".into());
        assert_eq!(index.get("NokiaN95/2.0").as_deref(), Some("new"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn ris_lookup_resolves_identity() {
        let mut index = LocalIndex::new();
        index.insert("Nokia6680/1.0".into(), "nokia_6680".into());
        index.insert("NokiaN95/2.0".into(), "nokia_n95".into());
        assert_eq!(
            index.ris_lookup("NokiaN95/3.0", 8).as_deref(),
            Some("nokia_n95")
        );
        assert_eq!(index.ris_lookup("Samsung/1.0", 5), None);
    }

    #[test]
    fn ld_lookup_resolves_identity() {
        let mut index = LocalIndex::new();
        index.insert("SEC-SGH-A867/1.0".into(), "samsung_a867".into());
        assert_eq!(
            index.ld_lookup("SEC-SGH-A868/1.0", 2).as_deref(),
            Some("samsung_a867")
        );
    }
}
