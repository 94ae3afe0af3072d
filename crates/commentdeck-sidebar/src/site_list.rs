use chrono::{DateTime, Utc};
use commentdeck_core::models::SiteRecord;
use parking_lot::RwLock;

/// Displays the fetched site records within the Sites view.
///
/// This type owns the displayed content; everything beyond holding the
/// current records (row layout, pagination, per-site actions) lives
/// downstream of it.
#[derive(Debug, Default)]
pub struct SiteList {
    inner: RwLock<SiteListState>,
}

#[derive(Debug, Default)]
struct SiteListState {
    sites: Vec<SiteRecord>,
    loaded_at: Option<DateTime<Utc>>,
}

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed content wholesale with a fresh server snapshot.
    pub fn load_sites(&self, sites: Vec<SiteRecord>) {
        let mut state = self.inner.write();
        state.sites = sites;
        state.loaded_at = Some(Utc::now());
    }

    /// Snapshot of the currently displayed records.
    pub fn sites(&self) -> Vec<SiteRecord> {
        self.inner.read().sites.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().sites.is_empty()
    }

    /// When the displayed content last changed, None before the first load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> SiteRecord {
        SiteRecord(value)
    }

    #[test]
    fn test_starts_empty() {
        let list = SiteList::new();
        assert!(list.is_empty());
        assert!(list.loaded_at().is_none());
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let list = SiteList::new();
        list.load_sites(vec![
            record(json!({"id": 1, "name": "Blog"})),
            record(json!({"id": 2, "name": "Docs"})),
        ]);
        assert_eq!(list.sites().len(), 2);

        list.load_sites(vec![record(json!({"id": 3, "name": "Forum"}))]);
        let sites = list.sites();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name(), Some("Forum"));
        assert!(list.loaded_at().is_some());
    }

    #[test]
    fn test_load_empty_clears_display() {
        let list = SiteList::new();
        list.load_sites(vec![record(json!({"id": 1}))]);
        list.load_sites(Vec::new());
        assert!(list.is_empty());
    }
}
