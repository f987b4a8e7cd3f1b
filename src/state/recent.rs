//! Recently Viewed Subjects
//!
//! Most-recent-first list, unique by code, truncated to capacity.

use crate::models::RecentSubject;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentViews {
    entries: Vec<RecentSubject>,
    capacity: usize,
}

impl RecentViews {
    pub fn new(capacity: usize) -> Self {
        Self { entries: Vec::new(), capacity }
    }

    /// Rebuild from persisted entries, restoring the invariants if the
    /// stored list was edited by hand.
    pub fn from_entries(entries: Vec<RecentSubject>, capacity: usize) -> Self {
        let mut views = Self::new(capacity);
        for entry in entries {
            if views.entries.len() == capacity {
                break;
            }
            if !views.contains(&entry.code) {
                views.entries.push(entry);
            }
        }
        views
    }

    /// Move (or insert) `entry` to the front
    pub fn record(&mut self, entry: RecentSubject) {
        self.entries.retain(|e| e.code != entry.code);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    pub fn entries(&self) -> &[RecentSubject] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RecentSubject> {
        self.entries
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

    fn entry(code: &str) -> RecentSubject {
        RecentSubject {
            code: code.to_string(),
            title: format!("{} title", code),
            year_level: 1,
        }
    }

    fn codes(views: &RecentViews) -> Vec<&str> {
        views.entries().iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_reselect_moves_to_front() {
        let mut views = RecentViews::from_entries(vec![entry("A"), entry("B"), entry("C")], 3);
        views.record(entry("B"));
        assert_eq!(codes(&views), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_new_entry_evicts_oldest() {
        let mut views = RecentViews::from_entries(vec![entry("A"), entry("B"), entry("C")], 3);
        views.record(entry("D"));
        assert_eq!(codes(&views), vec!["D", "A", "B"]);
    }

    #[test]
    fn test_never_exceeds_capacity_or_duplicates() {
        let mut views = RecentViews::new(3);
        for code in ["A", "B", "A", "C", "D", "D", "B", "E", "A"] {
            views.record(entry(code));
            assert!(views.len() <= 3);
            let mut seen = codes(&views);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), views.len());
        }
        assert_eq!(codes(&views), vec!["A", "E", "B"]);
    }

    #[test]
    fn test_record_refreshes_title() {
        let mut views = RecentViews::new(3);
        views.record(entry("A"));
        views.record(RecentSubject { code: "A".into(), title: "Renamed".into(), year_level: 2 });
        assert_eq!(views.len(), 1);
        assert_eq!(views.entries()[0].title, "Renamed");
    }

    #[test]
    fn test_from_entries_normalises() {
        let stored = vec![entry("A"), entry("A"), entry("B"), entry("C"), entry("D")];
        let views = RecentViews::from_entries(stored, 3);
        assert_eq!(codes(&views), vec!["A", "B", "C"]);
    }
}
