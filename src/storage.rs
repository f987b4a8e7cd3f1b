//! Browser Storage
//!
//! Typed access to the local-storage keys the portal shares across pages.

use gloo_storage::{LocalStorage, Storage};

use crate::config::PortalConfig;
use crate::models::{RecentSubject, User};
use crate::state::RecentViews;

pub const USER_KEY: &str = "user";
pub const RECENT_SUBJECTS_KEY: &str = "recentSubjects";
pub const CONFIG_KEY: &str = "portalConfig";

// ========================
// Session
// ========================

/// Logged-in user; a corrupt value counts as logged out
pub fn load_user() -> Option<User> {
    LocalStorage::get::<User>(USER_KEY).ok()
}

pub fn save_user(user: &User) {
    if let Err(e) = LocalStorage::set(USER_KEY, user) {
        log::warn!("failed to persist session: {}", e);
    }
}

pub fn clear_user() {
    LocalStorage::delete(USER_KEY);
}

// ========================
// Recently Viewed
// ========================

pub fn load_recent(capacity: usize) -> RecentViews {
    let stored = LocalStorage::get::<Vec<RecentSubject>>(RECENT_SUBJECTS_KEY).unwrap_or_default();
    RecentViews::from_entries(stored, capacity)
}

pub fn save_recent(views: &RecentViews) {
    if let Err(e) = LocalStorage::set(RECENT_SUBJECTS_KEY, views.entries()) {
        log::warn!("failed to persist recent subjects: {}", e);
    }
}

/// Record a visit and persist it in one step
pub fn remember_subject(entry: RecentSubject, capacity: usize) -> RecentViews {
    let mut views = load_recent(capacity);
    views.record(entry);
    save_recent(&views);
    views
}

// ========================
// Config Override
// ========================

pub fn load_config() -> PortalConfig {
    let raw = LocalStorage::raw().get_item(CONFIG_KEY).ok().flatten();
    config_with_override(raw.as_deref())
}

/// Defaults merged with the stored override; a bad override is ignored
pub fn config_with_override(raw: Option<&str>) -> PortalConfig {
    match raw {
        Some(json) => PortalConfig::from_override(json).unwrap_or_else(|e| {
            log::warn!("ignoring invalid {} override: {}", CONFIG_KEY, e);
            PortalConfig::default()
        }),
        None => PortalConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_override_merges() {
        let config = config_with_override(Some(r#"{"recentCapacity":2}"#));
        assert_eq!(config.recent_capacity, 2);
        assert_eq!(config.visible_cards, 3);
    }

    #[test]
    fn test_oversized_override_keeps_recent_buffer_at_three() {
        let config = config_with_override(Some(r#"{"recentCapacity":5,"visibleCards":10}"#));
        let mut views = RecentViews::new(config.recent_capacity);
        for code in ["A", "B", "C", "D", "E"] {
            views.record(RecentSubject {
                code: code.to_string(),
                title: code.to_string(),
                year_level: 1,
            });
        }
        assert_eq!(views.len(), 3);
        assert_eq!(views.entries()[0].code, "E");
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(config_with_override(Some("{oops")), PortalConfig::default());
        assert_eq!(config_with_override(None), PortalConfig::default());
    }

    #[test]
    fn test_recent_list_round_trips_through_json() {
        // Same shape the storage layer reads back from `recentSubjects`
        let stored = r#"[{"code":"CC101","title":"Intro","yearLevel":1},
                         {"code":"CC101","title":"Intro","yearLevel":1},
                         {"code":"IT201","title":"DSA","yearLevel":2}]"#;
        let entries: Vec<RecentSubject> = serde_json::from_str(stored).unwrap();
        let views = RecentViews::from_entries(entries, 3);
        assert_eq!(views.len(), 2);
        assert_eq!(views.entries()[1].code, "IT201");
    }
}
