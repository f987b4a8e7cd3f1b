//! Portal Configuration
//!
//! Defaults, optionally overridden at build time (`PORTAL_API_BASE`) and at
//! runtime by a JSON object stored under `portalConfig`.

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:8080";
/// Upper bound of both the card window and the recently-viewed list
pub const MAX_LIST_LEN: usize = 3;
const DEFAULT_PLACEHOLDER: &str = "https://via.placeholder.com/280x350?text=No+Image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortalConfig {
    /// Backend origin, no trailing slash
    pub api_base: String,
    /// Carousel auto-advance period
    pub carousel_interval_ms: u32,
    /// Cards shown before "View More"
    pub visible_cards: usize,
    /// Length of the recently-viewed list
    pub recent_capacity: usize,
    pub placeholder_image: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("PORTAL_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            carousel_interval_ms: 30_000,
            visible_cards: MAX_LIST_LEN,
            recent_capacity: MAX_LIST_LEN,
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
        }
        .normalized()
    }
}

impl PortalConfig {
    /// Parse a stored override; fields it omits keep their defaults
    pub fn from_override(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<PortalConfig>(json).map(PortalConfig::normalized)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        self.api_base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        self.visible_cards = self.visible_cards.clamp(1, MAX_LIST_LEN);
        self.recent_capacity = self.recent_capacity.clamp(1, MAX_LIST_LEN);
        self.carousel_interval_ms = self.carousel_interval_ms.max(1_000);
        self
    }

    /// `path` must start with `/`, e.g. `/api/admin/courses`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Location of a file stored by the backend under `uploads/`
    pub fn upload_url(&self, file: &str) -> String {
        format!("{}/uploads/{}", self.api_base, file.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.carousel_interval_ms, 30_000);
        assert_eq!(config.visible_cards, 3);
        assert_eq!(config.recent_capacity, 3);
        assert!(!config.api_base.ends_with('/'));
    }

    #[test]
    fn test_override_keeps_missing_fields() {
        let config = PortalConfig::from_override(r#"{"apiBase":"https://portal.example.edu/"}"#).unwrap();
        assert_eq!(config.api_base, "https://portal.example.edu");
        assert_eq!(config.visible_cards, 3);
        assert_eq!(
            config.api_url("/api/admin/courses"),
            "https://portal.example.edu/api/admin/courses"
        );
    }

    #[test]
    fn test_override_clamps_nonsense() {
        let config = PortalConfig::from_override(r#"{"visibleCards":0,"carouselIntervalMs":5}"#).unwrap();
        assert_eq!(config.visible_cards, 1);
        assert_eq!(config.carousel_interval_ms, 1_000);
    }

    #[test]
    fn test_override_cannot_raise_list_caps() {
        let config = PortalConfig::from_override(r#"{"recentCapacity":5,"visibleCards":10}"#).unwrap();
        assert_eq!(config.recent_capacity, 3);
        assert_eq!(config.visible_cards, 3);
    }

    #[test]
    fn test_upload_url() {
        let config = PortalConfig::from_override(r#"{"apiBase":"http://localhost:8080"}"#).unwrap();
        assert_eq!(config.upload_url("/pic.png"), "http://localhost:8080/uploads/pic.png");
    }

    #[test]
    fn test_bad_override_is_error() {
        assert!(PortalConfig::from_override("not json").is_err());
    }
}
