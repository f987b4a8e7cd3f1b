//! List Filtering
//!
//! Year/search filtering and the bounded "visible window" used by the
//! subject cards, plus the keyword filter behind the admin activity log.

use crate::models::{ActivityLog, Material, MaterialKind, Subject};

/// Year-level dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(u8),
}

impl YearFilter {
    pub const OPTIONS: [YearFilter; 5] = [
        YearFilter::All,
        YearFilter::Year(1),
        YearFilter::Year(2),
        YearFilter::Year(3),
        YearFilter::Year(4),
    ];

    /// Unknown labels fall back to `All`
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "1st Year" => YearFilter::Year(1),
            "2nd Year" => YearFilter::Year(2),
            "3rd Year" => YearFilter::Year(3),
            "4th Year" => YearFilter::Year(4),
            _ => YearFilter::All,
        }
    }

    pub fn label(&self) -> String {
        match self {
            YearFilter::All => "All Years".to_string(),
            YearFilter::Year(n) => crate::format::year_label(*n),
        }
    }

    pub fn accepts(&self, year_level: u8) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(n) => *n == year_level,
        }
    }
}

/// Anything the year/search filter can run over
pub trait Filterable {
    fn year_level(&self) -> u8;
    /// Fields the search term is matched against
    fn search_fields(&self) -> [&str; 2];
}

impl Filterable for Subject {
    fn year_level(&self) -> u8 {
        self.year_level
    }

    fn search_fields(&self) -> [&str; 2] {
        [self.title.as_str(), self.code.as_str()]
    }
}

/// Transient filter state of the subject grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectFilter {
    pub year: YearFilter,
    pub search: String,
    pub show_all: bool,
}

impl SubjectFilter {
    /// Changing the year collapses the grid again
    pub fn set_year(&mut self, year: YearFilter) {
        self.year = year;
        self.show_all = false;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Lower-cased, trimmed term; None when empty
    fn term(&self) -> Option<String> {
        let term = self.search.trim().to_lowercase();
        (!term.is_empty()).then_some(term)
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if !self.year.accepts(item.year_level()) {
            return false;
        }
        match self.term() {
            Some(term) => item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term)),
            None => true,
        }
    }

    /// Matching items in source order
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|item| self.matches(*item)).cloned().collect()
    }

    /// Apply, then cut down to what the grid shows
    pub fn window<T: Filterable + Clone>(&self, items: &[T], limit: usize) -> VisibleWindow<T> {
        VisibleWindow::new(self.apply(items), limit, self.show_all)
    }
}

/// What the card grid renders for one state
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub hidden: usize,
    /// Label of the show-all toggle, if it is rendered at all
    pub toggle: Option<String>,
}

impl<T> VisibleWindow<T> {
    pub fn new(mut matches: Vec<T>, limit: usize, show_all: bool) -> Self {
        let total = matches.len();
        if !show_all {
            matches.truncate(limit);
        }
        let hidden = total - matches.len();
        let toggle = (total > limit).then(|| {
            if show_all {
                "Show Less ▲".to_string()
            } else {
                format!("View More ({} hidden) ▼", hidden)
            }
        });
        Self { items: matches, total, hidden, toggle }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Activity-log quick filter ("all", "created", "professor", ...)
pub fn filter_logs(logs: &[ActivityLog], keyword: &str) -> Vec<ActivityLog> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || keyword == "all" {
        return logs.to_vec();
    }
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .map(|v| v.to_lowercase().contains(&keyword))
            .unwrap_or(false)
    };
    logs.iter()
        .filter(|log| contains(&log.action) || contains(&log.role))
        .cloned()
        .collect()
}

/// Row class derived from the action text
pub fn log_class(log: &ActivityLog) -> &'static str {
    let action = log.action.as_deref().unwrap_or("").to_lowercase();
    if action.contains("created") {
        "log-created"
    } else if action.contains("deleted") {
        "log-deleted"
    } else if action.contains("updated") {
        "log-updated"
    } else {
        ""
    }
}

/// Materials belonging to one subject-page tab
pub fn materials_of_kind(materials: &[Material], kind: MaterialKind) -> Vec<Material> {
    materials.iter().filter(|m| m.kind() == kind).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(code: &str, title: &str, year: u8) -> Subject {
        Subject {
            code: code.to_string(),
            title: title.to_string(),
            year_level: year,
            semester: 1,
            ..Default::default()
        }
    }

    fn catalogue() -> Vec<Subject> {
        vec![
            subject("CC101", "Introduction to Computing", 1),
            subject("CC102", "Computer Programming 1", 1),
            subject("IT201", "Data Structures", 2),
            subject("IT202", "Networking 1", 2),
            subject("IT301", "Web Systems", 3),
            subject("CAP401", "Capstone Project", 4),
        ]
    }

    fn codes(subjects: &[Subject]) -> Vec<&str> {
        subjects.iter().map(|s| s.code.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_code() {
        let filter = SubjectFilter { search: "cc1".into(), ..Default::default() };
        assert_eq!(codes(&filter.apply(&catalogue())), vec!["CC101", "CC102"]);
    }

    #[test]
    fn test_search_matches_title_and_trims() {
        let filter = SubjectFilter { search: "  NETWORK ".into(), ..Default::default() };
        assert_eq!(codes(&filter.apply(&catalogue())), vec!["IT202"]);
    }

    #[test]
    fn test_year_and_search_combine() {
        let mut filter = SubjectFilter::default();
        filter.set_year(YearFilter::Year(2));
        filter.set_search("data");
        assert_eq!(codes(&filter.apply(&catalogue())), vec!["IT201"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = catalogue();
        let filters = [
            SubjectFilter::default(),
            SubjectFilter { year: YearFilter::Year(1), ..Default::default() },
            SubjectFilter { search: "it".into(), ..Default::default() },
            SubjectFilter { year: YearFilter::Year(3), search: "zzz".into(), show_all: false },
        ];
        for filter in filters {
            let once = filter.apply(&all);
            let twice = filter.apply(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_year_change_collapses_grid() {
        let mut filter = SubjectFilter::default();
        filter.toggle_show_all();
        assert!(filter.show_all);
        filter.set_year(YearFilter::from_label("3rd Year"));
        assert!(!filter.show_all);
        assert_eq!(filter.year, YearFilter::Year(3));
    }

    #[test]
    fn test_unknown_label_means_all_years() {
        assert_eq!(YearFilter::from_label("5th Year"), YearFilter::All);
        assert_eq!(YearFilter::All.label(), "All Years");
        assert_eq!(YearFilter::Year(2).label(), "2nd Year");
    }

    #[test]
    fn test_window_collapsed_and_expanded() {
        let mut filter = SubjectFilter::default();
        let window = filter.window(&catalogue(), 3);
        assert_eq!(codes(&window.items), vec!["CC101", "CC102", "IT201"]);
        assert_eq!(window.hidden, 3);
        assert_eq!(window.toggle.as_deref(), Some("View More (3 hidden) ▼"));

        filter.toggle_show_all();
        let window = filter.window(&catalogue(), 3);
        assert_eq!(window.items.len(), 6);
        assert_eq!(window.hidden, 0);
        assert_eq!(window.toggle.as_deref(), Some("Show Less ▲"));
    }

    #[test]
    fn test_window_without_toggle_when_small() {
        let filter = SubjectFilter { year: YearFilter::Year(1), ..Default::default() };
        let window = filter.window(&catalogue(), 3);
        assert_eq!(window.items.len(), 2);
        assert_eq!(window.toggle, None);

        let filter = SubjectFilter { search: "nothing here".into(), ..Default::default() };
        assert!(filter.window(&catalogue(), 3).is_empty());
    }

    fn log(action: &str, role: Option<&str>) -> ActivityLog {
        ActivityLog {
            action: Some(action.to_string()),
            role: role.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_logs_by_action_or_role() {
        let logs = vec![
            log("User Created", Some("Admin")),
            log("Subject Deleted", Some("System")),
            log("User Logged In", Some("professor")),
            log("Course Updated", None),
        ];
        assert_eq!(filter_logs(&logs, "all").len(), 4);
        assert_eq!(filter_logs(&logs, "Created").len(), 1);
        assert_eq!(filter_logs(&logs, "professor").len(), 1);
        assert_eq!(filter_logs(&logs, "updated")[0].action.as_deref(), Some("Course Updated"));
    }

    #[test]
    fn test_log_class() {
        assert_eq!(log_class(&log("User Created", None)), "log-created");
        assert_eq!(log_class(&log("Subject Deleted", None)), "log-deleted");
        assert_eq!(log_class(&log("Profile updated", None)), "log-updated");
        assert_eq!(log_class(&log("User Logged In", None)), "");
    }

    #[test]
    fn test_materials_of_kind() {
        let materials = vec![
            Material { id: 1, kind: Some("video".into()), ..Default::default() },
            Material { id: 2, kind: Some("PDF".into()), ..Default::default() },
            Material { id: 3, kind: Some("Video".into()), ..Default::default() },
        ];
        let videos = materials_of_kind(&materials, MaterialKind::Video);
        assert_eq!(videos.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
