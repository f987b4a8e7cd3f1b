//! Admin Console Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ActivityLog, Course, Subject, User};

/// Sidebar views of the admin console
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminView {
    #[default]
    Users,
    Courses,
    Subjects,
    Logs,
}

impl AdminView {
    pub const ALL: [AdminView; 4] = [
        AdminView::Users,
        AdminView::Courses,
        AdminView::Subjects,
        AdminView::Logs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminView::Users => "Users",
            AdminView::Courses => "Courses",
            AdminView::Subjects => "Subjects",
            AdminView::Logs => "Activity Logs",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminView::Users => "fa-users",
            AdminView::Courses => "fa-graduation-cap",
            AdminView::Subjects => "fa-book",
            AdminView::Logs => "fa-clock-rotate-left",
        }
    }
}

/// Admin console state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub view: AdminView,
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    /// Subjects of `selected_course`
    pub subjects: Vec<Subject>,
    pub selected_course: Option<String>,
    pub logs: Vec<ActivityLog>,
    /// Quick filter keyword of the log view ("all" by default)
    pub log_filter: String,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            log_filter: "all".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the course list; the first course becomes the subject tab
/// unless the current one still exists
pub fn store_set_courses(store: &AdminStore, courses: Vec<Course>) {
    let keep = store
        .selected_course()
        .get_untracked()
        .filter(|id| courses.iter().any(|c| &c.id == id));
    let selected = keep.or_else(|| courses.first().map(|c| c.id.clone()));
    *store.courses().write() = courses;
    *store.selected_course().write() = selected;
}

pub fn store_add_user(store: &AdminStore, user: User) {
    store.users().write().push(user);
}

pub fn store_remove_user(store: &AdminStore, user_id: i64) {
    store.users().write().retain(|user| user.id != user_id);
}

pub fn store_remove_course(store: &AdminStore, course_id: &str) {
    store.courses().write().retain(|course| course.id != course_id);
}

pub fn store_remove_subject(store: &AdminStore, code: &str) {
    store.subjects().write().retain(|subject| subject.code != code);
}
