//! Routed Pages
//!
//! One component per route, plus the role guard they share.

mod admin;
mod dashboard;
mod home;
mod login;
mod professor;
mod roadmap;
mod subject;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use professor::ProfessorPage;
pub use roadmap::RoadmapPage;
pub use subject::SubjectPage;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::AppContext;
use crate::models::Role;

pub const LOGIN_ROUTE: &str = "/login";

/// Where a visitor with `role` is sent instead of a page meant for `page`.
/// `None` means the page may render.
pub fn redirect_for(role: Option<Role>, page: Role) -> Option<&'static str> {
    match (role, page) {
        (None, _) => Some(LOGIN_ROUTE),
        (Some(role), page) if role == page => None,
        // Students are bounced to the other consoles' home, never the reverse
        (Some(Role::Professor | Role::Admin), Role::Student) => role.map(|r| r.home_route()),
        _ => Some(LOGIN_ROUTE),
    }
}

/// Banner shown when a guard turns the visitor away
pub fn denial_message(role: Option<Role>, page: Role) -> Option<&'static str> {
    match (role, page) {
        (None, Role::Professor) => Some("Session expired. Please login."),
        (Some(r), Role::Professor) if r != Role::Professor => Some("Access Denied: You are not a Professor."),
        (Some(r), Role::Admin) if r != Role::Admin => Some("Access Denied: Admins only."),
        _ => None,
    }
}

/// Check the session once on mount; returns false (after redirecting)
/// when the page must not render.
pub fn enforce_role(ctx: AppContext, page: Role) -> bool {
    let role = ctx.session.with_untracked(|s| s.as_ref().map(|u| u.role()));
    let Some(target) = redirect_for(role, page) else {
        return true;
    };
    if let Some(message) = denial_message(role, page) {
        ctx.notify(message);
    }
    log::warn!("{:?} session redirected from {:?} page to {}", role, page, target);
    let navigate = use_navigate();
    Effect::new(move |_| navigate(target, NavigateOptions { replace: true, ..Default::default() }));
    false
}

/// Logout handler shared by every role; `navigate` comes from the
/// calling component's `use_navigate()`
pub fn logout(ctx: AppContext, navigate: &impl Fn(&str, NavigateOptions)) {
    ctx.logout();
    navigate(LOGIN_ROUTE, Default::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_session_goes_to_login() {
        assert_eq!(redirect_for(None, Role::Student), Some("/login"));
        assert_eq!(redirect_for(None, Role::Admin), Some("/login"));
    }

    #[test]
    fn test_staff_leave_student_pages() {
        assert_eq!(redirect_for(Some(Role::Professor), Role::Student), Some("/professor"));
        assert_eq!(redirect_for(Some(Role::Admin), Role::Student), Some("/admin"));
        assert_eq!(redirect_for(Some(Role::Student), Role::Student), None);
    }

    #[test]
    fn test_consoles_reject_other_roles() {
        assert_eq!(redirect_for(Some(Role::Student), Role::Professor), Some("/login"));
        assert_eq!(redirect_for(Some(Role::Professor), Role::Professor), None);
        assert_eq!(redirect_for(Some(Role::Unknown), Role::Student), Some("/login"));
        assert_eq!(
            denial_message(Some(Role::Student), Role::Professor),
            Some("Access Denied: You are not a Professor.")
        );
        assert_eq!(denial_message(Some(Role::Admin), Role::Admin), None);
    }
}
