//! Student Dashboard
//!
//! Subject grid of one course with year/search filtering and the
//! recently viewed sidebar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::{FilterBar, LoadState, ProfileBadge, ProfileModal, RecentList, StatusMessage, SubjectCards};
use crate::context::use_app_context;
use crate::format::roadmap_href;
use crate::models::{RecentSubject, Role, Subject};
use crate::pages::{enforce_role, logout};
use crate::state::{RequestSeq, SubjectFilter};
use crate::storage;

pub const DEFAULT_COURSE: &str = "BSIT";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    if !enforce_role(ctx, Role::Student) {
        return ().into_any();
    }

    let navigate = StoredValue::new(use_navigate());
    let query = use_query_map();
    let config = ctx.config();
    let capacity = config.recent_capacity;
    let limit = config.visible_cards;

    let course_id = Memo::new(move |_| {
        query
            .get()
            .get("course")
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COURSE.to_string())
    });

    let title = RwSignal::new(String::from("Loading..."));
    let title_failed = RwSignal::new(false);
    let subjects = RwSignal::new(Vec::<Subject>::new());
    let load = RwSignal::new(LoadState::Loading);
    let requests = StoredValue::new(RequestSeq::default());
    let filter = RwSignal::new(SubjectFilter::default());
    let recent = RwSignal::new(storage::load_recent(capacity));
    let profile_open = RwSignal::new(false);

    // Course info first, then its subjects
    Effect::new(move |_| {
        let id = course_id.get();
        let api = ctx.api();
        let rid = requests.try_update_value(|seq| seq.issue()).unwrap_or_default();
        let current = move || requests.try_with_value(|seq| seq.is_current(rid)).unwrap_or(false);
        log::info!("loading course {}", id);
        load.set(LoadState::Loading);
        spawn_local(async move {
            let course = api.get_course(&id).await;
            if !current() {
                return;
            }
            match course {
                Ok(course) => {
                    title.set(course.title);
                    title_failed.set(false);
                    let result = api.course_subjects(&id).await;
                    if !current() {
                        return;
                    }
                    match result {
                        Ok(list) => {
                            log::info!("loaded {} subjects for {}", list.len(), id);
                            subjects.set(list);
                            load.set(LoadState::Ready);
                        }
                        Err(e) => {
                            log::error!("failed to load subjects of {}: {}", id, e);
                            subjects.set(Vec::new());
                            load.set(LoadState::Failed(
                                "Unable to load subjects. Backend error or connection refused.".to_string(),
                            ));
                        }
                    }
                }
                Err(e) => {
                    log::error!("failed to load course {}: {}", id, e);
                    title.set("Error: Course Not Found".to_string());
                    title_failed.set(true);
                    subjects.set(Vec::new());
                    load.set(LoadState::Failed(e.user_message()));
                }
            }
        });
    });

    let on_view = move |subject: Subject| {
        let views = storage::remember_subject(RecentSubject::from(&subject), capacity);
        recent.set(views);
        let href = roadmap_href(&subject.code, &subject.title);
        navigate.with_value(|nav| nav(&href, Default::default()));
    };

    view! {
        <div class="dashboard-layout">
            <aside class="sidebar">
                <ProfileBadge open=profile_open />
                <h3 class="sidebar-heading">"Recently Viewed"</h3>
                <RecentList recent=recent />
                <button
                    type="button"
                    class="logout-btn"
                    on:click=move |_| navigate.with_value(|nav| logout(ctx, nav))
                >
                    <i class="fa-solid fa-right-from-bracket"></i>" Logout"
                </button>
            </aside>
            <main class="dashboard-main">
                <h1
                    id="dashboard-title"
                    class=move || if title_failed.get() { "dashboard-title error-text" } else { "dashboard-title" }
                >
                    {move || title.get()}
                </h1>
                <FilterBar filter=filter />
                <StatusMessage state=load />
                <Show when=move || load.with(LoadState::is_ready)>
                    <SubjectCards subjects=subjects filter=filter limit=limit on_view=on_view />
                </Show>
            </main>
            <ProfileModal open=profile_open />
        </div>
    }
    .into_any()
}
