//! Home Page
//!
//! Public landing page with the course carousel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{CourseCarousel, LoadState, StatusMessage};
use crate::context::use_app_context;
use crate::format::dashboard_href;
use crate::models::Course;
use crate::pages::{logout, LOGIN_ROUTE};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let load = RwSignal::new(LoadState::Loading);

    let api = ctx.api();
    spawn_local(async move {
        match api.list_courses().await {
            Ok(loaded) => {
                log::info!("loaded {} courses", loaded.len());
                set_courses.set(loaded);
                load.set(LoadState::Ready);
            }
            Err(e) => {
                log::error!("failed to load courses: {}", e);
                load.set(LoadState::Failed(
                    "Unable to load courses. Backend error or connection refused.".to_string(),
                ));
            }
        }
    });

    // Opening a course needs a session
    let on_open = move |course_id: String| {
        if ctx.session.with_untracked(Option::is_some) {
            navigate.with_value(|nav| nav(&dashboard_href(&course_id), Default::default()));
        } else {
            ctx.notify("Please login to view this course.");
            navigate.with_value(|nav| nav(LOGIN_ROUTE, Default::default()));
        }
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <div class="brand">"Learning Portal"</div>
                {move || if ctx.session.with(Option::is_some) {
                    view! {
                        <button
                            type="button"
                            class="btn-link"
                            on:click=move |_| navigate.with_value(|nav| logout(ctx, nav))
                        >
                            "Logout"
                        </button>
                    }.into_any()
                } else {
                    view! { <a class="btn-link" href=LOGIN_ROUTE>"Login"</a> }.into_any()
                }}
            </header>
            <StatusMessage state=load />
            <Show when=move || load.with(LoadState::is_ready)>
                <CourseCarousel courses=courses on_open=on_open />
            </Show>
        </div>
    }
}
