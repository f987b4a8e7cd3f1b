//! Campus Portal App
//!
//! Root component: provides the app context and declares the routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NoticeBanner;
use crate::context::AppContext;
use crate::pages::{AdminPage, DashboardPage, HomePage, LoginPage, ProfessorPage, RoadmapPage, SubjectPage};
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let config = storage::load_config();
    log::info!("portal starting against {}", config.api_base);

    // Provide context to all children
    provide_context(AppContext::new(config, storage::load_user()));

    view! {
        <Router>
            <NoticeBanner />
            <Routes fallback=|| view! { <div class="placeholder">"Page not found."</div> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/roadmap") view=RoadmapPage />
                <Route path=path!("/subject") view=SubjectPage />
                <Route path=path!("/professor") view=ProfessorPage />
                <Route path=path!("/admin") view=AdminPage />
            </Routes>
        </Router>
    }
}
