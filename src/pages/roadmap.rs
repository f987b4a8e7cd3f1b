//! Roadmap Page
//!
//! Module timeline of a subject; each module opens its materials.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::{LoadState, StatusMessage};
use crate::context::use_app_context;
use crate::format::{dashboard_href, subject_href};
use crate::models::{Module, Role};
use crate::pages::enforce_role;

const ACTIVE_MARKER: &str = "#ef4444";
const LOCKED_MARKER: &str = "#9ca3af";

/// Heading for the page; `None` when no subject was passed
pub fn roadmap_title(code: Option<&str>, title: Option<&str>) -> Option<String> {
    let code = code.map(str::trim).filter(|c| !c.is_empty())?;
    Some(format!("{}: {}", code, title.unwrap_or("").trim()))
}

#[component]
pub fn RoadmapPage() -> impl IntoView {
    let ctx = use_app_context();
    if !enforce_role(ctx, Role::Student) {
        return ().into_any();
    }

    let query = use_query_map();
    let code = Memo::new(move |_| query.get().get("id").filter(|c| !c.trim().is_empty()));
    let title = Memo::new(move |_| query.get().get("title").unwrap_or_default());

    let modules = RwSignal::new(Vec::<Module>::new());
    let state = RwSignal::new(LoadState::Loading);

    Effect::new(move |_| {
        let Some(code) = code.get() else {
            state.set(LoadState::Ready);
            return;
        };
        let api = ctx.api();
        state.set(LoadState::Loading);
        spawn_local(async move {
            match api.subject_modules(&code).await {
                Ok(list) => {
                    log::info!("loaded {} modules for {}", list.len(), code);
                    modules.set(list);
                    state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load modules of {}: {}", code, e);
                    state.set(LoadState::Failed("Unable to load modules.".to_string()));
                }
            }
        });
    });

    let back_href = move || {
        ctx.session
            .with(|s| s.as_ref().and_then(|u| u.course_id.clone()))
            .map(|c| dashboard_href(&c))
            .unwrap_or_else(|| "/dashboard".to_string())
    };

    view! {
        <div class="roadmap-page">
            <header class="roadmap-header">
                <a class="back-link" href=back_href>
                    <i class="fa-solid fa-arrow-left"></i>" Back"
                </a>
                <h1 id="roadmap-title">
                    {move || {
                        roadmap_title(code.get().as_deref(), Some(title.get().as_str()))
                            .unwrap_or_else(|| "Error: No Subject Selected".to_string())
                    }}
                </h1>
            </header>
            <StatusMessage state=state />
            <div class="timeline">
                {move || {
                    if state.get() != LoadState::Ready || code.get().is_none() {
                        return ().into_any();
                    }
                    let list = modules.get();
                    if list.is_empty() {
                        return view! {
                            <div class="placeholder">"No modules created for this subject yet."</div>
                        }.into_any();
                    }
                    let subject_code = code.get().unwrap_or_default();
                    let subject_title = title.get();
                    list.into_iter().enumerate().map(|(index, module)| {
                        let side = if index % 2 == 0 { "timeline-item left" } else { "timeline-item right" };
                        let marker = if module.is_active() { ACTIVE_MARKER } else { LOCKED_MARKER };
                        let href = subject_href(&subject_code, &subject_title, module.id, &module.title);
                        view! {
                            <a class=side href=href>
                                <div class="timeline-marker" style=format!("background: {}", marker)></div>
                                <div class="timeline-content">
                                    <span class="module-number">{format!("Module {}", module.module_number)}</span>
                                    <h3>{module.title.clone()}</h3>
                                    <p>{module.description.clone().unwrap_or_default()}</p>
                                    <span class="module-status">{module.status_label()}</span>
                                </div>
                            </a>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_title() {
        assert_eq!(roadmap_title(Some("CC101"), Some("Intro")), Some("CC101: Intro".to_string()));
        assert_eq!(roadmap_title(Some("  "), Some("Intro")), None);
        assert_eq!(roadmap_title(None, None), None);
    }
}
