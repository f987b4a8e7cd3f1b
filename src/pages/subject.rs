//! Subject Page
//!
//! Materials of one subject/module, one tab per material type.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::{LoadState, StatusMessage, Tab, TabBar};
use crate::context::use_app_context;
use crate::format::{material_url, roadmap_href};
use crate::models::{Material, MaterialKind, Role};
use crate::pages::enforce_role;
use crate::state::{materials_of_kind, RequestSeq};

/// "CODE : module", falling back to the subject title. A literal "null"
/// module title counts as missing.
pub fn subject_heading(code: &str, title: &str, module_title: Option<&str>) -> String {
    match module_title.map(str::trim).filter(|m| !m.is_empty() && *m != "null") {
        Some(module) => format!("{} : {}", code, module),
        None => format!("{} : {}", code, title),
    }
}

#[component]
pub fn SubjectPage() -> impl IntoView {
    let ctx = use_app_context();
    if !enforce_role(ctx, Role::Student) {
        return ().into_any();
    }

    let config = StoredValue::new(ctx.config());
    let query = use_query_map();
    let param = move |key: &str| query.with(|q| q.get(key)).unwrap_or_default();
    let code = Memo::new(move |_| param("id"));
    let title = Memo::new(move |_| param("title"));
    let module_id = Memo::new(move |_| param("moduleId"));
    let module_title = Memo::new(move |_| param("moduleTitle"));

    let active = RwSignal::new(MaterialKind::Video.as_str().to_string());
    let materials = RwSignal::new(Vec::<Material>::new());
    let state = RwSignal::new(LoadState::Loading);
    let requests = StoredValue::new(RequestSeq::default());

    // Every tab switch refetches, then filters by type
    Effect::new(move |_| {
        let kind = MaterialKind::parse(&active.get());
        let code = code.get();
        let module_id = module_id.get();
        let rid = requests.try_update_value(|seq| seq.issue()).unwrap_or_default();
        if code.is_empty() {
            state.set(LoadState::Failed("No subject selected.".to_string()));
            return;
        }
        let api = ctx.api();
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api.student_materials(&code, Some(module_id.as_str())).await;
            if !requests.try_with_value(|seq| seq.is_current(rid)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(list) => {
                    materials.set(materials_of_kind(&list, kind));
                    state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load materials of {}: {}", code, e);
                    state.set(LoadState::Failed(
                        "Unable to load content. Backend error or connection refused.".to_string(),
                    ));
                }
            }
        });
    });

    let tabs = Signal::derive(|| {
        MaterialKind::TABS
            .iter()
            .map(|kind| Tab::new(kind.as_str(), kind.as_str().to_uppercase()).with_accent(kind.accent()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="subject-page">
            <header class="subject-header">
                <a class="back-link" href=move || roadmap_href(&code.get(), &title.get())>
                    <i class="fa-solid fa-arrow-left"></i>" Roadmap"
                </a>
                <h1 id="subject-title">
                    {move || {
                        let module = module_title.get();
                        subject_heading(&code.get(), &title.get(), Some(module.as_str()))
                    }}
                </h1>
            </header>
            <TabBar tabs=tabs active=active on_select=move |value: String| active.set(value) />
            <StatusMessage state=state />
            <div id="content-display">
                {move || {
                    if state.get() != LoadState::Ready {
                        return ().into_any();
                    }
                    let list = materials.get();
                    if list.is_empty() {
                        return view! {
                            <div class="placeholder">
                                {format!("No {} content found for this section.", active.get().to_uppercase())}
                            </div>
                        }.into_any();
                    }
                    view! {
                        <div class="materials-grid">
                            {list.into_iter().map(|material| {
                                let url = config.with_value(|c| material_url(c, &material));
                                material_card(material, url)
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
    .into_any()
}

fn material_card(material: Material, url: String) -> impl IntoView {
    let kind = material.kind();
    let is_quiz = kind == MaterialKind::Quiz;
    let card_style = if is_quiz {
        format!("border-left: 5px solid {};", kind.accent())
    } else {
        String::new()
    };
    let type_text = if is_quiz {
        "QUIZ / EXAM".to_string()
    } else {
        format!("{} FILE", material.type_label())
    };

    view! {
        <div class="material-card" style=card_style>
            <div class="file-icon" style=format!("color: {}; background: {};", kind.accent(), kind.icon_background())>
                <i class=format!("fa-solid {}", kind.icon_class())></i>
            </div>
            <div class="file-info">
                <div class="file-title" title=material.title.clone()>{material.title.clone()}</div>
                <div class="file-type">{type_text}</div>
            </div>
            {if is_quiz {
                view! {
                    <a href=url target="_blank" class="open-btn quiz-btn">
                        <i class="fa-solid fa-pen-to-square"></i>" Take Quiz"
                    </a>
                }.into_any()
            } else {
                view! {
                    <a href=url target="_blank" class="open-btn">
                        "Open "<i class="fa-solid fa-arrow-up-right-from-square"></i>
                    </a>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_prefers_module_title() {
        assert_eq!(subject_heading("CC102", "Programming 1", Some("Introduction")), "CC102 : Introduction");
        assert_eq!(subject_heading("CC102", "Programming 1", Some("null")), "CC102 : Programming 1");
        assert_eq!(subject_heading("CC102", "Programming 1", None), "CC102 : Programming 1");
    }
}
