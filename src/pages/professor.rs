//! Professor Console
//!
//! Stats, quiz and lesson tables, the lesson upload form (with inline
//! module creation) and the module manager.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::{LessonUpload, NewModule, NewQuiz};
use crate::components::{DeleteConfirmButton, LoadState, ProfileBadge, ProfileModal, StatusMessage};
use crate::context::use_app_context;
use crate::error::{ApiError, ApiResult};
use crate::models::{Material, Module, ProfessorStats, Quiz, Role, Subject};
use crate::pages::{enforce_role, logout};
use crate::state::RequestSeq;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Overview,
    Quizzes,
    Lessons,
    Upload,
}

impl Section {
    const ALL: [Section; 4] = [Section::Overview, Section::Quizzes, Section::Lessons, Section::Upload];

    fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Dashboard",
            Section::Quizzes => "Quizzes",
            Section::Lessons => "Lessons",
            Section::Upload => "Upload Lesson",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "fa-chart-line",
            Section::Quizzes => "fa-clipboard-question",
            Section::Lessons => "fa-book-open",
            Section::Upload => "fa-cloud-arrow-up",
        }
    }
}

/// Module number typed into the "new module" fields
pub fn parse_module_number(value: &str) -> ApiResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::Invalid("Module number must be a positive number.".to_string()))
}

/// Where an uploaded lesson goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModuleTarget {
    /// Create a module with this number first
    Create(i32),
    Existing(Option<i64>),
}

/// Validate the upload form before anything is sent, so a bad submit
/// never leaves a freshly created module behind.
fn check_upload<F>(creating: bool, number: &str, existing: Option<i64>, file: Option<F>) -> ApiResult<(ModuleTarget, F)> {
    let file = file.ok_or_else(|| ApiError::Invalid("Please choose a file to upload.".to_string()))?;
    let target = if creating {
        ModuleTarget::Create(parse_module_number(number)?)
    } else {
        ModuleTarget::Existing(existing)
    };
    Ok((target, file))
}

/// Value of an optional id `<select>`; blank means none
fn parse_optional_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn module_option_label(module: &Module) -> String {
    format!("Module {}: {}", module.module_number, module.title)
}

/// Signals shared by the console sections
#[derive(Clone, Copy)]
struct ConsoleState {
    course_id: Memo<Option<String>>,
    subjects: RwSignal<Vec<Subject>>,
    /// Subject picked in the upload/quiz forms; drives `modules`
    selected_subject: RwSignal<String>,
    modules: RwSignal<Vec<Module>>,
    /// Bump to refetch `modules`
    modules_version: RwSignal<u32>,
    /// Bump to refetch the lesson table
    lessons_version: RwSignal<u32>,
}

#[component]
pub fn ProfessorPage() -> impl IntoView {
    let ctx = use_app_context();
    if !enforce_role(ctx, Role::Professor) {
        return ().into_any();
    }

    let navigate = StoredValue::new(use_navigate());
    let section = RwSignal::new(Section::default());
    let profile_open = RwSignal::new(false);

    let state = ConsoleState {
        course_id: Memo::new(move |_| {
            ctx.session
                .with(|s| s.as_ref().and_then(|u| u.course_id.clone()))
                .filter(|c| !c.is_empty())
        }),
        subjects: RwSignal::new(Vec::new()),
        selected_subject: RwSignal::new(String::new()),
        modules: RwSignal::new(Vec::new()),
        modules_version: RwSignal::new(0),
        lessons_version: RwSignal::new(0),
    };

    // Subject options for every form
    Effect::new(move |_| {
        let Some(course_id) = state.course_id.get() else {
            state.subjects.set(Vec::new());
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.professor_subjects(&course_id).await {
                Ok(list) => state.subjects.set(list),
                Err(e) => log::error!("failed to load subjects of {}: {}", course_id, e),
            }
        });
    });

    // Modules of the selected subject
    let module_requests = StoredValue::new(RequestSeq::default());
    Effect::new(move |_| {
        let _ = state.modules_version.get();
        let code = state.selected_subject.get();
        let rid = module_requests.try_update_value(|seq| seq.issue()).unwrap_or_default();
        if code.is_empty() {
            state.modules.set(Vec::new());
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = api.subject_modules(&code).await;
            if !module_requests.try_with_value(|seq| seq.is_current(rid)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(list) => state.modules.set(list),
                Err(e) => log::error!("failed to load modules of {}: {}", code, e),
            }
        });
    });

    view! {
        <div class="professor-layout">
            <aside class="sidebar">
                <ProfileBadge name_prefix="Prof. " open=profile_open />
                <nav class="sidebar-nav">
                    {Section::ALL.iter().map(|item| {
                        let item = *item;
                        view! {
                            <button
                                type="button"
                                class=move || if section.get() == item { "nav-item active" } else { "nav-item" }
                                on:click=move |_| section.set(item)
                            >
                                <i class=format!("fa-solid {}", item.icon())></i>
                                {format!(" {}", item.label())}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <button
                    type="button"
                    class="logout-btn"
                    on:click=move |_| {
                        let confirmed = window()
                            .confirm_with_message("Are you sure you want to logout?")
                            .unwrap_or(false);
                        if confirmed {
                            navigate.with_value(|nav| logout(ctx, nav));
                        }
                    }
                >
                    <i class="fa-solid fa-right-from-bracket"></i>" Logout"
                </button>
            </aside>
            <main class="console-main">
                <div class="course-select">
                    <label>"Course"</label>
                    <select disabled=true>
                        {move || match state.course_id.get() {
                            Some(id) => view! { <option value=id.clone()>{id.clone()}</option> }.into_any(),
                            None => view! { <option value="">"No Course Assigned"</option> }.into_any(),
                        }}
                    </select>
                </div>
                {move || match section.get() {
                    Section::Overview => view! { <StatsPanel state=state /> }.into_any(),
                    Section::Quizzes => view! { <QuizSection state=state /> }.into_any(),
                    Section::Lessons => view! { <LessonSection state=state /> }.into_any(),
                    Section::Upload => view! {
                        <UploadSection state=state />
                        <ModuleManager state=state />
                    }.into_any(),
                }}
            </main>
            <ProfileModal open=profile_open />
        </div>
    }
    .into_any()
}

// ========================
// Sections
// ========================

#[component]
fn StatsPanel(state: ConsoleState) -> impl IntoView {
    let ctx = use_app_context();
    let stats = RwSignal::new(ProfessorStats::default());

    Effect::new(move |_| {
        let course_id = state.course_id.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.professor_stats(course_id.as_deref()).await {
                Ok(loaded) => stats.set(loaded),
                Err(e) => log::error!("failed to load stats: {}", e),
            }
        });
    });

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-value" id="totalStudents">{move || stats.get().students}</div>
                <div class="stat-label">"Students"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value" id="activeSubjects">{move || stats.get().subjects}</div>
                <div class="stat-label">"Active Subjects"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value" id="totalLessons">{move || stats.get().lessons}</div>
                <div class="stat-label">"Lessons"</div>
            </div>
        </div>
    }
}

#[component]
fn QuizSection(state: ConsoleState) -> impl IntoView {
    let ctx = use_app_context();
    let quizzes = RwSignal::new(Vec::<Quiz>::new());
    let load_state = RwSignal::new(LoadState::Loading);
    let reload = RwSignal::new(0u32);

    let module_id = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let link = RwSignal::new(String::new());

    Effect::new(move |_| {
        let _ = reload.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_quizzes().await {
                Ok(list) => {
                    quizzes.set(list);
                    load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load quizzes: {}", e);
                    load_state.set(LoadState::Failed("Unable to load quizzes.".to_string()));
                }
            }
        });
    });

    let on_delete = move |id: i64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_quiz(id).await {
                Ok(()) => {
                    ctx.notify("Quiz Deleted");
                    reload.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to delete quiz {}: {}", id, e);
                    ctx.notify("Error deleting quiz");
                }
            }
        });
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let quiz = NewQuiz {
            subject_code: state.selected_subject.get(),
            module_id: parse_optional_id(&module_id.get()),
            title: title.get().trim().to_string(),
            link: link.get().trim().to_string(),
        };
        if quiz.subject_code.is_empty() || quiz.title.is_empty() || quiz.link.is_empty() {
            ctx.notify("Please fill in subject, title and link.");
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.create_quiz(&quiz).await {
                Ok(()) => {
                    log::info!("quiz '{}' created for {}", quiz.title, quiz.subject_code);
                    ctx.notify("Quiz Created!");
                    title.set(String::new());
                    link.set(String::new());
                    reload.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to create quiz: {}", e);
                    ctx.notify("Error creating quiz");
                }
            }
        });
    };

    view! {
        <section class="console-section">
            <h2>"Quizzes"</h2>
            <form class="console-form" on:submit=on_create>
                <SubjectSelect state=state />
                <ModuleSelect state=state value=module_id disabled=Signal::derive(|| false) />
                <input
                    type="text"
                    placeholder="Quiz title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Quiz link (e.g. Google Form)"
                    prop:value=move || link.get()
                    on:input=move |ev| link.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Create Quiz"</button>
            </form>
            <StatusMessage state=load_state />
            <table class="data-table" id="quizTable">
                <thead>
                    <tr><th>"Title"</th><th>"Subject"</th><th>"Date"</th><th>"Actions"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let list = quizzes.get();
                        if list.is_empty() {
                            return view! {
                                <tr><td colspan="4" class="text-center">"No quizzes found."</td></tr>
                            }.into_any();
                        }
                        list.into_iter().map(|quiz| {
                            let id = quiz.id;
                            view! {
                                <tr>
                                    <td>{quiz.title.clone()}</td>
                                    <td>{quiz.subject_code.clone().unwrap_or_default()}</td>
                                    <td>{quiz.date_label()}</td>
                                    <td class="action-icons">
                                        <DeleteConfirmButton button_class="icon-btn danger" on_confirm=move |_| on_delete(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn LessonSection(state: ConsoleState) -> impl IntoView {
    let ctx = use_app_context();
    let lessons = RwSignal::new(Vec::<Material>::new());
    let load_state = RwSignal::new(LoadState::Loading);

    Effect::new(move |_| {
        let _ = state.lessons_version.get();
        let course_id = state.course_id.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_lessons(course_id.as_deref()).await {
                Ok(list) => {
                    lessons.set(list);
                    load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load lessons: {}", e);
                    load_state.set(LoadState::Failed("Unable to load lessons.".to_string()));
                }
            }
        });
    });

    let on_delete = move |id: i64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_lesson(id).await {
                Ok(()) => {
                    ctx.notify("Lesson Deleted");
                    state.lessons_version.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to delete lesson {}: {}", id, e);
                    ctx.notify("Error deleting lesson");
                }
            }
        });
    };

    view! {
        <section class="console-section">
            <h2>"Lessons"</h2>
            <StatusMessage state=load_state />
            <table class="data-table" id="lessonTable">
                <thead>
                    <tr><th>"Title"</th><th>"Subject"</th><th>"Type"</th><th>"Module"</th><th>"Actions"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let list = lessons.get();
                        if list.is_empty() {
                            return view! {
                                <tr><td colspan="5" class="text-center">"No lessons found."</td></tr>
                            }.into_any();
                        }
                        list.into_iter().map(|lesson| {
                            let id = lesson.id;
                            view! {
                                <tr>
                                    <td>{lesson.title.clone()}</td>
                                    <td>{lesson.subject_code.clone().unwrap_or_default()}</td>
                                    <td>{lesson.type_label()}</td>
                                    <td>{lesson.module_label()}</td>
                                    <td class="action-icons">
                                        <DeleteConfirmButton button_class="icon-btn danger" on_confirm=move |_| on_delete(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn UploadSection(state: ConsoleState) -> impl IntoView {
    let ctx = use_app_context();
    let module_id = RwSignal::new(String::new());
    let new_module = RwSignal::new(false);
    let new_number = RwSignal::new(String::new());
    let new_title = RwSignal::new(String::new());
    let lesson_title = RwSignal::new(String::new());
    let file = RwSignal::new_local(None::<web_sys::File>);
    let uploading = RwSignal::new(false);

    let on_pick = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        file.set(picked);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let subject_code = state.selected_subject.get();
        if subject_code.is_empty() {
            ctx.notify("Please select a subject first.");
            return;
        }
        let creating = new_module.get();
        let number = new_number.get();
        let module_title = new_title.get();
        let existing = parse_optional_id(&module_id.get());
        let title = lesson_title.get().trim().to_string();
        let (target, picked) = match check_upload(creating, &number, existing, file.get_untracked()) {
            Ok(checked) => checked,
            Err(e) => {
                ctx.notify(format!("Upload failed: {}", e.user_message()));
                return;
            }
        };
        let api = ctx.api();
        uploading.set(true);

        spawn_local(async move {
            let result: ApiResult<()> = async {
                let module_id = match target {
                    ModuleTarget::Create(number) => {
                        let module = NewModule::from_upload(&subject_code, number, &module_title);
                        let created = api.create_module(&module).await?;
                        log::info!("module {} created for {}", created.id, subject_code);
                        state.modules_version.update(|v| *v += 1);
                        Some(created.id)
                    }
                    ModuleTarget::Existing(id) => id,
                };
                let lesson = LessonUpload { title, subject_code, module_id };
                api.upload_lesson(&lesson, &picked).await
            }
            .await;

            uploading.set(false);
            match result {
                Ok(()) => {
                    ctx.notify("Lesson Uploaded!");
                    lesson_title.set(String::new());
                    new_number.set(String::new());
                    new_title.set(String::new());
                    new_module.set(false);
                    file.set(None);
                    state.modules_version.update(|v| *v += 1);
                    state.lessons_version.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("lesson upload failed: {}", e);
                    ctx.notify(format!("Upload failed: {}", e.user_message()));
                }
            }
        });
    };

    view! {
        <section class="console-section">
            <h2>"Upload Lesson"</h2>
            <form class="console-form" id="uploadForm" on:submit=on_submit>
                <SubjectSelect state=state />
                <div class="module-row">
                    <ModuleSelect state=state value=module_id disabled=new_module />
                    <button
                        type="button"
                        class=move || if new_module.get() { "btn-danger" } else { "btn-primary" }
                        on:click=move |_| {
                            new_module.update(|n| *n = !*n);
                            module_id.set(String::new());
                        }
                    >
                        {move || if new_module.get() { "✕ Cancel" } else { "+ New" }}
                    </button>
                </div>
                <Show when=move || new_module.get()>
                    <div class="new-module-fields">
                        <input
                            type="number"
                            min="1"
                            placeholder="Module number"
                            prop:value=move || new_number.get()
                            on:input=move |ev| new_number.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Module title"
                            prop:value=move || new_title.get()
                            on:input=move |ev| new_title.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                <input
                    type="text"
                    placeholder="Lesson title"
                    prop:value=move || lesson_title.get()
                    on:input=move |ev| lesson_title.set(event_target_value(&ev))
                />
                <input type="file" id="fileInput" on:change=on_pick />
                <button type="submit" class="btn-primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn ModuleManager(state: ConsoleState) -> impl IntoView {
    let ctx = use_app_context();

    let on_delete = move |id: i64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_module(id).await {
                Ok(()) => {
                    log::info!("module {} deleted", id);
                    state.modules_version.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to delete module {}: {}", id, e);
                    ctx.notify("Failed to delete module.");
                }
            }
        });
    };

    view! {
        <section class="console-section module-manager">
            <h2>
                {move || {
                    let code = state.selected_subject.get();
                    if code.is_empty() { "Modules".to_string() } else { format!("Subject: {}", code) }
                }}
            </h2>
            <table class="data-table">
                <tbody>
                    {move || {
                        if state.selected_subject.with(String::is_empty) {
                            return view! {
                                <tr><td class="text-center">"Select a subject to manage its modules."</td></tr>
                            }.into_any();
                        }
                        let list = state.modules.get();
                        if list.is_empty() {
                            return view! {
                                <tr><td class="text-center">"No modules found."</td></tr>
                            }.into_any();
                        }
                        list.into_iter().map(|module| {
                            let id = module.id;
                            view! {
                                <tr>
                                    <td>{module_option_label(&module)}</td>
                                    <td class="text-right">
                                        <DeleteConfirmButton button_class="btn-soft-danger" label="Delete" on_confirm=move |_| on_delete(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}

// ========================
// Form Controls
// ========================

#[component]
fn SubjectSelect(state: ConsoleState) -> impl IntoView {
    view! {
        <select
            prop:value=move || state.selected_subject.get()
            on:change=move |ev| state.selected_subject.set(event_target_value(&ev))
        >
            <option value="">"Select Subject"</option>
            {move || state.subjects.get().into_iter().map(|subject| {
                let label = format!("{} - {}", subject.code, subject.title);
                view! { <option value=subject.code.clone()>{label}</option> }
            }).collect_view()}
        </select>
    }
}

#[component]
fn ModuleSelect(
    state: ConsoleState,
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">"Select Existing Module"</option>
            {move || state.modules.get().into_iter().map(|module| {
                let label = module_option_label(&module);
                view! { <option value=module.id.to_string()>{label}</option> }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_number() {
        assert_eq!(parse_module_number(" 4 ").unwrap(), 4);
        assert!(matches!(parse_module_number(""), Err(ApiError::Invalid(_))));
        assert!(matches!(parse_module_number("0"), Err(ApiError::Invalid(_))));
        assert!(matches!(parse_module_number("two"), Err(ApiError::Invalid(_))));
    }

    #[test]
    fn test_upload_needs_file_before_module_is_created() {
        let err = check_upload::<&str>(true, "3", None, None).unwrap_err();
        assert_eq!(err.user_message(), "Please choose a file to upload.");
        assert!(matches!(check_upload(true, "zero", None, Some("notes.pdf")), Err(ApiError::Invalid(_))));
    }

    #[test]
    fn test_upload_target() {
        assert_eq!(check_upload(true, " 3 ", Some(8), Some("a.pdf")).unwrap(), (ModuleTarget::Create(3), "a.pdf"));
        assert_eq!(check_upload(false, "", Some(8), Some("a.pdf")).unwrap(), (ModuleTarget::Existing(Some(8)), "a.pdf"));
        assert_eq!(check_upload(false, "junk", None, Some("a.pdf")).unwrap().0, ModuleTarget::Existing(None));
    }

    #[test]
    fn test_optional_id() {
        assert_eq!(parse_optional_id("17"), Some(17));
        assert_eq!(parse_optional_id(""), None);
    }

    #[test]
    fn test_module_option_label() {
        let module = Module { id: 9, module_number: 2, title: "Loops".into(), ..Default::default() };
        assert_eq!(module_option_label(&module), "Module 2: Loops");
    }
}
