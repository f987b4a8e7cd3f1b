//! Admin Console
//!
//! Users, courses, subjects and activity logs, switched from the sidebar.
//! Lists live in the `AdminStore`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api::{subjects_by_year, CourseForm, NewUser, SubjectForm};
use crate::components::{DeleteConfirmButton, Tab, TabBar};
use crate::context::use_app_context;
use crate::format::{admin_course_image, semester_label, year_label, DEFAULT_ADMIN_COURSE_COLOR};
use crate::models::{Course, Role, Subject};
use crate::pages::{enforce_role, logout};
use crate::state::{filter_logs, log_class, RequestSeq};
use crate::store::{
    store_add_user, store_remove_course, store_remove_subject, store_remove_user, store_set_courses,
    use_admin_store, AdminState, AdminStateStoreFields, AdminView,
};

/// Quick filters above the log table
const LOG_FILTERS: [(&str, &str); 6] = [
    ("all", "All"),
    ("created", "Created"),
    ("updated", "Updated"),
    ("deleted", "Deleted"),
    ("admin", "Admin"),
    ("professor", "Professor"),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    if !enforce_role(ctx, Role::Admin) {
        return ().into_any();
    }

    let store = Store::new(AdminState::new());
    provide_context(store);
    let navigate = StoredValue::new(use_navigate());

    // Courses feed the user form, the course grid and the subject tabs
    let api = ctx.api();
    spawn_local(async move {
        match api.list_courses().await {
            Ok(courses) => {
                log::info!("loaded {} courses", courses.len());
                store_set_courses(&store, courses);
            }
            Err(e) => log::error!("failed to load courses: {}", e),
        }
    });

    view! {
        <div class="admin-layout">
            <aside class="sidebar">
                <div class="brand">"Admin Panel"</div>
                <nav class="sidebar-nav">
                    {AdminView::ALL.iter().map(|item| {
                        let item = *item;
                        view! {
                            <button
                                type="button"
                                class=move || if store.view().get() == item { "nav-item active" } else { "nav-item" }
                                on:click=move |_| *store.view().write() = item
                            >
                                <i class=format!("fas {}", item.icon())></i>
                                {format!(" {}", item.label())}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <button
                    type="button"
                    class="logout-btn"
                    on:click=move |_| navigate.with_value(|nav| logout(ctx, nav))
                >
                    <i class="fas fa-right-from-bracket"></i>" Logout"
                </button>
            </aside>
            <main class="console-main">
                <div class="stats-grid">
                    <div class="stat-card">
                        <div class="stat-value" id="count-users">{move || store.users().with(Vec::len)}</div>
                        <div class="stat-label">"Users"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value" id="count-courses">{move || store.courses().with(Vec::len)}</div>
                        <div class="stat-label">"Courses"</div>
                    </div>
                </div>
                {move || match store.view().get() {
                    AdminView::Users => view! { <UsersView /> }.into_any(),
                    AdminView::Courses => view! { <CoursesView /> }.into_any(),
                    AdminView::Subjects => view! { <SubjectsView /> }.into_any(),
                    AdminView::Logs => view! { <LogsView /> }.into_any(),
                }}
            </main>
        </div>
    }
    .into_any()
}

// ========================
// Users
// ========================

#[component]
fn UsersView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student.as_str().to_string());
    let course_id = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);

    let api = ctx.api();
    spawn_local(async move {
        match api.list_users().await {
            Ok(users) => *store.users().write() = users,
            Err(e) => log::error!("failed to load users: {}", e),
        }
    });

    let reset_form = move || {
        username.set(String::new());
        password.set(String::new());
        role.set(Role::Student.as_str().to_string());
        course_id.set(String::new());
        form_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = match NewUser::new(
            &username.get(),
            &password.get(),
            Role::parse(&role.get()),
            &course_id.get(),
        ) {
            Ok(user) => user,
            Err(e) => {
                form_error.set(Some(e.user_message()));
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.create_user(&user).await {
                Ok(created) => {
                    log::info!("user {} created", created.username);
                    store_add_user(&store, created);
                    reset_form();
                    show_form.set(false);
                    ctx.notify("User created successfully!");
                }
                Err(e) => {
                    log::error!("failed to create user: {}", e);
                    form_error.set(Some(format!("Error: {}", e.user_message())));
                }
            }
        });
    };

    let on_delete = move |id: i64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_user(id).await {
                Ok(()) => store_remove_user(&store, id),
                Err(e) => {
                    log::error!("failed to delete user {}: {}", id, e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    view! {
        <section class="view active" id="user-management">
            <div class="view-header">
                <h2>"User Management"</h2>
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| {
                        reset_form();
                        show_form.set(true);
                    }
                >
                    "+ Add User"
                </button>
            </div>
            <Show when=move || show_form.get()>
                <form class="console-form" on:submit=on_submit>
                    {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                    <input
                        type="text"
                        placeholder="Username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| {
                            role.set(event_target_value(&ev));
                            course_id.set(String::new());
                        }
                    >
                        <option value="student">"Student"</option>
                        <option value="professor">"Professor"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                    <Show when=move || Role::parse(&role.get()) == Role::Professor>
                        <select
                            required=true
                            prop:value=move || course_id.get()
                            on:change=move |ev| course_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select Course"</option>
                            {move || store.courses().get().into_iter().map(|course| {
                                let label = format!("{} - {}", course.id, course.title);
                                view! { <option value=course.id.clone()>{label}</option> }
                            }).collect_view()}
                        </select>
                    </Show>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| show_form.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Save User"</button>
                    </div>
                </form>
            </Show>
            <table class="data-table">
                <thead>
                    <tr><th>"Username"</th><th>"Role"</th><th>"Course"</th><th>"Actions"</th></tr>
                </thead>
                <tbody id="users-table-body">
                    {move || {
                        let users = store.users().get();
                        if users.is_empty() {
                            return view! {
                                <tr><td colspan="4" class="text-center">"No users found."</td></tr>
                            }.into_any();
                        }
                        users.into_iter().map(|user| {
                            let id = user.id;
                            let role = user.role.to_lowercase();
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>
                                        <span class=format!("role-badge role-{}", role)>{role.to_uppercase()}</span>
                                    </td>
                                    <td>{user.course_id.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        <DeleteConfirmButton button_class="action-btn-icon delete-btn" on_confirm=move |_| on_delete(id) />
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
// Courses
// ========================

#[component]
fn CoursesView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    // Some(editing) while the form is open
    let editing = RwSignal::new(None::<bool>);
    let form = RwSignal::new(CourseForm::default());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let saving = RwSignal::new(false);

    let reload = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_courses().await {
                Ok(courses) => store_set_courses(&store, courses),
                Err(e) => log::error!("failed to reload courses: {}", e),
            }
        });
    };

    let open_form = move |course: Option<Course>| {
        match course {
            Some(course) => {
                form.set(CourseForm::from_course(&course));
                editing.set(Some(true));
            }
            None => {
                form.set(CourseForm {
                    theme_color: DEFAULT_ADMIN_COURSE_COLOR.to_string(),
                    ..Default::default()
                });
                editing.set(Some(false));
            }
        }
        image.set(None);
    };

    let on_pick = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        image.set(picked);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let is_edit = editing.get().unwrap_or(false);
        let course = form.get();
        if course.id.trim().is_empty() || course.title.trim().is_empty() {
            ctx.notify("Course code and title are required.");
            return;
        }
        let picked = image.get_untracked();
        let api = ctx.api();
        saving.set(true);
        spawn_local(async move {
            let result = api.save_course(course, picked.as_ref(), is_edit).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    editing.set(None);
                    ctx.notify(if is_edit { "Course updated!" } else { "Course created!" });
                    reload();
                }
                Err(e) => {
                    log::error!("failed to save course: {}", e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    let on_delete = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_course(&id).await {
                Ok(()) => store_remove_course(&store, &id),
                Err(e) => {
                    log::error!("failed to delete course {}: {}", id, e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    view! {
        <section class="view active" id="courses-management">
            <div class="view-header">
                <h2>"Course Management"</h2>
                <button type="button" class="btn-primary" on:click=move |_| open_form(None)>"+ Add Course"</button>
            </div>
            <Show when=move || editing.get().is_some()>
                <form class="console-form" on:submit=on_submit>
                    <h3>{move || if editing.get() == Some(true) { "Edit Course" } else { "Add Course" }}</h3>
                    <input
                        type="text"
                        placeholder="Course code (e.g. BSIT)"
                        readonly=move || editing.get() == Some(true)
                        prop:value=move || form.with(|f| f.id.clone())
                        on:input=move |ev| form.update(|f| f.id = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Course title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    <input
                        type="color"
                        prop:value=move || form.with(|f| f.theme_color.clone())
                        on:input=move |ev| form.update(|f| f.theme_color = event_target_value(&ev))
                    />
                    <input type="file" accept="image/*" on:change=on_pick />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Course" }}
                        </button>
                    </div>
                </form>
            </Show>
            <div class="course-grid">
                {move || {
                    let courses = store.courses().get();
                    if courses.is_empty() {
                        return view! { <p class="text-center">"No courses found."</p> }.into_any();
                    }
                    courses.into_iter().map(|course| {
                        let banner = match course.image.as_deref().and_then(admin_course_image) {
                            Some(src) => format!("background-image: url('{}'); background-size: cover; background-position: center;", src),
                            None => format!(
                                "background: {};",
                                course.theme_color.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| DEFAULT_ADMIN_COURSE_COLOR.to_string())
                            ),
                        };
                        let id = course.id.clone();
                        let edit_course = course.clone();
                        view! {
                            <div class="course-card-admin">
                                <div class="course-banner" style=banner></div>
                                <div class="course-body">
                                    <h3>{course.title.clone()}</h3>
                                    <span class="course-code">{course.id.clone()}</span>
                                    <p>{course.description.clone().unwrap_or_default()}</p>
                                </div>
                                <div class="course-actions">
                                    <button
                                        type="button"
                                        class="action-btn-icon"
                                        on:click=move |_| open_form(Some(edit_course.clone()))
                                    >
                                        <i class="fas fa-pen"></i>
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="action-btn-icon delete-btn"
                                        on_confirm=move |_| on_delete(id.clone())
                                    />
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}

// ========================
// Subjects
// ========================

#[component]
fn SubjectsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let editing = RwSignal::new(None::<bool>);
    let form = RwSignal::new(SubjectForm::default());
    let version = RwSignal::new(0u32);
    let requests = StoredValue::new(RequestSeq::default());

    Effect::new(move |_| {
        let _ = version.get();
        let rid = requests.try_update_value(|seq| seq.issue()).unwrap_or_default();
        let Some(course_id) = store.selected_course().get() else {
            *store.subjects().write() = Vec::new();
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_subjects(&course_id).await;
            if !requests.try_with_value(|seq| seq.is_current(rid)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(list) => {
                    log::info!("loaded {} subjects for {}", list.len(), course_id);
                    *store.subjects().write() = list;
                }
                Err(e) => log::error!("failed to load subjects of {}: {}", course_id, e),
            }
        });
    });

    let tabs = Signal::derive(move || {
        store
            .courses()
            .get()
            .into_iter()
            .map(|course| Tab::new(course.id.clone(), course.title.clone()))
            .collect::<Vec<_>>()
    });
    let active = Signal::derive(move || store.selected_course().get().unwrap_or_default());

    let open_edit = move |code: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.get_subject(&code).await {
                Ok(subject) => {
                    form.set(SubjectForm::from_subject(&subject));
                    editing.set(Some(true));
                }
                Err(e) => {
                    log::error!("failed to load subject {}: {}", code, e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let is_edit = editing.get().unwrap_or(false);
        let subject = form.get();
        if subject.code.trim().is_empty() || subject.title.trim().is_empty() {
            ctx.notify("Subject code and title are required.");
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.save_subject(&subject, is_edit).await {
                Ok(()) => {
                    editing.set(None);
                    version.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to save subject {}: {}", subject.code, e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    let on_delete = move |code: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_subject(&code).await {
                Ok(()) => store_remove_subject(&store, &code),
                Err(e) => {
                    log::error!("failed to delete subject {}: {}", code, e);
                    ctx.notify(format!("Error: {}", e.user_message()));
                }
            }
        });
    };

    let columns = Memo::new(move |_| store.subjects().with(|list| subjects_by_year(list)));

    view! {
        <section class="view active" id="subjects-management">
            <div class="view-header">
                <h2>"Subject Management"</h2>
                <button
                    type="button"
                    class="btn-primary"
                    disabled=move || store.selected_course().with(Option::is_none)
                    on:click=move |_| {
                        let course_id = store.selected_course().get().unwrap_or_default();
                        form.set(SubjectForm::blank(&course_id));
                        editing.set(Some(false));
                    }
                >
                    "+ Add Subject"
                </button>
            </div>
            <TabBar tabs=tabs active=active on_select=move |id: String| *store.selected_course().write() = Some(id) />
            <Show when=move || editing.get().is_some()>
                <form class="console-form" on:submit=on_submit>
                    <h3>{move || if editing.get() == Some(true) { "Edit Subject" } else { "Add Subject" }}</h3>
                    <input
                        type="text"
                        placeholder="Subject code"
                        readonly=move || editing.get() == Some(true)
                        prop:value=move || form.with(|f| f.code.clone())
                        on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Subject title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || form.with(|f| f.year_level.to_string())
                        on:change=move |ev| form.update(|f| f.year_level = event_target_value(&ev).parse().unwrap_or(1))
                    >
                        {(1u8..=4).map(|year| view! { <option value=year.to_string()>{year_label(year)}</option> }).collect_view()}
                    </select>
                    <select
                        prop:value=move || form.with(|f| f.semester.to_string())
                        on:change=move |ev| form.update(|f| f.semester = event_target_value(&ev).parse().unwrap_or(1))
                    >
                        <option value="1">"1st Semester"</option>
                        <option value="2">"2nd Semester"</option>
                    </select>
                    <select
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </select>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save Subject"</button>
                    </div>
                </form>
            </Show>
            <div class="year-columns">
                {(0..4usize).map(|column| view! {
                    <div class="year-column">
                        <h3>{year_label(column as u8 + 1)}</h3>
                        {move || columns.with(|cols| cols[column].clone()).into_iter().map(|subject| {
                            subject_card(subject, open_edit, on_delete)
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

fn subject_card(
    subject: Subject,
    on_edit: impl Fn(String) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let inactive = subject.is_inactive();
    let edit_code = subject.code.clone();
    let delete_code = subject.code.clone();

    view! {
        <div class=if inactive { "subject-card inactive" } else { "subject-card" }>
            <div class="subject-code">{subject.code.clone()}</div>
            <div class="subject-title">{subject.title.clone()}</div>
            <div class="subject-meta">
                <span class="sem-badge">{semester_label(subject.semester)}</span>
                {if inactive {
                    view! { <span class="status-badge inactive">"INACTIVE"</span> }.into_any()
                } else {
                    view! { <span class="status-badge active">"Active"</span> }.into_any()
                }}
            </div>
            <div class="subject-actions">
                <button type="button" class="action-btn-icon" on:click=move |_| on_edit(edit_code.clone())>
                    <i class="fas fa-pen"></i>
                </button>
                <DeleteConfirmButton
                    button_class="action-btn-icon delete-btn"
                    on_confirm=move |_| on_delete(delete_code.clone())
                />
            </div>
        </div>
    }
}

// ========================
// Activity Logs
// ========================

#[component]
fn LogsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let api = ctx.api();
    spawn_local(async move {
        match api.list_logs().await {
            Ok(logs) => *store.logs().write() = logs,
            Err(e) => log::error!("failed to load activity logs: {}", e),
        }
    });

    let visible = Memo::new(move |_| {
        let keyword = store.log_filter().get();
        store.logs().with(|logs| filter_logs(logs, &keyword))
    });

    view! {
        <section class="view active" id="activity-logs">
            <div class="view-header">
                <h2>"Activity Logs"</h2>
                <div class="log-filters">
                    {LOG_FILTERS.iter().map(|(keyword, label)| {
                        let keyword = keyword.to_string();
                        let is_active = {
                            let keyword = keyword.clone();
                            move || store.log_filter().get() == keyword
                        };
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "filter-chip active" } else { "filter-chip" }
                                on:click=move |_| *store.log_filter().write() = keyword.clone()
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
            <table class="data-table">
                <thead>
                    <tr><th>"User"</th><th>"Action"</th><th>"Role"</th><th>"Time"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let logs = visible.get();
                        if logs.is_empty() {
                            return view! {
                                <tr><td colspan="4" class="text-center">"No activity found."</td></tr>
                            }.into_any();
                        }
                        logs.into_iter().map(|log| {
                            let class = log_class(&log);
                            view! {
                                <tr class=class>
                                    <td>{log.username.clone().unwrap_or_else(|| "Unknown".to_string())}</td>
                                    <td>{log.action.clone().unwrap_or_default()}</td>
                                    <td>{log.role.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{log.timestamp.clone().unwrap_or_default()}</td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}
