//! Login Page
//!
//! Username/password form; routes the user to their role's home on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user_val = username.get().trim().to_string();
        let pass_val = password.get();
        if user_val.is_empty() || pass_val.is_empty() {
            error.set(Some("Please enter your username and password.".to_string()));
            return;
        }
        let api = ctx.api();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api.login(&user_val, &pass_val).await {
                Ok(user) => {
                    log::info!("logged in as {} ({})", user.username, user.role);
                    let route = user.role().home_route();
                    ctx.set_user(user);
                    ctx.clear_notice();
                    navigate.with_value(|nav| nav(route, Default::default()));
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Welcome Back"</h1>
                <p class="login-subtitle">"Sign in to continue"</p>
                {move || error.get().map(|msg| view! { <div class="login-error">{msg}</div> })}
                <label>"Username"</label>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label>"Password"</label>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
                <a class="login-back" href="/">"Back to courses"</a>
            </form>
        </div>
    }
}
