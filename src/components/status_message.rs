//! Status Message Components
//!
//! The app-wide notice banner and the inline loading/error placeholder.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Load state of a fetched section
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    /// Only a successful load may render its (possibly empty) list
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Dismissible banner bound to `AppContext::notice`
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-banner" role="status">
                <span>{message}</span>
                <button type="button" class="notice-close" on:click=move |_| ctx.clear_notice()>
                    "×"
                </button>
            </div>
        })}
    }
}

/// Placeholder shown instead of a list while it loads or after it failed
#[component]
pub fn StatusMessage(#[prop(into)] state: Signal<LoadState>) -> impl IntoView {
    move || match state.get() {
        LoadState::Loading => view! {
            <div class="placeholder"><div class="spinner"></div>" Loading..."</div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="placeholder error-text">{message}</div>
        }
        .into_any(),
        LoadState::Ready => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_is_not_ready() {
        assert!(LoadState::Ready.is_ready());
        assert!(!LoadState::Loading.is_ready());
        assert!(!LoadState::Failed("Unable to load courses.".into()).is_ready());
    }
}
