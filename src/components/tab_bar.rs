//! Tab Bar Component
//!
//! Row of tabs used for the material types on the subject page and the
//! course tabs of the admin subject board.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub value: String,
    pub label: String,
    /// Underline colour of the active tab
    pub accent: Option<String>,
}

impl Tab {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into(), accent: None }
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }
}

/// Tab bar component
#[component]
pub fn TabBar(
    #[prop(into)] tabs: Signal<Vec<Tab>>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            <For
                each=move || tabs.get()
                key=|tab| tab.value.clone()
                children=move |tab| {
                    let value = tab.value.clone();
                    let is_active = {
                        let value = value.clone();
                        move || active.get() == value
                    };
                    let style = {
                        let is_active = is_active.clone();
                        let accent = tab.accent.clone();
                        move || match (&accent, is_active()) {
                            (Some(color), true) => format!("border-bottom: 3px solid {}; color: {};", color, color),
                            (_, true) => String::new(),
                            (_, false) => "opacity: 0.6;".to_string(),
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                            style=style
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {tab.label.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
