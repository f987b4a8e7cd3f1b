//! Recent List Component
//!
//! Sidebar list of recently viewed subjects.

use leptos::prelude::*;

use crate::format::{roadmap_href, year_label};
use crate::state::RecentViews;

#[component]
pub fn RecentList(#[prop(into)] recent: Signal<RecentViews>) -> impl IntoView {
    view! {
        <div class="recent-list">
            {move || {
                let views = recent.get();
                if views.is_empty() {
                    return view! {
                        <div class="recent-empty">"No recently viewed subjects."</div>
                    }.into_any();
                }
                views.into_entries().into_iter().map(|entry| {
                    let href = roadmap_href(&entry.code, &entry.title);
                    view! {
                        <a class="recent-item" href=href>
                            <div class="recent-icon"><i class="fa-solid fa-book-open"></i></div>
                            <div class="recent-info">
                                <div class="recent-title">{entry.title}</div>
                                <div class="recent-meta">
                                    {format!("{} • {}", entry.code, year_label(entry.year_level))}
                                </div>
                            </div>
                        </a>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}
