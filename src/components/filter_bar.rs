//! Filter Bar Component
//!
//! Year dropdown and search box driving a `SubjectFilter`.

use leptos::prelude::*;

use crate::state::{SubjectFilter, YearFilter};

#[component]
pub fn FilterBar(filter: RwSignal<SubjectFilter>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="filter-bar">
            <div class="search-box">
                <i class="fa-solid fa-magnifying-glass"></i>
                <input
                    type="text"
                    placeholder="Search subjects..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        filter.update(|f| f.set_search(&term));
                    }
                />
            </div>
            <div class="filter-dropdown-wrap">
                <button
                    type="button"
                    class="filter-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_open.update(|o| *o = !*o);
                    }
                >
                    <span>{move || filter.with(|f| f.year.label())}</span>
                    <i class="fa-solid fa-chevron-down"></i>
                </button>
                <div class=move || if open.get() { "filter-dropdown show" } else { "filter-dropdown" }>
                    {YearFilter::OPTIONS.iter().map(|year| {
                        let year = *year;
                        view! {
                            <div
                                class=move || {
                                    if filter.with(|f| f.year == year) { "filter-option selected" } else { "filter-option" }
                                }
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    filter.update(|f| f.set_year(year));
                                    set_open.set(false);
                                }
                            >
                                {year.label()}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
