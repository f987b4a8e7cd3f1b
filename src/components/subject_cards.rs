//! Subject Cards Component
//!
//! Card grid over the filtered subjects with the "View More" toggle.

use leptos::prelude::*;

use crate::format::{palette_color, year_label};
use crate::models::Subject;
use crate::state::SubjectFilter;

#[component]
pub fn SubjectCards(
    #[prop(into)] subjects: Signal<Vec<Subject>>,
    filter: RwSignal<SubjectFilter>,
    /// Cards shown while collapsed
    limit: usize,
    #[prop(into)] on_view: Callback<Subject>,
) -> impl IntoView {
    let window = Memo::new(move |_| {
        subjects.with(|all| filter.with(|f| f.window(all, limit)))
    });

    view! {
        <div class="cards-grid">
            {move || {
                let window = window.get();
                if window.is_empty() {
                    return view! {
                        <p class="cards-empty">"No subjects found for this category."</p>
                    }.into_any();
                }
                let cards = window.items.into_iter().enumerate().map(|(index, subject)| {
                    let color = palette_color(index);
                    let year = year_label(subject.year_level);
                    let code = subject.code.clone();
                    let title = subject.title.clone();
                    view! {
                        <div class="card" style=format!("border-top-color: {}", color)>
                            <div>
                                <div class="card-code" style=format!("color: {}", color)>{code}</div>
                                <div class="card-title">{title}</div>
                                <div class="card-year">{year}</div>
                            </div>
                            <div>
                                <button
                                    type="button"
                                    class="btn-view"
                                    style=format!("background: {}", color)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        on_view.run(subject.clone());
                                    }
                                >
                                    "View"
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view();
                view! {
                    {cards}
                    {window.toggle.map(|label| view! {
                        <div class="cards-toggle">
                            <button
                                type="button"
                                class="toggle-view-btn"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    filter.update(|f| f.toggle_show_all());
                                }
                            >
                                {label}
                            </button>
                        </div>
                    })}
                }.into_any()
            }}
        </div>
    }
}
