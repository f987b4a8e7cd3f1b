//! Course Carousel Component
//!
//! Home-page slider: background, text panel and a card track whose slides
//! take their class from `Carousel::position`.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::{adjust_brightness, course_color, slide_styles};
use crate::models::Course;
use crate::state::{AutoAdvance, Carousel, SlidePosition};

#[component]
pub fn CourseCarousel(
    #[prop(into)] courses: Signal<Vec<Course>>,
    /// Opens the dashboard of a course id
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = StoredValue::new(ctx.config());
    let interval_ms = config.with_value(|c| c.carousel_interval_ms);

    let carousel = RwSignal::new(Carousel::default());
    let timer = StoredValue::new_local(AutoAdvance::<Interval>::default());

    // Cancel-then-start; never more than one interval alive
    let restart = move || {
        timer.update_value(|t| {
            t.arm(|| Interval::new(interval_ms, move || carousel.update(Carousel::next)))
        });
    };

    Effect::new(move |_| {
        let len = courses.with(Vec::len);
        carousel.update(|c| c.reset(len));
        if len > 0 {
            restart();
        } else {
            timer.update_value(AutoAdvance::disarm);
        }
    });

    on_cleanup(move || {
        timer.try_update_value(AutoAdvance::disarm);
    });

    let active = Memo::new(move |_| {
        let index = carousel.with(Carousel::index);
        courses.with(|list| list.get(index).cloned())
    });

    let go_next = move || {
        carousel.update(Carousel::next);
        restart();
    };
    let go_prev = move || {
        carousel.update(Carousel::prev);
        restart();
    };

    view! {
        <div class="carousel">
            <div class="bg-container">
                {move || active.get().map(|course| {
                    let (_, background) = config.with_value(|c| slide_styles(c, &course));
                    view! { <div class="bg-slide active" style=background></div> }
                })}
            </div>

            <div class="text-content">
                {move || active.get().map(|course| {
                    let color = course_color(&course);
                    let id = course.id.clone();
                    view! {
                        <h1 class="course-title">{course.title.clone()}</h1>
                        <p class="course-desc" style=format!("border-color: {}", color)>
                            {course.description.clone().unwrap_or_default()}
                        </p>
                        <button
                            type="button"
                            class="btn-view-lessons"
                            style=format!(
                                "background: linear-gradient(135deg, {}, {})",
                                color,
                                adjust_brightness(&color, -50)
                            )
                            on:click=move |_| on_open.run(id.clone())
                        >
                            "View Lessons"
                        </button>
                    }
                })}
            </div>

            <div class="card-track">
                {move || {
                    let list = courses.get();
                    if list.is_empty() {
                        return view! { <div class="carousel-empty">"No courses available."</div> }.into_any();
                    }
                    list.into_iter().enumerate().map(|(index, course)| {
                        let (card_style, _) = config.with_value(|c| slide_styles(c, &course));
                        let id = course.id.clone();
                        let position = move || carousel.with(|c| c.position(index));
                        view! {
                            <div
                                class=move || format!("course-card {}", position().class())
                                style=card_style
                                on:click=move |_| match position() {
                                    SlidePosition::Active => on_open.run(id.clone()),
                                    SlidePosition::Next => go_next(),
                                    SlidePosition::Prev => go_prev(),
                                    SlidePosition::Hidden => {
                                        carousel.update(|c| c.select(index));
                                        restart();
                                    }
                                }
                            >
                                <div class="card-logo"></div>
                                <div class="card-label">{course.title.clone()}</div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>

            <Show when=move || courses.with(|list| list.len() > 1)>
                <div class="carousel-controls">
                    <button type="button" class="nav-btn prev-btn" on:click=move |_| go_prev()>
                        <i class="fa-solid fa-chevron-left"></i>
                    </button>
                    <button type="button" class="nav-btn next-btn" on:click=move |_| go_next()>
                        <i class="fa-solid fa-chevron-right"></i>
                    </button>
                </div>
            </Show>
        </div>
    }
}
