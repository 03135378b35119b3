//! Todo Footer Component
//!
//! Counter, filter controls and the clear-completed button.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::models::ActiveFilter;

/// One control per filter; only the active one is `selected`
#[component]
fn FilterBar() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <ul class="todo-app__filters">
            {ActiveFilter::ALL.into_iter().map(move |filter| {
                view! {
                    <li class="todo-app__filters-item" on:click=move |_| ctx.set_filter(filter)>
                        <a href="#!" class:selected=move || ctx.filter() == filter>
                            {filter.label()}
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="todo-app__footer">
            <div class="todo-app__counter">{move || ctx.items_left_label()}</div>

            <FilterBar />

            <button
                class="btn todo-app__clear-btn"
                type="button"
                on:click=move |_| ctx.clear_completed()
            >
                "Clear completed"
            </button>
        </div>
    }
}
