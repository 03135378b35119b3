//! New Todo Form Component
//!
//! Header input; the Add button and Enter both submit.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_name, set_new_name) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank names leave the input untouched
        if ctx.add(&new_name.get_untracked()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="todo-app__header" on:submit=add_todo>
            <input
                class="todo-app__header-input"
                type="text"
                placeholder="New ToDo"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button class="todo-app__header-btn btn" type="submit">
                "Add"
            </button>
        </form>
    }
}
