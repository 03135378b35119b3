//! Todo List View Component
//!
//! Rows for the items visible under the active filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <ul class="todo-app__list">
            // Keyed by id: a row keeps its DOM and edit state across updates
            // and is disposed, listeners included, when its id drops out.
            <For
                each=move || ctx.visible_ids()
                key=|id| id.clone()
                children=move |id| view! { <TodoRow id=id /> }
            />
        </ul>
    }
}
