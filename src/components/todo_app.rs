//! Todo App Component
//!
//! Widget root: opens storage, loads the list, provides context.

use std::rc::Rc;

use leptos::prelude::*;
use local_store::{BrowserStorage, MemoryStore};

use crate::components::{NewTodoForm, TodoFooter, TodoListView};
use crate::config::{IdStrategy, TodoConfig};
use crate::context::{SharedStore, TodoContext};
use crate::ids::{IdGenerator, PersistentIds, SessionIds};
use crate::todo_list::TodoList;

/// localStorage, or an in-memory store when the browser refuses it.
/// The flag is false for the in-memory fallback.
fn open_store() -> (SharedStore, bool) {
    match BrowserStorage::open() {
        Ok(storage) => (Rc::new(storage) as SharedStore, true),
        Err(e) => {
            log::warn!("[APP] {}; todos will not survive a reload", e);
            (Rc::new(MemoryStore::new()) as SharedStore, false)
        }
    }
}

#[component]
pub fn TodoApp(config: TodoConfig) -> impl IntoView {
    let (store, durable) = open_store();
    // Without durable storage the counter cannot outlive the page either
    let strategy = if durable { config.id_strategy } else { IdStrategy::Session };
    let ids: Box<dyn IdGenerator> = match strategy {
        IdStrategy::Session => Box::new(SessionIds::new()),
        IdStrategy::Persistent => Box::new(PersistentIds::new(store.clone(), config.id_counter_key.clone())),
    };

    let list = TodoList::load(store, ids, &config);
    log::info!("[APP] mounting with {} todos", list.len());
    provide_context(TodoContext::new(list));

    view! {
        <div class="todo-app">
            <NewTodoForm />

            <div class="todo-app__main">
                <TodoListView />
            </div>

            <TodoFooter />
        </div>
    }
}
