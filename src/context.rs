//! Todo Context
//!
//! The todo list wrapped in a local signal, provided via Leptos Context API.
//! Components mutate through these methods; each call mutates, persists
//! and notifies in a single signal update.

use std::rc::Rc;

use leptos::prelude::*;
use local_store::KeyValueStore;

use crate::ids::IdGenerator;
use crate::models::{ActiveFilter, TodoItem};
use crate::todo_list::TodoList;

/// Store shared by the list and the persistent id counter
pub type SharedStore = Rc<dyn KeyValueStore>;

pub type AppTodoList = TodoList<SharedStore, Box<dyn IdGenerator>>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    list: RwSignal<AppTodoList, LocalStorage>,
}

impl TodoContext {
    pub fn new(list: AppTodoList) -> Self {
        Self {
            list: RwSignal::new_local(list),
        }
    }

    /// Add an item; false when the name was blank
    pub fn add(&self, name: &str) -> bool {
        self.list
            .try_update(|list| list.add_item(name).is_some())
            .unwrap_or(false)
    }

    pub fn remove(&self, id: &str) {
        self.list.update(|list| {
            list.remove_item(id);
        });
    }

    pub fn rename(&self, id: &str, name: &str) {
        self.list.update(|list| {
            list.rename_item(id, name);
        });
    }

    pub fn set_completed(&self, id: &str, completed: bool) {
        self.list.update(|list| {
            list.set_completed(id, completed);
        });
    }

    pub fn set_pinned(&self, id: &str, pinned: bool) {
        self.list.update(|list| {
            list.set_pinned(id, pinned);
        });
    }

    pub fn clear_completed(&self) {
        self.list.update(|list| {
            list.clear_completed();
        });
    }

    pub fn set_filter(&self, filter: ActiveFilter) {
        self.list.update(|list| list.set_filter(filter));
    }

    // ========================
    // Tracked reads
    // ========================

    pub fn filter(&self) -> ActiveFilter {
        self.list.with(|list| list.filter())
    }

    /// Ids of the rows to render, in order
    pub fn visible_ids(&self) -> Vec<String> {
        self.list
            .with(|list| list.filtered_items().iter().map(|item| item.id.clone()).collect())
    }

    /// Read one field of an item; None once the item is gone
    pub fn item_field<U>(&self, id: &str, f: impl FnOnce(&TodoItem) -> U) -> Option<U> {
        self.list.with(|list| list.get(id).map(f))
    }

    pub fn items_left_label(&self) -> String {
        self.list.with(|list| list.items_left_label())
    }
}

/// Get the todo context provided by `TodoApp`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
