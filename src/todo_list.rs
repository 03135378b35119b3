//! Todo List State
//!
//! Owns the todo records, the active filter, and their persistence.
//! Every mutation writes the full list back to the store before returning.

use indexmap::IndexMap;
use local_store::{load_json, save_json, KeyValueStore};

use crate::config::TodoConfig;
use crate::ids::IdGenerator;
use crate::models::{ActiveFilter, TodoItem};

/// "1 item left" / "<n> items left"
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

/// Todo records in insertion order, keyed by id
pub struct TodoList<S, G> {
    items: IndexMap<String, TodoItem>,
    filter: ActiveFilter,
    store: S,
    ids: G,
    storage_key: String,
    id_prefix: String,
}

impl<S: KeyValueStore, G: IdGenerator> TodoList<S, G> {
    /// Load the saved list, or seed one item when nothing usable is stored.
    /// Loading never writes the todo list itself.
    pub fn load(store: S, ids: G, config: &TodoConfig) -> Self {
        let mut list = Self {
            items: IndexMap::new(),
            filter: ActiveFilter::default(),
            store,
            ids,
            storage_key: config.storage_key.clone(),
            id_prefix: config.id_prefix.clone(),
        };

        match load_json::<Vec<TodoItem>, _>(&list.store, &list.storage_key) {
            Ok(Some(saved)) => {
                for item in saved {
                    if list.items.contains_key(&item.id) {
                        log::warn!("[TODO] dropping stored duplicate id {}", item.id);
                        continue;
                    }
                    list.items.insert(item.id.clone(), item);
                }
                log::info!("[TODO] loaded {} items", list.items.len());
            }
            Ok(None) => {
                log::info!("[TODO] nothing stored under {}, seeding", list.storage_key);
                list.seed(&config.seed_name);
            }
            Err(e) => {
                log::warn!("[TODO] stored list unreadable ({}), seeding", e);
                list.seed(&config.seed_name);
            }
        }
        list
    }

    fn seed(&mut self, name: &str) {
        let id = self.fresh_id();
        self.items.insert(id.clone(), TodoItem::new(id, name.to_string()));
    }

    /// Next generated id not already in the list
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id(&self.id_prefix);
            if !self.items.contains_key(&id) {
                return id;
            }
            log::warn!("[TODO] generated id {} already taken, drawing again", id);
        }
    }

    fn persist(&self) {
        let items: Vec<&TodoItem> = self.items.values().collect();
        if let Err(e) = save_json(&self.store, &self.storage_key, &items) {
            log::error!("[TODO] failed to save {} items: {}", items.len(), e);
        }
    }

    /// Apply `f` to the item with `id` and persist. False if not found.
    fn update_item(&mut self, id: &str, f: impl FnOnce(&mut TodoItem)) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        f(item);
        self.persist();
        true
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new item. Blank names are ignored.
    pub fn add_item(&mut self, name: &str) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.items.insert(id.clone(), TodoItem::new(id.clone(), name.to_string()));
        self.persist();
        log::debug!("[TODO] added {}", id);
        Some(id)
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        if self.items.shift_remove(id).is_none() {
            return false;
        }
        self.persist();
        log::debug!("[TODO] removed {}", id);
        true
    }

    /// Replace the name. Empty names are allowed.
    pub fn rename_item(&mut self, id: &str, name: &str) -> bool {
        self.update_item(id, |item| item.name = name.to_string())
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        self.update_item(id, |item| item.completed = completed)
    }

    /// Pinning only changes styling; order and filtering are unaffected
    pub fn set_pinned(&mut self, id: &str, pinned: bool) -> bool {
        self.update_item(id, |item| item.pinned = pinned)
    }

    /// Drop every completed item. Returns how many went; 0 means nothing was written.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|_, item| !item.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist();
            log::debug!("[TODO] cleared {} completed", removed);
        }
        removed
    }

    pub fn set_filter(&mut self, filter: ActiveFilter) {
        self.filter = filter;
    }

    // ========================
    // Queries
    // ========================

    pub fn filter(&self) -> ActiveFilter {
        self.filter
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items visible under the active filter, in list order
    pub fn filtered_items(&self) -> Vec<&TodoItem> {
        self.items
            .values()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Counter text for the visible items
    pub fn items_left_label(&self) -> String {
        items_left_label(self.filtered_items().len())
    }
}
