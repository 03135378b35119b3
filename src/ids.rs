//! Todo Id Generation
//!
//! Prefix + monotonic counter, either per session or persisted.

use local_store::KeyValueStore;

/// Produces ids that are unique among those this generator has returned
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self, prefix: &str) -> String {
        (**self).next_id(prefix)
    }
}

/// In-memory counter, restarts at 1 on every page load
#[derive(Debug, Default)]
pub struct SessionIds {
    counter: u64,
}

impl SessionIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SessionIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}{}", prefix, self.counter)
    }
}

/// Counter stored under `key`, so ids survive reloads.
///
/// A missing or unparsable counter reads as 0, an exhausted one restarts
/// at 1 (callers skip ids they already hold). The last issued value is
/// also kept in memory, so short of exhaustion the counter never moves
/// backwards within a session, even when the store refuses writes.
pub struct PersistentIds<S> {
    store: S,
    key: String,
    last: u64,
}

impl<S: KeyValueStore> PersistentIds<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            last: 0,
        }
    }

    fn stored_counter(&self) -> u64 {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("[IDS] ignoring malformed counter {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("[IDS] counter read failed: {}", e);
                0
            }
        }
    }
}

impl<S: KeyValueStore> IdGenerator for PersistentIds<S> {
    fn next_id(&mut self, prefix: &str) -> String {
        let counter = match self.stored_counter().max(self.last).checked_add(1) {
            Some(counter) => counter,
            None => {
                log::warn!("[IDS] counter exhausted, restarting from 1");
                1
            }
        };
        self.last = counter;
        if let Err(e) = self.store.set(&self.key, &counter.to_string()) {
            log::error!("[IDS] counter write failed: {}", e);
        }
        format!("{}{}", prefix, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use local_store::MemoryStore;
    use std::rc::Rc;

    #[test]
    fn test_session_ids_are_sequential() {
        let mut ids = SessionIds::new();
        assert_eq!(ids.next_id("todo-"), "todo-1");
        assert_eq!(ids.next_id("todo-"), "todo-2");
        assert_eq!(ids.next_id("x"), "x3");
    }

    #[test]
    fn test_persistent_ids_survive_reload() {
        let store = Rc::new(MemoryStore::new());

        let mut first = PersistentIds::new(store.clone(), "idCounter");
        assert_eq!(first.next_id("todo-"), "todo-1");
        assert_eq!(first.next_id("todo-"), "todo-2");
        assert_eq!(store.get("idCounter").unwrap().as_deref(), Some("2"));

        // New generator over the same store, as after a page reload
        let mut second = PersistentIds::new(store.clone(), "idCounter");
        assert_eq!(second.next_id("todo-"), "todo-3");
    }

    #[test]
    fn test_persistent_ids_malformed_counter() {
        let store = Rc::new(MemoryStore::new());
        store.set("idCounter", "banana").unwrap();

        let mut ids = PersistentIds::new(store.clone(), "idCounter");
        assert_eq!(ids.next_id("todo-"), "todo-1");
    }

    #[test]
    fn test_persistent_ids_exhausted_counter_restarts() {
        let store = Rc::new(MemoryStore::new());
        store.set("idCounter", &u64::MAX.to_string()).unwrap();

        let mut ids = PersistentIds::new(store.clone(), "idCounter");
        assert_eq!(ids.next_id("todo-"), "todo-1");
        assert_eq!(ids.next_id("todo-"), "todo-2");
        assert_eq!(store.get("idCounter").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_persistent_ids_never_go_backwards() {
        let store = Rc::new(MemoryStore::new());
        let mut ids = PersistentIds::new(store.clone(), "idCounter");
        ids.next_id("todo-");
        ids.next_id("todo-");

        // Counter wiped behind our back
        store.remove("idCounter").unwrap();
        assert_eq!(ids.next_id("todo-"), "todo-3");
    }
}
