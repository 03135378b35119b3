//! Widget Configuration
//!
//! Static settings for mounting, storage keys and id generation.

/// How new todo ids are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Counter lives only for the page session
    Session,
    /// Counter is persisted so ids stay unique across reloads
    #[default]
    Persistent,
}

#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// Selector of the element the widget mounts into
    pub container_selector: String,
    /// Storage key holding the JSON todo array
    pub storage_key: String,
    /// Storage key holding the id counter (persistent strategy only)
    pub id_counter_key: String,
    pub id_prefix: String,
    /// Name of the item seeded on first run
    pub seed_name: String,
    pub id_strategy: IdStrategy,
    pub log_level: log::LevelFilter,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            container_selector: "#todo".to_string(),
            storage_key: "todos".to_string(),
            id_counter_key: "idCounter".to_string(),
            id_prefix: "todo-".to_string(),
            seed_name: "My first todo".to_string(),
            id_strategy: IdStrategy::default(),
            log_level: log::LevelFilter::Info,
        }
    }
}
