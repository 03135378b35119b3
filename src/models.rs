//! Frontend Models
//!
//! Todo records and the list filter.

use serde::{Deserialize, Serialize};

/// One todo entry, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique id, fixed at creation
    pub id: String,
    pub name: String,
    /// Older saves omit the flags; they read as false
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub pinned: bool,
}

impl TodoItem {
    /// A fresh, not completed, not pinned item
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
            pinned: false,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveFilter {
    #[default]
    All,
    /// Not completed
    Active,
    Completed,
}

impl ActiveFilter {
    /// Display order of the filter controls
    pub const ALL: [ActiveFilter; 3] = [ActiveFilter::All, ActiveFilter::Active, ActiveFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All",
            ActiveFilter::Active => "Active",
            ActiveFilter::Completed => "Completed",
        }
    }

    /// Whether `item` is visible under this filter
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => !item.completed,
            ActiveFilter::Completed => item.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new("todo-1".to_string(), "Buy milk".to_string());
        assert_eq!(item.id, "todo-1");
        assert_eq!(item.name, "Buy milk");
        assert!(!item.completed);
        assert!(!item.pinned);
    }

    #[test]
    fn test_filter_matches() {
        let open = TodoItem::new("a".to_string(), "open".to_string());
        let done = TodoItem { completed: true, ..TodoItem::new("b".to_string(), "done".to_string()) };

        assert!(ActiveFilter::All.matches(&open) && ActiveFilter::All.matches(&done));
        assert!(ActiveFilter::Active.matches(&open) && !ActiveFilter::Active.matches(&done));
        assert!(!ActiveFilter::Completed.matches(&open) && ActiveFilter::Completed.matches(&done));
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = ActiveFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Active", "Completed"]);
        assert_eq!(ActiveFilter::default(), ActiveFilter::All);
    }

    #[test]
    fn test_item_missing_flags_default_false() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"todo-1","name":"old"}"#).unwrap();
        assert_eq!(item, TodoItem::new("todo-1".to_string(), "old".to_string()));
    }

    #[test]
    fn test_item_json_shape() {
        let item = TodoItem { pinned: true, ..TodoItem::new("todo-3".to_string(), "x".to_string()) };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"todo-3","name":"x","completed":false,"pinned":true}"#);
    }
}
