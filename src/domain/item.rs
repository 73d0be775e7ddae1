//! Item Entity
//!
//! Represents a single task inside a list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Item priority, shown as a colored marker in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Lenient parse; anything unrecognized is `Medium`
    pub fn from_str(s: &str) -> Self {
        match s {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

/// A task item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, minted by the store
    pub id: u32,
    /// Item title (non-empty)
    pub title: String,
    /// Free-form notes, may be empty
    pub description: String,
    /// Completion status
    pub completed: bool,
    pub priority: Priority,
    /// Due date as epoch millis
    pub due_date: Option<i64>,
    /// Creation time as epoch millis
    pub created_at: i64,
}

impl Item {
    /// Create a new incomplete item with default values
    pub fn new(id: u32, title: String, created_at: i64) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            completed: false,
            priority: Priority::Medium,
            due_date: None,
            created_at,
        }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fields accepted by the add-item primitive.
///
/// Identity, creation time and completion are owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub due_date: Option<i64>,
    pub priority: Priority,
}

impl NewItem {
    /// Bare title with every other field defaulted
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Test item".to_string(), 1_700_000_000_000);
        assert_eq!(item.id(), 1);
        assert_eq!(item.title, "Test item");
        assert!(!item.completed);
        assert_eq!(item.priority, Priority::Medium);
        assert!(item.due_date.is_none());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(Priority::from_str("low"), Priority::Low);
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::from_str("HIGH"), Priority::Medium);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let mut item = Item::new(7, "Eggs".to_string(), 5);
        item.due_date = Some(10);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["dueDate"], 10);
        assert_eq!(value["createdAt"], 5);
        assert_eq!(value["priority"], "medium");
    }
}
