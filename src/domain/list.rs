//! List Entity
//!
//! An ordered collection of items. Order is user-chosen (drag reordering)
//! and is preserved through export and import.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: u32,
    pub name: String,
    /// Creation time as epoch millis
    pub created_at: i64,
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(id: u32, name: String, created_at: i64) -> Self {
        Self {
            id,
            name,
            created_at,
            items: Vec::new(),
        }
    }

    pub fn find_item(&self, item_id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

impl Entity for TodoList {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
