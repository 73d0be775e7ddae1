//! Payload Builder
//!
//! Projects a live list into the interchange shape
//! `{ name, createdAt, items: [...] }`. Both export modes share that shape;
//! the mode only decides which source fields populate it. Builders copy out
//! everything they need, so a payload never borrows from the source list.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Item, Priority, TodoList};

/// Version stamp written into full backups
pub const BACKUP_VERSION: u32 = 1;

/// Which source fields populate the shared wire shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Only `title, description, completed, priority, dueDate` per item
    #[default]
    Minimal,
    /// Everything the list carries, identities and timestamps included
    Full,
}

impl ExportMode {
    pub fn build(self, list: Option<&TodoList>) -> Option<ExportPayload> {
        match self {
            ExportMode::Minimal => build_minimal(list),
            ExportMode::Full => build_full(list),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportItem {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<i64>,
    /// Fields beyond the minimal shape; empty in minimal mode
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub name: String,
    pub created_at: i64,
    pub items: Vec<ExportItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// All lists in one document, used for file backups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupPayload {
    pub version: u32,
    pub exported: i64,
    pub lists: Vec<ExportPayload>,
}

fn minimal_item(item: &Item) -> ExportItem {
    ExportItem {
        title: item.title.clone(),
        description: item.description.clone(),
        completed: item.completed,
        priority: item.priority,
        due_date: item.due_date,
        extra: Map::new(),
    }
}

fn full_item(item: &Item) -> ExportItem {
    let mut extra = Map::new();
    extra.insert("id".to_string(), Value::from(item.id));
    extra.insert("createdAt".to_string(), Value::from(item.created_at));
    ExportItem {
        extra,
        ..minimal_item(item)
    }
}

fn full_payload(list: &TodoList) -> ExportPayload {
    let mut extra = Map::new();
    extra.insert("id".to_string(), Value::from(list.id));
    ExportPayload {
        name: list.name.clone(),
        created_at: list.created_at,
        items: list.items.iter().map(full_item).collect(),
        extra,
    }
}

/// Minimal projection; `None` when the list is absent
pub fn build_minimal(list: Option<&TodoList>) -> Option<ExportPayload> {
    let list = list?;
    Some(ExportPayload {
        name: list.name.clone(),
        created_at: list.created_at,
        items: list.items.iter().map(minimal_item).collect(),
        extra: Map::new(),
    })
}

/// Identity projection; `None` when the list is absent
pub fn build_full(list: Option<&TodoList>) -> Option<ExportPayload> {
    list.map(full_payload)
}

pub fn build_backup(lists: &[TodoList], exported_at: i64) -> BackupPayload {
    BackupPayload {
        version: BACKUP_VERSION,
        exported: exported_at,
        lists: lists.iter().map(full_payload).collect(),
    }
}
