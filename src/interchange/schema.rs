//! Schema Validator
//!
//! A payload is accepted when it is an object with a text `name` and an
//! array `items`. Items themselves are not validated; missing or mistyped
//! item fields fall back to defaults when the document is read. Unknown
//! fields are ignored, so minimal and full exports are read the same way.

use serde_json::Value;

use crate::domain::{NewItem, Priority};
use super::error::{InterchangeError, InterchangeResult};

pub fn is_valid_export(value: &Value) -> bool {
    value.get("name").is_some_and(Value::is_string)
        && value.get("items").is_some_and(Value::is_array)
}

/// Validated import document, copied out of the parsed JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDocument {
    pub name: String,
    pub items: Vec<ImportItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportItem {
    pub item: NewItem,
    /// Read from the payload but not applied on import
    pub completed: bool,
}

impl ImportItem {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            item: NewItem {
                title: text("title"),
                description: text("description"),
                due_date: value.get("dueDate").and_then(Value::as_i64),
                priority: value
                    .get("priority")
                    .and_then(Value::as_str)
                    .map(Priority::from_str)
                    .unwrap_or_default(),
            },
            completed: value
                .get("completed")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

pub fn validate(value: &Value) -> InterchangeResult<ImportDocument> {
    if !is_valid_export(value) {
        return Err(InterchangeError::Schema(describe_mismatch(value)));
    }

    let name = value["name"].as_str().unwrap_or_default().to_string();
    let items = value["items"]
        .as_array()
        .map(|items| items.iter().map(ImportItem::from_value).collect())
        .unwrap_or_default();

    Ok(ImportDocument { name, items })
}

fn describe_mismatch(value: &Value) -> String {
    if !value.is_object() {
        return "expected a JSON object".to_string();
    }
    match (value.get("name"), value.get("items")) {
        (None, _) => "missing `name`".to_string(),
        (Some(name), _) if !name.is_string() => "`name` must be text".to_string(),
        (_, None) => "missing `items`".to_string(),
        _ => "`items` must be an array".to_string(),
    }
}
