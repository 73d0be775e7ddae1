//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod item;
mod list;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, NewItem, Priority};
pub use list::TodoList;
