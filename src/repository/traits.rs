//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The interchange core only ever talks to these traits; the real store
//! (key-value persistence behind the UI) lives outside this crate.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult, NewItem, TodoList};

/// Core repository trait for read and delete access
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// CRUD primitives the import and bulk-add paths call into
#[async_trait]
pub trait ListRepository: Repository<TodoList> {
    /// Create an empty list, minting a fresh identity
    async fn create_list(&self, name: &str) -> DomainResult<u32>;

    /// Append an item to the end of a list. New items start incomplete.
    async fn add_item(&self, list_id: u32, item: NewItem) -> DomainResult<u32>;
}
