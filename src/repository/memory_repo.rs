//! In-Memory List Repository
//!
//! Holds the list collection in memory, the same shape the app persists as a
//! single key-value blob. Used by embedders without their own store and by tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Item, NewItem, TodoList};
use super::traits::{ListRepository, Repository};

#[derive(Debug, Default)]
struct MemoryState {
    lists: Vec<TodoList>,
    next_id: u32,
}

impl MemoryState {
    fn mint_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Vec-backed implementation of the list repository
#[derive(Clone, Default)]
pub struct MemoryListRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with previously loaded lists
    pub fn with_lists(lists: Vec<TodoList>) -> Self {
        let next_id = lists
            .iter()
            .flat_map(|list| std::iter::once(list.id).chain(list.items.iter().map(|i| i.id)))
            .max()
            .unwrap_or(0);

        Self {
            state: Arc::new(Mutex::new(MemoryState { lists, next_id })),
        }
    }
}

#[async_trait]
impl Repository<TodoList> for MemoryListRepository {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<TodoList>> {
        let state = self.state.lock().await;
        Ok(state.lists.iter().find(|list| list.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<TodoList>> {
        let state = self.state.lock().await;
        Ok(state.lists.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        state.lists.retain(|list| list.id != id);
        Ok(())
    }
}

#[async_trait]
impl ListRepository for MemoryListRepository {
    async fn create_list(&self, name: &str) -> DomainResult<u32> {
        let mut state = self.state.lock().await;
        let id = state.mint_id();
        let now = chrono::Local::now().timestamp_millis();
        state.lists.push(TodoList::new(id, name.to_string(), now));
        Ok(id)
    }

    async fn add_item(&self, list_id: u32, item: NewItem) -> DomainResult<u32> {
        let mut state = self.state.lock().await;
        let id = state.mint_id();
        let list = state
            .lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or_else(|| DomainError::NotFound(format!("List {}", list_id)))?;

        let mut created = Item::new(id, item.title, chrono::Local::now().timestamp_millis());
        created.description = item.description;
        created.due_date = item.due_date;
        created.priority = item.priority;
        list.items.push(created);
        Ok(id)
    }
}
