//! Repository Layer
//!
//! Collaborator CRUD abstractions and an in-memory implementation.

mod traits;
mod memory_repo;


pub use traits::{ListRepository, Repository};
pub use memory_repo::MemoryListRepository;
