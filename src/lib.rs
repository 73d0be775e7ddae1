//! ListHappens Core
//!
//! List interchange and bulk ingestion for the ListHappens task lists.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Collaborator CRUD abstractions and an in-memory store
//! - interchange: Export payloads, compressed transport codec, import
//! - ingest: Bulk text and OCR staging
//! - commands: Handlers called from the UI

use std::path::Path;
use std::sync::Arc;

pub mod commands;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod interchange;
pub mod repository;

use config::InterchangeConfig;
use repository::{ListRepository, MemoryListRepository};

/// Application state shared across commands
pub struct AppState {
    pub repo: Arc<dyn ListRepository>,
    pub config: InterchangeConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn ListRepository>, config: InterchangeConfig) -> Self {
        Self { repo, config }
    }

    /// State backed by an empty in-memory store
    pub fn in_memory(config: InterchangeConfig) -> Self {
        Self::new(Arc::new(MemoryListRepository::new()), config)
    }
}

/// Start the rolling file logger under `log_dir`
pub fn init_logging(log_dir: &Path) -> Result<(), String> {
    rolling_logger::init_logger(log_dir, "ListHappens")?;
    let _ = rolling_logger::info("Logging initialized");
    Ok(())
}
