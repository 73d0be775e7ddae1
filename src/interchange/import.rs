//! Import Orchestrator
//!
//! decode -> validate -> create list -> add items, with exactly one outcome.
//! Nothing is written until validation passes. If the store fails once
//! writing has begun, the half-built list is deleted again.

use serde_json::Value;

use crate::repository::ListRepository;
use super::codec;
use super::error::{InterchangeError, InterchangeResult};
use super::schema::{self, ImportDocument};

/// How the raw import text is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    /// Plain JSON (clipboard paste, shared file)
    JsonText,
    /// base64 gzip text (QR scan)
    TransportText,
}

/// Turn raw input into a validated document without touching the store
pub fn parse_input(raw: &str, source: ImportSource) -> InterchangeResult<ImportDocument> {
    let value: Value = match source {
        ImportSource::TransportText => codec::decode(raw)?,
        ImportSource::JsonText => serde_json::from_str(raw).map_err(InterchangeError::JsonParse)?,
    };
    schema::validate(&value)
}

/// Import a list and return the identity of the newly created list.
///
/// `completed` flags in the payload are not applied: every imported item
/// starts incomplete.
pub async fn import_payload<R>(repo: &R, raw: &str, source: ImportSource) -> InterchangeResult<u32>
where
    R: ListRepository + ?Sized,
{
    let document = match parse_input(raw, source) {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Rejected {:?} import: {}", source, e);
            return Err(e);
        }
    };

    let list_id = repo.create_list(&document.name).await?;

    let dropped_completed = document.items.iter().filter(|i| i.completed).count();
    if dropped_completed > 0 {
        log::warn!(
            "Import of \"{}\" ignores {} completed flag(s); items start incomplete",
            document.name,
            dropped_completed
        );
    }

    for entry in document.items.iter() {
        if let Err(e) = repo.add_item(list_id, entry.item.clone()).await {
            log::error!("Import of list {} failed mid-way, rolling back: {}", list_id, e);
            if let Err(rollback) = repo.delete(list_id).await {
                log::error!("Rollback of list {} failed: {}", list_id, rollback);
            }
            return Err(e.into());
        }
    }

    log::info!(
        "Imported list {} \"{}\" with {} item(s)",
        list_id,
        document.name,
        document.items.len()
    );
    Ok(list_id)
}
