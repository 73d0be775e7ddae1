//! Bulk Add Commands
//!
//! Staging from pasted text or a photo, and committing a reviewed session.

use crate::ingest::{self, ImageHandle, StagedBulkSession, TextRecognizer};
use crate::AppState;
use super::user_error;

pub fn stage_bulk_text(state: &AppState, raw: &str) -> Result<StagedBulkSession, String> {
    StagedBulkSession::stage(raw, &state.config).map_err(user_error)
}

pub async fn stage_bulk_image(
    state: &AppState,
    recognizer: &dyn TextRecognizer,
    image: &ImageHandle,
) -> Result<StagedBulkSession, String> {
    ingest::stage_from_image(recognizer, image, &state.config)
        .await
        .map_err(user_error)
}

/// Add the reviewed entries to `list_id`; returns how many were added
pub async fn commit_bulk(
    state: &AppState,
    session: &mut StagedBulkSession,
    list_id: u32,
) -> Result<usize, String> {
    session
        .commit(state.repo.as_ref(), list_id)
        .await
        .map_err(|e| e.to_string())
}
