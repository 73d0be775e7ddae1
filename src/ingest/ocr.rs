//! OCR staging
//!
//! Text recognition is an external collaborator. Its result feeds the same
//! normalizer as pasted text. Dropping the returned future abandons the
//! recognition; nothing is staged until it resolves.

use async_trait::async_trait;

use crate::config::InterchangeConfig;
use crate::interchange::{InterchangeError, InterchangeResult};
use super::session::StagedBulkSession;

/// Opaque reference to a picked or captured image (usually a URI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle(pub String);

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognized text, or `None` when recognition failed or found nothing
    async fn recognize_text(&self, image: &ImageHandle) -> Option<String>;
}

pub async fn stage_from_image<T>(
    recognizer: &T,
    image: &ImageHandle,
    config: &InterchangeConfig,
) -> InterchangeResult<StagedBulkSession>
where
    T: TextRecognizer + ?Sized,
{
    match recognizer.recognize_text(image).await {
        Some(text) => StagedBulkSession::stage(&text, config),
        None => {
            log::warn!("No text recognized in {}", image.0);
            Err(InterchangeError::NothingToImport)
        }
    }
}
