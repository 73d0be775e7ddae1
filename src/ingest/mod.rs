//! Bulk Ingestion
//!
//! Pasted or recognized text -> candidate titles -> staged session ->
//! optional cleaning -> commit or discard.

mod normalize;
mod ocr;
mod session;

pub use normalize::{clean_title, normalize};
pub use ocr::{stage_from_image, ImageHandle, TextRecognizer};
pub use session::StagedBulkSession;
