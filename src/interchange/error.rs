//! Interchange error taxonomy.

use thiserror::Error;

use crate::domain::DomainError;

/// Why a transport string could not be turned back into JSON.
///
/// All three surface as the same "invalid code" message, but stay distinct
/// for diagnostics.
#[derive(Debug, Error)]
pub enum TransportDecodeError {
    #[error("transport text is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("decoded bytes are not a valid gzip stream: {0}")]
    InvalidCompression(#[source] std::io::Error),
    #[error("decompressed bytes are not UTF-8 JSON text: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error(transparent)]
    TransportDecode(#[from] TransportDecodeError),
    #[error("malformed JSON text: {0}")]
    JsonParse(#[source] serde_json::Error),
    #[error("payload does not match the list schema: {0}")]
    Schema(String),
    #[error("compressed payload is {compressed_len} bytes, QR capacity is {capacity}")]
    SizeLimit { compressed_len: usize, capacity: usize },
    #[error("no items found in input")]
    NothingToImport,
    #[error("failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to compress payload: {0}")]
    Compress(#[source] std::io::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl InterchangeError {
    /// Text shown to the user when the operation is abandoned
    pub fn user_message(&self) -> &'static str {
        match self {
            InterchangeError::TransportDecode(_) => "Invalid QR code data",
            InterchangeError::JsonParse(_) => "Invalid JSON format",
            InterchangeError::Schema(_) => "Unsupported import format",
            InterchangeError::SizeLimit { .. } => {
                "This list is too large to export via QR. Try sharing JSON instead."
            }
            InterchangeError::NothingToImport => "Nothing to import",
            InterchangeError::Serialize(_) | InterchangeError::Compress(_) => {
                "Unable to export this list"
            }
            InterchangeError::Domain(_) => "Unable to save the imported list",
        }
    }
}

pub type InterchangeResult<T> = Result<T, InterchangeError>;
