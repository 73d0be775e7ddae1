//! List Interchange
//!
//! Export: payload builder -> JSON text or compressed transport text.
//! Import: transport decode or JSON parse -> schema check -> store writes.

mod error;
pub mod codec;
pub mod import;
pub mod payload;
pub mod schema;

pub use codec::{check_capacity, decode, encode, to_json_text, TransportPacket, QR_CAPACITY_BYTES};
pub use error::{InterchangeError, InterchangeResult, TransportDecodeError};
pub use import::{import_payload, parse_input, ImportSource};
pub use payload::{
    build_backup, build_full, build_minimal, BackupPayload, ExportItem, ExportMode, ExportPayload,
};
pub use schema::{is_valid_export, validate, ImportDocument, ImportItem};
