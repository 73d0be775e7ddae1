//! Compression Transport Codec
//!
//! payload -> compact JSON -> UTF-8 bytes -> gzip -> standard base64, and back.
//! The gzip header carries no timestamp, so identical payloads always encode
//! to identical transport text.

use std::io::{Read, Write};

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use serde_json::Value;

use super::error::{InterchangeError, InterchangeResult, TransportDecodeError};

/// Maximum compressed bytes that still render as a scannable QR symbol
pub const QR_CAPACITY_BYTES: usize = 1200;

/// Standard alphabet that accepts input with or without `=` padding
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encoded form of one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPacket {
    /// Compact JSON text that was compressed
    pub json: String,
    /// base64 of the gzip stream
    pub transport: String,
    pub raw_len: usize,
    pub compressed_len: usize,
}

impl TransportPacket {
    /// Capacity gate for the QR transport.
    ///
    /// Hands back the transport text only when the compressed size fits;
    /// nothing should be rendered otherwise.
    pub fn for_qr(&self, capacity: usize) -> InterchangeResult<&str> {
        check_capacity(self.compressed_len, capacity)?;
        Ok(&self.transport)
    }
}

pub fn check_capacity(compressed_len: usize, capacity: usize) -> InterchangeResult<()> {
    if compressed_len > capacity {
        return Err(InterchangeError::SizeLimit {
            compressed_len,
            capacity,
        });
    }
    Ok(())
}

/// JSON text transport (clipboard, share text, file)
pub fn to_json_text<T: Serialize>(payload: &T, pretty: bool) -> InterchangeResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(payload)
    } else {
        serde_json::to_string(payload)
    };
    text.map_err(InterchangeError::Serialize)
}

pub fn encode<T: Serialize>(payload: &T) -> InterchangeResult<TransportPacket> {
    let json = serde_json::to_string(payload).map_err(InterchangeError::Serialize)?;
    let compressed = compress(json.as_bytes()).map_err(InterchangeError::Compress)?;
    let transport = STANDARD.encode(&compressed);

    log::debug!(
        "Encoded payload: {} raw bytes -> {} compressed bytes",
        json.len(),
        compressed.len()
    );

    Ok(TransportPacket {
        raw_len: json.len(),
        compressed_len: compressed.len(),
        json,
        transport,
    })
}

pub fn decode(transport: &str) -> Result<Value, TransportDecodeError> {
    let compressed = LENIENT_STANDARD.decode(transport.trim())?;
    let bytes = decompress(&compressed).map_err(TransportDecodeError::InvalidCompression)?;
    serde_json::from_slice(&bytes).map_err(TransportDecodeError::InvalidPayload)
}

fn compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

fn decompress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;

    if !decoder.into_inner().is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "trailing bytes after gzip stream",
        ));
    }
    Ok(out)
}
