//! Interchange settings
//!
//! Read at call time and passed in explicitly; nothing here is global.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::interchange::QR_CAPACITY_BYTES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterchangeConfig {
    /// Largest compressed payload allowed on the QR transport
    pub qr_capacity_bytes: usize,
    /// Strip leading `[tag]` prefixes as soon as bulk text is staged
    pub auto_clean: bool,
    /// Indent JSON text exports
    pub pretty_json: bool,
}

impl Default for InterchangeConfig {
    fn default() -> Self {
        Self {
            qr_capacity_bytes: QR_CAPACITY_BYTES,
            auto_clean: true,
            pretty_json: true,
        }
    }
}

impl InterchangeConfig {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self, String> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("Failed to read settings: {}", e)),
        };

        serde_json::from_str(&text).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    pub async fn save(&self, path: &Path) -> Result<(), String> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        tokio::fs::write(path, text)
            .await
            .map_err(|e| format!("Failed to write settings: {}", e))
    }
}
