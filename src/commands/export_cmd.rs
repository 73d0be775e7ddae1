//! Export Commands
//!
//! JSON text, QR transport, per-list file and full backup exports.

use std::path::{Path, PathBuf};

use crate::interchange::{self, build_backup, ExportMode, ExportPayload};
use crate::AppState;
use super::user_error;

async fn build_payload(
    state: &AppState,
    list_id: u32,
    mode: ExportMode,
) -> Result<Option<ExportPayload>, String> {
    let list = state.repo.find_by_id(list_id).await.map_err(|e| e.to_string())?;
    Ok(mode.build(list.as_ref()))
}

/// JSON text for clipboard or share-text. `None` when the list is gone.
pub async fn export_list_json(
    state: &AppState,
    list_id: u32,
    mode: ExportMode,
) -> Result<Option<String>, String> {
    let Some(payload) = build_payload(state, list_id, mode).await? else {
        return Ok(None);
    };
    interchange::to_json_text(&payload, state.config.pretty_json)
        .map(Some)
        .map_err(user_error)
}

/// Transport text ready for QR rendering.
///
/// Fails before anything is rendered when the compressed payload exceeds
/// the configured capacity.
pub async fn export_list_qr(state: &AppState, list_id: u32) -> Result<Option<String>, String> {
    let Some(payload) = build_payload(state, list_id, ExportMode::Minimal).await? else {
        return Ok(None);
    };

    let packet = interchange::encode(&payload).map_err(user_error)?;
    let transport = packet
        .for_qr(state.config.qr_capacity_bytes)
        .map_err(user_error)?;
    Ok(Some(transport.to_string()))
}

/// Write `list-<id>.json` into `dir` for share-sheet handoff
pub async fn export_list_file(
    state: &AppState,
    list_id: u32,
    dir: &Path,
) -> Result<Option<PathBuf>, String> {
    let Some(json) = export_list_json(state, list_id, ExportMode::Minimal).await? else {
        return Ok(None);
    };

    let path = dir.join(format!("list-{}.json", list_id));
    tokio::fs::write(&path, json)
        .await
        .map_err(|e| format!("Failed to write export file: {}", e))?;
    log::info!("Exported list {} to {}", list_id, path.display());
    Ok(Some(path))
}

/// Write every list into `dir/backup.json`
pub async fn backup_all_lists(state: &AppState, dir: &Path) -> Result<PathBuf, String> {
    let lists = state.repo.list().await.map_err(|e| e.to_string())?;
    let backup = build_backup(&lists, chrono::Local::now().timestamp_millis());
    let json = interchange::to_json_text(&backup, true).map_err(user_error)?;

    let path = dir.join("backup.json");
    tokio::fs::write(&path, json)
        .await
        .map_err(|e| format!("Failed to write backup: {}", e))?;
    log::info!("Backed up {} list(s) to {}", lists.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterchangeConfig;
    use crate::domain::NewItem;
    use crate::interchange::ImportSource;
    use serde_json::Value;

    async fn state_with_list(config: InterchangeConfig) -> (AppState, u32) {
        let state = AppState::in_memory(config);
        let list_id = state.repo.create_list("Trip").await.unwrap();
        for title in ["Passport", "Charger", "Sunscreen"] {
            state.repo.add_item(list_id, NewItem::titled(title)).await.unwrap();
        }
        (state, list_id)
    }

    #[tokio::test]
    async fn test_json_export_modes() {
        let (state, list_id) = state_with_list(InterchangeConfig::default()).await;

        let minimal = export_list_json(&state, list_id, ExportMode::Minimal)
            .await
            .unwrap()
            .unwrap();
        let full = export_list_json(&state, list_id, ExportMode::Full)
            .await
            .unwrap()
            .unwrap();

        let minimal: Value = serde_json::from_str(&minimal).unwrap();
        let full: Value = serde_json::from_str(&full).unwrap();
        assert!(minimal["items"][0].get("id").is_none());
        assert!(full["items"][0].get("id").is_some());
        assert_eq!(minimal["items"][2]["title"], "Sunscreen");
    }

    #[tokio::test]
    async fn test_missing_list_exports_nothing() {
        let state = AppState::in_memory(InterchangeConfig::default());

        assert_eq!(export_list_json(&state, 42, ExportMode::Minimal).await, Ok(None));
        assert_eq!(export_list_qr(&state, 42).await, Ok(None));
    }

    #[tokio::test]
    async fn test_qr_export_imports_back() {
        let (state, list_id) = state_with_list(InterchangeConfig::default()).await;

        let transport = export_list_qr(&state, list_id).await.unwrap().unwrap();
        let new_id = crate::commands::import_list(&state, &transport, ImportSource::TransportText)
            .await
            .unwrap();

        let copy = state.repo.find_by_id(new_id).await.unwrap().unwrap();
        let titles: Vec<_> = copy.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Passport", "Charger", "Sunscreen"]);
    }

    #[tokio::test]
    async fn test_qr_export_over_capacity() {
        let config = InterchangeConfig {
            qr_capacity_bytes: 10,
            ..Default::default()
        };
        let (state, list_id) = state_with_list(config).await;

        let err = export_list_qr(&state, list_id).await.unwrap_err();
        assert_eq!(err, "This list is too large to export via QR. Try sharing JSON instead.");
    }

    #[tokio::test]
    async fn test_file_export_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let (state, list_id) = state_with_list(InterchangeConfig::default()).await;

        let path = export_list_file(&state, list_id, dir.path()).await.unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), format!("list-{}.json", list_id).as_str());
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "Trip");

        let backup = backup_all_lists(&state, dir.path()).await.unwrap();
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&backup).unwrap()).unwrap();
        assert_eq!(written["version"], 1);
        assert_eq!(written["lists"][0]["items"].as_array().unwrap().len(), 3);
    }
}
