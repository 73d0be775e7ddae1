//! Import Commands

use std::path::Path;

use crate::interchange::{self, ImportSource};
use crate::AppState;
use super::user_error;

/// Import pasted JSON or a scanned QR string, returning the new list id
pub async fn import_list(state: &AppState, raw: &str, source: ImportSource) -> Result<u32, String> {
    interchange::import_payload(state.repo.as_ref(), raw, source)
        .await
        .map_err(user_error)
}

/// Import a shared `.json` file
pub async fn import_list_file(state: &AppState, path: &Path) -> Result<u32, String> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read import file: {}", e))?;
    import_list(state, &json, ImportSource::JsonText).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterchangeConfig;

    #[tokio::test]
    async fn test_errors_become_user_messages() {
        let state = AppState::in_memory(InterchangeConfig::default());

        let cases = [
            ("{oops", ImportSource::JsonText, "Invalid JSON format"),
            (r#"{"items": []}"#, ImportSource::JsonText, "Unsupported import format"),
            ("%%%", ImportSource::TransportText, "Invalid QR code data"),
        ];
        for (raw, source, message) in cases {
            assert_eq!(import_list(&state, raw, source).await, Err(message.to_string()));
        }
        assert!(state.repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_import_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list-1.json");
        std::fs::write(&path, r#"{"name":"Shared","items":[{"title":"One"},{"title":"Two"}]}"#)
            .unwrap();
        let state = AppState::in_memory(InterchangeConfig::default());

        let id = import_list_file(&state, &path).await.unwrap();

        let list = state.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(list.name, "Shared");
        assert_eq!(list.items.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let state = AppState::in_memory(InterchangeConfig::default());
        let result = import_list_file(&state, Path::new("/nonexistent/list.json")).await;
        assert!(result.is_err());
    }
}
