//! Staged Bulk Session
//!
//! Working set of candidate titles between preview and commit. Owned by
//! one bulk-add interaction and dropped when it ends. Entries are never
//! empty.

use crate::config::InterchangeConfig;
use crate::domain::{DomainResult, NewItem};
use crate::interchange::{InterchangeError, InterchangeResult};
use crate::repository::ListRepository;
use super::normalize::{clean_title, normalize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedBulkSession {
    entries: Vec<String>,
}

impl StagedBulkSession {
    /// Stage raw pasted or recognized text.
    ///
    /// Fails with `NothingToImport` when no usable line remains.
    pub fn stage(raw: &str, config: &InterchangeConfig) -> InterchangeResult<Self> {
        let mut session = Self {
            entries: normalize(raw),
        };
        if config.auto_clean {
            session.clean();
        }

        if session.is_empty() {
            return Err(InterchangeError::NothingToImport);
        }
        log::debug!("Staged {} bulk entries", session.len());
        Ok(session)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove one entry by position. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Strip leading tags from every entry. Entries that were nothing but
    /// tags are dropped.
    pub fn clean(&mut self) {
        self.entries = self
            .entries
            .iter()
            .map(|entry| clean_title(entry))
            .filter(|entry| !entry.is_empty())
            .collect();
    }

    /// Add every entry to `list_id` in order, then clear the session.
    ///
    /// If the store rejects an entry, that entry and everything after it
    /// stay staged and the error is returned.
    pub async fn commit<R>(&mut self, repo: &R, list_id: u32) -> DomainResult<usize>
    where
        R: ListRepository + ?Sized,
    {
        for index in 0..self.entries.len() {
            let item = NewItem::titled(self.entries[index].clone());
            if let Err(e) = repo.add_item(list_id, item).await {
                log::warn!(
                    "Bulk commit to list {} stopped after {} of {} entries: {}",
                    list_id,
                    index,
                    self.entries.len(),
                    e
                );
                self.entries.drain(..index);
                return Err(e);
            }
        }

        let committed = self.entries.len();
        self.entries.clear();
        log::info!("Committed {} bulk entries to list {}", committed, list_id);
        Ok(committed)
    }

    /// Drop everything staged without touching the store
    pub fn discard(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::repository::{MemoryListRepository, Repository};

    const WHATSAPP: &str = "[WA] [10:02] Buy milk\n\nCall mom\n[WA] Pay rent";

    fn manual() -> InterchangeConfig {
        InterchangeConfig {
            auto_clean: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_stage_then_clean() {
        let mut session = StagedBulkSession::stage(WHATSAPP, &manual()).unwrap();
        assert_eq!(session.entries(), ["[WA] [10:02] Buy milk", "Call mom", "[WA] Pay rent"]);

        session.clean();
        assert_eq!(session.entries(), ["Buy milk", "Call mom", "Pay rent"]);

        let before = session.clone();
        session.clean();
        assert_eq!(session, before);
    }

    #[test]
    fn test_auto_clean_on_stage() {
        let session = StagedBulkSession::stage(WHATSAPP, &InterchangeConfig::default()).unwrap();
        assert_eq!(session.entries(), ["Buy milk", "Call mom", "Pay rent"]);
    }

    #[test]
    fn test_blank_input_is_nothing_to_import() {
        for raw in ["", "\n\n  \n"] {
            let err = StagedBulkSession::stage(raw, &manual()).unwrap_err();
            assert!(matches!(err, InterchangeError::NothingToImport));
        }
    }

    #[test]
    fn test_tag_only_lines_vanish_when_cleaned() {
        let err =
            StagedBulkSession::stage("[WA]\n[10:02]", &InterchangeConfig::default()).unwrap_err();
        assert!(matches!(err, InterchangeError::NothingToImport));

        let mut session = StagedBulkSession::stage("[WA]\nkeep", &manual()).unwrap();
        session.clean();
        assert_eq!(session.entries(), ["keep"]);
    }

    #[test]
    fn test_remove_at() {
        let mut session = StagedBulkSession::stage("a\nb\nc", &manual()).unwrap();

        assert_eq!(session.remove_at(1), Some("b".to_string()));
        assert_eq!(session.remove_at(5), None);
        assert_eq!(session.entries(), ["a", "c"]);
    }

    #[tokio::test]
    async fn test_commit_adds_in_order() {
        let repo = MemoryListRepository::new();
        let list_id = repo.create_list("Inbox").await.unwrap();
        let mut session =
            StagedBulkSession::stage(WHATSAPP, &InterchangeConfig::default()).unwrap();

        let committed = session.commit(&repo, list_id).await.unwrap();

        assert_eq!(committed, 3);
        assert!(session.is_empty());
        let list = repo.find_by_id(list_id).await.unwrap().unwrap();
        let titles: Vec<_> = list.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk", "Call mom", "Pay rent"]);
        assert!(list.items.iter().all(|i| {
            i.description.is_empty() && i.due_date.is_none() && i.priority == Priority::Medium
        }));
    }

    #[tokio::test]
    async fn test_commit_empty_session_adds_nothing() {
        let repo = MemoryListRepository::new();
        let list_id = repo.create_list("Inbox").await.unwrap();
        let mut session = StagedBulkSession::default();

        assert_eq!(session.commit(&repo, list_id).await.unwrap(), 0);
        assert!(repo.find_by_id(list_id).await.unwrap().unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_commit_failure_keeps_entries() {
        let repo = MemoryListRepository::new();
        let mut session = StagedBulkSession::stage("a\nb", &manual()).unwrap();

        assert!(session.commit(&repo, 404).await.is_err());
        assert_eq!(session.entries(), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_discard_right_after_stage() {
        let repo = MemoryListRepository::new();
        let list_id = repo.create_list("Inbox").await.unwrap();
        let mut session = StagedBulkSession::stage(WHATSAPP, &manual()).unwrap();

        session.discard();

        assert!(session.is_empty());
        assert_eq!(session.commit(&repo, list_id).await.unwrap(), 0);
        assert!(repo.find_by_id(list_id).await.unwrap().unwrap().items.is_empty());
    }
}
