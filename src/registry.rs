use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;

/// On-disk shape of the registry: a bare JSON list of chat ids.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredChats {
    chats: Vec<i64>,
}

/// File-backed list of chats eligible to receive a broadcast.
///
/// Single process, single writer: handlers can interleave at await points,
/// but only the owner id is ever appended, so concurrent registrations
/// cannot drop anyone else. Writes go to a sibling temp file and are
/// renamed into place.
pub struct ChatRegistry {
    path: PathBuf,
    owner: ChatId,
}

impl ChatRegistry {
    pub fn new(path: impl Into<PathBuf>, owner: ChatId) -> Self {
        Self {
            path: path.into(),
            owner,
        }
    }

    /// Persists `chat_id` if it is the owner and not yet recorded.
    /// Returns whether the file was rewritten.
    pub fn record(&self, chat_id: ChatId) -> Result<bool> {
        if chat_id != self.owner {
            return Ok(false);
        }
        let mut stored = self.load()?;
        if stored.chats.contains(&chat_id.0) {
            return Ok(false);
        }
        stored.chats.push(chat_id.0);
        self.write_atomic(&stored)?;
        log::info!("Registered chat {} in {}", chat_id, self.path.display());
        Ok(true)
    }

    /// Every recorded chat id, oldest first. A missing file is an empty
    /// registry, not an error.
    pub fn list_all(&self) -> Result<Vec<ChatId>> {
        Ok(self.load()?.chats.into_iter().map(ChatId).collect())
    }

    fn load(&self) -> Result<StoredChats> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredChats::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON list of chat ids", self.path.display()))
    }

    fn write_atomic(&self, stored: &StoredChats) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = PathBuf::from(format!("{}.tmp", self.path.display()));
        fs::write(&tmp, serde_json::to_vec(stored)?)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    const OWNER: ChatId = ChatId(111);

    fn registry_in(dir: &TempDir) -> ChatRegistry {
        ChatRegistry::new(dir.path().join("chat_ids.json"), OWNER)
    }

    #[test]
    fn test_missing_file_is_an_empty_registry() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir);
        assert_eq!(registry.list_all().unwrap(), Vec::<ChatId>::new());
    }

    #[test]
    fn test_owner_is_recorded_exactly_once() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir);
        assert!(registry.record(OWNER).unwrap());
        assert!(!registry.record(OWNER).unwrap());
        assert_eq!(registry.list_all().unwrap(), vec![OWNER]);
    }

    #[test]
    fn test_non_owner_is_never_persisted() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir);
        assert!(!registry.record(ChatId(222)).unwrap());
        assert_eq!(registry.list_all().unwrap(), Vec::<ChatId>::new());
        // No registration, no file
        assert!(!dir.path().join("chat_ids.json").exists());
    }

    #[test]
    fn test_file_holds_a_json_list_of_integers() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir);
        registry.record(OWNER).unwrap();
        let raw = fs::read_to_string(dir.path().join("chat_ids.json")).unwrap();
        let ids: Vec<i64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec![111]);
    }

    #[test]
    fn test_rewrite_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir);
        registry.record(OWNER).unwrap();
        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        names.sort();
        assert_eq!(names, vec![std::ffi::OsString::from("chat_ids.json")]);
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("chat_ids.json"), "{not json").unwrap();
        let registry = registry_in(&dir);
        assert!(registry.list_all().is_err());
    }
}
