//! File-based Journal Store
//!
//! Stores entries, drafts and the current mood as YAML files on disk,
//! one directory per user:
//!
//! ```text
//! <base>/<user>/entries/<entry_id>.yaml
//! <base>/<user>/drafts/<draft_id>.yaml
//! <base>/<user>/mood.yaml
//! ```
//!
//! User ids are escaped so they are always a single safe path component.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::foundation::{DomainError, DraftId, EntryId, ErrorCode, UserId};
use crate::domain::journal::{Draft, JournalEntry};
use crate::domain::mood::MoodCheckIn;
use crate::ports::{DraftRepository, JournalRepository, MoodRepository};

const ENTRIES_DIR: &str = "entries";
const DRAFTS_DIR: &str = "drafts";
const MOOD_FILE: &str = "mood.yaml";

/// Failures of the file store.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize {path}: {message}")]
    Serialization { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Deserialization { path: String, message: String },
}

impl FileStoreError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        FileStoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<FileStoreError> for DomainError {
    fn from(err: FileStoreError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// File-based storage for a user's journal.
#[derive(Debug, Clone)]
pub struct FileJournalStore {
    base_path: PathBuf,
}

impl FileJournalStore {
    /// Create a store rooted at `base_path`. Directories are created lazily.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn user_dir(&self, user_id: &UserId) -> PathBuf {
        self.base_path.join(escape_component(user_id.as_str()))
    }

    fn entry_path(&self, user_id: &UserId, id: &EntryId) -> PathBuf {
        self.user_dir(user_id)
            .join(ENTRIES_DIR)
            .join(format!("{}.yaml", id))
    }

    fn draft_path(&self, user_id: &UserId, id: &DraftId) -> PathBuf {
        self.user_dir(user_id)
            .join(DRAFTS_DIR)
            .join(format!("{}.yaml", id))
    }

    fn mood_path(&self, user_id: &UserId) -> PathBuf {
        self.user_dir(user_id).join(MOOD_FILE)
    }

    /// Finds `<user>/<kind>/<file_name>` under any user directory.
    async fn locate(&self, kind: &str, file_name: &str) -> Result<Option<PathBuf>, FileStoreError> {
        let mut users = match fs::read_dir(&self.base_path).await {
            Ok(users) => users,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FileStoreError::io(&self.base_path, e)),
        };

        while let Some(user_dir) = users
            .next_entry()
            .await
            .map_err(|e| FileStoreError::io(&self.base_path, e))?
        {
            let candidate = user_dir.path().join(kind).join(file_name);
            if fs::try_exists(&candidate)
                .await
                .map_err(|e| FileStoreError::io(&candidate, e))?
            {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// YAML helpers
// ════════════════════════════════════════════════════════════════════════════

async fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), FileStoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| FileStoreError::io(dir, e))?;
    }

    let yaml = serde_yaml::to_string(value).map_err(|e| FileStoreError::Serialization {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    fs::write(path, yaml)
        .await
        .map_err(|e| FileStoreError::io(path, e))
}

async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, FileStoreError> {
    let yaml = match fs::read_to_string(path).await {
        Ok(yaml) => yaml,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(FileStoreError::io(path, e)),
    };

    serde_yaml::from_str(&yaml)
        .map(Some)
        .map_err(|e| FileStoreError::Deserialization {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Reads every `*.yaml` file in `dir`. A missing directory is empty.
async fn read_all_yaml<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, FileStoreError> {
    let mut files = match fs::read_dir(dir).await {
        Ok(files) => files,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(FileStoreError::io(dir, e)),
    };

    let mut items = Vec::new();
    while let Some(file) = files
        .next_entry()
        .await
        .map_err(|e| FileStoreError::io(dir, e))?
    {
        let path = file.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
            continue;
        }
        if let Some(item) = read_yaml(&path).await? {
            items.push(item);
        }
    }
    Ok(items)
}

/// Keeps `[A-Za-z0-9_-]` and percent-escapes every other byte.
fn escape_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

// ════════════════════════════════════════════════════════════════════════════
// Ports
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl JournalRepository for FileJournalStore {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let path = self.entry_path(&entry.user_id, &entry.id);
        Ok(write_yaml(&path, entry).await?)
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError> {
        let file_name = format!("{}.yaml", id);
        match self.locate(ENTRIES_DIR, &file_name).await? {
            Some(path) => Ok(read_yaml(&path).await?),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let dir = self.user_dir(user_id).join(ENTRIES_DIR);
        let mut entries: Vec<JournalEntry> = read_all_yaml(&dir).await?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

#[async_trait]
impl DraftRepository for FileJournalStore {
    async fn save(&self, draft: &Draft) -> Result<(), DomainError> {
        let path = self.draft_path(&draft.user_id, &draft.id);
        Ok(write_yaml(&path, draft).await?)
    }

    async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, DomainError> {
        let file_name = format!("{}.yaml", id);
        match self.locate(DRAFTS_DIR, &file_name).await? {
            Some(path) => Ok(read_yaml(&path).await?),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Draft>, DomainError> {
        let dir = self.user_dir(user_id).join(DRAFTS_DIR);
        let mut drafts: Vec<Draft> = read_all_yaml(&dir).await?;
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drafts)
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, DomainError> {
        Ok(DraftRepository::list_by_user(self, user_id).await?.len())
    }

    async fn delete(&self, id: &DraftId) -> Result<(), DomainError> {
        let file_name = format!("{}.yaml", id);
        let path = self.locate(DRAFTS_DIR, &file_name).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::DraftNotFound, format!("Draft not found: {}", id))
        })?;

        fs::remove_file(&path)
            .await
            .map_err(|e| FileStoreError::io(&path, e))?;
        Ok(())
    }
}

#[async_trait]
impl MoodRepository for FileJournalStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<MoodCheckIn>, DomainError> {
        Ok(read_yaml(&self.mood_path(user_id)).await?)
    }

    async fn save(&self, check_in: &MoodCheckIn) -> Result<(), DomainError> {
        let path = self.mood_path(check_in.user_id());
        Ok(write_yaml(&path, check_in).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ReflectionId, Timestamp};
    use crate::domain::mood::Feeling;
    use crate::domain::reflection::{CompletedSession, DraftSnapshot, ReflectionPath};
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn entry(user_id: UserId, hours_from_now: i64) -> JournalEntry {
        JournalEntry::from_completed(
            user_id,
            ReflectionId::new(),
            CompletedSession {
                path: ReflectionPath::Fight,
                answers: vec!["frustrated".into(), "".into()],
                questions: vec!["What you feel right now?".into(), "What happened?".into()],
            },
            Timestamp::now().plus_hours(hours_from_now),
        )
    }

    fn draft(user_id: UserId) -> Draft {
        Draft::from_snapshot(
            user_id,
            ReflectionId::new(),
            DraftSnapshot {
                path: ReflectionPath::Accept,
                answers: vec!["anxious, tense".into(), "".into()],
                questions: vec!["q1".into(), "q2".into()],
                current_step: 1,
            },
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn entry_is_written_as_yaml_under_user_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileJournalStore::new(temp_dir.path());
        let saved = entry(user("user-1"), 0);

        JournalRepository::save(&store, &saved).await.unwrap();

        let path = temp_dir
            .path()
            .join("user-1")
            .join("entries")
            .join(format!("{}.yaml", saved.id));
        let yaml = std::fs::read_to_string(path).unwrap();
        assert!(yaml.contains("path: fight"));
        assert!(yaml.contains("frustrated"));
    }

    #[tokio::test]
    async fn entries_survive_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let older = entry(user("user-1"), -24);
        let newer = entry(user("user-1"), 0);
        {
            let store = FileJournalStore::new(temp_dir.path());
            JournalRepository::save(&store, &older).await.unwrap();
            JournalRepository::save(&store, &newer).await.unwrap();
        }

        let store = FileJournalStore::new(temp_dir.path());
        let listed = JournalRepository::list_by_user(&store, &user("user-1"))
            .await
            .unwrap();

        assert_eq!(listed, vec![newer.clone(), older]);
        let found = JournalRepository::find_by_id(&store, &newer.id).await.unwrap();
        assert_eq!(found, Some(newer));
    }

    #[tokio::test]
    async fn missing_data_is_empty_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileJournalStore::new(temp_dir.path().join("not-created-yet"));

        assert!(JournalRepository::list_by_user(&store, &user("nobody"))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            JournalRepository::find_by_id(&store, &EntryId::new()).await.unwrap(),
            None
        );
        assert_eq!(MoodRepository::load(&store, &user("nobody")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn drafts_save_count_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileJournalStore::new(temp_dir.path());
        let kept = draft(user("user-1"));
        DraftRepository::save(&store, &kept).await.unwrap();
        DraftRepository::save(&store, &draft(user("user-1"))).await.unwrap();

        assert_eq!(store.count_by_user(&user("user-1")).await.unwrap(), 2);

        store.delete(&kept.id).await.unwrap();
        assert_eq!(store.count_by_user(&user("user-1")).await.unwrap(), 1);

        let err = store.delete(&kept.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DraftNotFound);
    }

    #[tokio::test]
    async fn mood_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileJournalStore::new(temp_dir.path());
        let mut check_in = MoodCheckIn::empty(user("user-1"));
        check_in.set(Feeling::Worried, Timestamp::now());

        MoodRepository::save(&store, &check_in).await.unwrap();

        let loaded = MoodRepository::load(&store, &user("user-1")).await.unwrap();
        assert_eq!(loaded, Some(check_in));
    }

    #[tokio::test]
    async fn hostile_user_ids_stay_inside_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileJournalStore::new(temp_dir.path());
        let saved = entry(user("../escape"), 0);

        JournalRepository::save(&store, &saved).await.unwrap();

        assert!(temp_dir.path().join("%2E%2E%2Fescape").is_dir());
        let listed = JournalRepository::list_by_user(&store, &user("../escape"))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("user-1").join("entries");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("broken.yaml"), "{ not: [valid").unwrap();
        let store = FileJournalStore::new(temp_dir.path());

        let err = JournalRepository::list_by_user(&store, &user("user-1"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn escape_keeps_safe_characters() {
        assert_eq!(escape_component("user_1-A"), "user_1-A");
        assert_eq!(escape_component("a b"), "a%20b");
    }
}
