//! Key-value persistence backends for the profile store.
//!
//! A slot holds one string value per key, like browser local storage.
//! `ProfileStore` carries an `Arc<dyn StorageSlot>`, so backends swap without
//! touching the store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::errors::StoreError;

#[async_trait]
pub trait StorageSlot: Send + Sync {
    /// Returns `None` when the key was never written.
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces whatever the key held.
    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local slot. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageSlot for MemorySlot {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written slot.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl StorageSlot for FileSlot {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = self
            .dir
            .join(format!(".{key}.json.{}.tmp", Uuid::new_v4().simple()));
        let written = match tokio::fs::write(&tmp, value).await {
            Ok(()) => tokio::fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_slot_absent_key_is_none() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read("profileData").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_slot_overwrites() {
        let slot = MemorySlot::new();
        slot.write("profileData", "{}").await.unwrap();
        slot.write("profileData", "{\"a\":1}").await.unwrap();
        assert_eq!(
            slot.read("profileData").await.unwrap().as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[tokio::test]
    async fn test_file_slot_creates_directory_on_first_write() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path().join("nested").join("storage"));

        assert_eq!(slot.read("profileData").await.unwrap(), None);
        slot.write("profileData", "{\"stats\":{}}").await.unwrap();

        let on_disk = std::fs::read_to_string(slot.dir().join("profileData.json")).unwrap();
        assert_eq!(on_disk, "{\"stats\":{}}");
        assert_eq!(
            slot.read("profileData").await.unwrap().as_deref(),
            Some("{\"stats\":{}}")
        );
    }

    #[tokio::test]
    async fn test_file_slot_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path());
        slot.write("profileData", "{}").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["profileData.json".to_string()]);
    }

    #[tokio::test]
    async fn test_file_slots_sharing_a_directory_do_not_collide() {
        let tmp = TempDir::new().unwrap();
        let a = FileSlot::new(tmp.path());
        let b = FileSlot::new(tmp.path());

        let (ra, rb) = tokio::join!(
            a.write("profileData", "{\"writer\":\"a\"}"),
            b.write("profileData", "{\"writer\":\"b\"}")
        );
        ra.unwrap();
        rb.unwrap();

        let stored = a.read("profileData").await.unwrap().unwrap();
        assert!(stored == "{\"writer\":\"a\"}" || stored == "{\"writer\":\"b\"}");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let tmp = TempDir::new().unwrap();
        // A directory where the slot file should go makes the rename fail.
        std::fs::create_dir(tmp.path().join("profileData.json")).unwrap();
        std::fs::write(tmp.path().join("profileData.json").join("keep"), "x").unwrap();

        let slot = FileSlot::new(tmp.path());
        assert!(matches!(
            slot.write("profileData", "{}").await,
            Err(StoreError::Io(_))
        ));

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["profileData.json".to_string()]);
    }

    #[tokio::test]
    async fn test_file_slot_rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path());
        for key in ["", "..", "../escape", "a/b", "a\\b"] {
            assert!(
                matches!(slot.write(key, "{}").await, Err(StoreError::InvalidKey(_))),
                "accepted {key:?}"
            );
        }
    }
}
