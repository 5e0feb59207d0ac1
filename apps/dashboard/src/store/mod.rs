//! ProfileStore: owns the single profile record and mirrors it to a
//! key-value slot.
//!
//! Every `update` persists the full record. `load` replaces the record
//! wholesale with whatever the slot holds; unparseable content is reported as
//! `StoreError::CorruptState` and the in-memory record is kept.

pub mod merge;
pub mod slot;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::StoreError;
use crate::models::profile::{ProfilePatch, ProfileRecord};

pub use merge::MergeStrategy;
pub use slot::{FileSlot, MemorySlot, StorageSlot};

/// Slot key the profile is persisted under.
pub const PROFILE_SLOT_KEY: &str = "profileData";

pub struct ProfileStore {
    record: RwLock<ProfileRecord>,
    slot: Arc<dyn StorageSlot>,
    key: String,
}

impl ProfileStore {
    /// Creates a store seeded with the sample profile. Nothing is read from the
    /// slot until `load` is called.
    pub fn new(slot: Arc<dyn StorageSlot>) -> Self {
        Self::with_key(slot, PROFILE_SLOT_KEY)
    }

    pub fn with_key(slot: Arc<dyn StorageSlot>, key: impl Into<String>) -> Self {
        Self::with_record(slot, key, ProfileRecord::default())
    }

    pub fn with_record(
        slot: Arc<dyn StorageSlot>,
        key: impl Into<String>,
        record: ProfileRecord,
    ) -> Self {
        Self {
            record: RwLock::new(record),
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot of the current record. Later updates do not show through it.
    pub async fn get(&self) -> ProfileRecord {
        self.record.read().await.clone()
    }

    /// Shallow-merges `patch` into the record, persists, and returns the result.
    pub async fn update(&self, patch: ProfilePatch) -> Result<ProfileRecord, StoreError> {
        self.update_with(patch, MergeStrategy::Shallow).await
    }

    /// Merges `patch` with an explicit strategy, persists, and returns the
    /// result.
    ///
    /// The merge is applied before persisting; if the write fails the merged
    /// record stays in memory and the storage error is returned.
    pub async fn update_with(
        &self,
        patch: ProfilePatch,
        strategy: MergeStrategy,
    ) -> Result<ProfileRecord, StoreError> {
        let mut record = self.record.write().await;
        debug!(
            "Merging {} key(s) into profile ({:?})",
            patch.len(),
            strategy
        );
        strategy.apply(record.as_map_mut(), patch.into_map());

        let snapshot = record.clone();
        self.persist(&snapshot).await?;
        Ok(snapshot)
    }

    /// Writes the full record to the slot.
    pub async fn save(&self) -> Result<(), StoreError> {
        let record = self.record.read().await;
        self.persist(&record).await
    }

    /// Replaces the record with the slot's contents, if any.
    pub async fn load(&self) -> Result<ProfileRecord, StoreError> {
        let mut record = self.record.write().await;

        // An empty value counts as never written.
        let raw = match self.slot.read(&self.key).await? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!("Slot '{}' is empty; keeping current profile", self.key);
                return Ok(record.clone());
            }
        };

        match ProfileRecord::from_json(&self.key, &raw) {
            Ok(loaded) => {
                *record = loaded;
                info!("Profile loaded from slot '{}'", self.key);
                Ok(record.clone())
            }
            Err(e) => {
                warn!("Ignoring unreadable profile in slot '{}': {e}", self.key);
                Err(e)
            }
        }
    }

    async fn persist(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let serialized = record.to_json()?;
        self.slot.write(&self.key, &serialized).await
    }
}
