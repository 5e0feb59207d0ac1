use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::StoreError;
use crate::store::{FileSlot, ProfileStore, StorageSlot};
use crate::ui::favorites::Favorites;
use crate::ui::{FormSubmitter, SearchDebouncer, ToastCenter};

/// Shared application state handed to every UI handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub toasts: ToastCenter,
    pub search: Arc<SearchDebouncer>,
    pub favorites: Arc<Favorites>,
    pub submitter: Arc<FormSubmitter>,
    pub config: Config,
}

impl AppState {
    /// Builds the state over a file slot in `config.data_dir` and loads any
    /// persisted profile.
    pub async fn bootstrap(config: Config) -> Result<Self> {
        let slot: Arc<dyn StorageSlot> = Arc::new(FileSlot::new(&config.data_dir));
        info!("Profile slot directory: {}", config.data_dir.display());
        Self::with_slot(config, slot).await
    }

    /// Same as `bootstrap` with an arbitrary slot backend.
    ///
    /// A corrupt persisted profile is logged and skipped; the seed profile is
    /// used instead. Storage I/O failures are returned.
    pub async fn with_slot(config: Config, slot: Arc<dyn StorageSlot>) -> Result<Self> {
        let store = Arc::new(ProfileStore::with_key(slot, config.profile_key.clone()));
        match store.load().await {
            Ok(_) => {}
            Err(e @ StoreError::CorruptState { .. }) => {
                warn!("Starting from the sample profile: {e}");
            }
            Err(e) => return Err(e.into()),
        }

        let toasts = ToastCenter::new(config.toast_ttl);
        Ok(Self {
            store,
            search: Arc::new(SearchDebouncer::new(config.search_debounce)),
            favorites: Arc::new(Favorites::new()),
            submitter: Arc::new(FormSubmitter::new(config.submit_delay, toasts.clone())),
            toasts,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfilePatch, ProfileRecord};
    use crate::store::MemorySlot;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_loads_persisted_profile() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            data_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };

        let first = AppState::bootstrap(config.clone()).await.unwrap();
        first
            .store
            .update(ProfilePatch::new().set("theme", "dark"))
            .await
            .unwrap();

        let second = AppState::bootstrap(config).await.unwrap();
        assert_eq!(
            second.store.get().await.get("theme"),
            Some(&serde_json::json!("dark"))
        );
    }

    #[tokio::test]
    async fn test_corrupt_slot_falls_back_to_seed() {
        let slot = Arc::new(MemorySlot::new());
        slot.write("profileData", "{{{").await.unwrap();

        let state = AppState::with_slot(Config::default(), slot).await.unwrap();
        assert_eq!(state.store.get().await, ProfileRecord::default());
    }

    #[tokio::test]
    async fn test_store_uses_configured_key() {
        let config = Config {
            profile_key: "studentProfile".to_string(),
            ..Config::default()
        };
        let state = AppState::with_slot(config, Arc::new(MemorySlot::new()))
            .await
            .unwrap();
        assert_eq!(state.store.key(), "studentProfile");
    }
}
