// File: src/initializer.rs
use crate::core::engine::CharacterService;
use crate::error::Result;
use crate::persistence::SettingsData;
use crate::store::RootDataStore;
use std::sync::Arc;

/// What [`DataInitializer::initialize_data`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialization {
    /// No document existed yet; defaults were written.
    FirstRun,
    /// Settings were changed since the last start; caches were dropped.
    Reloaded,
    Unchanged,
}

/// Brings the persisted document into a usable state at startup.
pub struct DataInitializer {
    root: Arc<RootDataStore>,
    service: Arc<CharacterService>,
}

impl DataInitializer {
    pub fn new(root: Arc<RootDataStore>, service: Arc<CharacterService>) -> Self {
        Self { root, service }
    }

    pub async fn initialize_data(&self) -> Result<Initialization> {
        let data = self.root.get_save_data().await;

        if !data.initialized {
            self.root
                .update(|data| {
                    data.initialized = true;
                    data.settings = SettingsData::default();
                    Ok(())
                })
                .await?;
            self.service.invalidate().await;
            tracing::info!("Initialized settings with defaults");
            return Ok(Initialization::FirstRun);
        }

        data.settings.filter.validate()?;

        if data.settings.modified {
            self.root
                .update(|data| {
                    data.settings.modified = false;
                    Ok(())
                })
                .await?;
            self.service.invalidate().await;
            tracing::info!("Settings were modified, dropped cached search data");
            return Ok(Initialization::Reloaded);
        }

        Ok(Initialization::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CodepointInterval, UsageInfo};
    use crate::error::{ConfigurityError, Error};
    use crate::persistence::{MemoryDataStore, SaveData};
    use crate::store::SettingsStore;
    use chrono::Utc;

    async fn setup(data: SaveData) -> (Arc<MemoryDataStore>, Arc<RootDataStore>, DataInitializer) {
        let backend = Arc::new(MemoryDataStore::with_data(data));
        let root = Arc::new(RootDataStore::open(backend.clone()).await.unwrap());
        let service = Arc::new(CharacterService::new(root.clone(), Vec::new()));
        let initializer = DataInitializer::new(root.clone(), service);
        (backend, root, initializer)
    }

    #[tokio::test]
    async fn test_first_run_writes_defaults_and_keeps_usage() {
        let mut data = SaveData::default();
        data.usage.insert('x', UsageInfo::first_use(Utc::now()));
        let (backend, root, initializer) = setup(data).await;

        assert_eq!(initializer.initialize_data().await.unwrap(), Initialization::FirstRun);

        let persisted = backend.snapshot().unwrap();
        assert!(persisted.initialized);
        assert_eq!(persisted.settings, SettingsData::default());
        assert!(persisted.usage.contains_key(&'x'));

        assert_eq!(initializer.initialize_data().await.unwrap(), Initialization::Unchanged);
        assert!(root.get_save_data().await.initialized);
    }

    #[tokio::test]
    async fn test_modified_flag_is_consumed() {
        let mut data = SaveData { initialized: true, ..SaveData::default() };
        data.settings.modified = true;
        let (backend, _, initializer) = setup(data).await;

        assert_eq!(initializer.initialize_data().await.unwrap(), Initialization::Reloaded);
        assert!(!backend.snapshot().unwrap().settings.modified);
        assert_eq!(initializer.initialize_data().await.unwrap(), Initialization::Unchanged);
    }

    #[tokio::test]
    async fn test_foreign_filter_is_reported() {
        let mut data = SaveData { initialized: true, ..SaveData::default() };
        data.settings.filter.planes[0].blocks[0].interval = CodepointInterval::new(0x0000, 0x0010);
        let (_, _, initializer) = setup(data).await;

        let err = initializer.initialize_data().await.unwrap_err();
        assert!(matches!(err, Error::Configurity(ConfigurityError::FilterMismatch(_))));
    }

    #[tokio::test]
    async fn test_reset_filter_recovers_foreign_filter() {
        let mut data = SaveData { initialized: true, ..SaveData::default() };
        data.settings.filter.planes[0].blocks[0].interval = CodepointInterval::new(0x0000, 0x0010);
        let (backend, root, initializer) = setup(data).await;
        assert!(initializer.initialize_data().await.is_err());

        SettingsStore::new(root).reset_filter().await.unwrap();
        assert_eq!(initializer.initialize_data().await.unwrap(), Initialization::Reloaded);
        let persisted = backend.snapshot().unwrap();
        assert!(!persisted.settings.modified);
        persisted.settings.filter.validate().unwrap();
    }
}
