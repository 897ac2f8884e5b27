// File: src/store.rs
use crate::core::types::CodepointInterval;
use crate::error::Result;
use crate::filter::FilterData;
use crate::persistence::{CustomCharacterSlot, DataStore, SaveData, SettingsData};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Change counters for the parts of the document derived data depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revisions {
    pub filter: u64,
    pub usage: u64,
}

/// Sole owner of the live document.
///
/// Writes run one at a time: the document lock is held from reading the
/// current state until the backend has stored the new one. A mutation works
/// on a copy that only replaces the live document once it is persisted.
pub struct RootDataStore {
    backend: Arc<dyn DataStore>,
    document: Mutex<SaveData>,
    filter_revision: AtomicU64,
    usage_revision: AtomicU64,
}

impl RootDataStore {
    pub async fn open(backend: Arc<dyn DataStore>) -> Result<Self> {
        let document = backend.load().await?;
        Ok(Self {
            backend,
            document: Mutex::new(document),
            filter_revision: AtomicU64::new(0),
            usage_revision: AtomicU64::new(0),
        })
    }

    pub fn revisions(&self) -> Revisions {
        Revisions {
            filter: self.filter_revision.load(Ordering::SeqCst),
            usage: self.usage_revision.load(Ordering::SeqCst),
        }
    }

    pub async fn get_save_data(&self) -> SaveData {
        self.document.lock().await.clone()
    }

    pub async fn get_settings(&self) -> SettingsData {
        self.document.lock().await.settings.clone()
    }

    /// Applies `mutate` and persists the result. Nothing changes if either fails.
    pub async fn update<R, F>(&self, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut SaveData) -> Result<R>,
    {
        let mut document = self.document.lock().await;
        let mut next = document.clone();
        let result = mutate(&mut next)?;

        if next == *document {
            return Ok(result);
        }
        self.backend.save(&next).await?;

        if next.settings.filter != document.settings.filter {
            self.filter_revision.fetch_add(1, Ordering::SeqCst);
        }
        if next.usage != document.usage {
            self.usage_revision.fetch_add(1, Ordering::SeqCst);
        }
        *document = next;
        Ok(result)
    }
}

/// Settings operations over the shared document.
#[derive(Clone)]
pub struct SettingsStore {
    root: Arc<RootDataStore>,
}

impl SettingsStore {
    pub fn new(root: Arc<RootDataStore>) -> Self {
        Self { root }
    }

    pub async fn get_filter(&self) -> FilterData {
        self.root.get_settings().await.filter
    }

    pub async fn is_modified(&self) -> bool {
        self.root.get_settings().await.modified
    }

    pub async fn get_character_block(&self, block: &CodepointInterval) -> Result<bool> {
        Ok(self.get_filter().await.get_block(block)?)
    }

    pub async fn set_character_block(&self, block: &CodepointInterval, included: bool) -> Result<()> {
        self.root
            .update(|data| {
                data.settings.filter.set_block(block, included)?;
                data.settings.modified = true;
                Ok(())
            })
            .await
    }

    pub async fn get_character_category(&self, category: &str) -> Result<bool> {
        Ok(self.get_filter().await.get_category(category)?)
    }

    pub async fn set_character_category(&self, category: &str, included: bool) -> Result<()> {
        self.root
            .update(|data| {
                data.settings.filter.set_category(category, included)?;
                data.settings.modified = true;
                Ok(())
            })
            .await
    }

    pub async fn get_custom_character(&self, slot: CustomCharacterSlot) -> String {
        self.root.get_settings().await.custom_character(slot).to_owned()
    }

    pub async fn set_custom_character(&self, slot: CustomCharacterSlot, character: impl Into<String>) -> Result<()> {
        let character = character.into();
        self.root
            .update(move |data| {
                data.settings.set_custom_character(slot, character);
                data.settings.modified = true;
                Ok(())
            })
            .await
    }

    /// Fails when the persisted filter was written against other reference tables.
    pub async fn validate_filter(&self) -> Result<()> {
        Ok(self.get_filter().await.validate()?)
    }

    /// Restores the default filter, discarding every toggle.
    pub async fn reset_filter(&self) -> Result<()> {
        self.root
            .update(|data| {
                data.settings.filter = FilterData::default();
                data.settings.modified = true;
                Ok(())
            })
            .await
    }
}
