// File: src/persistence.rs
//! The persisted document and where it lives.
//!
//! Every field carries a serde default, so documents written by older
//! versions keep loading as fields are added.
use crate::error::StorageError;
use crate::filter::FilterData;
use crate::learning::UsageData;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// One of the three user-defined quick-insert characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomCharacterSlot {
    First,
    Second,
    Third,
}

impl CustomCharacterSlot {
    pub const ALL: [CustomCharacterSlot; 3] = [Self::First, Self::Second, Self::Third];

    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsDocument", into = "SettingsDocument")]
pub struct SettingsData {
    /// Set by filter and custom character changes; cleared on reinitialization.
    pub modified: bool,
    pub filter: FilterData,
    pub custom_characters: [String; 3],
}

/// On-disk layout of [`SettingsData`]: one key per custom character slot.
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SettingsDocument {
    modified: bool,
    filter: FilterData,
    custom_character1: String,
    custom_character2: String,
    custom_character3: String,
}

impl From<SettingsDocument> for SettingsData {
    fn from(document: SettingsDocument) -> Self {
        Self {
            modified: document.modified,
            filter: document.filter,
            custom_characters: [
                document.custom_character1,
                document.custom_character2,
                document.custom_character3,
            ],
        }
    }
}

impl From<SettingsData> for SettingsDocument {
    fn from(settings: SettingsData) -> Self {
        let [custom_character1, custom_character2, custom_character3] = settings.custom_characters;
        Self {
            modified: settings.modified,
            filter: settings.filter,
            custom_character1,
            custom_character2,
            custom_character3,
        }
    }
}

impl SettingsData {
    pub fn custom_character(&self, slot: CustomCharacterSlot) -> &str {
        &self.custom_characters[slot.index()]
    }

    pub fn set_custom_character(&mut self, slot: CustomCharacterSlot, character: String) {
        self.custom_characters[slot.index()] = character;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    pub initialized: bool,
    pub settings: SettingsData,
    pub usage: UsageData,
}

/// Backend holding the document. Reads return the whole document and writes
/// replace it whole.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn load(&self) -> Result<SaveData, StorageError>;
    async fn save(&self, data: &SaveData) -> Result<(), StorageError>;
}

/// JSON document on disk, replaced atomically on every save.
pub struct FileDataStore {
    path: PathBuf,
}

impl FileDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_document(path: &Path) -> Result<SaveData, StorageError> {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Deserialization(e.to_string())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No data file at {:?}, starting fresh", path);
            Ok(SaveData::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_document(path: &Path, json: &[u8]) -> Result<(), StorageError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(json)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

fn join_error(e: tokio::task::JoinError) -> StorageError {
    StorageError::Io(std::io::Error::other(e))
}

#[async_trait]
impl DataStore for FileDataStore {
    async fn load(&self) -> Result<SaveData, StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_document(&path))
            .await
            .map_err(join_error)?
    }

    async fn save(&self, data: &SaveData) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(data).map_err(|e| StorageError::Serialization(e.to_string()))?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_document(&path, &json))
            .await
            .map_err(join_error)??;
        tracing::debug!("Saved data to {:?}", self.path);
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryDataStore {
    data: Mutex<Option<SaveData>>,
    fail_writes: AtomicBool,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: SaveData) -> Self {
        Self { data: Mutex::new(Some(data)), fail_writes: AtomicBool::new(false) }
    }

    /// Makes subsequent saves fail, to exercise error paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Option<SaveData> {
        self.data.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn load(&self) -> Result<SaveData, StorageError> {
        Ok(self.snapshot().unwrap_or_default())
    }

    async fn save(&self, data: &SaveData) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("writes disabled")));
        }
        *self.data.lock().unwrap_or_else(|e| e.into_inner()) = Some(data.clone());
        Ok(())
    }
}
