//! Save file storage

use crate::snapshot::InventorySnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Save storage errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Save file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// JSON (human readable)
    Json,
    /// Binary (compact)
    Binary,
}

impl Default for SaveFormat {
    fn default() -> Self {
        Self::Json
    }
}

/// File-backed snapshot store
pub struct SaveStore {
    /// Save file path
    path: PathBuf,
    /// Save file format
    format: SaveFormat,
}

impl SaveStore {
    /// Create a store writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SaveFormat::default(),
        }
    }

    /// Set save format
    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }

    /// Save file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a save file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a snapshot
    pub fn save(&self, snapshot: &InventorySnapshot) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = match self.format {
            SaveFormat::Json => serde_json::to_vec_pretty(snapshot)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
            SaveFormat::Binary => bincode::serialize(snapshot)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
        };

        fs::write(&self.path, bytes)?;
        Ok(())
    }

    /// Read the snapshot, if a save file exists
    ///
    /// A missing file is not an error.
    pub fn load(&self) -> Result<Option<InventorySnapshot>, SaveError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let snapshot = match self.format {
            SaveFormat::Json => serde_json::from_slice(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
            SaveFormat::Binary => bincode::deserialize(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
        };

        Ok(Some(snapshot))
    }

    /// Read the snapshot, treating unreadable or corrupt files as absent
    pub fn try_load(&self) -> Option<InventorySnapshot> {
        match self.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!(
                    "Ignoring unreadable save file {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Delete the save file if it exists
    pub fn delete(&self) -> Result<(), SaveError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SlotRecord;
    use std::env::temp_dir;

    fn sample() -> InventorySnapshot {
        InventorySnapshot {
            slots: vec![
                SlotRecord::new("health_potion", 3),
                SlotRecord::new("iron_sword", 1),
            ],
            equipped_weapon_id: Some("war_axe".to_string()),
        }
    }

    #[test]
    fn test_save_and_load_json() {
        let store = SaveStore::new(temp_dir().join("ember_store_test.json"));

        store.save(&sample()).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.delete().unwrap();
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_load_binary() {
        let store = SaveStore::new(temp_dir().join("ember_store_test.sav"))
            .with_format(SaveFormat::Binary);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.delete().unwrap();
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let store = SaveStore::new(temp_dir().join("ember_store_missing.json"));

        assert!(store.load().unwrap().is_none());
        assert!(store.try_load().is_none());
        store.delete().unwrap();
    }

    #[test]
    fn test_try_load_swallows_corrupt_files() {
        let path = temp_dir().join("ember_store_corrupt.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = SaveStore::new(&path);
        assert!(store.load().is_err());
        assert!(store.try_load().is_none());

        store.delete().unwrap();
    }
}
