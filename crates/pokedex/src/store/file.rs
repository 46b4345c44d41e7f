//! Durable key-value store backed by a single JSON file
//!
//! The file holds a flat object of string keys to string values, the same
//! shape as browser local storage. The captured set lives under
//! [`STORAGE_KEY`] as a JSON array encoded into a string.

use pokedex_core::partition::CapturedSet;
use pokedex_core::persist::{
    decode_stored_ids, encode_stored_ids, CapturedStore, StoreError, STORAGE_KEY,
};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "storage.json";

    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a raw value
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    /// Write a raw value, replacing any previous one
    ///
    /// A storage file that is not valid JSON is replaced. Any other read
    /// failure is returned and the file is left alone.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_contents()? {
            Some(contents) => self.parse_entries(&contents).unwrap_or_else(|e| {
                log::warn!("{}; replacing it", e);
                Entries::new()
            }),
            None => Entries::new(),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        match self.read_contents()? {
            Some(contents) => self.parse_entries(&contents),
            None => Ok(Entries::new()),
        }
    }

    /// Raw file contents; `None` when the file does not exist yet
    fn read_contents(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse_entries(&self, contents: &str) -> Result<Entries, StoreError> {
        serde_json::from_str(contents).map_err(|e| {
            StoreError::Io(format!(
                "Storage file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Write through a temp file and rename so readers never see a torn file
    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| StoreError::Io(format!("Invalid storage path {}", self.path.display())))?;

        fs::create_dir_all(dir)
            .map_err(|e| StoreError::Io(format!("Failed to create {}: {}", dir.display(), e)))?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| StoreError::Io(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| StoreError::Io(format!("Failed to write temp file: {}", e)))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

impl CapturedStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn load(&mut self) -> CapturedSet {
        let raw = match self.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CapturedSet::new(),
            Err(e) => {
                log::warn!("{}; starting with no captured pokemon", e);
                return CapturedSet::new();
            }
        };

        match decode_stored_ids(&raw) {
            Ok(captured) => {
                log::debug!(
                    "Loaded {} captured pokemon from {}",
                    captured.len(),
                    self.path.display()
                );
                captured
            }
            Err(e) => {
                log::warn!("{}; starting with no captured pokemon", e);
                CapturedSet::new()
            }
        }
    }

    fn save(&mut self, captured: &CapturedSet) -> Result<(), StoreError> {
        let raw = encode_stored_ids(captured)?;
        self.set_item(STORAGE_KEY, &raw)?;
        log::debug!(
            "Saved {} captured pokemon to {}",
            captured.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> Option<String> {
        Some(self.path.display().to_string())
    }
}
