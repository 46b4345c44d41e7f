//! Persistence contract and codecs for the captured set
//!
//! The partitioner never reaches out to storage. Front ends load a
//! [`CapturedSet`] through a [`CapturedStore`], hand it to the pure functions
//! in [`crate::partition`], and save it back after each mutation.
//!
//! Two wire forms exist:
//!
//! - **Stored form**: a JSON array of ids (`[1,4,7]`), used by durable
//!   key-value stores. Decoding is strict; callers treat a decode failure as
//!   an empty set.
//! - **Query form**: comma-separated ids (`1,4,7`) carried by the `captured`
//!   query parameter. Decoding is lenient and silently drops tokens that are
//!   not non-negative integers.

use crate::filter::FilterCriteria;
use crate::partition::CapturedSet;

/// Key under which durable stores keep the captured set
pub const STORAGE_KEY: &str = "capturedPokemons";

/// Query parameter holding the captured ids
pub const CAPTURED_PARAM: &str = "captured";

/// Query parameter holding the name filter
pub const NAME_PARAM: &str = "name";

/// Query parameter holding the type filter
pub const TYPE_PARAM: &str = "type";

/// Stored captured set could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Corrupt stored captured set: {0}")]
pub struct PersistenceDecodeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Failed to encode captured set: {0}")]
    Encode(String),
}

/// A strategy for loading and saving the captured set
pub trait CapturedStore {
    /// Short name used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Load the persisted set. Missing or corrupt data yields an empty set.
    fn load(&mut self) -> CapturedSet;

    /// Persist the set. Returns only after the write is visible to `load`.
    fn save(&mut self, captured: &CapturedSet) -> Result<(), StoreError>;

    /// Filter carried by the store, for stores that persist one
    fn load_filter(&self) -> Option<FilterCriteria> {
        None
    }

    /// Stores without filter state ignore this
    fn save_filter(&mut self, _criteria: &FilterCriteria) -> Result<(), StoreError> {
        Ok(())
    }

    /// Shareable location of the persisted state, if any (e.g. a URL)
    fn location(&self) -> Option<String> {
        None
    }
}

/// Process-local store; contents are lost when it is dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    captured: CapturedSet,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_captured(captured: CapturedSet) -> Self {
        Self { captured }
    }
}

impl CapturedStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&mut self) -> CapturedSet {
        self.captured.clone()
    }

    fn save(&mut self, captured: &CapturedSet) -> Result<(), StoreError> {
        self.captured = captured.clone();
        Ok(())
    }
}

/// Decode the stored (JSON array) form
pub fn decode_stored_ids(raw: &str) -> Result<CapturedSet, PersistenceDecodeError> {
    serde_json::from_str::<Vec<u64>>(raw)
        .map(|ids| ids.into_iter().collect())
        .map_err(|e| PersistenceDecodeError(e.to_string()))
}

/// Encode the stored (JSON array) form
pub fn encode_stored_ids(captured: &CapturedSet) -> Result<String, StoreError> {
    serde_json::to_string(captured).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode the query form, dropping anything that is not an id
pub fn decode_query_ids(raw: &str) -> CapturedSet {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<u64>().ok())
        .collect()
}

/// Encode the query form
pub fn encode_query_ids(captured: &CapturedSet) -> String {
    captured
        .ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
