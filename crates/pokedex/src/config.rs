use crate::prelude::*;
use crate::store::StoreKind;
use std::path::PathBuf;
use std::time::Duration;

/// Pokedex configuration from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct PokedexConfig {
    pub base_url: String,
    pub limit: usize,
    pub offset: usize,
    pub timeout: Duration,
    pub store: StoreKind,
    pub session_url: String,
    pub data_dir: PathBuf,
}

impl PokedexConfig {
    /// Default PokeAPI base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";
    pub const DEFAULT_LIMIT: usize = 10;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_SESSION_URL: &'static str = "http://localhost/";

    /// Load configuration from environment variables
    ///
    /// Uses POKEAPI_BASE_URL, POKEDEX_LIMIT, POKEDEX_OFFSET, POKEDEX_TIMEOUT_SECS,
    /// POKEDEX_STORE, POKEDEX_URL and POKEDEX_DATA_DIR, each with a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match lookup("POKEDEX_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs_next::data_dir()
                .ok_or_eyre("Unable to determine data directory, set POKEDEX_DATA_DIR")?
                .join("pokedex"),
        };

        Ok(Self {
            base_url: lookup("POKEAPI_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            limit: parse_var(&lookup, "POKEDEX_LIMIT", Self::DEFAULT_LIMIT)?,
            offset: parse_var(&lookup, "POKEDEX_OFFSET", 0)?,
            timeout: Duration::from_secs(parse_var(
                &lookup,
                "POKEDEX_TIMEOUT_SECS",
                Self::DEFAULT_TIMEOUT_SECS,
            )?),
            store: parse_var(&lookup, "POKEDEX_STORE", StoreKind::File)?,
            session_url: lookup("POKEDEX_URL")
                .unwrap_or_else(|| Self::DEFAULT_SESSION_URL.to_string()),
            data_dir,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, global: &crate::Global) -> Self {
        if let Some(url) = &global.base_url {
            self.base_url = url.clone();
        }
        if let Some(limit) = global.limit {
            self.limit = limit;
        }
        if let Some(offset) = global.offset {
            self.offset = offset;
        }
        if let Some(store) = global.store {
            self.store = store;
        }
        if let Some(url) = &global.url {
            self.session_url = url.clone();
        }
        if let Some(dir) = &global.data_dir {
            self.data_dir = dir.clone();
        }
        self
    }

    /// Create the HTTP client used for catalog requests
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| eyre!("Invalid value for {}: {:?} ({})", key, raw, e)),
        None => Ok(default),
    }
}
