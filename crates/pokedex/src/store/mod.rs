use crate::config::PokedexConfig;
use crate::prelude::*;
use pokedex_core::persist::{CapturedStore, MemoryStore};
use std::fmt;
use std::str::FromStr;

pub mod file;
pub mod url;

pub use file::FileStore;
pub use url::UrlStore;

/// Persistence strategy for the captured set
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Keep captures for the lifetime of the process only
    Memory,
    /// Keep captures in a JSON key-value file under the data directory
    File,
    /// Keep captures (and filters) in the query string of a session URL
    Url,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            "url" => Ok(StoreKind::Url),
            other => Err(format!(
                "unknown store {other}. Valid stores: memory, file, url"
            )),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreKind::Memory => "memory",
            StoreKind::File => "file",
            StoreKind::Url => "url",
        };
        f.write_str(name)
    }
}

/// Build the store selected by the configuration
pub fn build_store(config: &PokedexConfig) -> Result<Box<dyn CapturedStore>> {
    let store: Box<dyn CapturedStore> = match config.store {
        StoreKind::Memory => Box::new(MemoryStore::new()),
        StoreKind::File => Box::new(FileStore::new(&config.data_dir)),
        StoreKind::Url => Box::new(UrlStore::parse(&config.session_url)?),
    };

    log::debug!("Using {} store", store.name());

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!("memory".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert_eq!("FILE".parse::<StoreKind>().unwrap(), StoreKind::File);
        assert_eq!("url".parse::<StoreKind>().unwrap(), StoreKind::Url);
        assert!("sqlite".parse::<StoreKind>().is_err());
    }

    #[test]
    fn test_store_kind_display_round_trip() {
        for kind in [StoreKind::Memory, StoreKind::File, StoreKind::Url] {
            assert_eq!(kind.to_string().parse::<StoreKind>().unwrap(), kind);
        }
    }
}
