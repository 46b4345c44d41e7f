use crate::catalog::load_catalog_or_empty;
use crate::config::PokedexConfig;
use crate::prelude::{eprintln, *};
use crate::session::Session;
use crate::store::build_store;

pub mod filter;
pub mod interactive;
pub mod list;
pub mod mutate;
pub mod types;

/// Compose a session: configuration, catalog load, then the selected store
pub async fn open_session(global: &crate::Global) -> Result<Session> {
    let config = PokedexConfig::from_env()?.with_overrides(global);

    if global.verbose {
        eprintln!("PokeAPI Base: {}", config.base_url);
        eprintln!("Store: {}", config.store);
        eprintln!(
            "Fetching {} pokemon starting at offset {}...",
            config.limit, config.offset
        );
    }

    let client = config.build_client()?;
    let catalog = load_catalog_or_empty(&client, &config).await;
    let store = build_store(&config)?;

    if global.verbose {
        eprintln!("Loaded {} pokemon", catalog.len());
    }

    Ok(Session::open(catalog, store))
}

/// Print where the session state now lives, for stores that have a location
pub fn print_location(session: &Session) {
    if let Some(location) = session.location() {
        eprintln!("Session {}: {}", session.store_name(), location);
    }
}
