use crate::config::PokedexConfig;
use crate::prelude::*;
use futures::future::try_join_all;
use pokedex_core::catalog::{parse_item, parse_listing, Catalog, Item, ResourceRef};

/// Load the full catalog: one listing request, then every entry in parallel
///
/// The load is all-or-nothing. The first transport failure, HTTP error or
/// invalid payload fails the whole catalog.
pub async fn load_catalog(
    client: &reqwest::Client,
    config: &PokedexConfig,
) -> std::result::Result<Catalog, Error> {
    let url = format!("{}/pokemon", config.base_url.trim_end_matches('/'));
    let query = [
        ("limit", config.limit.to_string()),
        ("offset", config.offset.to_string()),
    ];

    log::debug!(
        "Fetching listing {} (limit {}, offset {})",
        url,
        config.limit,
        config.offset
    );

    let listing = fetch_json(client, &url, &query).await?;
    let refs = parse_listing(listing)?;

    let item_futures = refs.iter().map(|resource| fetch_item(client, resource));
    let items: Vec<Item> = try_join_all(item_futures).await?;

    let catalog = Catalog::new(items)?;
    log::debug!("Loaded catalog with {} pokemon", catalog.len());

    Ok(catalog)
}

/// Load the catalog, degrading to an empty one on failure
pub async fn load_catalog_or_empty(client: &reqwest::Client, config: &PokedexConfig) -> Catalog {
    match load_catalog(client, config).await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Catalog load failed: {}", e);
            Catalog::empty()
        }
    }
}

async fn fetch_item(
    client: &reqwest::Client,
    resource: &ResourceRef,
) -> std::result::Result<Item, Error> {
    let payload = fetch_json(client, &resource.url, &[]).await?;
    parse_item(payload).map_err(|e| {
        Error::Validation(format!("{} ({}): {}", resource.name, resource.url, e))
    })
}

async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> std::result::Result<serde_json::Value, Error> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| Error::Fetch(format!("Failed to fetch {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!(
            "Failed to fetch {}: HTTP {}",
            url,
            response.status()
        )));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| Error::Validation(format!("Response from {} is not JSON: {}", url, e)))
}
