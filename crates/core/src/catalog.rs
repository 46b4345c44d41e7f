//! Catalog domain types and the PokeAPI boundary adapter
//!
//! Raw PokeAPI payloads are validated here and turned into [`Item`]s before
//! anything else in the crate sees them. Validation is strict: a payload that
//! is missing a required field, or carries the wrong type for it, is rejected
//! with a [`ValidationError`] instead of being coerced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Error raised when an external payload does not match the expected schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid listing payload: {0}")]
    Listing(String),

    #[error("Invalid pokemon payload: {0}")]
    Item(String),

    #[error("Duplicate pokemon id in catalog: {0}")]
    DuplicateId(u64),
}

/// Reference to a single pokemon as returned by the listing endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// Listing page returned by `GET /pokemon?limit=&offset=`
#[derive(Debug, Deserialize, Clone)]
pub struct ListingResponse {
    pub results: Vec<ResourceRef>,
}

/// Pokemon payload returned by the per-item endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonResponse {
    pub id: u64,
    pub name: String,
    pub sprites: SpritesResponse,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpritesResponse {
    pub front_default: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeRef {
    pub name: String,
}

/// A validated catalog entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category_tags: Vec<String>,
    pub image_ref: String,
}

impl Item {
    pub fn has_category(&self, category: &str) -> bool {
        self.category_tags.iter().any(|tag| tag == category)
    }
}

impl From<PokemonResponse> for Item {
    fn from(raw: PokemonResponse) -> Self {
        Item {
            id: raw.id,
            name: raw.name,
            category_tags: raw.types.into_iter().map(|slot| slot.type_ref.name).collect(),
            image_ref: raw.sprites.front_default,
        }
    }
}

/// Ordered, immutable collection of items loaded for one session
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(ValidationError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Validate a listing page and return its references in order
pub fn parse_listing(payload: serde_json::Value) -> Result<Vec<ResourceRef>, ValidationError> {
    serde_json::from_value::<ListingResponse>(payload)
        .map(|listing| listing.results)
        .map_err(|e| ValidationError::Listing(e.to_string()))
}

/// Validate a single pokemon payload and convert it into an [`Item`]
pub fn parse_item(payload: serde_json::Value) -> Result<Item, ValidationError> {
    serde_json::from_value::<PokemonResponse>(payload)
        .map(Item::from)
        .map_err(|e| ValidationError::Item(e.to_string()))
}

/// Every category tag seen across the catalog, in first-seen order
pub fn distinct_categories(catalog: &Catalog) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in catalog.items() {
        for tag in &item.category_tags {
            if !categories.contains(tag) {
                categories.push(tag.clone());
            }
        }
    }
    categories
}
