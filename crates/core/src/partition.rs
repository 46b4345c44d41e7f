//! The collection partitioner
//!
//! Splits a [`Catalog`] into an "available" and a "captured" view driven by a
//! [`CapturedSet`]. Every function here is pure: state is passed in and the
//! caller decides what to persist.

use crate::catalog::{distinct_categories, Catalog, Item};
use crate::filter::FilterCriteria;
use serde::{Deserialize, Serialize};

/// Ids the user has captured, without duplicates, in insertion order
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(into = "Vec<u64>", from = "Vec<u64>")]
pub struct CapturedSet {
    ids: Vec<u64>,
}

impl CapturedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Add an id; returns false when it was already present
    pub fn capture(&mut self, id: u64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id; returns false when it was not present
    pub fn release(&mut self, id: u64) -> bool {
        let before = self.ids.len();
        self.ids.retain(|captured| *captured != id);
        self.ids.len() != before
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u64> for CapturedSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut set = CapturedSet::new();
        for id in iter {
            set.capture(id);
        }
        set
    }
}

impl From<Vec<u64>> for CapturedSet {
    fn from(ids: Vec<u64>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<CapturedSet> for Vec<u64> {
    fn from(captured: CapturedSet) -> Self {
        captured.ids
    }
}

/// Result of a capture request against a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    AlreadyCaptured,
    /// The id is not part of the catalog; the set is left untouched
    UnknownItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released,
    NotCaptured,
}

impl CaptureOutcome {
    pub fn changed(self) -> bool {
        self == CaptureOutcome::Captured
    }
}

impl ReleaseOutcome {
    pub fn changed(self) -> bool {
        self == ReleaseOutcome::Released
    }
}

/// Capture `id` only if the catalog knows about it
pub fn capture_item(catalog: &Catalog, captured: &mut CapturedSet, id: u64) -> CaptureOutcome {
    if !catalog.contains(id) {
        return CaptureOutcome::UnknownItem;
    }
    if captured.capture(id) {
        CaptureOutcome::Captured
    } else {
        CaptureOutcome::AlreadyCaptured
    }
}

pub fn release_item(captured: &mut CapturedSet, id: u64) -> ReleaseOutcome {
    if captured.release(id) {
        ReleaseOutcome::Released
    } else {
        ReleaseOutcome::NotCaptured
    }
}

/// Catalog items that are not captured and match the filter, in catalog order
pub fn available_view<'a>(
    catalog: &'a Catalog,
    captured: &CapturedSet,
    criteria: &FilterCriteria,
) -> Vec<&'a Item> {
    catalog
        .items()
        .iter()
        .filter(|item| !captured.contains(item.id))
        .filter(|item| criteria.matches(item))
        .collect()
}

/// Catalog items that are captured, in catalog order. Never filtered.
pub fn captured_view<'a>(catalog: &'a Catalog, captured: &CapturedSet) -> Vec<&'a Item> {
    catalog
        .items()
        .iter()
        .filter(|item| captured.contains(item.id))
        .collect()
}

/// A single rendered pokemon
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItemOutput {
    pub id: u64,
    pub name: String,
    pub types: Vec<String>,
    pub sprite: String,
}

impl From<&Item> for ItemOutput {
    fn from(item: &Item) -> Self {
        ItemOutput {
            id: item.id,
            name: item.name.clone(),
            types: item.category_tags.clone(),
            sprite: item.image_ref.clone(),
        }
    }
}

/// Everything a front end needs to render one frame of the pokedex
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PokedexView {
    pub available: Vec<ItemOutput>,
    pub captured: Vec<ItemOutput>,
    pub available_count: usize,
    pub captured_count: usize,
    pub catalog_size: usize,
    pub filter: FilterCriteria,
    pub categories: Vec<String>,
}

impl PokedexView {
    /// True when no catalog was loaded, which is how load failures surface
    pub fn is_catalog_empty(&self) -> bool {
        self.catalog_size == 0
    }
}

/// Assemble the view model from the session state
pub fn build_view(
    catalog: &Catalog,
    captured: &CapturedSet,
    criteria: &FilterCriteria,
) -> PokedexView {
    let available: Vec<ItemOutput> = available_view(catalog, captured, criteria)
        .into_iter()
        .map(ItemOutput::from)
        .collect();
    let captured_items: Vec<ItemOutput> = captured_view(catalog, captured)
        .into_iter()
        .map(ItemOutput::from)
        .collect();

    PokedexView {
        available_count: available.len(),
        captured_count: captured_items.len(),
        available,
        captured: captured_items,
        catalog_size: catalog.len(),
        filter: criteria.clone(),
        categories: distinct_categories(catalog),
    }
}
