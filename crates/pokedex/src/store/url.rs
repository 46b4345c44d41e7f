//! Session state carried in a URL query string
//!
//! `captured` holds comma-separated ids, `name` and `type` hold the filter.
//! Every mutation produces a new URL, which is the shareable state.

use crate::prelude::*;
use pokedex_core::filter::FilterCriteria;
use pokedex_core::partition::CapturedSet;
use pokedex_core::persist::{
    decode_query_ids, encode_query_ids, CapturedStore, StoreError, CAPTURED_PARAM, NAME_PARAM,
    TYPE_PARAM,
};
use reqwest::Url;

#[derive(Debug, Clone)]
pub struct UrlStore {
    url: Url,
}

impl UrlStore {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| eyre!("Invalid session URL {}: {}", raw, e))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Set or delete a single parameter, keeping the position of the others
    fn set_param(&mut self, key: &str, value: Option<&str>) {
        let mut replaced = false;
        let mut pairs: Vec<(String, String)> = Vec::new();

        for (k, v) in self.url.query_pairs() {
            if k == key {
                if let (false, Some(value)) = (replaced, value) {
                    pairs.push((k.into_owned(), value.to_string()));
                }
                replaced = true;
            } else {
                pairs.push((k.into_owned(), v.into_owned()));
            }
        }

        if let (false, Some(value)) = (replaced, value) {
            pairs.push((key.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl CapturedStore for UrlStore {
    fn name(&self) -> &'static str {
        "url"
    }

    fn load(&mut self) -> CapturedSet {
        self.param(CAPTURED_PARAM)
            .map(|raw| decode_query_ids(&raw))
            .unwrap_or_default()
    }

    fn save(&mut self, captured: &CapturedSet) -> std::result::Result<(), StoreError> {
        let encoded = encode_query_ids(captured);
        self.set_param(CAPTURED_PARAM, non_empty(&encoded));
        log::debug!("Session URL is now {}", self.url);
        Ok(())
    }

    fn load_filter(&self) -> Option<FilterCriteria> {
        Some(FilterCriteria::from_options(
            self.param(NAME_PARAM),
            self.param(TYPE_PARAM),
        ))
    }

    fn save_filter(&mut self, criteria: &FilterCriteria) -> std::result::Result<(), StoreError> {
        self.set_param(NAME_PARAM, non_empty(&criteria.name_substring));
        self.set_param(TYPE_PARAM, non_empty(&criteria.category));
        log::debug!("Session URL is now {}", self.url);
        Ok(())
    }

    fn location(&self) -> Option<String> {
        Some(self.url.to_string())
    }
}
