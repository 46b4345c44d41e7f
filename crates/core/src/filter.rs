//! Name and category predicates for the available view

use crate::catalog::Item;
use serde::{Deserialize, Serialize};

/// User-specified filter; empty fields mean "no filter"
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name_substring: String,
    pub category: String,
}

impl FilterCriteria {
    pub fn new(name_substring: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name_substring: name_substring.into(),
            category: category.into(),
        }
    }

    /// Build criteria from optional CLI-style inputs
    pub fn from_options(name: Option<String>, category: Option<String>) -> Self {
        Self::new(name.unwrap_or_default(), category.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.name_substring.is_empty() && self.category.is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        matches_name(item, &self.name_substring) && matches_category(item, &self.category)
    }
}

/// Case-insensitive substring match on the item name
pub fn matches_name(item: &Item, needle: &str) -> bool {
    needle.is_empty() || item.name.to_lowercase().contains(&needle.to_lowercase())
}

/// Exact tag match; an empty category matches everything
pub fn matches_category(item: &Item, category: &str) -> bool {
    category.is_empty() || item.has_category(category)
}

pub fn filter_by_name<'a>(items: Vec<&'a Item>, needle: &str) -> Vec<&'a Item> {
    items
        .into_iter()
        .filter(|item| matches_name(item, needle))
        .collect()
}

pub fn filter_by_category<'a>(items: Vec<&'a Item>, category: &str) -> Vec<&'a Item> {
    items
        .into_iter()
        .filter(|item| matches_category(item, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{item, starter_catalog};

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let pikachu = item(25, "Pikachu", &["electric"]);

        assert!(matches_name(&pikachu, "pika"));
        assert!(matches_name(&pikachu, "CHU"));
        assert!(!matches_name(&pikachu, "raichu"));
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let criteria = FilterCriteria::default();
        let catalog = starter_catalog();

        assert!(criteria.is_empty());
        assert!(catalog.items().iter().all(|i| criteria.matches(i)));
    }

    #[test]
    fn test_category_is_exact_match() {
        let bulbasaur = item(1, "bulbasaur", &["grass", "poison"]);

        assert!(matches_category(&bulbasaur, "poison"));
        assert!(!matches_category(&bulbasaur, "pois"));
        assert!(!matches_category(&bulbasaur, "Grass"));
    }

    #[test]
    fn test_from_options() {
        let criteria = FilterCriteria::from_options(Some("char".into()), None);
        assert_eq!(criteria, FilterCriteria::new("char", ""));
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_name_and_category_filters_commute() {
        let catalog = crate::catalog::Catalog::new(vec![
            item(1, "bulbasaur", &["grass", "poison"]),
            item(2, "ivysaur", &["grass", "poison"]),
            item(4, "charmander", &["fire"]),
            item(5, "charmeleon", &["fire"]),
            item(43, "oddish", &["grass", "poison"]),
            item(37, "vulpix", &["fire"]),
        ])
        .unwrap();

        for (name, category) in [("saur", "grass"), ("char", "fire"), ("", "poison"), ("x", "")] {
            let all: Vec<&Item> = catalog.items().iter().collect();
            let name_first = filter_by_category(filter_by_name(all.clone(), name), category);
            let category_first = filter_by_name(filter_by_category(all, category), name);

            assert_eq!(ids(&name_first), ids(&category_first), "{name}/{category}");
        }
    }
}
