//! Terminal rendering of the pokedex view model

use crate::prelude::*;
use colored::Colorize;
use pokedex_core::partition::{CaptureOutcome, ItemOutput, PokedexView, ReleaseOutcome};

/// Label used for the "no category" choice in the type selector
pub const ALL_TYPES: &str = "All";

pub fn format_view_json(view: &PokedexView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn items_table(items: &[ItemOutput]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Type", "Sprite"]);

    for item in items {
        table.add_row(prettytable::row![
            item.id,
            item.name.to_uppercase(),
            item.types.join(", "),
            &item.sprite
        ]);
    }

    table.to_string()
}

fn describe_filter(view: &PokedexView) -> String {
    let name = if view.filter.name_substring.is_empty() {
        "(any)".to_string()
    } else {
        format!("\"{}\"", view.filter.name_substring)
    };
    let category = if view.filter.category.is_empty() {
        ALL_TYPES
    } else {
        view.filter.category.as_str()
    };
    format!("Name: {name} | Type: {category}")
}

/// Render both lists, or the empty-catalog notice
pub fn format_view_text(view: &PokedexView) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "POKEDEX".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if view.is_catalog_empty() {
        result.push_str(&format!("\n{}\n\n", "No pokemons available".yellow()));
        return result;
    }

    result.push_str(&format!("\n{}\n", describe_filter(view).bright_black()));

    result.push_str(&format!(
        "\n{}\n",
        format!("Pokemons ({})", view.available_count).green().bold()
    ));
    if view.available.is_empty() {
        result.push_str(&format!(
            "{}\n",
            "No pokemons match the current filters.".yellow()
        ));
    } else {
        result.push_str(&items_table(&view.available));
    }

    result.push_str(&format!(
        "\n{}\n",
        format!("Captured Pokemons ({})", view.captured_count)
            .magenta()
            .bold()
    ));
    if view.captured.is_empty() {
        result.push_str(&format!("{}\n", "Nothing captured yet.".bright_black()));
    } else {
        result.push_str(&items_table(&view.captured));
    }

    result.push('\n');
    result
}

/// Render the type selector choices, "All" first
pub fn format_categories_text(categories: &[String]) -> String {
    let mut result = format!("{}\n", ALL_TYPES);
    for category in categories {
        result.push_str(category);
        result.push('\n');
    }
    result
}

pub fn capture_message(id: u64, outcome: CaptureOutcome) -> String {
    match outcome {
        CaptureOutcome::Captured => format!("Captured pokemon {id}"),
        CaptureOutcome::AlreadyCaptured => format!("Pokemon {id} is already captured"),
        CaptureOutcome::UnknownItem => format!("Pokemon {id} is not in the catalog, ignoring"),
    }
}

pub fn release_message(id: u64, outcome: ReleaseOutcome) -> String {
    match outcome {
        ReleaseOutcome::Released => format!("Released pokemon {id}"),
        ReleaseOutcome::NotCaptured => format!("Pokemon {id} was not captured"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::filter::FilterCriteria;

    fn item(id: u64, name: &str, types: &[&str]) -> ItemOutput {
        ItemOutput {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            sprite: format!("https://img.example/{id}.png"),
        }
    }

    fn view(available: Vec<ItemOutput>, captured: Vec<ItemOutput>, filter: FilterCriteria) -> PokedexView {
        PokedexView {
            available_count: available.len(),
            captured_count: captured.len(),
            catalog_size: available.len() + captured.len(),
            available,
            captured,
            filter,
            categories: vec!["electric".to_string(), "fire".to_string()],
        }
    }

    #[test]
    fn test_format_view_text_lists() {
        let formatted = format_view_text(&view(
            vec![item(2, "charmander", &["fire"])],
            vec![item(1, "pikachu", &["electric"])],
            FilterCriteria::default(),
        ));

        assert!(formatted.contains("Pokemons (1)"));
        assert!(formatted.contains("CHARMANDER"));
        assert!(formatted.contains("Captured Pokemons (1)"));
        assert!(formatted.contains("PIKACHU"));
        assert!(formatted.contains("https://img.example/2.png"));
        assert!(formatted.contains("Type: All"));
    }

    #[test]
    fn test_format_view_text_multiple_types() {
        let formatted = format_view_text(&view(
            vec![item(1, "bulbasaur", &["grass", "poison"])],
            vec![],
            FilterCriteria::default(),
        ));

        assert!(formatted.contains("grass, poison"));
        assert!(formatted.contains("Nothing captured yet."));
    }

    #[test]
    fn test_format_view_text_filter_without_matches() {
        let formatted = format_view_text(&view(
            vec![],
            vec![item(1, "pikachu", &["electric"])],
            FilterCriteria::new("zzz", "fire"),
        ));

        assert!(formatted.contains("No pokemons match the current filters."));
        assert!(formatted.contains("Name: \"zzz\" | Type: fire"));
    }

    #[test]
    fn test_format_view_text_empty_catalog() {
        let formatted = format_view_text(&view(vec![], vec![], FilterCriteria::default()));

        assert!(formatted.contains("No pokemons available"));
        assert!(!formatted.contains("Captured Pokemons"));
    }

    #[test]
    fn test_format_view_json() {
        let json = format_view_json(&view(
            vec![item(2, "charmander", &["fire"])],
            vec![],
            FilterCriteria::default(),
        ))
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["available"][0]["name"], "charmander");
        assert_eq!(parsed["captured_count"], 0);
        assert!(parsed.get("categories").is_some());
    }

    #[test]
    fn test_format_categories_text() {
        let formatted = format_categories_text(&["fire".to_string(), "water".to_string()]);
        assert_eq!(formatted, "All\nfire\nwater\n");
    }

    #[test]
    fn test_messages() {
        assert_eq!(capture_message(4, CaptureOutcome::Captured), "Captured pokemon 4");
        assert!(capture_message(4, CaptureOutcome::UnknownItem).contains("not in the catalog"));
        assert_eq!(release_message(4, ReleaseOutcome::NotCaptured), "Pokemon 4 was not captured");
    }
}
