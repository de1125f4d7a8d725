//! Suggest command - list autocomplete suggestions for a partial query

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use quiver_core::{RecentSearchLog, Suggestion, SuggestionGenerator, config::SearchConfig};

use super::load_config;

/// Suggestions for `query`, with `history` standing in for recent searches.
///
/// History entries are recorded oldest first, so the last one is the most
/// recent.
pub fn suggestions(config: &SearchConfig, query: &str, history: &[String]) -> Vec<Suggestion> {
    let mut recent = RecentSearchLog::new(config.recent_limit);
    for entry in history {
        recent.record(entry);
    }

    let generator = SuggestionGenerator::new(
        config.min_query_length,
        config.max_suggestions,
        config.recent_suggestions,
    );
    generator.generate(query, &recent)
}

/// Run the suggest command.
pub fn run(config_path: &Path, query: &str, history: &[String], json: bool) -> Result<()> {
    tracing::info!(?config_path, %query, "Generating suggestions");

    let config = load_config(config_path)?;
    let items = suggestions(&config.search, query, history);

    if json {
        let out = serde_json::to_string_pretty(&items).wrap_err("Failed to encode suggestions")?;
        println!("{out}");
        return Ok(());
    }

    if items.is_empty() {
        println!("No suggestions for {query:?}");
        return Ok(());
    }

    for item in &items {
        println!(
            "  {} {:<40} {:<7} {}",
            item.kind.icon(),
            item.text,
            item.kind.label(),
            item.url
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use quiver_core::SuggestionKind;

    use super::*;

    #[test]
    fn test_suggestions_stock_first() {
        let items = suggestions(&SearchConfig::default(), "nvd", &[]);
        assert!(!items.is_empty());
        assert_eq!(items[0].kind, SuggestionKind::Stock);
        assert_eq!(items[0].url, "stocks/nvda.html");
    }

    #[test]
    fn test_suggestions_short_query_is_empty() {
        assert!(suggestions(&SearchConfig::default(), "n", &[]).is_empty());
    }

    #[test]
    fn test_suggestions_include_history() {
        let history = vec!["meta insider".to_string()];
        let items = suggestions(&SearchConfig::default(), "meta ins", &history);
        assert!(
            items
                .iter()
                .any(|s| s.kind == SuggestionKind::Recent && s.value == "meta insider")
        );
    }

    #[test]
    fn test_suggestions_capped() {
        let config = SearchConfig {
            max_suggestions: 2,
            ..SearchConfig::default()
        };
        assert!(suggestions(&config, "co", &[]).len() <= 2);
    }
}
