//! Autocomplete suggestions for the search box.
//!
//! Suggestions are gathered from three sources and concatenated in a fixed
//! order: stock listings, site pages, then recent searches. The combined list
//! is truncated to the configured maximum.

use serde::{Deserialize, Serialize};

use crate::{recent::RecentSearchLog, text::encode_component};

/// Source of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Stock,
    Page,
    Recent,
}

impl SuggestionKind {
    /// Short label shown next to the suggestion.
    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::Stock => "stock",
            SuggestionKind::Page => "page",
            SuggestionKind::Recent => "recent",
        }
    }

    /// Icon shown in front of the suggestion.
    pub fn icon(self) -> &'static str {
        match self {
            SuggestionKind::Stock => "📈",
            SuggestionKind::Page => "🔍",
            SuggestionKind::Recent => "🕒",
        }
    }
}

/// An autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,

    /// Text rendered in the list.
    pub text: String,

    /// Underlying value (ticker, page name or past query).
    pub value: String,

    /// Relative URL navigated to when selected.
    pub url: String,
}

/// A listed company in the mock catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockListing {
    pub ticker: &'static str,
    pub name: &'static str,
}

/// A site page offered as a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub keywords: &'static [&'static str],
}

/// Mock stock catalog used for ticker suggestions.
pub const STOCKS: &[StockListing] = &[
    StockListing {
        ticker: "NVDA",
        name: "NVIDIA Corporation",
    },
    StockListing {
        ticker: "TSLA",
        name: "Tesla, Inc.",
    },
    StockListing {
        ticker: "AAPL",
        name: "Apple Inc.",
    },
    StockListing {
        ticker: "GOOGL",
        name: "Alphabet Inc.",
    },
    StockListing {
        ticker: "MSFT",
        name: "Microsoft Corporation",
    },
    StockListing {
        ticker: "META",
        name: "Meta Platforms, Inc.",
    },
    StockListing {
        ticker: "AMZN",
        name: "Amazon.com, Inc.",
    },
];

/// Pages offered as suggestions.
pub const PAGES: &[PageEntry] = &[
    PageEntry {
        name: "Insider Trading Dashboard",
        url: "insider-trading.html",
        keywords: &["insider", "trading", "congress"],
    },
    PageEntry {
        name: "Patent Search",
        url: "patent-search.html",
        keywords: &["patent", "innovation", "technology"],
    },
    PageEntry {
        name: "Government Contracts",
        url: "government-contracts.html",
        keywords: &["government", "contract", "federal"],
    },
    PageEntry {
        name: "Corporate Lobbying",
        url: "corporate-lobbying.html",
        keywords: &["lobby", "lobbying", "political"],
    },
];

/// Builds the suggestion list for a partial query.
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    stocks: &'static [StockListing],
    pages: &'static [PageEntry],
    min_query_length: usize,
    max_suggestions: usize,
    recent_suggestions: usize,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new(2, 8, 3)
    }
}

impl SuggestionGenerator {
    /// Create a generator over the built-in catalogs.
    pub fn new(min_query_length: usize, max_suggestions: usize, recent_suggestions: usize) -> Self {
        Self {
            stocks: STOCKS,
            pages: PAGES,
            min_query_length,
            max_suggestions,
            recent_suggestions,
        }
    }

    /// Whether `query` is long enough to produce suggestions.
    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_length
    }

    /// Suggestions for `query`: stocks, then pages, then recent searches.
    pub fn generate(&self, query: &str, recent: &RecentSearchLog) -> Vec<Suggestion> {
        if !self.accepts(query) {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let stocks = self.stocks.iter().filter_map(|s| stock_suggestion(s, &needle));
        let pages = self.pages.iter().filter_map(|p| page_suggestion(p, &needle));
        let recent = recent
            .matching(&needle, self.recent_suggestions)
            .into_iter()
            .map(recent_suggestion);

        stocks
            .chain(pages)
            .chain(recent)
            .take(self.max_suggestions)
            .collect()
    }
}

fn stock_suggestion(stock: &StockListing, needle: &str) -> Option<Suggestion> {
    let hit = stock.ticker.to_lowercase().contains(needle)
        || stock.name.to_lowercase().contains(needle);

    hit.then(|| Suggestion {
        kind: SuggestionKind::Stock,
        text: format!("{} - {}", stock.ticker, stock.name),
        value: stock.ticker.to_string(),
        url: format!("stocks/{}.html", stock.ticker.to_lowercase()),
    })
}

fn page_suggestion(page: &PageEntry, needle: &str) -> Option<Suggestion> {
    let hit = page.name.to_lowercase().contains(needle)
        || page.keywords.iter().any(|k| k.contains(needle));

    hit.then(|| Suggestion {
        kind: SuggestionKind::Page,
        text: page.name.to_string(),
        value: page.name.to_string(),
        url: page.url.to_string(),
    })
}

fn recent_suggestion(search: &str) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::Recent,
        text: search.to_string(),
        value: search.to_string(),
        url: format!("insider-trading.html?q={}", encode_component(search)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(suggestions: &[Suggestion]) -> Vec<SuggestionKind> {
        suggestions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_short_query_yields_nothing() {
        let generator = SuggestionGenerator::default();
        assert!(generator.generate("n", &RecentSearchLog::new(10)).is_empty());
        assert!(generator.generate("", &RecentSearchLog::new(10)).is_empty());
    }

    #[test]
    fn test_stock_match_on_ticker_and_name() {
        let generator = SuggestionGenerator::default();
        let by_ticker = generator.generate("nvd", &RecentSearchLog::new(10));
        assert_eq!(by_ticker.len(), 1);
        assert_eq!(by_ticker[0].text, "NVDA - NVIDIA Corporation");
        assert_eq!(by_ticker[0].url, "stocks/nvda.html");

        let by_name = generator.generate("Alphabet", &RecentSearchLog::new(10));
        assert_eq!(by_name[0].value, "GOOGL");
    }

    #[test]
    fn test_page_match_on_keyword() {
        let generator = SuggestionGenerator::default();
        let suggestions = generator.generate("congr", &RecentSearchLog::new(10));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Page);
        assert_eq!(suggestions[0].url, "insider-trading.html");
    }

    #[test]
    fn test_source_order() {
        let generator = SuggestionGenerator::default();
        let mut recent = RecentSearchLog::new(10);
        recent.record("patent trolls");

        let suggestions = generator.generate("pat", &recent);
        assert_eq!(kinds(&suggestions), [SuggestionKind::Page, SuggestionKind::Recent]);

        recent.record("meta insider");
        let suggestions = generator.generate("meta", &recent);
        assert_eq!(
            kinds(&suggestions),
            [SuggestionKind::Stock, SuggestionKind::Recent]
        );
        assert_eq!(
            suggestions[1].url,
            "insider-trading.html?q=meta%20insider"
        );
    }

    #[test]
    fn test_recent_suggestions_capped_at_three() {
        let generator = SuggestionGenerator::default();
        let mut recent = RecentSearchLog::new(10);
        for q in ["zz one", "zz two", "zz three", "zz four"] {
            recent.record(q);
        }
        let suggestions = generator.generate("zz", &recent);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].text, "zz four");
    }

    #[test]
    fn test_total_capped_at_max() {
        let generator = SuggestionGenerator::default();
        let mut recent = RecentSearchLog::new(10);
        for q in ["in a", "in b", "in c"] {
            recent.record(q);
        }
        // "in" matches several stocks, several pages and all recent entries
        let suggestions = generator.generate("in", &recent);
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0].kind, SuggestionKind::Stock);
    }

    #[test]
    fn test_custom_limits() {
        let generator = SuggestionGenerator::new(3, 2, 1);
        let recent = RecentSearchLog::new(10);
        assert!(generator.generate("in", &recent).is_empty());
        assert_eq!(generator.generate("inc", &recent).len(), 2);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SuggestionKind::Stock.label(), "stock");
        assert_eq!(SuggestionKind::Recent.label(), "recent");
        let json = serde_json::to_string(&SuggestionKind::Page).unwrap();
        assert_eq!(json, "\"page\"");
    }
}
