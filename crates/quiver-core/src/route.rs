//! Query routing: classify a free-text search into a destination page.
//!
//! Rules are checked in a fixed order and the first match wins: the stock
//! ticker pattern, then each keyword route in declaration order, then the
//! insider trading fallback.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::encode_component;

/// One to five ASCII letters. Short English words match too ("the"), which
/// routes them to a stock page.
static TICKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,5}$").expect("valid ticker regex"));

/// Page a search lands on when no keyword route matches.
pub const FALLBACK_PAGE: &str = "insider-trading.html";

/// Where a search navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Destination {
    /// Stock detail page for a ticker.
    Stock { ticker: String },

    /// A site page, optionally carrying the query as `q`.
    Page {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        query: Option<String>,
    },
}

impl Destination {
    /// Relative URL to navigate to.
    pub fn url(&self) -> String {
        match self {
            Destination::Stock { ticker } => format!("stocks/{}.html", ticker.to_lowercase()),
            Destination::Page { path, query: None } => path.clone(),
            Destination::Page {
                path,
                query: Some(q),
            } => format!("{path}?q={}", encode_component(q)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// A keyword route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Substrings that select this route.
    pub keywords: Vec<String>,

    /// Destination page path.
    pub url: String,

    /// Whether the raw query is appended as `q`.
    pub with_query: bool,
}

impl Route {
    /// Create a route that does not forward the query.
    pub fn new(url: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            url: url.into(),
            with_query: false,
        }
    }

    /// Forward the query to the destination as `q`.
    pub fn forwarding_query(mut self) -> Self {
        self.with_query = true;
        self
    }

    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k.as_str()))
    }
}

/// Ordered keyword router.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    routes: Vec<Route>,
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new(vec![
            Route::new(
                "patent-search/keywords.html",
                &["patent", "innovation", "technology", "invention"],
            )
            .forwarding_query(),
            Route::new(
                "government-contracts.html",
                &["government", "contract", "federal", "defense"],
            ),
            Route::new(
                "corporate-lobbying.html",
                &["lobby", "lobbying", "political", "influence"],
            ),
        ])
    }
}

impl QueryRouter {
    /// Create a router checking `routes` in order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Keyword routes in priority order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route an already normalized query.
    pub fn route(&self, query: &str) -> Destination {
        if is_stock_ticker(query) {
            return Destination::Stock {
                ticker: query.to_lowercase(),
            };
        }

        if let Some(route) = self.routes.iter().find(|r| r.matches(query)) {
            return Destination::Page {
                path: route.url.clone(),
                query: route.with_query.then(|| query.to_string()),
            };
        }

        Destination::Page {
            path: FALLBACK_PAGE.to_string(),
            query: Some(query.to_string()),
        }
    }
}

/// Trim and lower-case raw input; `None` for blank input.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether the query looks like a stock ticker.
pub fn is_stock_ticker(query: &str) -> bool {
    TICKER_PATTERN.is_match(&query.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(query: &str) -> String {
        QueryRouter::default().route(query).url()
    }

    #[test]
    fn test_ticker_routes_to_stock_page() {
        assert_eq!(url("nvda"), "stocks/nvda.html");
        assert_eq!(url("googl"), "stocks/googl.html");
        assert_eq!(url("f"), "stocks/f.html");
    }

    #[test]
    fn test_ticker_pattern() {
        assert!(is_stock_ticker("aapl"));
        assert!(is_stock_ticker("MSFT"));
        assert!(!is_stock_ticker("abcdef"));
        assert!(!is_stock_ticker("brk.b"));
        assert!(!is_stock_ticker("a1"));
        assert!(!is_stock_ticker(""));
    }

    #[test]
    fn test_short_words_are_tickers() {
        assert_eq!(url("the"), "stocks/the.html");
        // keyword routes never see them
        assert_eq!(url("lobby"), "stocks/lobby.html");
    }

    #[test]
    fn test_patent_route_forwards_query() {
        assert_eq!(
            url("new patent filing"),
            "patent-search/keywords.html?q=new%20patent%20filing"
        );
        assert_eq!(
            url("ai technology"),
            "patent-search/keywords.html?q=ai%20technology"
        );
    }

    #[test]
    fn test_government_route() {
        assert_eq!(url("federal spending"), "government-contracts.html");
        assert_eq!(url("defense contractors"), "government-contracts.html");
    }

    #[test]
    fn test_lobbying_route() {
        assert_eq!(url("lobbying spend"), "corporate-lobbying.html");
        assert_eq!(url("political donations"), "corporate-lobbying.html");
    }

    #[test]
    fn test_priority_order() {
        // patent beats government
        assert_eq!(
            url("defense technology"),
            "patent-search/keywords.html?q=defense%20technology"
        );
        // government beats lobbying
        assert_eq!(url("government influence"), "government-contracts.html");
    }

    #[test]
    fn test_fallback_route() {
        assert_eq!(url("random text"), "insider-trading.html?q=random%20text");
        assert_eq!(
            url("congress trades 2024"),
            "insider-trading.html?q=congress%20trades%202024"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  NVDA "), Some("nvda".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_destination_serialization() {
        let dest = QueryRouter::default().route("nvda");
        let json = serde_json::to_string(&dest).unwrap();
        assert_eq!(json, r#"{"kind":"stock","ticker":"nvda"}"#);
    }
}
