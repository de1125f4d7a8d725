//! Route command - show where a search query leads

use color_eyre::eyre::Result;
use quiver_core::{
    QueryRouter,
    route::{Destination, normalize},
};

/// Route `query` the way the search box does. `None` for blank input.
pub fn resolve(query: &str) -> Option<Destination> {
    let query = normalize(query)?;
    Some(QueryRouter::default().route(&query))
}

/// Run the route command.
pub fn run(query: &str) -> Result<()> {
    tracing::info!(%query, "Routing query");

    match resolve(query) {
        Some(destination) => println!("{}", destination.url()),
        None => println!("Nothing to route: the query is empty"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ticker() {
        let destination = resolve("  AAPL ").map(|d| d.url());
        assert_eq!(destination.as_deref(), Some("stocks/aapl.html"));
    }

    #[test]
    fn test_resolve_keyword_route() {
        let destination = resolve("Defense contractors").map(|d| d.url());
        assert_eq!(destination.as_deref(), Some("government-contracts.html"));
    }

    #[test]
    fn test_resolve_fallback_keeps_query() {
        let destination = resolve("random text").map(|d| d.url());
        assert_eq!(
            destination.as_deref(),
            Some("insider-trading.html?q=random%20text")
        );
    }

    #[test]
    fn test_resolve_blank_query() {
        assert!(resolve("").is_none());
        assert!(resolve("   ").is_none());
    }
}
