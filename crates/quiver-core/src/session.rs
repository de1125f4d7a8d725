//! Search session: routing and suggestions bound to a persisted history.

use crate::{
    config::SearchConfig,
    recent::{KeyValueStore, RecentSearchLog},
    route::{Destination, QueryRouter, normalize},
    suggest::{Suggestion, SuggestionGenerator},
};

/// Search state shared by every search input on a page.
pub struct SearchSession<S> {
    router: QueryRouter,
    generator: SuggestionGenerator,
    recent: RecentSearchLog,
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> SearchSession<S> {
    /// Create a session, loading history from `store`.
    pub fn new(config: &SearchConfig, store: S) -> Self {
        let recent = RecentSearchLog::load(&store, &config.storage_key, config.recent_limit);
        Self {
            router: QueryRouter::default(),
            generator: SuggestionGenerator::new(
                config.min_query_length,
                config.max_suggestions,
                config.recent_suggestions,
            ),
            recent,
            store,
            storage_key: config.storage_key.clone(),
        }
    }

    /// Handle a submitted query.
    ///
    /// Blank input returns `None` and records nothing. Otherwise the
    /// normalized query is recorded in the history before it is routed.
    pub fn submit(&mut self, raw: &str) -> Option<Destination> {
        let query = normalize(raw)?;

        self.recent.record(&query);
        if let Err(e) = self.recent.save(&self.store, &self.storage_key) {
            tracing::warn!(error = %e, "Failed to persist recent searches");
        }

        let destination = self.router.route(&query);
        tracing::debug!(%query, url = %destination, "Routed search");
        Some(destination)
    }

    /// Suggestions for the text currently in the input.
    pub fn suggestions(&self, partial: &str) -> Vec<Suggestion> {
        self.generator.generate(partial, &self.recent)
    }

    /// Whether `partial` is long enough to show suggestions.
    pub fn accepts(&self, partial: &str) -> bool {
        self.generator.accepts(partial)
    }

    pub fn recent(&self) -> &RecentSearchLog {
        &self.recent
    }

    pub fn router(&self) -> &QueryRouter {
        &self.router
    }
}
