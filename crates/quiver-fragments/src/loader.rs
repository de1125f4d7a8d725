//! HTTP loader for HTML fragments.
//!
//! Fragments are fetched once from `<base>/{name}.html` and cached by name.

use std::sync::Arc;

use gloo_net::http::Request;
use scc::HashMap;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error type for fragment loading.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Failed to load {name}: HTTP {status}")]
    Status { name: String, status: u16 },

    /// Not one of the known fragments.
    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),
}

impl From<FragmentError> for JsValue {
    fn from(err: FragmentError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Fetches fragments and caches their text.
///
/// Clones share the cache.
#[derive(Clone)]
pub struct FragmentLoader {
    /// Base URL fragments are resolved against.
    base_url: String,

    /// Cache of loaded fragments: name -> HTML.
    cache: Arc<HashMap<String, String>>,
}

impl FragmentLoader {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(HashMap::new()),
        }
    }

    /// Create a loader with pre-filled cache entries (for testing).
    pub fn with_cached<I, K, V>(base_url: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let loader = Self::new(base_url);
        for (name, html) in entries {
            let _ = loader.cache.insert_sync(name.into(), html.into());
        }
        loader
    }

    /// URL a fragment is fetched from.
    pub fn url_for(&self, name: &str) -> String {
        if self.base_url.is_empty() {
            format!("{name}.html")
        } else {
            format!("{}/{name}.html", self.base_url)
        }
    }

    /// Fragment HTML, from the cache when present.
    ///
    /// Two concurrent first loads of the same name may both hit the network;
    /// the first response to arrive is kept.
    pub async fn load(&self, name: &str) -> Result<String, FragmentError> {
        if let Some(html) = self.get(name) {
            return Ok(html);
        }

        let url = self.url_for(name);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FragmentError::Status {
                name: name.to_string(),
                status: response.status(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        let _ = self
            .cache
            .insert_async(name.to_string(), html.clone())
            .await;
        log::debug!("Loaded fragment {name} from {url}");

        Ok(html)
    }

    /// Warm the cache. Failures are logged and skipped.
    pub async fn preload(&self, names: &[&str]) {
        for name in names {
            if let Err(e) = self.load(name).await {
                log::warn!("Failed to preload {name}: {e}");
            }
        }
    }

    /// Drop the cached copy and fetch again.
    pub async fn reload(&self, name: &str) -> Result<String, FragmentError> {
        let _ = self.cache.remove_async(name).await;
        self.load(name).await
    }

    /// Cached HTML, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.cache.read_sync(name, |_, html| html.clone())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.contains_sync(name)
    }

    /// Get the number of cached fragments.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Clear the fragment cache.
    pub fn clear_cache(&self) {
        self.cache.clear_sync();
    }
}
