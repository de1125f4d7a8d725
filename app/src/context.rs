//! Application context built once at startup.

use quiver_core::{Config, text::current_page};
use quiver_fragments::FragmentLoader;
use quiver_ui::{LocalStorageStore, SharedSession, dom, shared_session};

/// Everything widgets need, passed explicitly instead of through globals.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub loader: FragmentLoader,
    pub store: LocalStorageStore,
    pub session: SharedSession,
    /// Page id derived from the location, e.g. `insider-trading`.
    pub current_page: String,
    /// Location pathname.
    pub path: String,
}

impl AppContext {
    /// Build the context for the page currently loaded in the window.
    pub fn from_location(config: Config) -> Self {
        let path = dom::pathname();
        Self::new(config, path)
    }

    pub fn new(config: Config, path: String) -> Self {
        let loader = FragmentLoader::new(&config.fragments.base_path);
        let session = shared_session(&config.search);
        Self {
            current_page: current_page(&path),
            path,
            loader,
            store: LocalStorageStore::new(),
            session,
            config,
        }
    }
}
