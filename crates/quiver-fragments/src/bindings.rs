//! JavaScript API.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::loader::FragmentLoader;

/// Fragment loader exposed to scripts.
#[wasm_bindgen]
pub struct ComponentLoader {
    inner: FragmentLoader,
}

#[wasm_bindgen]
impl ComponentLoader {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: &str) -> ComponentLoader {
        Self {
            inner: FragmentLoader::new(base_url),
        }
    }

    /// Resolves to the fragment HTML.
    pub fn load(&self, name: String) -> Promise {
        let loader = self.inner.clone();
        future_to_promise(async move { Ok(JsValue::from_str(&loader.load(&name).await?)) })
    }

    /// Evicts the fragment and resolves to freshly fetched HTML.
    pub fn reload(&self, name: String) -> Promise {
        let loader = self.inner.clone();
        future_to_promise(async move { Ok(JsValue::from_str(&loader.reload(&name).await?)) })
    }

    #[wasm_bindgen(js_name = getComponent)]
    pub fn get_component(&self, name: &str) -> Option<String> {
        self.inner.get(name)
    }

    #[wasm_bindgen(js_name = isComponentLoaded)]
    pub fn is_component_loaded(&self, name: &str) -> bool {
        self.inner.is_loaded(name)
    }

    #[wasm_bindgen(js_name = cachedCount)]
    pub fn cached_count(&self) -> usize {
        self.inner.cached_count()
    }

    #[wasm_bindgen(js_name = clearCache)]
    pub fn clear_cache(&self) {
        self.inner.clear_cache();
    }
}

impl From<FragmentLoader> for ComponentLoader {
    fn from(inner: FragmentLoader) -> Self {
        Self { inner }
    }
}
