use lacebolla_core::{storage::KeyValueStore, Error, Result};
use wasm_bindgen::JsValue;

/// `window.localStorage`, absent when the browser refuses access to it.
#[derive(Clone)]
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage> {
        self.inner.as_ref().ok_or(Error::StorageUnavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(storage_error)
    }
}

// quota errors and security errors arrive as DOMException values
fn storage_error(e: JsValue) -> Error {
    Error::Storage(format!("{e:?}"))
}
