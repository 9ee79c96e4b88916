use log::warn;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::error::{Error, Result};

/// String key/value storage with the semantics of the browser's local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    /// Capability check: write and remove a sentinel next to `key`.
    fn is_writable(&self, key: &str) -> bool {
        let probe = format!("{key}-test");

        match self
            .set_item(&probe, "1")
            .and_then(|_| self.remove_item(&probe))
        {
            Ok(()) => true,
            Err(e) => {
                warn!("local storage is not writable: {e}");
                false
            }
        }
    }
}

/// In-memory store, clones share the same items and the read-only switch.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// a store that rejects every write, like a browser with storage disabled
    pub fn read_only() -> Self {
        let store = Self::default();
        store.set_read_only(true);

        store
    }

    /// start or stop rejecting writes, e.g. once the storage quota is exhausted
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only.get() {
            Err(Error::Storage("store is read-only".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.items.borrow_mut().remove(key);

        Ok(())
    }
}
