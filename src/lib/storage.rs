//! String key-value persistence behind the session repository. The browser
//! implementation wraps `window.localStorage`; when the browser refuses access
//! (privacy modes, sandboxed frames) the app falls back to process memory and
//! sessions simply do not survive a reload.

use super::errors::AppError;
use std::{cell::RefCell, collections::HashMap};

pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserStorage, SessionStore};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{AppError, KeyValueStore, MemoryStore};
    use std::rc::Rc;
    use tracing::warn;
    use wasm_bindgen::JsValue;

    thread_local! {
        // Shared by every handle so the fallback behaves like one storage area.
        static FALLBACK: Rc<MemoryStore> = Rc::new(MemoryStore::default());
    }

    fn storage_error(action: &str, err: &JsValue) -> AppError {
        AppError::Storage(format!("Failed to {action}: {err:?}"))
    }

    /// `window.localStorage`, scoped to the page origin.
    #[derive(Clone, Debug)]
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn local() -> Result<Self, AppError> {
            let window = web_sys::window()
                .ok_or_else(|| AppError::Storage("No browser window available.".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(|err| storage_error("open local storage", &err))?
                .ok_or_else(|| AppError::Storage("Local storage is disabled.".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.storage
                .get_item(key)
                .map_err(|err| storage_error("read local storage", &err))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| storage_error("write local storage", &err))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            self.storage
                .remove_item(key)
                .map_err(|err| storage_error("clear local storage", &err))
        }
    }

    /// Local storage when the browser grants it, otherwise page-lifetime memory.
    #[derive(Clone, Debug)]
    pub enum SessionStore {
        Browser(BrowserStorage),
        Memory(Rc<MemoryStore>),
    }

    impl SessionStore {
        pub fn open() -> Self {
            match BrowserStorage::local() {
                Ok(storage) => Self::Browser(storage),
                Err(err) => {
                    warn!(error = %err, "local storage unavailable, sessions will not persist");
                    Self::Memory(FALLBACK.with(Rc::clone))
                }
            }
        }
    }

    impl KeyValueStore for SessionStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            match self {
                Self::Browser(storage) => storage.get(key),
                Self::Memory(memory) => memory.get(key),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            match self {
                Self::Browser(storage) => storage.set(key, value),
                Self::Memory(memory) => memory.set(key, value),
            }
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            match self {
                Self::Browser(storage) => storage.remove(key),
                Self::Memory(memory) => memory.remove(key),
            }
        }
    }
}
