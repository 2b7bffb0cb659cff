//! Session-scoped key/value persistence for the canvas layout.
//!
//! The browser implementation goes through `window.sessionStorage`; the
//! in-memory one backs tests and non-web launches.

use std::collections::HashMap;
use wasm_bindgen::JsValue;

/// Key holding the JSON-encoded component sequence.
pub const STORAGE_KEY: &str = "form_builder_layout";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session storage rejected the request: {0}")]
    Backend(String),
    #[error("failed to encode layout: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`. Only usable inside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        if !cfg!(target_arch = "wasm32") {
            return Err(StorageError::Unavailable);
        }
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.session_storage()?.ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}
