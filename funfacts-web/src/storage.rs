//! Browser-backed implementations of the core preference and prompt traits.
use crate::dom::{self, DomError};
use funfacts_core::{NamePrompt, PreferenceStore};

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] DomError),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Preferences persisted in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        dom::local_storage()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        dom::local_storage()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}

/// Blocking `window.prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl NamePrompt for BrowserPrompt {
    fn ask(&self, message: &str) -> Option<String> {
        let win = web_sys::window()?;
        match win.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("prompt failed: {}", dom::js_error_message(&err));
                None
            }
        }
    }
}
