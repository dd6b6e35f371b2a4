//! Visitor preferences: display name and colour theme.
use crate::constants::{DARK_LABEL, LIGHT_LABEL};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

pub const VISITOR_NAME_KEY: &str = "visitorName";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything other than `"dark"` means light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label of the toggle control, naming the theme a click switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => LIGHT_LABEL,
            Self::Light => DARK_LABEL,
        }
    }
}

/// Durable string key-value storage scoped to the site.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Trim a name and drop it if nothing is left.
#[must_use]
pub fn normalize_name(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Typed access to the two preference keys.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stored visitor name, trimmed; empty values read as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn visitor_name(&self) -> Result<Option<String>, S::Error> {
        Ok(normalize_name(self.store.get(VISITOR_NAME_KEY)?.as_deref()))
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_visitor_name(&self, name: &str) -> Result<(), S::Error> {
        self.store.set(VISITOR_NAME_KEY, name)
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn theme(&self) -> Result<Theme, S::Error> {
        Ok(Theme::from_stored(self.store.get(THEME_KEY)?.as_deref()))
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_theme(&self, theme: Theme) -> Result<(), S::Error> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
