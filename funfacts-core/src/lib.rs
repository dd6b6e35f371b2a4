//! Fun Facts core
//!
//! Platform-agnostic logic behind the Fun Facts site: fact pools, random selection,
//! category resolution for navigation links, the fact widget state machine and
//! visitor preferences. Browser bindings live in `funfacts-web`.

pub mod category;
pub mod config;
pub mod constants;
pub mod deck;
pub mod greeting;
pub mod nav;
pub mod panel;
pub mod prefs;
pub mod rotation;
pub mod select;
pub mod store;
pub mod widget;

// Re-export commonly used types
pub use category::{Category, CategoryResolver, RESOLVE_RULES, ResolveRule, resolve};
pub use config::{BackgroundConfig, ConfigError, SiteConfig, SliderConfig};
pub use deck::{FactDeck, format_category_fact};
pub use greeting::{GreetingController, LoadOutcome, NamePrompt, ScriptedPrompt, greeting_for};
pub use nav::{
    ClickModifiers, ClickPolicy, HOVER_STYLE, HoverStyle, NavOutcome, NavigationInterceptor,
};
pub use panel::{InfoCard, entrance_delay_ms};
pub use prefs::{MemoryPreferences, PreferenceStore, Preferences, THEME_KEY, Theme, VISITOR_NAME_KEY};
pub use rotation::{BackgroundRotation, SlideRotation};
pub use select::{SelectError, pick};
pub use store::{Fact, FactStore, FactStoreError};
pub use widget::{WidgetAction, WidgetPhase, WidgetState};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait FactLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the category fact pools
    ///
    /// # Errors
    ///
    /// Returns an error if the fact data cannot be loaded or fails validation.
    fn load_facts(&self) -> Result<FactStore, Self::Error>;

    /// Load the site configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_site_config(&self) -> Result<SiteConfig, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Facts(#[from] FactStoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loader backed by the JSON documents compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFactLoader;

impl FactLoader for EmbeddedFactLoader {
    type Error = DataError;

    fn load_facts(&self) -> Result<FactStore, Self::Error> {
        Ok(FactStore::builtin()?)
    }

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::builtin()?)
    }
}

/// Build a deck from any loader.
///
/// # Errors
///
/// Returns the loader's error if the fact pools cannot be loaded.
pub fn load_deck<L: FactLoader>(loader: &L, seed: u64) -> Result<FactDeck, L::Error> {
    loader
        .load_facts()
        .map(|store| FactDeck::seeded(store, seed))
}
