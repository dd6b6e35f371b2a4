//! Site configuration: carousel images, timings and the support page.
use crate::constants::{
    DEFAULT_BACKGROUND_INTERVAL_MS, DEFAULT_SLIDE_INTERVAL_MS, DEFAULT_SLIDE_SETTLE_MS,
    DEFAULT_SUPPORT_PAGE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Slider for image {0} has no images")]
    EmptySlider(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default = "default_background_interval")]
    pub interval_ms: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_BACKGROUND_INTERVAL_MS,
            images: Vec::new(),
        }
    }
}

/// An image slider, addressing its `img` by document position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub image_index: usize,
    pub images: Vec<String>,
    #[serde(default = "default_slide_interval")]
    pub interval_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub background: BackgroundConfig,
    #[serde(default)]
    pub sliders: Vec<SliderConfig>,
    #[serde(default = "default_slide_settle")]
    pub slide_settle_ms: u32,
    #[serde(default = "default_support_page")]
    pub support_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            background: BackgroundConfig::default(),
            sliders: Vec::new(),
            slide_settle_ms: DEFAULT_SLIDE_SETTLE_MS,
            support_page: DEFAULT_SUPPORT_PAGE.to_string(),
        }
    }
}

fn default_background_interval() -> u32 {
    DEFAULT_BACKGROUND_INTERVAL_MS
}

fn default_slide_interval() -> u32 {
    DEFAULT_SLIDE_INTERVAL_MS
}

fn default_slide_settle() -> u32 {
    DEFAULT_SLIDE_SETTLE_MS
}

fn default_support_page() -> String {
    DEFAULT_SUPPORT_PAGE.to_string()
}

impl SiteConfig {
    /// Parse a site configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a slider lists no images.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Some(slider) = config.sliders.iter().find(|s| s.images.is_empty()) {
            return Err(ConfigError::EmptySlider(slider.image_index));
        }
        Ok(config)
    }

    /// The configuration bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("../data/site.json"))
    }
}
