//! Info panel content and fact box animation timing.
use crate::constants::ENTRANCE_STAGGER_MS;

/// CSS animation applied to each fact box on entrance.
pub const ENTRANCE_ANIMATION: &str = "bounceIn 0.6s ease";

/// Content shown in the expanded info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoCard {
    pub title: String,
    pub content: String,
    pub image: String,
}

impl InfoCard {
    /// Read a card from a fact box's `data-title`, `data-content` and `data-image`.
    /// Missing attributes read as empty strings.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            title: lookup("data-title").unwrap_or_default(),
            content: lookup("data-content").unwrap_or_default(),
            image: lookup("data-image").unwrap_or_default(),
        }
    }
}

/// Delay before the entrance animation of the fact box at `position`.
#[must_use]
pub const fn entrance_delay_ms(position: u32) -> u32 {
    position.saturating_mul(ENTRANCE_STAGGER_MS)
}
