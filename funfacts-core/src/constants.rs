//! Timing and copy constants shared by the web front-end and the tester.

/// Delay between starting the fade-out and swapping the widget text.
pub const FADE_DELAY_MS: u32 = 400;

/// Stagger applied per fact box for the entrance animation.
pub const ENTRANCE_STAGGER_MS: u32 = 200;

/// How long a clicked fact box keeps its highlight.
pub const HIGHLIGHT_MS: u32 = 800;

pub const DEFAULT_BACKGROUND_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 3000;
pub const DEFAULT_SLIDE_SETTLE_MS: u32 = 1000;
pub const DEFAULT_SUPPORT_PAGE: &str = "Support Us.html";

pub const NO_FACTS_MESSAGE: &str = "No facts found for that category yet.";
pub const WIDGET_PLACEHOLDER: &str = "Click the button to reveal a fun fact.";
pub const RANDOM_FACT_LABEL: &str = "🎲 Random Fact";

pub const NAME_PROMPT: &str = "What is your name, Explorer?";
pub const RENAME_PROMPT: &str = "Update your display name:";
pub const RENAME_LABEL: &str = "📝 Change Name";
pub const DARK_LABEL: &str = "🌙 Dark";
pub const LIGHT_LABEL: &str = "☀️ Light";

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const POP_CLASS: &str = "show";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const PANEL_ACTIVE_CLASS: &str = "active";
