//! Display state of the fact widget.
//!
//! A random reveal is two-phase: the fade starts immediately and the text lands
//! after [`FADE_DELAY_MS`](crate::constants::FADE_DELAY_MS). Every trigger runs its
//! own timer; nothing is queued, so the last completion to fire decides the text.
use crate::constants::WIDGET_PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// A random reveal was triggered; the fade-out starts now.
    BeginFade,
    /// A pending fade timer fired with its fact.
    CompleteFade(String),
    /// Replace the text immediately (category reveals).
    Show(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    text: String,
    pending_fades: u32,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(WIDGET_PLACEHOLDER)
    }
}

impl WidgetState {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pending_fades: 0,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn pending_fades(&self) -> u32 {
        self.pending_fades
    }

    #[must_use]
    pub const fn phase(&self) -> WidgetPhase {
        if self.pending_fades == 0 {
            WidgetPhase::Idle
        } else {
            WidgetPhase::Transitioning
        }
    }

    /// Whether the fade-out styling should be applied.
    #[must_use]
    pub const fn is_fading(&self) -> bool {
        matches!(self.phase(), WidgetPhase::Transitioning)
    }

    pub fn apply(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::BeginFade => {
                self.pending_fades = self.pending_fades.saturating_add(1);
            }
            WidgetAction::CompleteFade(text) => {
                self.text = text;
                self.pending_fades = self.pending_fades.saturating_sub(1);
            }
            WidgetAction::Show(text) => self.text = text,
        }
    }

    #[must_use]
    pub fn applied(mut self, action: WidgetAction) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_placeholder() {
        let state = WidgetState::default();
        assert_eq!(state.text(), WIDGET_PLACEHOLDER);
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn single_fade_round_trip() {
        let mut state = WidgetState::default();
        state.apply(WidgetAction::BeginFade);
        assert_eq!(state.phase(), WidgetPhase::Transitioning);
        assert_eq!(state.text(), WIDGET_PLACEHOLDER);
        state.apply(WidgetAction::CompleteFade("fact".into()));
        assert_eq!(state.phase(), WidgetPhase::Idle);
        assert_eq!(state.text(), "fact");
    }

    #[test]
    fn overlapping_fades_are_last_write_wins() {
        let state = WidgetState::default()
            .applied(WidgetAction::BeginFade)
            .applied(WidgetAction::BeginFade);
        assert_eq!(state.pending_fades(), 2);
        let state = state.applied(WidgetAction::CompleteFade("first".into()));
        assert!(state.is_fading());
        assert_eq!(state.text(), "first");
        let state = state.applied(WidgetAction::CompleteFade("second".into()));
        assert!(!state.is_fading());
        assert_eq!(state.text(), "second");
    }

    #[test]
    fn category_reveal_mid_fade_is_overwritten_by_the_timer() {
        let state = WidgetState::default()
            .applied(WidgetAction::BeginFade)
            .applied(WidgetAction::Show("(Love) x".into()));
        assert_eq!(state.text(), "(Love) x");
        assert!(state.is_fading());
        let state = state.applied(WidgetAction::CompleteFade("global".into()));
        assert_eq!(state.text(), "global");
    }

    #[test]
    fn stray_completion_never_underflows() {
        let state = WidgetState::default().applied(WidgetAction::CompleteFade("late".into()));
        assert_eq!(state.pending_fades(), 0);
        assert_eq!(state.text(), "late");
    }
}
