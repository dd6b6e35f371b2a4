//! Category link behaviour: click policy, hover styling and category reveals.
use crate::category::{Category, CategoryResolver};
use crate::deck::FactDeck;
use rand::Rng;

/// Mouse button number reported for a middle click.
pub const MIDDLE_BUTTON: i16 = 1;

/// Inline style applied while the pointer is over a category link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub color: &'static str,
    pub font_weight: &'static str,
}

pub const HOVER_STYLE: HoverStyle = HoverStyle {
    color: "gold",
    font_weight: "bold",
};

/// Modifier state of a click on a category link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub button: i16,
}

/// Which clicks are left to the browser instead of revealing a fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickPolicy {
    /// Behaviour of the shipped page: only the middle button is exempt.
    /// Ctrl/Meta/Shift clicks still reveal a fact.
    #[default]
    AsShipped,
    /// Ctrl, Meta, Shift or the middle button are all exempt.
    Intended,
}

impl ClickPolicy {
    #[must_use]
    pub const fn lets_browser_handle(self, click: ClickModifiers) -> bool {
        let middle = click.button == MIDDLE_BUTTON;
        match self {
            Self::AsShipped => middle,
            Self::Intended => click.ctrl || click.meta || click.shift || middle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Leave the click to the browser.
    PassThrough,
    /// Show `text` in the widget and scroll it into view.
    Reveal { category: Category, text: String },
}

/// Decides what a click on a category link does.
#[derive(Debug, Clone)]
pub struct NavigationInterceptor<'r> {
    resolver: &'r CategoryResolver,
    policy: ClickPolicy,
}

impl Default for NavigationInterceptor<'static> {
    fn default() -> Self {
        Self::new(CategoryResolver::standard(), ClickPolicy::default())
    }
}

impl<'r> NavigationInterceptor<'r> {
    #[must_use]
    pub const fn new(resolver: &'r CategoryResolver, policy: ClickPolicy) -> Self {
        Self { resolver, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> ClickPolicy {
        self.policy
    }

    pub fn on_click<R: Rng>(
        &self,
        deck: &mut FactDeck<R>,
        label: &str,
        click: ClickModifiers,
    ) -> NavOutcome {
        if self.policy.lets_browser_handle(click) {
            return NavOutcome::PassThrough;
        }
        let category = self.resolver.resolve(label);
        NavOutcome::Reveal {
            category,
            text: deck.category_fact(category),
        }
    }
}
