//! Greeting and toolbar behaviour on top of [`Preferences`].
use crate::constants::{NAME_PROMPT, RENAME_PROMPT};
use crate::prefs::{PreferenceStore, Preferences, Theme, normalize_name};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Heading text for a known visitor.
#[must_use]
pub fn greeting_for(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Blocking text prompt. `None` means the visitor cancelled.
pub trait NamePrompt {
    fn ask(&self, message: &str) -> Option<String>;
}

/// Prompt that replays canned answers and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    #[must_use]
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<&'static str>>,
    {
        Self {
            answers: RefCell::new(
                answers
                    .into_iter()
                    .map(|a| a.map(str::to_string))
                    .collect(),
            ),
            asked: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl NamePrompt for ScriptedPrompt {
    fn ask(&self, message: &str) -> Option<String> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// What the page should show after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub heading: Option<String>,
    pub theme: Theme,
}

impl LoadOutcome {
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        self.theme.toggle_label()
    }
}

/// Owns the visitor preferences and the current theme for the lifetime of the page.
///
/// Storage failures never abort an action: the in-page effect still happens and the
/// failure is kept for the caller to report via [`GreetingController::take_issues`].
pub struct GreetingController<S, P> {
    prefs: Preferences<S>,
    prompt: P,
    theme: Cell<Theme>,
    issues: RefCell<Vec<String>>,
}

impl<S, P> GreetingController<S, P>
where
    S: PreferenceStore,
    P: NamePrompt,
{
    pub fn new(store: S, prompt: P) -> Self {
        Self {
            prefs: Preferences::new(store),
            prompt,
            theme: Cell::new(Theme::Light),
            issues: RefCell::new(Vec::new()),
        }
    }

    pub const fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Read stored preferences, asking for a name when none is stored.
    pub fn on_load(&self) -> LoadOutcome {
        let stored = self
            .prefs
            .visitor_name()
            .unwrap_or_else(|err| self.record("read visitor name", &err));
        let name = stored.or_else(|| {
            let answer = normalize_name(self.prompt.ask(NAME_PROMPT).as_deref())?;
            self.persist_name(&answer);
            Some(answer)
        });
        let theme = self
            .prefs
            .theme()
            .unwrap_or_else(|err| self.record("read theme", &err));
        self.theme.set(theme);
        LoadOutcome {
            heading: name.as_deref().map(greeting_for),
            theme,
        }
    }

    /// Flip and persist the theme, returning the new one.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.get().toggled();
        self.theme.set(next);
        if let Err(err) = self.prefs.set_theme(next) {
            self.record::<()>("save theme", &err);
        }
        next
    }

    /// Ask for a new name. Returns the new heading, or `None` when cancelled.
    pub fn rename(&self) -> Option<String> {
        let answer = normalize_name(self.prompt.ask(RENAME_PROMPT).as_deref())?;
        self.persist_name(&answer);
        Some(greeting_for(&answer))
    }

    /// Drain storage problems recorded since the last call.
    pub fn take_issues(&self) -> Vec<String> {
        std::mem::take(&mut *self.issues.borrow_mut())
    }

    fn persist_name(&self, name: &str) {
        if let Err(err) = self.prefs.set_visitor_name(name) {
            self.record::<()>("save visitor name", &err);
        }
    }

    fn record<T: Default>(&self, action: &str, err: &S::Error) -> T {
        self.issues
            .borrow_mut()
            .push(format!("failed to {action}: {err}"));
        T::default()
    }
}
