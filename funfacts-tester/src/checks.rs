use anyhow::{Context, Result, bail};
use funfacts_core::constants::{FADE_DELAY_MS, NO_FACTS_MESSAGE, WIDGET_PLACEHOLDER};
use funfacts_core::nav::MIDDLE_BUTTON;
use funfacts_core::{
    Category, CategoryResolver, ClickModifiers, ClickPolicy, FactDeck, FactStore,
    GreetingController, MemoryPreferences, NavOutcome, NavigationInterceptor, RESOLVE_RULES,
    ScriptedPrompt, SiteConfig, THEME_KEY, Theme, VISITOR_NAME_KEY, WidgetAction, WidgetState,
    format_category_fact, pick,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;

/// Inputs shared by every check.
#[derive(Debug, Clone)]
pub struct CheckCtx {
    pub samples: usize,
    pub seed: u64,
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub assertions: usize,
    pub failures: Vec<String>,
    pub duration_ms: f64,
}

/// Collects assertion outcomes for one check.
#[derive(Debug, Default)]
struct Tally {
    assertions: usize,
    failures: Vec<String>,
}

impl Tally {
    fn check(&mut self, ok: bool, failure: impl FnOnce() -> String) {
        self.assertions += 1;
        if !ok {
            self.failures.push(failure());
        }
    }
}

type CheckFn = fn(&CheckCtx, &mut Tally) -> Result<()>;

const CATALOG: [(&str, &str, CheckFn); 7] = [
    ("pools", "Every category has a non-empty fact pool", check_pools),
    ("resolver", "Rule order, case folding and fallback of the link resolver", check_resolver),
    ("coverage", "Random picks reach every fact, globally and per category", check_coverage),
    ("widget", "Interleaved fades settle on the last fact", check_widget),
    ("nav", "Category links reveal prefixed facts under both click policies", check_nav),
    ("prefs", "Name and theme survive a reload through the preference store", check_prefs),
    ("config", "Bundled site configuration is complete", check_config),
];

#[must_use]
pub fn list_checks() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|(key, desc, _)| (*key, *desc)).collect()
}

/// Expand a comma-separated selection, where `all` stands for the whole catalog.
///
/// # Errors
///
/// Returns an error naming the first unknown check.
pub fn select_checks(requested: &[String]) -> Result<Vec<&'static str>> {
    let mut selected = Vec::new();
    for name in requested {
        if name == "all" {
            selected.extend(CATALOG.iter().map(|(key, _, _)| *key));
            continue;
        }
        match CATALOG.iter().find(|(key, _, _)| *key == name.as_str()) {
            Some((key, _, _)) => selected.push(*key),
            None => bail!("unknown check '{name}' (see --list-checks)"),
        }
    }
    let mut seen = BTreeSet::new();
    selected.retain(|key| seen.insert(*key));
    Ok(selected)
}

/// Run one named check. Setup errors count as a failure of that check.
#[must_use]
pub fn run_check(name: &str, ctx: &CheckCtx) -> CheckResult {
    let start = Instant::now();
    let mut tally = Tally::default();
    match CATALOG.iter().find(|(key, _, _)| *key == name) {
        Some((_, _, run)) => {
            if let Err(err) = run(ctx, &mut tally) {
                tally.failures.push(format!("{err:#}"));
            }
        }
        None => tally.failures.push(format!("unknown check '{name}'")),
    }
    if ctx.verbose {
        log::info!(
            "{name}: {} assertions, {} failures",
            tally.assertions,
            tally.failures.len()
        );
    }
    CheckResult {
        name: name.to_string(),
        passed: tally.failures.is_empty(),
        assertions: tally.assertions,
        failures: tally.failures,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

fn builtin_store() -> Result<FactStore> {
    FactStore::builtin().context("loading bundled facts")
}

fn check_pools(_ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let store = builtin_store()?;
    for category in Category::ALL {
        let size = store.pool(category).len();
        tally.check(size > 0, || format!("{category} pool is empty"));
    }
    tally.check(store.validate().is_ok(), || {
        "bundled facts fail validation".to_string()
    });
    Ok(())
}

fn check_resolver(_ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let resolver = CategoryResolver::standard();
    for rule in RESOLVE_RULES {
        let label = format!("  {} Facts ", rule.pattern.to_uppercase());
        let got = resolver.resolve(&label);
        tally.check(got == rule.category, || {
            format!("{label:?} resolved to {got}, expected {}", rule.category)
        });
    }
    // Each pair matches two rules; the earlier row must win.
    for pair in RESOLVE_RULES.windows(2) {
        let label = format!("{} and {}", pair[1].pattern, pair[0].pattern);
        let got = resolver.resolve(&label);
        tally.check(got == pair[0].category, || {
            format!("{label:?} resolved to {got}, expected {}", pair[0].category)
        });
    }
    for label in ["", "Home", "Contact us"] {
        let got = resolver.resolve(label);
        tally.check(got == Category::DEFAULT, || {
            format!("{label:?} should fall back to {}, got {got}", Category::DEFAULT)
        });
    }
    tally.check(
        resolver.resolve("Cosmos Facts") == resolver.resolve("Cosmos Facts"),
        || "resolver is not deterministic".to_string(),
    );
    Ok(())
}

fn check_coverage(ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let store = builtin_store()?;
    let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed);

    let global = store.all_facts();
    let mut hit = BTreeSet::new();
    for _ in 0..ctx.samples {
        let fact = pick(&mut rng, &global).context("global pool")?;
        hit.insert(fact.as_str());
    }
    tally.check(hit.len() == global.len(), || {
        format!(
            "{} samples reached {}/{} facts",
            ctx.samples,
            hit.len(),
            global.len()
        )
    });

    for category in Category::ALL {
        let pool = store.pool(category);
        let mut seen = BTreeSet::new();
        for _ in 0..ctx.samples {
            seen.insert(pick(&mut rng, pool).with_context(|| format!("{category} pool"))?);
        }
        tally.check(seen.len() == pool.len(), || {
            format!("{category}: reached {}/{} facts", seen.len(), pool.len())
        });
    }

    let mut empty_deck = FactDeck::seeded(FactStore::default(), ctx.seed);
    tally.check(empty_deck.random_global_fact().is_err(), || {
        "empty store should refuse a global pick".to_string()
    });
    tally.check(
        empty_deck.category_fact(Category::Love) == NO_FACTS_MESSAGE,
        || "empty category should show the fallback message".to_string(),
    );
    Ok(())
}

fn check_widget(ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let mut deck = FactDeck::seeded(builtin_store()?, ctx.seed);
    let initial = WidgetState::default();
    tally.check(initial.text() == WIDGET_PLACEHOLDER, || {
        "widget does not start on the placeholder".to_string()
    });

    // Rapid clicks inside one fade window: every timer fires in order.
    for clicks in 1..=5 {
        let facts: Vec<String> = (0..clicks)
            .map(|_| deck.random_global_fact())
            .collect::<Result<_, _>>()
            .context("drawing facts")?;
        let mut state = WidgetState::default();
        for _ in &facts {
            state.apply(WidgetAction::BeginFade);
        }
        tally.check(state.is_fading(), || {
            format!("{clicks} clicks: widget should be fading")
        });
        for fact in &facts {
            state.apply(WidgetAction::CompleteFade(fact.clone()));
        }
        let last = facts.last().map_or("", String::as_str);
        tally.check(state.text() == last && !state.is_fading(), || {
            format!(
                "{clicks} clicks within {FADE_DELAY_MS}ms settled on {:?}, expected {last:?}",
                state.text()
            )
        });
    }

    let shown = format_category_fact(Category::Cars, "Test fact.");
    let state = WidgetState::default()
        .applied(WidgetAction::BeginFade)
        .applied(WidgetAction::Show(shown.clone()));
    tally.check(state.text() == shown, || {
        "a category reveal during a fade should show immediately".to_string()
    });
    Ok(())
}

fn check_nav(ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let mut deck = FactDeck::seeded(builtin_store()?, ctx.seed);
    let resolver = CategoryResolver::standard();
    let ctrl = ClickModifiers {
        ctrl: true,
        ..ClickModifiers::default()
    };
    let middle = ClickModifiers {
        button: MIDDLE_BUTTON,
        ..ClickModifiers::default()
    };

    for policy in [ClickPolicy::AsShipped, ClickPolicy::Intended] {
        let interceptor = NavigationInterceptor::new(resolver, policy);
        for category in Category::ALL {
            let label = format!("{} Facts", category.name());
            let outcome = interceptor.on_click(&mut deck, &label, ClickModifiers::default());
            let prefix = format!("({category}) ");
            let ok = matches!(&outcome, NavOutcome::Reveal { text, .. } if text.starts_with(&prefix));
            tally.check(ok, || format!("{policy:?}: {label:?} gave {outcome:?}"));
        }
        tally.check(
            interceptor.on_click(&mut deck, "Cosmos", middle) == NavOutcome::PassThrough,
            || format!("{policy:?}: middle click should pass through"),
        );
    }

    let shipped = NavigationInterceptor::new(resolver, ClickPolicy::AsShipped);
    tally.check(
        shipped.on_click(&mut deck, "Cosmos", ctrl) != NavOutcome::PassThrough,
        || "shipped policy should still reveal on ctrl-click".to_string(),
    );
    let intended = NavigationInterceptor::new(resolver, ClickPolicy::Intended);
    tally.check(
        intended.on_click(&mut deck, "Cosmos", ctrl) == NavOutcome::PassThrough,
        || "intended policy should leave ctrl-click to the browser".to_string(),
    );
    Ok(())
}

fn check_prefs(_ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let store = MemoryPreferences::default();

    let first = GreetingController::new(store.clone(), ScriptedPrompt::new([Some("  Ada  ")]));
    let outcome = first.on_load();
    tally.check(outcome.heading.as_deref() == Some("Hello, Ada!"), || {
        format!("first visit heading was {:?}", outcome.heading)
    });
    tally.check(store.value(VISITOR_NAME_KEY).as_deref() == Some("Ada"), || {
        "trimmed name was not stored".to_string()
    });
    tally.check(first.toggle_theme() == Theme::Dark, || {
        "toggle from light should give dark".to_string()
    });

    let prompt = ScriptedPrompt::default();
    let reload = GreetingController::new(store.clone(), prompt);
    let outcome = reload.on_load();
    tally.check(outcome.theme == Theme::Dark, || {
        "dark theme was not restored".to_string()
    });
    tally.check(outcome.toggle_label() == "☀️ Light", || {
        format!("toggle label was {:?}", outcome.toggle_label())
    });
    tally.check(store.value(THEME_KEY).as_deref() == Some("dark"), || {
        "theme was not stored as \"dark\"".to_string()
    });

    let declined = GreetingController::new(MemoryPreferences::default(), ScriptedPrompt::new([None]));
    tally.check(declined.on_load().heading.is_none(), || {
        "a declined prompt should leave the heading alone".to_string()
    });
    tally.check(reload.take_issues().is_empty(), || {
        "in-memory storage reported issues".to_string()
    });
    Ok(())
}

fn check_config(_ctx: &CheckCtx, tally: &mut Tally) -> Result<()> {
    let config = SiteConfig::builtin().context("loading bundled site config")?;
    tally.check(!config.background.images.is_empty(), || {
        "background rotation has no images".to_string()
    });
    tally.check(config.background.interval_ms > 0, || {
        "background interval is zero".to_string()
    });
    tally.check(!config.sliders.is_empty(), || "no sliders configured".to_string());
    for slider in &config.sliders {
        tally.check(slider.interval_ms > config.slide_settle_ms, || {
            format!(
                "slider {} ticks every {}ms, faster than the {}ms settle",
                slider.image_index, slider.interval_ms, config.slide_settle_ms
            )
        });
    }
    tally.check(!config.support_page.trim().is_empty(), || {
        "support page is blank".to_string()
    });
    Ok(())
}
