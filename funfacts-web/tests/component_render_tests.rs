use funfacts_core::constants::{RANDOM_FACT_LABEL, RENAME_LABEL, WIDGET_PLACEHOLDER};
use funfacts_core::{FactDeck, FactStore, Theme};
use funfacts_web::components::fact_section::{self, FactSection};
use funfacts_web::components::fact_widget::{self, DeckHandle, FactWidget};
use funfacts_web::components::toolbar::{self, Toolbar};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn deck() -> DeckHandle {
    DeckHandle::new(FactDeck::seeded(FactStore::builtin().unwrap(), 3))
}

#[test]
fn fact_widget_renders_placeholder_and_button() {
    let props = fact_widget::Props {
        deck: deck(),
        reveal: None,
    };
    let html = block_on(LocalServerRenderer::<FactWidget>::with_props(props).render());
    assert!(html.contains("id=\"fact-widget\""));
    assert!(html.contains("fact-widget"));
    assert!(html.contains(RANDOM_FACT_LABEL));
    assert!(html.contains(WIDGET_PLACEHOLDER));
    assert!(!html.contains("fade-out"));
}

#[test]
fn toolbar_label_names_the_other_theme() {
    let dark = toolbar::Props {
        initial_theme: Theme::Dark,
        on_toggle: Callback::from(|()| Theme::Light),
        on_rename: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toolbar>::with_props(dark).render());
    assert!(html.contains("☀️ Light"));
    assert!(html.contains(RENAME_LABEL));

    let light = toolbar::Props {
        initial_theme: Theme::Light,
        on_toggle: Callback::from(|()| Theme::Dark),
        on_rename: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toolbar>::with_props(light).render());
    assert!(html.contains("🌙 Dark"));
}

#[test]
fn fact_section_renders_the_widget() {
    let props = fact_section::Props {
        deck: deck(),
        policy: funfacts_core::ClickPolicy::Intended,
    };
    let html = block_on(LocalServerRenderer::<FactSection>::with_props(props).render());
    assert!(html.contains("fact-widget"));
    assert!(html.contains(WIDGET_PLACEHOLDER));
}

#[test]
fn deck_handles_compare_by_identity() {
    let a = deck();
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, deck());
}
