//! Fact box entrance animation, click highlight and the "learn more" panel.
use crate::dom::{self, DomError, Listener};
use funfacts_core::constants::{HIGHLIGHT_CLASS, HIGHLIGHT_MS, PANEL_ACTIVE_CLASS};
use funfacts_core::panel::ENTRANCE_ANIMATION;
use funfacts_core::{InfoCard, entrance_delay_ms};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

pub const FACT_BOX_SELECTOR: &str = ".forText";
pub const LEARN_MORE_SELECTOR: &str = ".learnMore";
pub const PANEL_ID: &str = "infoPanel";

/// Stagger the entrance animation of every fact box.
pub fn animate_fact_boxes() {
    let boxes = dom::query_all(FACT_BOX_SELECTOR);
    for (position, fact_box) in (0_u32..).zip(boxes) {
        let Ok(fact_box) = fact_box.dyn_into::<HtmlElement>() else {
            continue;
        };
        Timeout::new(entrance_delay_ms(position), move || {
            dom::set_style(&fact_box, "animation", ENTRANCE_ANIMATION);
        })
        .forget();
    }
}

/// Briefly highlight a fact box when it is clicked.
#[must_use]
pub fn attach_highlights() -> Vec<Listener> {
    dom::query_all(FACT_BOX_SELECTOR)
        .into_iter()
        .filter_map(|fact_box| {
            let target = fact_box.clone();
            dom::listen(&fact_box, "click", move |_| {
                let _ = target.class_list().add_1(HIGHLIGHT_CLASS);
                let target = target.clone();
                Timeout::new(HIGHLIGHT_MS, move || {
                    let _ = target.class_list().remove_1(HIGHLIGHT_CLASS);
                })
                .forget();
            })
            .map_err(|err| log::warn!("highlight not attached: {err}"))
            .ok()
        })
        .collect()
}

fn card_for(button: &Element) -> Option<InfoCard> {
    let fact_box = button.closest(FACT_BOX_SELECTOR).ok().flatten()?;
    Some(InfoCard::from_attributes(|name| fact_box.get_attribute(name)))
}

/// Fill the info panel with `card` and open it.
///
/// # Errors
/// Returns [`DomError::Missing`] when the panel or one of its parts is absent.
pub fn open_panel(card: &InfoCard) -> Result<(), DomError> {
    let panel = dom::html_by_id(PANEL_ID)?;
    dom::html_by_id("infoContent")?.set_inner_text(&card.content);
    dom::html_by_id("infoTitle")?.set_inner_text(&card.title);
    dom::html_by_id("infoImage")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| DomError::Missing("img#infoImage".to_string()))?
        .set_src(&card.image);
    panel.class_list().add_1(PANEL_ACTIVE_CLASS)?;
    Ok(())
}

/// Close the info panel.
///
/// # Errors
/// Returns [`DomError::Missing`] when the panel is absent.
pub fn close_panel() -> Result<(), DomError> {
    dom::html_by_id(PANEL_ID)?
        .class_list()
        .remove_1(PANEL_ACTIVE_CLASS)?;
    Ok(())
}

/// Wire every "learn more" button and the panel's close button.
#[must_use]
pub fn attach_info_panel() -> Vec<Listener> {
    let mut listeners: Vec<Listener> = dom::query_all(LEARN_MORE_SELECTOR)
        .into_iter()
        .filter_map(|button| {
            let source = button.clone();
            dom::listen(&button, "click", move |_| {
                let Some(card) = card_for(&source) else {
                    log::warn!("learn more button outside a fact box");
                    return;
                };
                if let Err(err) = open_panel(&card) {
                    log::warn!("info panel unavailable: {err}");
                }
            })
            .map_err(|err| log::warn!("learn more not attached: {err}"))
            .ok()
        })
        .collect();

    match dom::by_id("closeBtn") {
        Some(close) => match dom::listen(&close, "click", |_| {
            if let Err(err) = close_panel() {
                log::warn!("info panel unavailable: {err}");
            }
        }) {
            Ok(listener) => listeners.push(listener),
            Err(err) => log::warn!("close button not attached: {err}"),
        },
        None => log::debug!("no #closeBtn on this page"),
    }
    listeners
}
