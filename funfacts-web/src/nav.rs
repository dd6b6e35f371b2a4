//! Wires the `.choice` category links to the fact widget.
use crate::components::fact_widget::DeckHandle;
use crate::dom::{self, Listener};
use funfacts_core::{
    CategoryResolver, ClickModifiers, ClickPolicy, HOVER_STYLE, NavOutcome, NavigationInterceptor,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::Callback;

pub const CATEGORY_LINK_SELECTOR: &str = ".choice li a";

fn modifiers(event: &Event) -> ClickModifiers {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| ClickModifiers {
            ctrl: mouse.ctrl_key(),
            meta: mouse.meta_key(),
            shift: mouse.shift_key(),
            button: mouse.button(),
        })
        .unwrap_or_default()
}

fn hover_listeners(link: &HtmlElement) -> Vec<Result<Listener, dom::DomError>> {
    let on = link.clone();
    let off = link.clone();
    vec![
        dom::listen(link, "mouseenter", move |_| {
            dom::set_style(&on, "color", HOVER_STYLE.color);
            dom::set_style(&on, "font-weight", HOVER_STYLE.font_weight);
        }),
        dom::listen(link, "mouseleave", move |_| {
            dom::clear_style(&off, "color");
            dom::clear_style(&off, "font-weight");
        }),
    ]
}

fn click_listener(
    link: &Element,
    deck: DeckHandle,
    policy: ClickPolicy,
    on_reveal: Callback<String>,
) -> Result<Listener, dom::DomError> {
    let label_source = link.clone();
    dom::listen(link, "click", move |event| {
        let label = label_source.text_content().unwrap_or_default();
        let interceptor = NavigationInterceptor::new(CategoryResolver::standard(), policy);
        let outcome = deck.with(|deck| interceptor.on_click(deck, &label, modifiers(&event)));
        match outcome {
            NavOutcome::PassThrough => {}
            NavOutcome::Reveal { category, text } => {
                log::debug!("revealing {category} fact for link {:?}", label.trim());
                on_reveal.emit(text);
            }
        }
    })
}

/// Attach hover styling and fact reveals to every category link on the page.
///
/// Listeners are detached when the returned handles are dropped.
#[must_use]
pub fn attach_category_links(
    deck: &DeckHandle,
    policy: ClickPolicy,
    on_reveal: &Callback<String>,
) -> Vec<Listener> {
    let links = dom::query_all(CATEGORY_LINK_SELECTOR);
    if links.is_empty() {
        log::debug!("no category links matched {CATEGORY_LINK_SELECTOR}");
    }
    let mut attached = Vec::with_capacity(links.len() * 3);
    for link in links {
        let mut results = Vec::with_capacity(3);
        if let Some(html) = link.dyn_ref::<HtmlElement>() {
            results.extend(hover_listeners(html));
        }
        results.push(click_listener(
            &link,
            deck.clone(),
            policy,
            on_reveal.clone(),
        ));
        for result in results {
            match result {
                Ok(listener) => attached.push(listener),
                Err(err) => log::warn!("category link listener not attached: {err}"),
            }
        }
    }
    attached
}
