use funfacts_core::constants::{FADE_DELAY_MS, FADE_OUT_CLASS, POP_CLASS, RANDOM_FACT_LABEL};
use funfacts_core::{FactDeck, WidgetAction, WidgetState};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the deck; the widget button and the category links draw from it.
#[derive(Clone, Debug)]
pub struct DeckHandle(Rc<RefCell<FactDeck>>);

impl DeckHandle {
    #[must_use]
    pub fn new(deck: FactDeck) -> Self {
        Self(Rc::new(RefCell::new(deck)))
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut FactDeck) -> T) -> T {
        f(&mut self.0.borrow_mut())
    }
}

impl PartialEq for DeckHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A category reveal requested by a navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Bumped per click so repeating the same text still re-runs the reveal.
    pub serial: u32,
    pub text: AttrValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetModel(pub WidgetState);

impl Reducible for WidgetModel {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().applied(action)))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub deck: DeckHandle,
    #[prop_or_default]
    pub reveal: Option<Reveal>,
}

fn restart_pop(section: &NodeRef) {
    let Some(el) = section.cast::<web_sys::HtmlElement>() else {
        return;
    };
    let classes = el.class_list();
    let _ = classes.remove_1(POP_CLASS);
    // Reading layout forces a reflow so the animation starts over.
    let _ = el.offset_width();
    let _ = classes.add_1(POP_CLASS);
}

fn scroll_to(section: &NodeRef) {
    let Some(el) = section.cast::<web_sys::Element>() else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(FactWidget)]
pub fn fact_widget(props: &Props) -> Html {
    let widget = use_reducer(WidgetModel::default);
    let section_ref = use_node_ref();

    {
        let widget = widget.clone();
        let section_ref = section_ref.clone();
        use_effect_with(props.reveal.clone(), move |reveal| {
            if let Some(reveal) = reveal {
                widget.dispatch(WidgetAction::Show(reveal.text.to_string()));
                scroll_to(&section_ref);
            }
            || {}
        });
    }

    let on_random = {
        let widget = widget.clone();
        let deck = props.deck.clone();
        let section_ref = section_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let fact = match deck.with(FactDeck::random_global_fact) {
                Ok(fact) => fact,
                Err(err) => {
                    log::warn!("random fact unavailable: {err}");
                    return;
                }
            };
            widget.dispatch(WidgetAction::BeginFade);
            let dispatcher = widget.dispatcher();
            Timeout::new(FADE_DELAY_MS, move || {
                dispatcher.dispatch(WidgetAction::CompleteFade(fact));
            })
            .forget();
            restart_pop(&section_ref);
        })
    };

    let mut text_class = classes!("fact");
    if widget.0.is_fading() {
        text_class.push(FADE_OUT_CLASS);
    }

    html! {
        <section id="fact-widget" class="fact-widget" ref={section_ref}>
            <button type="button" class="fact-widget__random" onclick={on_random}>
                { RANDOM_FACT_LABEL }
            </button>
            <p class={text_class} aria-live="polite">{ widget.0.text().to_string() }</p>
        </section>
    }
}
