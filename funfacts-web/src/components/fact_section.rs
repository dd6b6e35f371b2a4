use super::fact_widget::{DeckHandle, FactWidget, Reveal};
use crate::nav;
use funfacts_core::ClickPolicy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub deck: DeckHandle,
    #[prop_or_default]
    pub policy: ClickPolicy,
}

/// The fact widget plus the category links wired to it.
#[function_component(FactSection)]
pub fn fact_section(props: &Props) -> Html {
    let reveal = use_state(|| None::<Reveal>);
    let serial = use_mut_ref(|| 0_u32);

    {
        let reveal = reveal.clone();
        use_effect_with(
            (props.deck.clone(), props.policy),
            move |(deck, policy)| {
                let on_reveal = Callback::from(move |text: String| {
                    let next = {
                        let mut counter = serial.borrow_mut();
                        *counter = counter.wrapping_add(1);
                        *counter
                    };
                    reveal.set(Some(Reveal {
                        serial: next,
                        text: AttrValue::from(text),
                    }));
                });
                let listeners = nav::attach_category_links(deck, *policy, &on_reveal);
                move || drop(listeners)
            },
        );
    }

    html! {
        <FactWidget deck={props.deck.clone()} reveal={(*reveal).clone()} />
    }
}
