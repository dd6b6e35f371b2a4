use funfacts_core::Theme;
use funfacts_core::constants::RENAME_LABEL;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub initial_theme: Theme,
    /// Flips the theme and answers with the one now in effect.
    pub on_toggle: Callback<(), Theme>,
    pub on_rename: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(p: &Props) -> Html {
    let theme = use_state(|| p.initial_theme);

    let toggle = {
        let theme = theme.clone();
        let cb = p.on_toggle.clone();
        Callback::from(move |_| theme.set(cb.emit(())))
    };
    let rename = {
        let cb = p.on_rename.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <>
            <button type="button" id="theme-toggle" onclick={toggle}>
                { theme.toggle_label() }
            </button>
            <button type="button" id="rename-btn" onclick={rename}>{ RENAME_LABEL }</button>
        </>
    }
}
