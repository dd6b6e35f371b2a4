//! Page bootstrap: greeting, toolbar, fact widget and the decorative extras.
use crate::components::fact_section::{self, FactSection};
use crate::components::fact_widget::DeckHandle;
use crate::components::toolbar::{self, Toolbar};
use crate::storage::{BrowserPreferences, BrowserPrompt};
use crate::{carousel, dom, modal, panels, styles};
use funfacts_core::constants::DARK_MODE_CLASS;
use funfacts_core::{
    ClickPolicy, EmbeddedFactLoader, FactLoader, GreetingController, NamePrompt, SiteConfig,
    Theme, load_deck,
};
use std::rc::Rc;
use web_sys::Element;
use yew::{Callback, Renderer};

pub const TOOLBAR_CLASS: &str = "toolbar";
pub const FACT_HOST_ID: &str = "fact-widget-host";
pub const CHOICE_CONTAINER_SELECTOR: &str = ".choicecontainer";

type Controller<P> = Rc<GreetingController<BrowserPreferences, P>>;

/// Boot the page with the browser's own name prompt.
pub fn boot() {
    boot_with(BrowserPrompt);
}

/// Boot the page, asking for the visitor's name through `prompt`.
pub fn boot_with<P: NamePrompt + 'static>(prompt: P) {
    styles::inject_styles();

    let controller: Controller<P> = Rc::new(GreetingController::new(BrowserPreferences, prompt));
    let outcome = controller.on_load();
    if let Some(heading) = &outcome.heading {
        set_heading(heading);
    }
    apply_theme(outcome.theme);
    report_issues(&controller);
    mount_toolbar(&controller, outcome.theme);

    mount_fact_section();
    start_extras();
}

fn set_heading(text: &str) {
    match dom::query("h1") {
        Some(h1) => h1.set_text_content(Some(text)),
        None => log::warn!("no <h1> to greet the visitor in"),
    }
}

/// Add or remove the dark-mode class on `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(body) = dom::body() else {
        return;
    };
    if let Err(err) = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
    {
        log::warn!("could not apply theme: {}", dom::js_error_message(&err));
    }
}

fn report_issues<P: NamePrompt>(controller: &Controller<P>) {
    for issue in controller.take_issues() {
        log::error!("{issue}");
    }
}

fn append_host(host: &Element) -> bool {
    match dom::body().map(|body| body.append_child(host)) {
        Some(Ok(_)) => true,
        Some(Err(err)) => {
            log::warn!("could not attach host: {}", dom::js_error_message(&err));
            false
        }
        None => false,
    }
}

fn mount_toolbar<P: NamePrompt + 'static>(controller: &Controller<P>, theme: Theme) {
    let host = match dom::create_html("div") {
        Ok(host) => Element::from(host),
        Err(err) => {
            log::warn!("toolbar not mounted: {err}");
            return;
        }
    };
    host.set_class_name(TOOLBAR_CLASS);
    if !append_host(&host) {
        return;
    }

    let on_toggle = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let theme = controller.toggle_theme();
            apply_theme(theme);
            report_issues(&controller);
            theme
        })
    };
    let on_rename = {
        let controller = controller.clone();
        Callback::from(move |()| {
            if let Some(heading) = controller.rename() {
                set_heading(&heading);
            }
            report_issues(&controller);
        })
    };
    let props = toolbar::Props {
        initial_theme: theme,
        on_toggle,
        on_rename,
    };
    Renderer::<Toolbar>::with_root_and_props(host, props).render();
}

fn mount_fact_section() {
    let deck = match load_deck(&EmbeddedFactLoader, rand::random()) {
        Ok(deck) => deck,
        Err(err) => {
            log::error!("fact pools unavailable: {err}");
            return;
        }
    };
    let host = match dom::create_html("div") {
        Ok(host) => Element::from(host),
        Err(err) => {
            log::warn!("fact widget not mounted: {err}");
            return;
        }
    };
    host.set_id(FACT_HOST_ID);

    let placed = match dom::query(CHOICE_CONTAINER_SELECTOR) {
        Some(anchor) => match anchor.after_with_node_1(&host) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not place widget: {}", dom::js_error_message(&err));
                append_host(&host)
            }
        },
        None => append_host(&host),
    };
    if !placed {
        return;
    }

    let props = fact_section::Props {
        deck: DeckHandle::new(deck),
        policy: ClickPolicy::default(),
    };
    Renderer::<FactSection>::with_root_and_props(host, props).render();
}

fn start_extras() {
    let config = EmbeddedFactLoader
        .load_site_config()
        .unwrap_or_else(|err| {
            log::error!("site config unavailable, using defaults: {err}");
            SiteConfig::default()
        });

    if let Some(rotation) = carousel::start_background_rotation(&config.background) {
        let _ = rotation.forget();
    }
    for slider in carousel::start_sliders(&config.sliders, config.slide_settle_ms) {
        slider.forget();
    }
    if let Err(err) = modal::show_welcome(&config.support_page) {
        log::debug!("welcome modal skipped: {err}");
    }
    panels::animate_fact_boxes();
    for listener in panels::attach_highlights()
        .into_iter()
        .chain(panels::attach_info_panel())
    {
        listener.forget();
    }
}
