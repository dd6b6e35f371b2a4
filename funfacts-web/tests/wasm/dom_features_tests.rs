#![cfg(target_arch = "wasm32")]
use funfacts_core::constants::{HIGHLIGHT_CLASS, HIGHLIGHT_MS, PANEL_ACTIVE_CLASS};
use funfacts_core::{ClickPolicy, FactDeck, FactStore, InfoCard, SliderConfig};
use funfacts_web::components::fact_widget::DeckHandle;
use funfacts_web::dom::{self, DomError};
use funfacts_web::{carousel, modal, nav, panels};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement};
use yew::Callback;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE_ID: &str = "fixture";

fn reset_fixture(html: &str) {
    if let Some(stale) = dom::by_id(FIXTURE_ID) {
        stale.remove();
    }
    let fixture = dom::create_html("div").expect("fixture");
    fixture.set_id(FIXTURE_ID);
    fixture.set_inner_html(html);
    dom::body()
        .expect("body")
        .append_child(&fixture)
        .expect("append fixture");
}

fn html(selector: &str) -> HtmlElement {
    dom::query(selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("no element for {selector}"))
}

fn style_of(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

fn text_of(selector: &str) -> String {
    dom::query(selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn dispatch(el: &Element, kind: &str) {
    let event = Event::new(kind).expect("event");
    el.dispatch_event(&event).expect("dispatch");
}

const MODAL_MARKUP: &str = "<div id=\"welcomeModal\" style=\"display: none\">\
     <button id=\"laterBtn\">Later</button>\
     <button id=\"supportBtn\">Support</button></div>";

#[wasm_bindgen_test]
fn welcome_modal_shows_and_later_hides_it() {
    reset_fixture(MODAL_MARKUP);

    modal::show_welcome("Support Us.html").expect("modal wired");
    let modal = html("#welcomeModal");
    assert_eq!(style_of(&modal, "display"), "flex");

    html("#laterBtn").click();
    assert_eq!(style_of(&modal, "display"), "none");
}

#[wasm_bindgen_test]
fn welcome_modal_without_its_buttons_is_skipped() {
    reset_fixture("<div id=\"welcomeModal\" style=\"display: none\"></div>");

    assert_eq!(
        modal::show_welcome("Support Us.html"),
        Err(DomError::Missing("#laterBtn".to_string()))
    );
    assert_eq!(style_of(&html("#welcomeModal"), "display"), "none");

    reset_fixture("");
    assert_eq!(
        modal::show_welcome("Support Us.html"),
        Err(DomError::Missing("#welcomeModal".to_string()))
    );
}

const PANEL_MARKUP: &str = "<div class=\"forText\" data-title=\"Lions\" \
     data-content=\"A lion's roar carries for miles.\" data-image=\"images/lion3.jpg\">\
     <p>Lions</p><button class=\"learnMore\">Learn more</button></div>\
     <div id=\"infoPanel\"><h2 id=\"infoTitle\"></h2><p id=\"infoContent\"></p>\
     <img id=\"infoImage\"><button id=\"closeBtn\">Close</button></div>";

#[wasm_bindgen_test]
fn learn_more_fills_and_opens_the_panel() {
    reset_fixture(PANEL_MARKUP);
    let _listeners = panels::attach_info_panel();
    let panel = html("#infoPanel");

    html(".learnMore").click();

    assert_eq!(text_of("#infoTitle"), "Lions");
    assert_eq!(text_of("#infoContent"), "A lion's roar carries for miles.");
    let image = html("#infoImage")
        .dyn_into::<HtmlImageElement>()
        .expect("info image");
    assert!(image.src().ends_with("images/lion3.jpg"), "{}", image.src());
    assert!(panel.class_list().contains(PANEL_ACTIVE_CLASS));

    html("#closeBtn").click();
    assert!(!panel.class_list().contains(PANEL_ACTIVE_CLASS));
}

#[wasm_bindgen_test]
fn open_and_close_panel_toggle_the_active_class() {
    reset_fixture(PANEL_MARKUP);
    let card = InfoCard {
        title: "Owls".to_string(),
        content: "Owls cannot move their eyes.".to_string(),
        image: "images/owl.jpg".to_string(),
    };

    panels::open_panel(&card).expect("panel opened");
    assert_eq!(text_of("#infoTitle"), "Owls");
    assert_eq!(text_of("#infoContent"), "Owls cannot move their eyes.");
    assert!(html("#infoPanel").class_list().contains(PANEL_ACTIVE_CLASS));

    panels::close_panel().expect("panel closed");
    assert!(!html("#infoPanel").class_list().contains(PANEL_ACTIVE_CLASS));

    reset_fixture("");
    assert_eq!(
        panels::open_panel(&card),
        Err(DomError::Missing("#infoPanel".to_string()))
    );
    assert_eq!(
        panels::close_panel(),
        Err(DomError::Missing("#infoPanel".to_string()))
    );
}

#[wasm_bindgen_test]
async fn clicked_fact_box_is_highlighted_briefly() {
    reset_fixture(
        "<div class=\"forText\" id=\"first\"></div>\
         <div class=\"forText\" id=\"second\"></div>",
    );
    let listeners = panels::attach_highlights();
    assert_eq!(listeners.len(), 2);
    let first = html("#first");
    let second = html("#second");

    first.click();
    assert!(first.class_list().contains(HIGHLIGHT_CLASS));
    assert!(!second.class_list().contains(HIGHLIGHT_CLASS));

    TimeoutFuture::new(HIGHLIGHT_MS + 200).await;
    assert!(!first.class_list().contains(HIGHLIGHT_CLASS));
}

fn slider(image_index: usize, interval_ms: u32) -> SliderConfig {
    SliderConfig {
        image_index,
        images: vec!["images/a.jpg".to_string(), "images/b.jpg".to_string()],
        interval_ms,
    }
}

#[wasm_bindgen_test]
async fn slider_wraps_its_image_and_slides() {
    reset_fixture(
        "<div><img id=\"banner\" src=\"images/banner.jpg\"></div>\
         <div id=\"holder\"><img id=\"slide\" src=\"images/a.jpg\"></div>",
    );

    let sliders = carousel::start_sliders(&[slider(1, 100), slider(9, 100)], 10);
    assert_eq!(sliders.len(), 1);

    let holder = html("#holder");
    let wrapper = holder.first_element_child().expect("wrapper");
    assert!(wrapper.class_list().contains(carousel::SLIDE_WRAPPER_CLASS));
    let slides = wrapper.query_selector_all("img").expect("slides");
    assert_eq!(slides.length(), 2);
    for position in 0..slides.length() {
        let slide = slides
            .item(position)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            .expect("slide");
        assert_eq!(style_of(&slide, "position"), "absolute");
    }
    // The banner is the first image and stays where it was.
    let banner = html("#banner");
    assert!(!banner
        .parent_element()
        .expect("banner parent")
        .class_list()
        .contains(carousel::SLIDE_WRAPPER_CLASS));

    TimeoutFuture::new(160).await;
    let front = wrapper
        .first_element_child()
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        .expect("front slide");
    assert!(front.src().ends_with("images/b.jpg"), "{}", front.src());
    drop(sliders);
}

#[wasm_bindgen_test]
fn slider_for_a_missing_image_is_skipped() {
    reset_fixture("<img src=\"images/only.jpg\">");

    let sliders = carousel::start_sliders(&[slider(3, 100)], 10);

    assert!(sliders.is_empty());
    assert!(dom::query(&format!(".{}", carousel::SLIDE_WRAPPER_CLASS)).is_none());
}

#[wasm_bindgen_test]
fn category_link_hover_styles_and_click_reveals() {
    reset_fixture(
        "<ul class=\"choice\"><li><a id=\"love\" href=\"#love\">Love Facts</a></li></ul>",
    );
    let deck = DeckHandle::new(FactDeck::seeded(
        FactStore::builtin().expect("builtin facts"),
        3,
    ));
    let revealed = Rc::new(RefCell::new(Vec::new()));
    let on_reveal = {
        let revealed = Rc::clone(&revealed);
        Callback::from(move |text: String| revealed.borrow_mut().push(text))
    };

    let listeners = nav::attach_category_links(&deck, ClickPolicy::default(), &on_reveal);
    assert_eq!(listeners.len(), 3);

    let link = html("#love");
    dispatch(&link, "mouseenter");
    assert_eq!(style_of(&link, "color"), "gold");
    assert_eq!(style_of(&link, "font-weight"), "bold");

    dispatch(&link, "mouseleave");
    assert_eq!(style_of(&link, "color"), "");
    assert_eq!(style_of(&link, "font-weight"), "");

    link.click();
    let revealed = revealed.borrow();
    assert_eq!(revealed.len(), 1);
    assert!(revealed[0].starts_with("(Love) "), "{}", revealed[0]);
}
