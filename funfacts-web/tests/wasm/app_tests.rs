#![cfg(target_arch = "wasm32")]
use funfacts_core::constants::HIGHLIGHT_CLASS;
use funfacts_core::{ScriptedPrompt, THEME_KEY, VISITOR_NAME_KEY};
use funfacts_web::{app, carousel, dom, modal, panels};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE_ID: &str = "fixture";

/// Replace the test fixture and drop anything an earlier boot mounted.
///
/// The runner's own output nodes stay in the body untouched.
fn reset_page(fixture_html: &str) {
    let storage = dom::local_storage().expect("localStorage");
    storage.clear().expect("clear storage");
    let body = dom::body().expect("body");
    let _ = body.class_list().remove_1("dark-mode");
    let stale = format!(
        ".{}, #{}, #{FIXTURE_ID}",
        app::TOOLBAR_CLASS,
        app::FACT_HOST_ID
    );
    for el in dom::query_all(&stale) {
        el.remove();
    }
    let fixture = dom::create_html("div").expect("fixture");
    fixture.set_id(FIXTURE_ID);
    fixture.set_inner_html(fixture_html);
    body.append_child(&fixture).expect("append fixture");
}

fn seed_name(name: &str) {
    dom::local_storage()
        .expect("localStorage")
        .set_item(VISITOR_NAME_KEY, name)
        .expect("seed name");
}

fn click(selector: &str) {
    dom::query(selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .click();
}

fn text_of(selector: &str) -> String {
    dom::query(selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn stored_dark_theme_is_restored() {
    reset_page("<h1>Fun Facts</h1>");
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(VISITOR_NAME_KEY, "Grace").expect("seed name");
    storage.set_item(THEME_KEY, "dark").expect("seed theme");

    app::boot_with(ScriptedPrompt::default());
    TimeoutFuture::new(50).await;

    let body = dom::body().expect("body");
    assert!(body.class_list().contains("dark-mode"));
    assert_eq!(text_of("h1"), "Hello, Grace!");
    assert_eq!(text_of("#theme-toggle"), "☀️ Light");
}

#[wasm_bindgen_test]
fn first_visit_prompts_and_greets() {
    reset_page("<h1>Fun Facts</h1>");

    app::boot_with(ScriptedPrompt::new([Some("Ada")]));

    assert_eq!(text_of("h1"), "Hello, Ada!");
    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(
        storage.get_item(VISITOR_NAME_KEY).expect("read name"),
        Some("Ada".to_string())
    );
}

#[wasm_bindgen_test]
async fn cosmos_link_reveals_a_cosmos_fact() {
    reset_page(
        "<h1>Fun Facts</h1>\
         <div class=\"choicecontainer\"><ul class=\"choice\">\
         <li><a href=\"#cosmos\" id=\"cosmos-link\">Cosmos Facts</a></li>\
         </ul></div>",
    );
    seed_name("Ada");

    app::boot_with(ScriptedPrompt::default());
    // Let yew run its first render and effects.
    TimeoutFuture::new(50).await;

    click("#cosmos-link");
    TimeoutFuture::new(50).await;

    let text = text_of("#fact-widget .fact");
    assert!(text.starts_with("(Cosmos) "), "{text}");
}

#[wasm_bindgen_test]
async fn module_start_leaves_the_page_alone() {
    reset_page("<h1>Fun Facts</h1>");

    funfacts_web::start();
    TimeoutFuture::new(50).await;

    assert_eq!(text_of("h1"), "Fun Facts");
    assert!(dom::query(&format!(".{}", app::TOOLBAR_CLASS)).is_none());
    assert!(dom::by_id(app::FACT_HOST_ID).is_none());
    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(storage.get_item(VISITOR_NAME_KEY).expect("read name"), None);
}

#[wasm_bindgen_test]
async fn boot_survives_a_page_without_optional_markup() {
    // No modal, no info panel, no images to slide.
    reset_page(
        "<h1>Fun Facts</h1>\
         <div class=\"forText\"><p>Owls</p>\
         <button class=\"learnMore\">More</button></div>\
         <div class=\"choicecontainer\"><ul class=\"choice\">\
         <li><a href=\"#cosmos\" id=\"cosmos-link\">Cosmos Facts</a></li>\
         </ul></div>",
    );
    seed_name("Ada");

    app::boot_with(ScriptedPrompt::default());
    TimeoutFuture::new(50).await;

    assert!(dom::by_id(modal::MODAL_ID).is_none());
    assert!(dom::by_id(panels::PANEL_ID).is_none());
    assert!(dom::query(&format!(".{}", carousel::SLIDE_WRAPPER_CLASS)).is_none());
    assert_eq!(text_of("h1"), "Hello, Ada!");
    assert!(dom::query(&format!(".{}", app::TOOLBAR_CLASS)).is_some());
    assert!(dom::by_id("fact-widget").is_some());

    // Opening the missing panel is logged; the click still highlights the box.
    click(".learnMore");
    let fact_box = dom::query(panels::FACT_BOX_SELECTOR).expect("fact box");
    assert!(fact_box.class_list().contains(HIGHLIGHT_CLASS));

    click("#cosmos-link");
    TimeoutFuture::new(50).await;
    let text = text_of("#fact-widget .fact");
    assert!(text.starts_with("(Cosmos) "), "{text}");
}
