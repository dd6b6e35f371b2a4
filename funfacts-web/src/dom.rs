use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, Storage, Window,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("missing page element: {0}")]
    Missing(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Document lookup that degrades to `None` outside a browser.
#[must_use]
pub fn try_document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    try_document().and_then(|doc| doc.body())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .local_storage()?
        .ok_or_else(|| DomError::Missing("localStorage".to_string()))
}

/// First element matching `selector`, if any.
#[must_use]
pub fn query(selector: &str) -> Option<Element> {
    try_document().and_then(|doc| doc.query_selector(selector).ok().flatten())
}

/// Every element matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = try_document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    try_document().and_then(|doc| doc.get_element_by_id(id))
}

/// Look up an element by id and narrow it to `HtmlElement`.
///
/// # Errors
/// Returns [`DomError::Missing`] when the element is absent or not an HTML element.
pub fn html_by_id(id: &str) -> Result<HtmlElement, DomError> {
    by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::Missing(format!("#{id}")))
}

/// Set an inline style property, ignoring failures.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Clear an inline style property, ignoring failures.
pub fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

/// Create an element and narrow it to `HtmlElement`.
///
/// # Errors
/// Returns an error if the document is unavailable or the element cannot be created.
pub fn create_html(tag: &str) -> Result<HtmlElement, DomError> {
    try_document()
        .ok_or(DomError::NoWindow)?
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js(format!("<{tag}> is not an HTML element")))
}

/// Event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Keep the listener attached for the rest of the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Attach `handler` to `target` for events of type `kind`.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<F>(
    target: &EventTarget,
    kind: &'static str,
    handler: F,
) -> Result<Listener, DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Run `f` once the document has been parsed.
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = try_document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    match listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    }) {
        Ok(listener) => listener.forget(),
        Err(err) => console_error(&format!("could not wait for DOMContentLoaded: {err}")),
    }
}
