//! Stylesheet injected at startup so dark mode and the widget render without site CSS.
use crate::dom;

pub const STYLE_ELEMENT_ID: &str = "dark-mode-styles";

/// Minimal CSS for dark mode, the toolbar, the fact widget and its animations.
#[must_use]
pub const fn site_css() -> &'static str {
    r"
body.dark-mode { background:#121212; color:#f5f5f5; }
body.dark-mode a { color:#80cbc4; }
body.dark-mode .Hotfacts { background:#1e1e1e; }
body.dark-mode .forText { background:#2a2a2a; }

.toolbar { position: fixed; top: 12px; right: 12px; z-index: 10; display:flex; gap:8px; }
.toolbar button { padding:8px 12px; border-radius:8px; cursor:pointer; border:1px solid rgba(0,0,0,.2); background:#fff; }
body.dark-mode .toolbar button { background:#1f1f1f; border-color: rgba(255,255,255,.15); color:#f5f5f5; }

.fact-widget { position: relative; z-index: 6; max-width: 800px; margin: 24px auto; padding: 16px;
  border-radius: 12px; border: 1px solid rgba(0,0,0,.15); background: rgba(255,255,255,.85); backdrop-filter: blur(6px); }
body.dark-mode .fact-widget { background: rgba(18,18,18,.85); border-color: rgba(255,255,255,.12); }
.fact-widget button { padding:10px 16px; border-radius:10px; border:1px solid rgba(0,0,0,.2); cursor:pointer; }
body.dark-mode .fact-widget button { background:#1f1f1f; color:#f5f5f5; border-color: rgba(255,255,255,.15); }
.fact { font-size: 1.1rem; margin: 10px 0 0; transition: opacity .4s ease; }
.fact.fade-out { opacity: 0; }
.fact-widget.show { animation: factPop .35s ease-out; }
@keyframes factPop { from { transform: scale(.96); opacity: .6; } to { transform: scale(1); opacity: 1; } }
.forText.highlight { outline: 3px solid gold; }
"
}

/// Append the site stylesheet to `<head>` unless it is already present.
pub fn inject_styles() {
    let Some(doc) = dom::try_document() else {
        return;
    };
    if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = doc.head() else {
        log::warn!("no <head>; skipping style injection");
        return;
    };
    match dom::create_html("style") {
        Ok(style) => {
            style.set_id(STYLE_ELEMENT_ID);
            style.set_text_content(Some(site_css()));
            if let Err(err) = head.append_child(&style) {
                log::warn!("could not inject styles: {}", dom::js_error_message(&err));
            }
        }
        Err(err) => log::warn!("could not create style element: {err}"),
    }
}
