//! Welcome modal shown on every page load.
use crate::dom::{self, DomError};

pub const MODAL_ID: &str = "welcomeModal";
pub const LATER_ID: &str = "laterBtn";
pub const SUPPORT_ID: &str = "supportBtn";

/// Show the welcome modal and wire its buttons.
///
/// Dismissal is not remembered, so the modal returns on the next load.
///
/// # Errors
/// Returns [`DomError::Missing`] when the modal or one of its buttons is absent.
pub fn show_welcome(support_page: &str) -> Result<(), DomError> {
    let modal = dom::html_by_id(MODAL_ID)?;
    let later = dom::html_by_id(LATER_ID)?;
    let support = dom::html_by_id(SUPPORT_ID)?;
    dom::set_style(&modal, "display", "flex");

    let hide = modal.clone();
    dom::listen(&later, "click", move |_| {
        dom::set_style(&hide, "display", "none");
    })?
    .forget();

    let target = support_page.to_string();
    dom::listen(&support, "click", move |_| {
        dom::set_style(&modal, "display", "none");
        if let Err(err) = dom::window().location().set_href(&target) {
            log::warn!("could not open {target}: {}", dom::js_error_message(&err));
        }
    })?
    .forget();
    Ok(())
}
