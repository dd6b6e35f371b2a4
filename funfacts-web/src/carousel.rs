//! Rotating page background and the sliding image carousels.
use crate::dom::{self, DomError};
use crate::paths;
use funfacts_core::{BackgroundConfig, BackgroundRotation, SlideRotation, SliderConfig};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

pub const SLIDE_WRAPPER_CLASS: &str = "slide-wrapper";

/// Cycle the body background through the configured images.
///
/// Returns `None` when there is nothing to rotate or no body to style.
#[must_use]
pub fn start_background_rotation(config: &BackgroundConfig) -> Option<Interval> {
    if config.images.is_empty() {
        return None;
    }
    let body = dom::body()?;
    let rotation = RefCell::new(BackgroundRotation::new(config.images.clone()));
    Some(Interval::new(config.interval_ms, move || {
        let mut rotation = rotation.borrow_mut();
        let Some(image) = rotation.tick() else {
            return;
        };
        dom::set_style(&body, "background-image", &paths::css_url(image));
        dom::set_style(&body, "background-size", "cover");
        dom::set_style(&body, "background-position", "center");
        dom::set_style(&body, "transition", "background-image 2s ease-in-out");
    }))
}

/// A running image slider.
pub struct Slider {
    interval: Interval,
}

impl Slider {
    /// Keep sliding for the rest of the page lifetime.
    pub fn forget(self) {
        let _ = self.interval.forget();
    }
}

fn pin(img: &HtmlImageElement) {
    dom::set_style(img, "position", "absolute");
    dom::set_style(img, "left", "0");
    dom::set_style(img, "top", "0");
    dom::set_style(img, "width", "100%");
}

/// Wrap `target` in a slide wrapper and slide through `config.images`.
///
/// # Errors
/// Returns an error if the wrapper or the clone cannot be inserted.
pub fn attach_slider(
    target: &HtmlImageElement,
    config: &SliderConfig,
    settle_ms: u32,
) -> Result<Slider, DomError> {
    let parent = target
        .parent_node()
        .ok_or_else(|| DomError::Missing(format!("parent of img {}", config.image_index)))?;
    let wrapper = dom::create_html("div")?;
    wrapper.class_list().add_1(SLIDE_WRAPPER_CLASS)?;
    let target_node: &web_sys::Node = target;
    parent.insert_before(&wrapper, Some(target_node))?;
    wrapper.append_child(target)?;

    let clone = target
        .clone_node_with_deep(true)?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| DomError::Js("cloned slide is not an image".to_string()))?;
    wrapper.append_child(&clone)?;
    pin(target);
    pin(&clone);

    let front = target.clone();
    let rotation = RefCell::new(SlideRotation::new(config.images.clone()));
    let interval = Interval::new(config.interval_ms, move || {
        let Some(next) = rotation.borrow_mut().tick().map(paths::asset_url) else {
            return;
        };
        dom::set_style(&front, "transform", "translateX(-100%)");
        clone.set_src(&next);
        dom::set_style(&clone, "transform", "translateX(0)");

        let front = front.clone();
        Timeout::new(settle_ms, move || {
            front.set_src(&next);
            dom::set_style(&front, "transform", "translateX(0)");
        })
        .forget();
    });
    Ok(Slider { interval })
}

/// Start every configured slider whose image exists on the page.
///
/// Images are addressed by their position among all `img` elements at the time of
/// the call, so the clones added by earlier sliders do not shift later ones.
#[must_use]
pub fn start_sliders(sliders: &[SliderConfig], settle_ms: u32) -> Vec<Slider> {
    let images: Vec<Element> = dom::query_all("img");
    let targets: Vec<(HtmlImageElement, &SliderConfig)> = sliders
        .iter()
        .filter_map(|config| {
            let img = images
                .get(config.image_index)
                .and_then(|el| el.clone().dyn_into::<HtmlImageElement>().ok());
            if img.is_none() {
                log::debug!("no img at position {}; slider skipped", config.image_index);
            }
            img.map(|img| (img, config))
        })
        .collect();

    targets
        .into_iter()
        .filter_map(|(img, config)| match attach_slider(&img, config, settle_ms) {
            Ok(slider) => Some(slider),
            Err(err) => {
                log::warn!("slider {} not started: {err}", config.image_index);
                None
            }
        })
        .collect()
}
