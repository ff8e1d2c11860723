//! Scroll-triggered reveal animations.
//!
//! Elements carrying the [`REVEAL_CLASS`] start slightly offset and
//! transparent (see `GlobalStyles`); an `IntersectionObserver` adds
//! [`VISIBLE_CLASS`] the first time each element scrolls into the viewport.
//! The transition itself is written inline from [`RevealOptions`], so easing
//! and duration are configured in one place.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Marker class picked up by [`init`].
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the element has entered the viewport.
pub const VISIBLE_CLASS: &str = "reveal--visible";

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Named timing functions for the reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Ease,
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::Linear => "linear",
            Easing::EaseInSine => "cubic-bezier(0.47, 0, 0.745, 0.715)",
            Easing::EaseOutSine => "cubic-bezier(0.39, 0.575, 0.565, 1)",
            Easing::EaseInOutSine => "cubic-bezier(0.445, 0.05, 0.55, 0.95)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOptions {
    pub easing: Easing,
    pub duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            easing: Easing::EaseInOutSine,
            duration_ms: 1200,
        }
    }
}

/// Inline `transition` value applied to each observed element.
pub fn transition_css(options: &RevealOptions) -> String {
    let duration = options.duration_ms;
    let easing = options.easing.as_css();
    format!("opacity {duration}ms {easing}, transform {duration}ms {easing}")
}

/// Arm the reveal observer for every marked element currently in the
/// document. Call once after the page structure is rendered.
///
/// Anything missing in the host environment (no document, no observer
/// support) downgrades to a logged warning; page wiring must not depend on
/// this succeeding.
pub fn init(options: RevealOptions) {
    let Some(document) = window().and_then(|w| w.document()) else {
        log::warn!("scroll reveal skipped: document not available");
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    // Reveal is one-shot per element.
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer_init = IntersectionObserverInit::new();
    observer_init.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    observer_init.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &observer_init,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("scroll reveal skipped: observer unavailable: {:?}", err);
            return;
        }
    };
    callback.forget();

    let nodes = match document.query_selector_all(&format!(".{}", REVEAL_CLASS)) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("scroll reveal skipped: query failed: {:?}", err);
            return;
        }
    };

    let transition = transition_css(&options);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = element.style().set_property("transition", &transition);
            observer.observe(&element);
        }
    }

    log::debug!("scroll reveal armed for {} elements", nodes.length());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.easing, Easing::EaseInOutSine);
        assert_eq!(options.duration_ms, 1200);
    }

    #[test]
    fn test_easing_css() {
        assert_eq!(
            Easing::EaseInOutSine.as_css(),
            "cubic-bezier(0.445, 0.05, 0.55, 0.95)"
        );
        assert_eq!(Easing::Linear.as_css(), "linear");
    }

    #[test]
    fn test_transition_css() {
        let css = transition_css(&RevealOptions::default());
        assert_eq!(
            css,
            "opacity 1200ms cubic-bezier(0.445, 0.05, 0.55, 0.95), \
             transform 1200ms cubic-bezier(0.445, 0.05, 0.55, 0.95)"
        );
    }
}
