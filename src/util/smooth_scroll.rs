//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Marker recorded on bound anchors.
pub const BEHAVIOR: &str = "scroll";

/// Selector for same-document anchors.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The element id an in-page `href` points at.
///
/// `"#section2"` → `Some("section2")`. A bare `"#"` or an `href` that is not
/// a fragment has no target.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(feature = "browser")]
pub use self::browser::bind_anchors;

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

    use super::{ANCHOR_SELECTOR, BEHAVIOR, fragment_id};
    use crate::util::dom;

    fn find_target(document: &Document, id: &str) -> Option<Element> {
        let decoded = js_sys::decode_uri_component(id)
            .ok()
            .map(String::from)
            .filter(|d| d != id);
        decoded
            .and_then(|d| document.get_element_by_id(&d))
            .or_else(|| document.get_element_by_id(id))
    }

    fn on_click(anchor: &Element) {
        let Some(document) = dom::document() else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(target) = fragment_id(&href).and_then(|id| find_target(&document, id)) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Attach smooth scrolling to every unbound in-page anchor in `document`.
    ///
    /// Returns the number of anchors newly bound.
    pub fn bind_anchors(document: &Document) -> usize {
        let mut bound = 0;
        for anchor in dom::select_all(document, ANCHOR_SELECTOR) {
            if !dom::claim(&anchor, BEHAVIOR) {
                continue;
            }
            let target = anchor.clone();
            let result = dom::listen(&target, "click", move |event| {
                event.prevent_default();
                on_click(&anchor);
            });
            match result {
                Ok(()) => bound += 1,
                Err(e) => log::warn!("failed to bind anchor scroll: {e:?}"),
            }
        }
        bound
    }
}
