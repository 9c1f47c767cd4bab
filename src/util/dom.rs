//! Shared DOM glue for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors bind to the elements present when a registration pass runs.
//! Each bound element records the behaviors attached to it in
//! [`BOUND_ATTR`] so a later pass (see `rebind`) never attaches twice.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Attribute listing the behaviors already attached to an element.
pub const BOUND_ATTR: &str = "data-ui-utils-bound";

/// `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse the `readyState` string. Unknown values count as `Complete`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// Whether `DOMContentLoaded` is still pending.
    #[must_use]
    pub fn awaits_content_loaded(self) -> bool {
        self == Self::Loading
    }
}

/// Whether the space-separated marker `value` already names `behavior`.
#[must_use]
pub fn marker_contains(value: &str, behavior: &str) -> bool {
    value.split_ascii_whitespace().any(|b| b == behavior)
}

/// Append `behavior` to a marker value.
#[must_use]
pub fn marker_with(value: &str, behavior: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        behavior.to_owned()
    } else if marker_contains(value, behavior) {
        value.to_owned()
    } else {
        format!("{value} {behavior}")
    }
}

#[cfg(feature = "browser")]
pub use self::browser::*;

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, Event, EventTarget, NodeList};

    use super::{BOUND_ATTR, ReadyState, marker_contains, marker_with};

    pub fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    /// Collect the element nodes of a `NodeList`.
    pub fn elements(list: &NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// All elements in `document` matching `selector`.
    ///
    /// An invalid selector yields an empty list and a warning.
    pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
        match document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("invalid selector `{selector}`: {e:?}");
                Vec::new()
            }
        }
    }

    /// Run `f` once the document has parsed.
    ///
    /// If `DOMContentLoaded` already fired, `f` runs immediately.
    pub fn on_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
    where
        F: FnOnce() + 'static,
    {
        if !ReadyState::parse(&document.ready_state()).awaits_content_loaded() {
            f();
            return Ok(());
        }
        let cb = Closure::once_into_js(f);
        document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
    }

    /// Attach `handler` to `target` for the life of the page.
    pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let cb = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }

    /// Record `behavior` on `el`. Returns `false` if it was already bound.
    pub fn claim(el: &Element, behavior: &str) -> bool {
        let current = el.get_attribute(BOUND_ATTR).unwrap_or_default();
        if marker_contains(&current, behavior) {
            return false;
        }
        let _ = el.set_attribute(BOUND_ATTR, &marker_with(&current, behavior));
        true
    }
}
