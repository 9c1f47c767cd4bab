//! Required-field checks on form submission.
//!
//! A required field is valid iff its trimmed value is non-empty. On every
//! submit attempt each required field's border is reset to normal or set to
//! danger; if any field is empty the submit is cancelled and a single alert
//! is shown. Values are never modified.
//!
//! Forms are bound by a registration pass over the forms present at that
//! moment. Forms inserted later stay unbound until `rebind` runs.

#[cfg(test)]
#[path = "form_validation_test.rs"]
mod form_validation_test;

use crate::config::UiConfig;

/// Marker recorded on bound forms.
pub const BEHAVIOR: &str = "validate";

/// Border indicator for a required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMark {
    Normal,
    Danger,
}

impl FieldMark {
    #[must_use]
    pub fn border_color(self, config: &UiConfig) -> &str {
        match self {
            Self::Normal => &config.normal_border,
            Self::Danger => &config.danger_border,
        }
    }
}

/// A form control that takes part in required-field validation.
pub trait RequiredField {
    /// Current text value, or `None` for controls without one.
    fn value(&self) -> Option<String>;
    fn mark(&self, mark: FieldMark);
}

#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Outcome of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Required fields that carried a value to check.
    pub checked: usize,
    /// Fields among them that were empty after trimming.
    pub missing: usize,
}

impl Verdict {
    #[must_use]
    pub fn allows_submit(self) -> bool {
        self.missing == 0
    }
}

/// Check every field and update its border mark.
///
/// Fields without a value are skipped entirely and keep their styling.
pub fn validate_required<F: RequiredField>(fields: &[F]) -> Verdict {
    let mut verdict = Verdict::default();
    for field in fields {
        let Some(value) = field.value() else {
            continue;
        };
        verdict.checked += 1;
        if is_filled(&value) {
            field.mark(FieldMark::Normal);
        } else {
            verdict.missing += 1;
            field.mark(FieldMark::Danger);
        }
    }
    verdict
}

#[cfg(feature = "browser")]
pub use self::browser::bind_forms;

#[cfg(feature = "browser")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

    use super::{BEHAVIOR, FieldMark, RequiredField, validate_required};
    use crate::config::UiConfig;
    use crate::util::dom;

    struct DomField<'a> {
        el: HtmlElement,
        config: &'a UiConfig,
    }

    impl RequiredField for DomField<'_> {
        fn value(&self) -> Option<String> {
            if let Some(input) = self.el.dyn_ref::<HtmlInputElement>() {
                return Some(input.value());
            }
            if let Some(area) = self.el.dyn_ref::<HtmlTextAreaElement>() {
                return Some(area.value());
            }
            self.el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
        }

        fn mark(&self, mark: FieldMark) {
            let _ = self
                .el
                .style()
                .set_property("border-color", mark.border_color(self.config));
        }
    }

    fn on_submit(form: &Element, event: &Event, config: &UiConfig) {
        let fields = match form.query_selector_all("[required]") {
            Ok(list) => dom::elements(&list)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| DomField { el, config })
                .collect::<Vec<_>>(),
            Err(e) => {
                log::warn!("required field lookup failed: {e:?}");
                return;
            }
        };

        let verdict = validate_required(&fields);
        if verdict.allows_submit() {
            return;
        }
        event.prevent_default();
        log::debug!("blocked submit: {} of {} required field(s) empty", verdict.missing, verdict.checked);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&config.required_message);
        }
    }

    /// Attach submit validation to every unbound `<form>` in `document`.
    ///
    /// Returns the number of forms newly bound.
    pub fn bind_forms(document: &Document, config: &Rc<UiConfig>) -> usize {
        let mut bound = 0;
        for form in dom::select_all(document, "form") {
            if !dom::claim(&form, BEHAVIOR) {
                continue;
            }
            let target = form.clone();
            let config = Rc::clone(config);
            let result = dom::listen(&target, "submit", move |event| on_submit(&form, &event, &config));
            match result {
                Ok(()) => bound += 1,
                Err(e) => log::warn!("failed to bind form validation: {e:?}"),
            }
        }
        bound
    }
}
