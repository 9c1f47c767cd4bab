//! Auto-hide for notification banners.
//!
//! Every banner present at page-ready fades (inline `opacity: 0`) after
//! `hide_after_ms` and is removed `fade_out_ms` later. Each banner owns its
//! own pair of timers, so banners never wait on each other.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::config::UiConfig;

/// Marker recorded on banners whose timers are running.
pub const BEHAVIOR: &str = "hide";

/// Visible state of a banner at a point in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    FadingOut,
    Removed,
}

/// Timing of one banner's lifecycle, relative to page-ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideSchedule {
    pub hide_after_ms: u32,
    pub fade_out_ms: u32,
}

impl HideSchedule {
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            hide_after_ms: config.hide_after_ms,
            fade_out_ms: config.fade_out_ms,
        }
    }

    /// Milliseconds after page-ready at which the element leaves the document.
    #[must_use]
    pub fn removal_at_ms(self) -> u64 {
        u64::from(self.hide_after_ms) + u64::from(self.fade_out_ms)
    }

    #[must_use]
    pub fn phase_at(self, elapsed_ms: u64) -> NotificationPhase {
        if elapsed_ms < u64::from(self.hide_after_ms) {
            NotificationPhase::Visible
        } else if elapsed_ms < self.removal_at_ms() {
            NotificationPhase::FadingOut
        } else {
            NotificationPhase::Removed
        }
    }
}

impl Default for HideSchedule {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// Start the fade/remove timers for every banner in `document` that has
/// none yet.
///
/// Returns the number of banners newly scheduled.
#[cfg(feature = "browser")]
pub fn schedule_auto_hide(document: &web_sys::Document, config: &UiConfig) -> usize {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;

    let schedule = HideSchedule::from_config(config);
    let mut count = 0;
    for banner in super::dom::select_all(document, &config.notification_selector) {
        if !super::dom::claim(&banner, BEHAVIOR) {
            continue;
        }
        count += 1;
        Timeout::new(schedule.hide_after_ms, move || {
            if let Some(el) = banner.dyn_ref::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("opacity", "0");
            }
            Timeout::new(schedule.fade_out_ms, move || banner.remove()).forget();
        })
        .forget();
    }

    log::debug!("scheduled auto-hide for {count} notification(s)");
    count
}
