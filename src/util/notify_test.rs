use super::*;

#[test]
fn default_schedule_uses_page_timings() {
    let schedule = HideSchedule::default();
    assert_eq!(schedule.hide_after_ms, 5000);
    assert_eq!(schedule.fade_out_ms, 300);
    assert_eq!(schedule.removal_at_ms(), 5300);
}

#[test]
fn banner_stays_visible_until_hide_delay() {
    let schedule = HideSchedule::default();
    assert_eq!(schedule.phase_at(0), NotificationPhase::Visible);
    assert_eq!(schedule.phase_at(4999), NotificationPhase::Visible);
}

#[test]
fn banner_fades_exactly_at_hide_delay() {
    let schedule = HideSchedule::default();
    assert_eq!(schedule.phase_at(5000), NotificationPhase::FadingOut);
    assert_eq!(schedule.phase_at(5299), NotificationPhase::FadingOut);
}

#[test]
fn banner_is_removed_after_fade() {
    let schedule = HideSchedule::default();
    assert_eq!(schedule.phase_at(5300), NotificationPhase::Removed);
    assert_eq!(schedule.phase_at(60_000), NotificationPhase::Removed);
}

#[test]
fn zero_fade_removes_at_hide_delay() {
    let schedule = HideSchedule { hide_after_ms: 100, fade_out_ms: 0 };
    assert_eq!(schedule.phase_at(99), NotificationPhase::Visible);
    assert_eq!(schedule.phase_at(100), NotificationPhase::Removed);
}

#[test]
fn schedule_follows_config_overrides() {
    let config = UiConfig { hide_after_ms: 1000, fade_out_ms: 50, ..UiConfig::default() };
    let schedule = HideSchedule::from_config(&config);
    assert_eq!(schedule.removal_at_ms(), 1050);
}

#[test]
fn removal_does_not_overflow_at_max_delays() {
    let schedule = HideSchedule { hide_after_ms: u32::MAX, fade_out_ms: u32::MAX };
    assert_eq!(schedule.removal_at_ms(), 2 * u64::from(u32::MAX));
}

#[test]
fn hide_marker_coexists_with_other_behaviors() {
    use crate::util::dom::{marker_contains, marker_with};
    use crate::util::{form_validation, smooth_scroll};

    let marker = marker_with(&marker_with("", smooth_scroll::BEHAVIOR), BEHAVIOR);
    assert!(marker_contains(&marker, BEHAVIOR));
    assert!(marker_contains(&marker, smooth_scroll::BEHAVIOR));
    assert!(!marker_contains(&marker, form_validation::BEHAVIOR));
    assert_eq!(marker_with(&marker, BEHAVIOR), marker);
}
