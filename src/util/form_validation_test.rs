use std::cell::Cell;

use super::*;

// =============================================================
// Helpers
// =============================================================

struct FakeField {
    value: Option<&'static str>,
    mark: Cell<Option<FieldMark>>,
}

impl FakeField {
    fn text(value: &'static str) -> Self {
        Self { value: Some(value), mark: Cell::new(None) }
    }

    fn valueless() -> Self {
        Self { value: None, mark: Cell::new(None) }
    }

    fn flagged(value: &'static str, mark: FieldMark) -> Self {
        Self { value: Some(value), mark: Cell::new(Some(mark)) }
    }
}

impl RequiredField for FakeField {
    fn value(&self) -> Option<String> {
        self.value.map(str::to_owned)
    }

    fn mark(&self, mark: FieldMark) {
        self.mark.set(Some(mark));
    }
}

// =============================================================
// is_filled
// =============================================================

#[test]
fn filled_value_is_valid() {
    assert!(is_filled("alice@example.com"));
    assert!(is_filled("  padded  "));
}

#[test]
fn empty_or_whitespace_value_is_invalid() {
    assert!(!is_filled(""));
    assert!(!is_filled("   "));
    assert!(!is_filled("\t\n"));
}

// =============================================================
// validate_required
// =============================================================

#[test]
fn all_filled_allows_submit_and_marks_normal() {
    let fields = [FakeField::text("alice"), FakeField::text("secret")];
    let verdict = validate_required(&fields);
    assert!(verdict.allows_submit());
    assert_eq!(verdict, Verdict { checked: 2, missing: 0 });
    assert!(fields.iter().all(|f| f.mark.get() == Some(FieldMark::Normal)));
}

#[test]
fn whitespace_field_blocks_and_only_it_is_flagged() {
    let fields = [FakeField::text("alice"), FakeField::text("   "), FakeField::text("Zimbabwe")];
    let verdict = validate_required(&fields);
    assert!(!verdict.allows_submit());
    assert_eq!(verdict.missing, 1);
    assert_eq!(fields[0].mark.get(), Some(FieldMark::Normal));
    assert_eq!(fields[1].mark.get(), Some(FieldMark::Danger));
    assert_eq!(fields[2].mark.get(), Some(FieldMark::Normal));
}

#[test]
fn previously_flagged_field_is_cleared_once_filled() {
    let fields = [FakeField::flagged("now filled", FieldMark::Danger), FakeField::text("")];
    let verdict = validate_required(&fields);
    assert!(!verdict.allows_submit());
    assert_eq!(fields[0].mark.get(), Some(FieldMark::Normal));
    assert_eq!(fields[1].mark.get(), Some(FieldMark::Danger));
}

#[test]
fn valueless_controls_are_skipped() {
    let fields = [FakeField::valueless(), FakeField::text("ok")];
    let verdict = validate_required(&fields);
    assert_eq!(verdict, Verdict { checked: 1, missing: 0 });
    assert_eq!(fields[0].mark.get(), None);
}

#[test]
fn form_without_required_fields_submits() {
    let fields: [FakeField; 0] = [];
    assert!(validate_required(&fields).allows_submit());
}

// =============================================================
// FieldMark
// =============================================================

#[test]
fn marks_map_to_configured_border_colors() {
    let config = UiConfig::default();
    assert_eq!(FieldMark::Danger.border_color(&config), "var(--danger-color)");
    assert_eq!(FieldMark::Normal.border_color(&config), "var(--border)");
}
