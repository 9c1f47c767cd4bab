use super::*;

#[test]
fn fragment_href_yields_target_id() {
    assert_eq!(fragment_id("#section2"), Some("section2"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_id("/dashboard#section2"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(fragment_id("  #pricing "), Some("pricing"));
}

#[test]
fn encoded_fragment_is_returned_raw() {
    assert_eq!(fragment_id("#how%20it%20works"), Some("how%20it%20works"));
}

#[test]
fn anchor_selector_matches_hash_prefix() {
    assert_eq!(ANCHOR_SELECTOR, r##"a[href^="#"]"##);
}
