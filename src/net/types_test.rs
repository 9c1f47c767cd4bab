use super::*;

#[test]
fn usage_report_serializes_with_wire_field_name() {
    let body = serde_json::to_value(UsageReport { data_used_mb: 2.5 }).unwrap();
    assert_eq!(body, serde_json::json!({ "data_used_mb": 2.5 }));
}

#[test]
fn success_reply_parses() {
    let resp: UsageResponse = serde_json::from_str(r#"{"success": true, "data_used_gb": 0.0048828125}"#).unwrap();
    assert_eq!(resp.success, Some(true));
    assert_eq!(resp.data_used_gb, Some(0.004_882_812_5));
    assert!(resp.is_success());
    assert_eq!(resp.to_string(), "success=true data_used_gb=0.0048828125");
}

#[test]
fn not_found_reply_parses_as_failure() {
    let resp: UsageResponse = serde_json::from_str(r#"{"error": "Session not found"}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.to_string(), "error=Session not found");
}

#[test]
fn unknown_fields_are_ignored() {
    let resp: UsageResponse = serde_json::from_str(r#"{"success": true, "extra": [1, 2]}"#).unwrap();
    assert_eq!(resp.success, Some(true));
    assert_eq!(resp.data_used_gb, None);
}

#[test]
fn empty_reply_counts_as_success() {
    let resp: UsageResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.to_string(), "{}");
}

#[test]
fn explicit_false_is_failure() {
    let resp = UsageResponse { success: Some(false), ..UsageResponse::default() };
    assert!(!resp.is_success());
}
