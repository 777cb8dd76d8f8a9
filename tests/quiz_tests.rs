#![cfg(feature = "quiz")]

use biogov::core::*;
use biogov::quiz::*;
use serde_json::{Value, json};

fn submission(revenue: &str, voluntary: &str) -> Value {
    json!({
        "activity": "freelance",
        "revenue": revenue,
        "clients": "private",
        "employees": "0",
        "voluntary": voluntary,
    })
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn exempt_scenario() {
    let r = assess_json(&submission("under 120k", "no")).unwrap();
    assert_eq!(r.status, VatStatus::Exempt);
    assert_eq!(r.checklist.len(), 3);
    assert!(r.metadata.is_voluntary_eligible);
    assert!(!r.metadata.requires_bookkeeping);
}

#[test]
fn choice_scenario() {
    let r = assess_json(&submission("under 120k", "yes")).unwrap();
    assert_eq!(r.status, VatStatus::Choice);
    assert_eq!(r.checklist.len(), 4);
    assert!(r.metadata.requires_bookkeeping);
}

#[test]
fn authorized_scenario() {
    let r = assess_json(&submission("500k+", "no")).unwrap();
    assert_eq!(r.status, VatStatus::Authorized);
    assert_eq!(r.checklist.len(), 5);
    assert!(r.metadata.requires_bookkeeping);
    assert!(!r.metadata.is_voluntary_eligible);
}

#[test]
fn missing_employees_never_reaches_classifier() {
    let mut v = submission("under 120k", "no");
    v.as_object_mut().unwrap().remove("employees");
    let err = assess_json(&v).unwrap_err();
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "employees");
    assert_eq!(err.to_string(), "invalid quiz answers: employees: field is required");
}

#[test]
fn unrecognized_revenue_rejected() {
    let err = assess_json(&submission("around 100k", "no")).unwrap_err();
    assert_eq!(err.validation_errors()[0].field, "revenue");
}

#[test]
fn parse_matches_serde_tokens() {
    let v = submission("120k-500k", "unsure");
    let parsed = parse_answers(&v).unwrap();
    let via_serde: QuizAnswers = serde_json::from_value(v).unwrap();
    assert_eq!(parsed, via_serde);
}

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

#[test]
fn status_serializes_lowercase() {
    let r = assess_json(&submission("under 120k", "yes")).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["status"], "choice");
    assert!(v.get("statusText").is_some());
    assert_eq!(v["checklist"][0]["step"], 1);
}

#[test]
fn metadata_json_shape() {
    let r = assess_json(&submission("under 120k", "no")).unwrap();
    let json = serde_json::to_string(&r.metadata).unwrap();
    insta::assert_snapshot!(json, @r#"{"isVoluntaryEligible":true,"requiresBookkeeping":false,"requiresVATReports":false,"estimatedTimeToComplete":"5-10 דקות"}"#);
}

#[test]
fn checklist_item_omits_absent_link() {
    let item = ChecklistItemBuilder::new("כותרת", "תיאור").build(1);
    let json = serde_json::to_string(&item).unwrap();
    insta::assert_snapshot!(json, @r#"{"step":1,"title":"כותרת","description":"תיאור"}"#);
}

#[test]
fn result_roundtrips_through_json() {
    let r = assess_json(&submission("500k+", "yes")).unwrap();
    let back: AssessmentResult = serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
    assert_eq!(back, r);
}
