//! Integration tests for common Ruleform workflows.
//!
//! These tests verify that the most common use cases work correctly.

use ruleform::prelude::*;
use serde_json::json;
use std::collections::HashMap;

// =============================================================================
// Request Setup
// =============================================================================

struct RegistrationRequest;

impl RequestRules for RegistrationRequest {
    fn initialize(request: &mut ApiRequest) {
        request
            .add_rule(
                "email",
                ValidatorDescriptor::presence_of()
                    .with_template(":field is required")
                    .with_option("cancelOnFail", true),
                None,
                None,
            )
            .add_rule("email", ValidatorDescriptor::email(), Some("Invalid email"), None)
            .add_rule(
                "password",
                ValidatorDescriptor::string_length(8, 64),
                None,
                Some("Between 8 and 64 characters"),
            )
            .add_rule(
                "password_confirm",
                ValidatorDescriptor::confirmation("password"),
                None,
                None,
            )
            .add_rule(
                "plan",
                ValidatorDescriptor::inclusion_in(vec!["free", "pro"]),
                None,
                None,
            );

        request.add_filter("email", vec!["trim", "lower"]).unwrap();
    }

    fn exporter() -> RuleMetadataExporter {
        RuleMetadataExporter::new(LabelTable::english())
    }
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_registration_request_summary() {
    let request = ApiRequest::from_rules::<RegistrationRequest>();

    assert_eq!(
        request.to_json().unwrap(),
        json!({
            "fields": [
                {"field": "email", "rules": [
                    {"class": "Required", "message": "email is required", "description": ""},
                    {"class": "Email", "message": "", "description": ""}
                ]},
                {"field": "password", "rules": [
                    {"class": "String length", "message": "", "description": "864"}
                ]},
                {"field": "password_confirm", "rules": [
                    {"class": "Confirms another", "message": "", "description": "password"}
                ]},
                {"field": "plan", "rules": [
                    {"class": "In list", "message": "", "description": "free, pro"}
                ]}
            ]
        })
    );
}

#[test]
fn test_default_labels_are_russian() {
    let mut request = ApiRequest::new();
    request.add_rule("site", ValidatorDescriptor::url(), None, None);

    let summary = request.to_summary().unwrap();
    assert_eq!(summary.fields[0].rules[0].class, "Валидный URL");
}

#[test]
fn test_configured_separator() {
    let config = ExportConfig::from_vars(vec![
        ("RULEFORM_LOCALE".to_string(), "en".to_string()),
        ("RULEFORM_DESCRIPTION_SEPARATOR".to_string(), " / ".to_string()),
    ])
    .unwrap();

    let mut request = ApiRequest::from_config(&config);
    request.add_rule("qty", ValidatorDescriptor::between(1, 5), None, None);

    let rule = &request.to_summary().unwrap().fields[0].rules[0];
    assert_eq!(rule.class, "Between two values");
    assert_eq!(rule.description, "1 / 5");
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_valid_registration() {
    let request = ApiRequest::from_rules::<RegistrationRequest>();
    let data = FormData::new()
        .with_value("email", "  Alice@Example.com ")
        .with_value("password", "correct horse")
        .with_value("password_confirm", "correct horse")
        .with_value("plan", "pro");

    assert!(request.validate(data).unwrap().is_empty());
}

#[test]
fn test_cancel_on_fail_stops_field() {
    let request = ApiRequest::from_rules::<RegistrationRequest>();
    let mut data = HashMap::new();
    data.insert("email".to_string(), "".to_string());
    data.insert("password".to_string(), "correct horse".to_string());
    data.insert("password_confirm".to_string(), "correct horse".to_string());
    data.insert("plan".to_string(), "free".to_string());

    let messages = request.validate(data).unwrap();
    let email = messages.for_field("email");
    assert_eq!(email.len(), 1);
    assert_eq!(email[0].kind, "ruleform::PresenceOf");
}

#[test]
fn test_posted_form_failures() {
    let request = ApiRequest::from_rules::<RegistrationRequest>();
    let http = HttpRequest::form(
        "POST",
        "/register",
        "email=alice%40example.com&password=short&password_confirm=other&plan=enterprise",
    );

    let messages = request.validate(&http).unwrap();
    assert!(messages.for_field("email").is_empty());
    assert_eq!(messages.for_field("password").len(), 1);
    assert_eq!(messages.for_field("password_confirm").len(), 1);
    assert_eq!(messages.for_field("plan").len(), 1);
}

#[test]
fn test_filters_visible_through_facade() {
    let request = ApiRequest::from_rules::<RegistrationRequest>();
    assert_eq!(
        request.filters(Some("email")),
        vec![("email", &[Filter::Trim, Filter::Lower][..])]
    );
    assert!(request.filters(Some("plan")).is_empty());
}
