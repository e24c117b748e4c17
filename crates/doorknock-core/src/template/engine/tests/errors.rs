//! Error reporting

use super::helpers::{campaign_context, simple_context};
use super::*;

#[test]
fn test_error_undefined_key() {
    match render("Value: {{nonexistent}}", &simple_context()) {
        Err(TemplateError::UndefinedKey { key, line }) => {
            assert_eq!(key, "nonexistent");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UndefinedKey, got {:?}", other),
    }
}

#[test]
fn test_error_undefined_key_reports_line() {
    let template = "line one\nline two\n{{missing}}";
    match render(template, &simple_context()) {
        Err(TemplateError::UndefinedKey { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected UndefinedKey, got {:?}", other),
    }
}

#[test]
fn test_error_line_inside_loop_body() {
    let template = "top\n{{each campaign.routes |r|}}\n{{r.missing}}\n{{/each}}";
    match render(template, &campaign_context()) {
        Err(TemplateError::UndefinedKey { key, line }) => {
            assert_eq!(key, "r.missing");
            assert_eq!(line, 3);
        }
        other => panic!("Expected UndefinedKey, got {:?}", other),
    }
}

#[test]
fn test_error_undefined_nested_key() {
    match render("{{campaign.budget}}", &campaign_context()) {
        Err(TemplateError::UndefinedKey { key, .. }) => assert_eq!(key, "campaign.budget"),
        other => panic!("Expected UndefinedKey, got {:?}", other),
    }
}

#[test]
fn test_error_array_in_placeholder() {
    match render("Routes: {{campaign.routes}}", &campaign_context()) {
        Err(TemplateError::ArrayInNonEachContext { key }) => assert_eq!(key, "campaign.routes"),
        other => panic!("Expected ArrayInNonEachContext, got {:?}", other),
    }
}

#[test]
fn test_error_table_in_placeholder() {
    match render("{{campaign}}", &campaign_context()) {
        Err(TemplateError::TableInPlaceholder { key }) => assert_eq!(key, "campaign"),
        other => panic!("Expected TableInPlaceholder, got {:?}", other),
    }
}

#[test]
fn test_error_each_over_scalar() {
    match render("{{each campaign.region |r|}}{{r}}{{/each}}", &campaign_context()) {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("not an array"));
        }
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
}

#[test]
fn test_error_unclosed_placeholder() {
    assert!(matches!(
        render("Value: {{client_name", &simple_context()),
        Err(TemplateError::MalformedSyntax { .. })
    ));
}

#[test]
fn test_error_unclosed_each() {
    match render("{{each campaign.routes |r|}}{{r.street}}", &campaign_context()) {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("Unclosed each loop"));
        }
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
}

#[test]
fn test_error_stray_end_each() {
    match render("text {{/each}}", &simple_context()) {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("without matching"));
        }
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
}

#[test]
fn test_error_each_without_variable() {
    match render("{{each campaign.routes}}x{{/each}}", &campaign_context()) {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("expected |var|"));
        }
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
}

#[test]
fn test_error_display_mentions_key() {
    let err = TemplateError::UndefinedKey {
        key: "marketing_copy.title".to_string(),
        line: 7,
    };
    assert_eq!(
        err.to_string(),
        "Undefined key 'marketing_copy.title' at line 7"
    );

    let err = TemplateError::ArrayInNonEachContext {
        key: "benefits".to_string(),
    };
    assert!(err.to_string().contains("{{each benefits |item|}}"));
}
