//! `each` loop rendering

use super::helpers::campaign_context;
use super::*;
use toml::{toml, Value};

#[test]
fn test_render_each_loop() {
    let template = r#"{{each campaign.routes |route|}}
- {{route.street}} ({{route.doors}} doors)
{{/each}}"#;
    let result = render(template, &campaign_context()).unwrap();
    assert!(result.contains("- Elm Street (40 doors)"));
    assert!(result.contains("- Oak Avenue (25 doors)"));
    assert!(result.find("Elm").unwrap() < result.find("Oak").unwrap());
}

#[test]
fn test_render_each_loop_with_spaces() {
    let template = "{{ each campaign.routes |route| }}[{{ route.street }}]{{ /each }}";
    let result = render(template, &campaign_context()).unwrap();
    assert_eq!(result, "[Elm Street][Oak Avenue]");
}

#[test]
fn test_loop_body_sees_outer_keys() {
    let template = "{{each campaign.routes |route|}}{{campaign.client_name}}@{{route.street}};{{/each}}";
    let result = render(template, &campaign_context()).unwrap();
    assert_eq!(result, "Acme Solar@Elm Street;Acme Solar@Oak Avenue;");
}

#[test]
fn test_render_string_items() {
    let data = toml! {
        benefits = ["Low cost", "Fast install"]
    };
    let context = TemplateContext::new(Value::Table(data));
    let result = render("{{each benefits |b|}}<li>{{b}}</li>{{/each}}", &context).unwrap();
    assert_eq!(result, "<li>Low cost</li><li>Fast install</li>");
}

#[test]
fn test_render_nested_each_loops() {
    let data = toml! {
        [[teams]]
        lead = "Dana"
        reps = ["Ari", "Bo"]

        [[teams]]
        lead = "Eli"
        reps = ["Cy"]
    };
    let context = TemplateContext::new(Value::Table(data));
    let template = "{{each teams |team|}}{{team.lead}}:{{each team.reps |rep|}} {{rep}}{{/each}};{{/each}}";

    let result = render(template, &context).unwrap();
    assert_eq!(result, "Dana: Ari Bo;Eli: Cy;");
}

#[test]
fn test_render_empty_array() {
    let data = toml! {
        items = []
    };
    let context = TemplateContext::new(Value::Table(data));
    let result = render("<ul>{{each items |item|}}<li>{{item}}</li>{{/each}}</ul>", &context).unwrap();
    assert_eq!(result, "<ul></ul>");
}

#[test]
fn test_text_after_loop_is_kept() {
    let data = toml! {
        items = ["a"]
    };
    let context = TemplateContext::new(Value::Table(data));
    let result = render("before {{each items |i|}}{{i}}{{/each}} after {{items}}", &context);
    // `{{items}}` after the loop is still processed
    assert!(matches!(
        result,
        Err(TemplateError::ArrayInNonEachContext { .. })
    ));
}
