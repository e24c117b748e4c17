//! Large input handling

use super::tokenize::TokenStream;
use super::*;
use toml::Value;

#[test]
fn test_tokenstream_handles_large_input() {
    let mut large = String::new();
    for i in 0..250 {
        large.push_str(&format!("Door {} of {{{{street{}}}}}. ", i, i));
    }

    let tokens: Vec<_> = TokenStream::new(&large).collect();
    assert_eq!(tokens.len(), 250);
}

#[test]
fn test_render_large_nested_loops_complete() {
    let streets: Vec<Value> = (0..100)
        .map(|i| Value::String(format!("Street{}", i)))
        .collect();
    let mut data = toml::map::Map::new();
    data.insert("streets".to_string(), Value::Array(streets));
    let context = TemplateContext::from_table(data);

    let template = "{{each streets |a|}}{{a}}\n{{each streets |b|}}  {{b}}\n{{/each}}{{/each}}";
    let output = render(template, &context).unwrap();

    assert!(output.len() > 10_000);
    assert_eq!(output.lines().count(), 100 + 100 * 100);
}
