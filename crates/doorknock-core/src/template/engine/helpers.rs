//! Value lookup and formatting used while rendering

use crate::template::error::TemplateError;
use toml::Value;

/// Walk a dotted key (`marketing_copy.title`) through nested tables.
pub(crate) fn resolve_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(data, |current, part| match current {
        Value::Table(table) => table.get(part),
        _ => None,
    })
}

/// Resolve a key that must hold an array (the subject of an `each`).
pub(crate) fn resolve_array<'a>(
    data: &'a Value,
    key: &str,
    line: usize,
) -> Result<&'a [Value], TemplateError> {
    let value = resolve_key(data, key).ok_or_else(|| TemplateError::UndefinedKey {
        key: key.to_string(),
        line,
    })?;

    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Key '{}' is not an array", key),
            line,
        })
}

/// Turn a scalar into its textual form. Arrays and tables are rejected.
pub(crate) fn stringify_value(value: &Value, key: &str) -> Result<String, TemplateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) => Err(TemplateError::ArrayInNonEachContext {
            key: key.to_string(),
        }),
        Value::Table(_) => Err(TemplateError::TableInPlaceholder {
            key: key.to_string(),
        }),
    }
}

/// Split `items |item|` into `("items", "item")`.
pub(crate) fn parse_each_args(args: &str, line: usize) -> Result<(&str, &str), TemplateError> {
    let malformed = |reason: &str| TemplateError::MalformedSyntax {
        message: format!("Invalid each syntax: {} in 'each {}'", reason, args),
        line,
    };

    let (key, rest) = args.split_once('|').ok_or_else(|| malformed("expected |var|"))?;
    let (var, _) = rest.split_once('|').ok_or_else(|| malformed("unclosed |var|"))?;

    let key = key.trim();
    let var = var.trim();
    if key.is_empty() || var.is_empty() {
        return Err(malformed("empty key or variable"));
    }
    Ok((key, var))
}

/// Scope for one loop iteration: the outer data plus `var = item`.
pub(crate) fn bind_loop_var(outer: &Value, var: &str, item: Value) -> Value {
    let mut table = match outer {
        Value::Table(t) => t.clone(),
        _ => toml::map::Map::new(),
    };
    table.insert(var.to_string(), item);
    Value::Table(table)
}
