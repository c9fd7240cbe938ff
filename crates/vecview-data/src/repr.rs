//! Display strings for metadata values.
//!
//! Metadata is rendered in Python literal notation, the form Chroma users
//! see from its Python client: `{'source': 'faq', 'page': 3}` for a mapping
//! and `None` for a missing entry. These strings are what the table shows
//! and what the export writes.

use std::fmt::Write;

use serde_json::Value;

use crate::item::Metadata;

/// Marker rendered for an item whose metadata entry is null.
pub const NONE_MARKER: &str = "None";

/// Renders one item's metadata entry.
pub fn display_metadata(metadata: Option<&Metadata>) -> String {
    let mut out = String::new();
    match metadata {
        Some(map) => write_map(&mut out, map),
        None => out.push_str(NONE_MARKER),
    }
    out
}

/// Renders a single JSON value.
pub fn display_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str(NONE_MARKER),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => write_float(out, f),
            _ => {
                let _ = write!(out, "{n}");
            }
        },
        Value::String(s) => write_str(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => write_map(out, map),
    }
}

fn write_map(out: &mut String, map: &Metadata) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_str(out, key);
        out.push_str(": ");
        write_value(out, value);
    }
    out.push('}');
}

/// Writes a float the way Python's `repr` does.
///
/// Positional for decimal exponents in `-4..16` with a trailing `.0` when
/// integral, scientific otherwise with a signed two-digit exponent
/// (`1e+16`, `1e-07`). Digits are the shortest round-trip form in both cases.
fn write_float(out: &mut String, f: f64) {
    let scientific = format!("{f:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = f.to_string();
        out.push_str(&positional);
        if !positional.contains('.') {
            out.push_str(".0");
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
}

/// Quotes with `'` unless the text contains `'` and no `"`.
fn write_str(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Metadata {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn renders_mapping_in_key_order() {
        let metadata = map(json!({"source": "faq", "page": 3, "draft": false}));
        assert_eq!(
            display_metadata(Some(&metadata)),
            "{'source': 'faq', 'page': 3, 'draft': False}"
        );
    }

    #[test]
    fn renders_missing_entry_as_none() {
        assert_eq!(display_metadata(None), "None");
    }

    #[test]
    fn renders_empty_mapping() {
        assert_eq!(display_metadata(Some(&Metadata::new())), "{}");
    }

    #[test]
    fn switches_quotes_around_apostrophes() {
        assert_eq!(display_value(&json!("it's")), "\"it's\"");
        assert_eq!(display_value(&json!("say \"hi\" it's")), "'say \"hi\" it\\'s'");
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(display_value(&json!("a\nb\u{1}")), "'a\\nb\\x01'");
    }

    #[test]
    fn renders_nested_values() {
        assert_eq!(display_value(&json!([1, null, {"k": 2.5}])), "[1, None, {'k': 2.5}]");
    }

    #[test]
    fn renders_floats_like_python() {
        assert_eq!(display_value(&json!(2.0)), "2.0");
        assert_eq!(display_value(&json!(0.0001)), "0.0001");
        assert_eq!(display_value(&json!(1e15)), "1000000000000000.0");
        assert_eq!(display_value(&json!(1e16)), "1e+16");
        assert_eq!(display_value(&json!(1.5e16)), "1.5e+16");
        assert_eq!(display_value(&json!(1e-7)), "1e-07");
        assert_eq!(display_value(&json!(-2.5e-5)), "-2.5e-05");
        assert_eq!(display_value(&json!(1e100)), "1e+100");
    }
}
