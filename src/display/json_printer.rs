//! JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red

use serde_json::Value;

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const INDENT: &str = "  ";

/// Render a decoded token segment for display.
///
/// JSON segments are pretty-printed; anything else is shown as lossy
/// UTF-8 text since the core does not require segments to be JSON.
pub fn render_segment(bytes: &[u8], use_color: bool) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => render_json(&value, use_color),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Render a JSON value with 2-space indentation.
///
/// When `use_color` is false, the output is plain JSON without ANSI
/// codes (suitable for machine consumption or piping).
pub fn render_json(value: &Value, use_color: bool) -> String {
    if !use_color {
        return serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    }
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => paint(out, RED, "null"),
        Value::Bool(b) => paint(out, MAGENTA, &b.to_string()),
        Value::Number(n) => paint(out, YELLOW, &n.to_string()),
        Value::String(s) => paint(out, GREEN, &quote(s)),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                write_value(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                indent(out, depth + 1);
                paint(out, CYAN, &quote(key));
                out.push_str(": ");
                write_value(out, item, depth + 1);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push('}');
        }
    }
}

fn paint(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn quote(s: &str) -> String {
    // Serializing a plain string cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}
