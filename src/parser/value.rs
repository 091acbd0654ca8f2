//! Value literal classification.
//!
//! Turns the raw text on the right-hand side of a resource assignment into
//! a [`Value`]. Classification is a first-match-wins chain, and the order
//! matters: `Color(...)` and `Vector2(...)` would otherwise be swallowed by
//! the raw-string fallback, and integers are a textual subset of floats.
//!
//! The classifier is total. Anything it does not recognize comes back as
//! the trimmed input text, and malformed array/dictionary literals come
//! back as empty composites instead of errors, so a single hand-mangled
//! field never poisons the rest of a file.

use indexmap::IndexMap;

use crate::types::Value;

/// Classify a raw value literal.
pub fn classify(raw: &str) -> Value {
    let raw = raw.trim();

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "nil" => return Value::Null,
        _ => {}
    }

    if let Some(color) = parse_color(raw) {
        return color;
    }
    if let Some(vector) = parse_vector2(raw) {
        return vector;
    }

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        // Unwrap one pair of quotes; embedded escapes stay as written.
        return Value::String(raw[1..raw.len() - 1].to_string());
    }

    if raw.starts_with('[') {
        return parse_array(raw);
    }
    if raw.starts_with('{') {
        return parse_map(raw);
    }

    if is_integer(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
    }
    if is_float(raw) {
        if let Ok(n) = raw.parse::<f64>() {
            return Value::Float(n);
        }
    }

    Value::String(raw.to_string())
}

/// Parse a `Color(r, g, b, a)` literal. All four components are required
/// and must be unsigned decimals, or the candidate falls through.
fn parse_color(raw: &str) -> Option<Value> {
    let inner = raw.strip_prefix("Color(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 4 {
        return None;
    }
    Some(Value::Color {
        r: decimal_component(parts[0], false)?,
        g: decimal_component(parts[1], false)?,
        b: decimal_component(parts[2], false)?,
        a: decimal_component(parts[3], false)?,
    })
}

/// Parse a `Vector2(x, y)` literal. Components may be negative, unlike
/// colour channels.
fn parse_vector2(raw: &str) -> Option<Value> {
    let inner = raw.strip_prefix("Vector2(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    Some(Value::Vector2 {
        x: decimal_component(parts[0], true)?,
        y: decimal_component(parts[1], true)?,
    })
}

/// Parse one component of a geometric/colour literal: digits and dots,
/// plus a minus sign when `signed`.
fn decimal_component(part: &str, signed: bool) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }
    let allowed = |c: char| c.is_ascii_digit() || c == '.' || (signed && c == '-');
    if !part.chars().all(allowed) {
        return None;
    }
    part.parse().ok()
}

/// Whole-string integer check: optional `-`, then digits.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whole-string float check: optional `-`, digits, a literal `.`, then
/// zero or more digits.
fn is_float(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => {
            !int_part.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Parse an `[...]` array literal.
///
/// Fail-soft: a literal with a missing bracket, unbalanced nesting, or an
/// unterminated string yields an empty array rather than an error.
pub fn parse_array(raw: &str) -> Value {
    let items = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|body| scan_array(body.trim()))
        .unwrap_or_default();
    Value::Array(items)
}

/// Parse a `{...}` dictionary literal.
///
/// Same fail-soft policy as [`parse_array`]: any scan inconsistency yields
/// an empty map.
pub fn parse_map(raw: &str) -> Value {
    let entries = raw
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .and_then(|body| scan_map(body.trim()))
        .unwrap_or_default();
    Value::Map(entries)
}

/// Split an array body on top-level commas and classify each element.
///
/// The scan tracks bracket/brace depth and a quoted-string flag; both
/// delimiters and commas only count at depth 0 outside a string. A quote
/// is an opening/closing delimiter unless the accumulated fragment ends
/// with a backslash (a deliberate single-character lookback, not full
/// escape decoding).
fn scan_array(body: &str) -> Option<Vec<Value>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0u32;
    let mut in_string = false;

    for ch in body.chars() {
        if ch == '"' && !current.ends_with('\\') {
            in_string = !in_string;
        }

        if !in_string {
            match ch {
                '[' | '{' => depth += 1,
                ']' | '}' => depth = depth.checked_sub(1)?,
                ',' if depth == 0 => {
                    items.push(classify(current.trim()));
                    current.clear();
                    continue;
                }
                _ => {}
            }
        }

        current.push(ch);
    }

    if depth != 0 || in_string {
        return None;
    }
    if !current.trim().is_empty() {
        items.push(classify(current.trim()));
    }
    Some(items)
}

/// Split a dictionary body into top-level `key: value` entries.
///
/// Same depth/quote discipline as [`scan_array`], with an extra key/value
/// sub-state: a top-level colon ends the key, a top-level comma commits
/// the entry. Keys are plain strings (one pair of surrounding quotes
/// stripped), never recursively classified.
fn scan_map(body: &str) -> Option<IndexMap<String, Value>> {
    let mut entries = IndexMap::new();
    let mut current = String::new();
    let mut key: Option<String> = None;
    let mut depth = 0u32;
    let mut in_string = false;

    for ch in body.chars() {
        if ch == '"' && !current.ends_with('\\') {
            in_string = !in_string;
        }

        if !in_string {
            match ch {
                '[' | '{' => depth += 1,
                ']' | '}' => depth = depth.checked_sub(1)?,
                ':' if depth == 0 && key.is_none() => {
                    key = Some(unquote_key(current.trim()));
                    current.clear();
                    continue;
                }
                ',' if depth == 0 => {
                    if let Some(k) = key.take() {
                        entries.insert(k, classify(current.trim()));
                    }
                    current.clear();
                    continue;
                }
                _ => {}
            }
        }

        current.push(ch);
    }

    if depth != 0 || in_string {
        return None;
    }
    if let Some(k) = key {
        if !current.trim().is_empty() {
            entries.insert(k, classify(current.trim()));
        }
    }
    Some(entries)
}

/// Strip one pair of surrounding double quotes from a dictionary key.
fn unquote_key(key: &str) -> String {
    if key.len() >= 2 && key.starts_with('"') && key.ends_with('"') {
        key[1..key.len() - 1].to_string()
    } else {
        key.to_string()
    }
}
