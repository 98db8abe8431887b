//! Loose numeric interpretation shared by comparison constraints and the
//! currency renderer.

use serde_json::Value;

/// Interpret a JSON value as a finite number.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace, sign,
/// decimal point and exponent allowed). `inf`, `nan` and hex forms are not
/// numeric.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

pub(crate) fn parse_numeric_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
