use serde_json::{Map, Value};

use super::RenderStrategy;
use crate::numeric::as_number;

/// Currency suffix used when `options.currency` is absent.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Formats numeric values as `1 234,56 EUR`.
///
/// Two decimals, comma as decimal separator, space as thousands separator,
/// currency code from `options.currency`. Non-numeric input is passed
/// through as a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrencyRenderer;

impl RenderStrategy for CurrencyRenderer {
    fn alias(&self) -> &'static str {
        "currency"
    }

    fn render(&self, value: &Value, options: &Map<String, Value>) -> Value {
        let Some(amount) = as_number(value) else {
            return Value::String(stringify(value));
        };
        let currency = options
            .get("currency")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CURRENCY);
        Value::String(format!("{} {currency}", format_amount(amount)))
    }
}

/// Significant digits kept before rounding to cents. Matches the precision
/// at which a typed decimal like `1.005` reads back from its `f64`.
const SIGNIFICANT_DIGITS: usize = 15;

/// Round half away from zero to cents and group thousands.
fn format_amount(amount: f64) -> String {
    let cents = cents_digits(amount);
    let cents = format!("{cents:0>3}");
    let (int_part, frac_part) = cents.split_at(cents.len() - 2);

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let is_zero = cents.bytes().all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// Decimal digits of `|amount| * 100`, rounded half up on the decimal
/// digits rather than on the binary value.
fn cents_digits(amount: f64) -> String {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, amount.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // Integer digits plus two decimals.
    let keep = exponent + 3;
    if keep < 0 {
        return "0".to_string();
    }
    let keep = keep as usize;

    let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
    kept.resize(keep, 0);

    if digits.get(keep).is_some_and(|&d| d >= 5) {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    if kept.is_empty() {
        return "0".to_string();
    }
    kept.into_iter().map(|d| char::from(b'0' + d)).collect()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
