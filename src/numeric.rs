//! Numeric coercion for form input.
//!
//! Purchase entry fields are edited one keystroke at a time, so a value
//! is often blank, half typed or missing.  Every numeric input goes
//! through [`coerce_number`]: anything that is not a finite number
//! becomes 0.

use serde_json::Value;

/// Read a form value as a number.
///
/// * numbers are used as-is;
/// * strings are trimmed and parsed, blank or unparsable text gives 0;
/// * `true` is 1 and `false` is 0;
/// * `null`, arrays and objects give 0.
///
/// NaN and infinities, however they arrive, give 0.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    finite_or_zero(n)
}

/// Parse typed text as a number, 0 when it is not one.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}
