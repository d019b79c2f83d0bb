//! Helpers for loosely-typed request fields.
//!
//! Write endpoints accept raw JSON values so that missing, blank and
//! non-numeric inputs can be reported with the domain error each endpoint
//! promises instead of a generic JSON rejection. Numeric strings such as
//! `"42"` are coerced.

use serde_json::Value;

/// JS-style truthiness: absent, `null`, `false`, `0`, `NaN` and blank strings
/// count as missing.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Trimmed, non-empty string content
pub fn trimmed_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Finite number from a JSON number or numeric string
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Whole number from a JSON number or numeric string.
///
/// `10.0` is accepted, `10.5` is not.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }

    let number = as_number(value)?;
    if number.fract() != 0.0 || number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}
