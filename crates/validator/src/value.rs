//! Scalar coercion for candidate values.

use std::borrow::Cow;

use serde_json::Value;

/// Absent and empty-string values are both "blank" and are not this rule's
/// concern.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Canonical string form of a scalar, `None` for arrays, objects and null.
pub(crate) fn canonical(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON type name, used in error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Equality used when matching a stored field against a lookup value.
///
/// Scalars compare by canonical form so `1` matches `"1"`.
pub(crate) fn loosely_equal(stored: &Value, wanted: &Value) -> bool {
    if stored == wanted {
        return true;
    }
    match (canonical(stored), canonical(wanted)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
