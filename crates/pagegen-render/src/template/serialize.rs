//! Text substituted for a resolved placeholder.
//!
//! | Resolved | Bare slot | Quoted slot |
//! |----------|-----------|-------------|
//! | missing | `null` | empty |
//! | array / object | JSON literal | JSON literal (parse will fail) |
//! | string | `"escaped"` | `escaped` |
//! | number / bool | literal | literal, now inside the string |
//!
//! In a quoted slot the template's own quotes delimit the string, so only the
//! inside of the value's JSON string literal is emitted.

use std::borrow::Cow;

use serde_json::Value;

use super::scanner::Quoting;

/// Returns the text that replaces a placeholder.
pub fn substitution(resolved: Option<&Value>, quoting: Quoting) -> Cow<'static, str> {
    let Some(value) = resolved else {
        return match quoting {
            Quoting::Quoted => Cow::Borrowed(""),
            Quoting::Bare => Cow::Borrowed("null"),
        };
    };

    match (value, quoting) {
        (Value::Array(_) | Value::Object(_), _) => Cow::Owned(value.to_string()),
        (_, Quoting::Bare) => Cow::Owned(value.to_string()),
        (_, Quoting::Quoted) => Cow::Owned(string_inner(value)),
    }
}

/// The canonical JSON literal of a scalar with one pair of surrounding
/// quotes removed, if it has them.
fn string_inner(value: &Value) -> String {
    let literal = value.to_string();
    match literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => literal,
    }
}
