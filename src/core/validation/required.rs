//! Required-field validation
//!
//! Computes which required fields are absent or empty in an inbound record
//! and renders the message reported back to the caller.
//!
//! A field counts as missing when the record has no entry for it, or the
//! entry is JSON `null`, an empty string, an empty array, or an empty
//! object. Numbers are never missing — `retailPrice: 0` is a present value,
//! which is why this check cannot lean on a generic truthiness test.
//! Booleans (including `false`) are likewise present.

use crate::domain::Document;
use serde_json::Value;

/// Returns the required fields that are absent or empty in `record`
///
/// The result preserves the order of `required`; an empty result means the
/// record passed validation.
///
/// # Examples
///
/// ```
/// use bandstand::core::validation::find_missing_fields;
/// use serde_json::json;
///
/// let record = json!({"name": "Guitar", "retailPrice": 0, "category": ""});
/// let record = record.as_object().unwrap();
///
/// let missing = find_missing_fields(&["name", "category", "retailPrice", "group"], record);
/// assert_eq!(missing, vec!["category", "group"]);
/// ```
pub fn find_missing_fields<'a>(required: &[&'a str], record: &Document) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| is_missing(record.get(**name)))
        .copied()
        .collect()
}

/// Renders the validation failure message for a non-empty missing list
///
/// The output is stable so callers can assert on it:
/// `missing required field(s): name, category`. Formatting is only invoked
/// once validation has failed; an empty list never reaches this function.
pub fn format_missing_fields_message(missing: &[&str]) -> String {
    format!("missing required field(s): {}", missing.join(", "))
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(entries)) => entries.is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => false,
    }
}
