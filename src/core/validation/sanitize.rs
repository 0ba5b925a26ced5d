//! Record sanitization
//!
//! Projects an inbound record onto an allow-list of field names before it
//! is handed to the store. Anything the list doesn't name is dropped.

use crate::domain::Document;

/// Returns a new record containing only the allowed fields of `record`
///
/// Pure projection: the input record is never mutated, and the output holds
/// exactly the keys present in both `allowed` and `record`. The order of
/// `allowed` does not affect the result's semantics.
///
/// # Examples
///
/// ```
/// use bandstand::core::validation::pick_allowed;
/// use serde_json::json;
///
/// let record = json!({"a": 1, "c": 3});
/// let record = record.as_object().unwrap();
///
/// let picked = pick_allowed(&["a", "b"], record);
/// assert_eq!(picked.len(), 1);
/// assert_eq!(picked["a"], json!(1));
/// ```
pub fn pick_allowed(allowed: &[&str], record: &Document) -> Document {
    allowed
        .iter()
        .filter_map(|key| {
            record
                .get(*key)
                .map(|value| ((*key).to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Document {
        value.as_object().expect("test record is an object").clone()
    }

    #[test]
    fn test_overlapping_keys_retained() {
        let rec = record(json!({"a": 1, "c": 3}));
        let picked = pick_allowed(&["a", "b"], &rec);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked["a"], json!(1));
        assert!(!picked.contains_key("c"));
    }

    #[test]
    fn test_input_not_mutated() {
        let rec = record(json!({"a": 1, "c": 3}));
        let _ = pick_allowed(&["a"], &rec);

        assert_eq!(rec.len(), 2);
        assert_eq!(rec["c"], json!(3));
    }

    #[test]
    fn test_allow_order_does_not_change_contents() {
        let rec = record(json!({"a": 1, "b": 2}));
        let forward = pick_allowed(&["a", "b"], &rec);
        let reverse = pick_allowed(&["b", "a"], &rec);

        assert_eq!(forward.get("a"), reverse.get("a"));
        assert_eq!(forward.get("b"), reverse.get("b"));
        assert_eq!(forward.len(), reverse.len());
    }

    #[test]
    fn test_unknown_instrument_fields_dropped() {
        let rec = record(json!({
            "name": "Guitar",
            "category": "String",
            "group": "Acoustic",
            "retailPrice": 299.99,
            "manufacturer": "Acme",
            "color": "sunburst"
        }));
        let picked = pick_allowed(&crate::domain::CREATE_ALLOWED_FIELDS, &rec);

        assert_eq!(picked.len(), 5);
        assert!(!picked.contains_key("color"));
    }

    #[test]
    fn test_empty_record() {
        let rec = Document::new();
        assert!(pick_allowed(&["a", "b"], &rec).is_empty());
    }
}
