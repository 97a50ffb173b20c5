//! The case-insensitive field matching rule.

use serde_json::Value;

use crate::number::plain_number;
use crate::types::Record;

/// Text a field value is matched against, before lowercasing.
///
/// - `null` -> empty string
/// - strings as-is
/// - numbers in their plain form (`30`, `1.5`, `1e+21`)
/// - booleans as `true` / `false`
/// - nested arrays/objects as compact JSON text
pub fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(plain_number).unwrap_or_else(|| n.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Returns `true` if any field of `record` contains `term`, ignoring case.
///
/// ```rust
/// use rust_record_utils::search::record_matches;
/// use serde_json::json;
///
/// let record = json!({"name": "John Doe", "age": 30});
/// let record = record.as_object().unwrap();
/// assert!(record_matches(record, "JOHN"));
/// assert!(record_matches(record, "30"));
/// assert!(!record_matches(record, "jane"));
/// ```
pub fn record_matches(record: &Record, term: &str) -> bool {
    matches_lowered(record, &term.to_lowercase())
}

/// Same as [`record_matches`], with `needle` already lowercased.
pub(crate) fn matches_lowered(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|v| field_text(v).to_lowercase().contains(needle))
}

/// Take `item` as a matching record, or drop it.
///
/// Non-object array elements have no fields and never match.
pub(crate) fn take_if_match(item: Value, needle: &str) -> Option<Record> {
    match item {
        Value::Object(map) if matches_lowered(&map, needle) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{field_text, record_matches, take_if_match};

    #[test]
    fn field_text_scalars() {
        assert_eq!(field_text(&Value::Null), "");
        assert_eq!(field_text(&json!("Jane")), "Jane");
        assert_eq!(field_text(&json!(30)), "30");
        assert_eq!(field_text(&json!(-4)), "-4");
        assert_eq!(field_text(&json!(18446744073709551615u64)), "18446744073709551615");
        assert_eq!(field_text(&json!(1.5)), "1.5");
        assert_eq!(field_text(&json!(2.0)), "2");
        assert_eq!(field_text(&json!(false)), "false");
        assert_eq!(field_text(&json!(true)), "true");
    }

    #[test]
    fn field_text_nested_is_compact_json() {
        assert_eq!(field_text(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(field_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn matches_case_insensitively_on_any_field() {
        let rec = json!({"id": 3, "name": "Bob Johnson", "city": null});
        let rec = rec.as_object().unwrap();
        assert!(record_matches(rec, "john"));
        assert!(record_matches(rec, "BOB J"));
        assert!(record_matches(rec, "3"));
        assert!(!record_matches(rec, "null"));
        assert!(!record_matches(rec, "alice"));
    }

    #[test]
    fn matches_unicode_case() {
        let rec = json!({"name": "ÉMILE Zola"});
        assert!(record_matches(rec.as_object().unwrap(), "émile"));
    }

    #[test]
    fn booleans_match_their_text() {
        let rec = json!({"active": false});
        assert!(record_matches(rec.as_object().unwrap(), "fal"));
    }

    #[test]
    fn empty_record_never_matches() {
        let rec = json!({});
        assert!(!record_matches(rec.as_object().unwrap(), "x"));
    }

    #[test]
    fn non_objects_are_dropped() {
        assert!(take_if_match(json!("john"), "john").is_none());
        assert!(take_if_match(json!(null), "john").is_none());
        assert!(take_if_match(json!(["john"]), "john").is_none());
        assert!(take_if_match(json!({"n": "john"}), "john").is_some());
    }
}
