//! Substring search over a JSON array of records.
//!
//! Supported input: a JSON array. Object elements are records; any other element is kept out
//! of the result.

use serde_json::Value;

use crate::error::{UtilError, UtilResult};
use crate::types::Record;

use super::matcher::take_if_match;

/// Return the records of `json_text` with a field containing `term`, ignoring case.
///
/// Records keep their input order.
///
/// ```rust
/// use rust_record_utils::search::search;
///
/// # fn main() -> Result<(), rust_record_utils::UtilError> {
/// let data = r#"[
///     {"id": 1, "name": "John Doe", "age": 30},
///     {"id": 2, "name": "Jane Smith", "age": 25},
///     {"id": 3, "name": "Bob Johnson", "age": 40}
/// ]"#;
///
/// let hits = search(data, "John")?;
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[0]["id"], 1);
/// assert_eq!(hits[1]["id"], 3);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`UtilError::InvalidArgument`] if `term` is empty
/// - [`UtilError::Parse`] if `json_text` is not valid JSON or is not an array
pub fn search(json_text: &str, term: &str) -> UtilResult<Vec<Record>> {
    let needle = lowered_term(term)?;
    let items = parse_array(json_text)?;
    Ok(filter_sequential(items, &needle))
}

/// Validate the search term and lowercase it.
pub(crate) fn lowered_term(term: &str) -> UtilResult<String> {
    if term.is_empty() {
        return Err(UtilError::invalid_argument("term", "must be a non-empty string"));
    }
    Ok(term.to_lowercase())
}

/// Parse `json_text` and require a top-level array.
pub(crate) fn parse_array(json_text: &str) -> UtilResult<Vec<Value>> {
    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| UtilError::parse(format!("input is not valid json: {e}")))?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(UtilError::parse(format!(
            "input must be a json array, found {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn filter_sequential(items: Vec<Value>, needle: &str) -> Vec<Record> {
    if items.is_empty() {
        return Vec::new();
    }
    items
        .into_iter()
        .filter_map(|item| take_if_match(item, needle))
        .collect()
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
