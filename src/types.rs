//! Core data model types.
//!
//! Numbers enter the abbreviator as a [`NumericInput`]; the searcher works on [`Record`]s
//! parsed from a JSON array.

use serde::{Deserialize, Serialize};

/// A single flat JSON object from a searched array.
///
/// Field order follows the input text.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A value to abbreviate: either an already-numeric value or text to be parsed as a float.
///
/// Deserializes from either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Native numeric value, used as-is.
    Number(f64),
    /// Text to be parsed as a floating-point number.
    Text(String),
}

macro_rules! numeric_input_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(v: $t) -> Self {
                    NumericInput::Number(v as f64)
                }
            }
        )*
    };
}

numeric_input_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for NumericInput {
    fn from(v: &str) -> Self {
        NumericInput::Text(v.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(v: String) -> Self {
        NumericInput::Text(v)
    }
}

impl From<&String> for NumericInput {
    fn from(v: &String) -> Self {
        NumericInput::Text(v.clone())
    }
}
