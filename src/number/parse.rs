//! Coercion of [`NumericInput`] into a finite `f64`.
//!
//! Text is read the lenient way web front-ends read numbers: leading whitespace is skipped,
//! the longest leading float literal is used, and anything after it is ignored.

use crate::error::{UtilError, UtilResult};
use crate::types::NumericInput;

const INFINITY_LITERAL: &str = "Infinity";

/// Parse `input` as a float, using its longest valid leading float literal.
///
/// ```rust
/// use rust_record_utils::number::parse_numeric;
///
/// assert_eq!(parse_numeric("  12px").unwrap(), 12.0);
/// assert_eq!(parse_numeric("1.5e3").unwrap(), 1500.0);
/// assert!(parse_numeric("abc").is_err());
/// ```
///
/// # Errors
///
/// Returns [`UtilError::InvalidInput`] when no leading float literal exists or when the literal
/// is not finite (`"Infinity"`).
pub fn parse_numeric(input: &str) -> UtilResult<f64> {
    let value = float_prefix(input)
        .ok_or_else(|| UtilError::invalid_input(input, "not a valid number"))?;
    ensure_finite(input, value)
}

/// Resolve a [`NumericInput`] to a finite `f64`.
pub(crate) fn coerce(input: &NumericInput) -> UtilResult<f64> {
    match input {
        NumericInput::Number(n) => ensure_finite(&n.to_string(), *n),
        NumericInput::Text(s) => parse_numeric(s),
    }
}

fn ensure_finite(raw: &str, value: f64) -> UtilResult<f64> {
    if value.is_nan() {
        return Err(UtilError::invalid_input(raw, "not a valid number"));
    }
    if value.is_infinite() {
        return Err(UtilError::invalid_input(raw, "number is not finite"));
    }
    Ok(value)
}

fn float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let b = s.as_bytes();
    let mut i = 0;

    let negative = matches!(b.first(), Some(b'-'));
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with(INFINITY_LITERAL) {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;
    let mut end = i;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(&b[i + 1..]);
        // `5.` is complete on its own, and may still carry an exponent (`5.e3`).
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
            end = i;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&b[j..]);
        if exp_digits > 0 {
            end = j + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}
