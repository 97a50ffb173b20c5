//! String renderings of `f64` used by the abbreviator and by record matching.

/// Magnitude at and above which [`plain_number`] switches to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which [`plain_number`] switches to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Render `v` with the shortest digits that round-trip, without a forced decimal.
///
/// - integral values have no decimal point (`999`, not `999.0`)
/// - negative zero renders as `0`
/// - magnitudes `>= 1e21` or `< 1e-6` use exponent notation with a signed exponent
///   (`1e+21`, `1.5e-7`)
///
/// ```rust
/// use rust_record_utils::number::plain_number;
///
/// assert_eq!(plain_number(999.0), "999");
/// assert_eq!(plain_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(plain_number(1e21), "1e+21");
/// ```
pub fn plain_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let magnitude = v.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return format!("{v}");
    }

    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

/// Render `v` with exactly one fractional digit, rounding ties away from zero.
///
/// Rounding looks at the exact binary value, so `1.25` (exactly representable) becomes
/// `1.3` while `1.15` (stored as `1.1499…`) becomes `1.1`. Magnitudes `>= 1e21` and
/// non-finite values fall back to [`plain_number`].
pub(crate) fn fixed_one(v: f64) -> String {
    if !v.is_finite() || v.abs() >= EXPONENT_ABOVE {
        return plain_number(v);
    }

    // A one-digit tie needs an exact `.x5` expansion; in binary that is only ever `.25` or
    // `.75`. `format!` rounds those to even, so they are handled here.
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let whole = v.abs().trunc();
        let tenth = if v.abs() - whole == 0.25 { 3 } else { 8 };
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{sign}{whole:.0}.{tenth}");
    }

    format!("{v:.1}")
}
