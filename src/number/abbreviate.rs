//! Magnitude abbreviation (`1500000` -> `"1.5M"`).

use std::sync::Arc;

use crate::error::UtilResult;
use crate::observability::{report_outcome, Observer, OperationContext, Outcome, Severity};
use crate::types::NumericInput;

use super::display::{fixed_one, plain_number};
use super::parse::coerce;

/// Magnitude buckets, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// 1,000 (`K`).
    Thousand,
    /// 1,000,000 (`M`).
    Million,
    /// 1,000,000,000 (`B`).
    Billion,
}

impl Magnitude {
    /// Buckets in the order thresholds are checked.
    pub const DESCENDING: [Magnitude; 3] =
        [Magnitude::Billion, Magnitude::Million, Magnitude::Thousand];

    /// The scale of this bucket.
    pub fn divisor(self) -> f64 {
        match self {
            Magnitude::Thousand => 1_000.0,
            Magnitude::Million => 1_000_000.0,
            Magnitude::Billion => 1_000_000_000.0,
        }
    }

    /// One-letter suffix appended to abbreviated values.
    pub fn suffix(self) -> &'static str {
        match self {
            Magnitude::Thousand => "K",
            Magnitude::Million => "M",
            Magnitude::Billion => "B",
        }
    }

    /// The largest bucket whose divisor `value` reaches, if any.
    ///
    /// The comparison uses the signed value, so negative numbers never get a bucket.
    pub fn for_value(value: f64) -> Option<Magnitude> {
        Self::DESCENDING.into_iter().find(|m| value >= m.divisor())
    }
}

/// Abbreviate a number (or numeric string) with a `K`/`M`/`B` suffix.
///
/// Values of at least 1,000 are scaled to their magnitude and rounded to one decimal place;
/// a trailing `.0` is dropped. Smaller values are returned in their plain form.
///
/// ```rust
/// use rust_record_utils::number::abbreviate;
///
/// assert_eq!(abbreviate(999).unwrap(), "999");
/// assert_eq!(abbreviate(1234).unwrap(), "1.2K");
/// assert_eq!(abbreviate(1_500_000).unwrap(), "1.5M");
/// assert_eq!(abbreviate("2500000000").unwrap(), "2.5B");
/// assert_eq!(abbreviate(2_000_000_000u64).unwrap(), "2B");
/// assert!(abbreviate("not a number").is_err());
/// ```
///
/// # Errors
///
/// Returns [`crate::UtilError::InvalidInput`] if the input is NaN, infinite, or text without a
/// leading float literal.
pub fn abbreviate(value: impl Into<NumericInput>) -> UtilResult<String> {
    let n = coerce(&value.into())?;
    Ok(abbreviate_finite(n))
}

fn abbreviate_finite(n: f64) -> String {
    match Magnitude::for_value(n) {
        Some(m) => {
            let scaled = fixed_one(n / m.divisor());
            let trimmed = scaled.strip_suffix(".0").unwrap_or(scaled.as_str());
            format!("{trimmed}{}", m.suffix())
        }
        None => plain_number(n),
    }
}

/// Options controlling [`abbreviate_with_options`].
#[derive(Clone)]
pub struct AbbreviateOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn Observer>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl std::fmt::Debug for AbbreviateOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbbreviateOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for AbbreviateOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Same as [`abbreviate`], reporting the outcome to `options.observer` when one is set.
pub fn abbreviate_with_options(
    value: impl Into<NumericInput>,
    options: &AbbreviateOptions,
) -> UtilResult<String> {
    let result = abbreviate(value);

    if let Some(obs) = options.observer.as_deref() {
        let ctx = OperationContext::abbreviate();
        let outcome = result.as_ref().map(|s| Outcome::Abbreviated { output: s.as_str() });
        report_outcome(obs, &ctx, outcome, options.alert_at_or_above);
    }

    result
}
