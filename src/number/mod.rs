//! Number abbreviation.
//!
//! Most callers should use [`abbreviate()`], which accepts any primitive number or numeric
//! string (see [`crate::types::NumericInput`]) and returns a short human-readable form:
//!
//! | input            | output  |
//! |------------------|---------|
//! | `999`            | `999`   |
//! | `1000`           | `1K`    |
//! | `1234`           | `1.2K`  |
//! | `1500000`        | `1.5M`  |
//! | `"2500000000"`   | `2.5B`  |
//! | `2000000000`     | `2B`    |
//!
//! Thresholds compare the signed value, so negative numbers are returned unabbreviated.
//!
//! The pieces are also available on their own:
//!
//! - [`parse_numeric()`]: lenient text-to-float coercion
//! - [`plain_number()`]: the unabbreviated rendering
//! - [`Magnitude`]: the `K`/`M`/`B` buckets
//! - [`abbreviate_with_options()`]: abbreviation with observer reporting

pub mod abbreviate;
pub mod display;
pub mod parse;

pub use abbreviate::{abbreviate, abbreviate_with_options, AbbreviateOptions, Magnitude};
pub use display::plain_number;
pub use parse::parse_numeric;
