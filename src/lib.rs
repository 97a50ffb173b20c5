//! `rust-record-utils` provides two small, pure helpers:
//!
//! - [`number::abbreviate()`]: shorten a number with a magnitude suffix (`1500000` -> `"1.5M"`)
//! - [`search::search()`]: case-insensitive substring search over a JSON array of flat records
//!
//! Both are synchronous, keep no state, and never log. Errors are reported through a single
//! [`UtilError`] enum.
//!
//! ## Abbreviating numbers
//!
//! ```rust
//! use rust_record_utils::number::abbreviate;
//!
//! # fn main() -> Result<(), rust_record_utils::UtilError> {
//! assert_eq!(abbreviate(999)?, "999");
//! assert_eq!(abbreviate(1000)?, "1K");
//! assert_eq!(abbreviate(1_500_000)?, "1.5M");
//! assert_eq!(abbreviate("2500000000")?, "2.5B");
//! # Ok(())
//! # }
//! ```
//!
//! Inputs are anything convertible into [`types::NumericInput`]: primitive numbers, `&str`
//! and `String`. Text is read leniently (`" 12px"` is `12`); text with no leading number, NaN
//! and infinities fail with [`UtilError::InvalidInput`].
//!
//! ## Searching records
//!
//! ```rust
//! use rust_record_utils::search::search;
//!
//! # fn main() -> Result<(), rust_record_utils::UtilError> {
//! let hits = search(r#"[{"name":"John Doe","age":30},{"name":"Jane"}]"#, "john")?;
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0]["age"], 30);
//!
//! assert!(search("[]", "x")?.is_empty());
//! assert!(search(r#"{"a":1}"#, "x").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! The options-driven variants ([`number::abbreviate_with_options`],
//! [`search::search_with_options`], [`search::search_from_path`]) report outcomes to an
//! [`observability::Observer`]. Stderr, file, `tracing` and fan-out observers are provided.
//!
//! ## Modules
//!
//! - [`number`]: magnitude abbreviation and numeric coercion
//! - [`search`]: record search and its options-driven entrypoints
//! - [`observability`]: observer trait and built-in observers
//! - [`types`]: numeric input and record types
//! - [`error`]: error type shared by every operation

pub mod error;
pub mod number;
pub mod observability;
pub mod search;
pub mod types;

pub use error::{ErrorKind, UtilError, UtilResult};
pub use number::abbreviate;
pub use search::search;
pub use types::{NumericInput, Record};
