//! Case-insensitive substring search over JSON arrays of flat records.
//!
//! Most callers should use [`search()`], which:
//!
//! - rejects an empty term ([`crate::UtilError::InvalidArgument`])
//! - parses the text and requires a top-level array ([`crate::UtilError::Parse`] otherwise)
//! - returns, in input order, the records with at least one field whose text contains the
//!   term, ignoring case
//!
//! Field values are compared through [`field_text()`]: `null` never matches anything,
//! numbers and booleans match their plain text (`30`, `false`).
//!
//! Options-driven variants live in [`unified`]:
//!
//! - [`search_with_options()`]: observer reporting and parallel matching
//! - [`search_from_path()`]: read the JSON text from a file
//! - [`SearchRequest`]: an owned, runnable request

pub mod json;
pub mod matcher;
mod parallel;
pub mod unified;

pub use json::search;
pub use matcher::{field_text, record_matches};
pub use unified::{
    search_from_path, search_with_options, SearchOptions, SearchRequest, SearchSource,
};
