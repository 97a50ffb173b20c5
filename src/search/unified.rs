//! Options-driven search entrypoints.
//!
//! [`search_with_options`] and [`search_from_path`] return exactly what
//! [`super::search()`] returns for the same text and term. On top of that they:
//!
//! - report success/failure/alerts to an optional [`Observer`]
//! - switch to parallel matching for large arrays (see [`SearchOptions::parallel_threshold`])
//! - read input from a file ([`search_from_path`])

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{UtilError, UtilResult};
use crate::observability::{
    report_outcome, Observer, OperationContext, Outcome, SearchStats, Severity,
};
use crate::types::Record;

use super::json::{filter_sequential, lowered_term, parse_array};
use super::parallel::filter_parallel;

/// Options controlling search behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SearchOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn Observer>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
    /// Arrays with at least this many elements are matched in parallel.
    ///
    /// `None` always matches sequentially.
    pub parallel_threshold: Option<usize>,
    /// Worker threads for parallel matching.
    ///
    /// If `None`, uses the global rayon pool.
    pub num_threads: Option<usize>,
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("parallel_threshold", &self.parallel_threshold)
            .field("num_threads", &self.num_threads)
            .finish()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
            parallel_threshold: Some(10_000),
            num_threads: None,
        }
    }
}

/// Search `json_text` for `term`, honoring `options`.
///
/// ```rust
/// use std::sync::Arc;
///
/// use rust_record_utils::observability::StdErrObserver;
/// use rust_record_utils::search::{search_with_options, SearchOptions};
///
/// # fn main() -> Result<(), rust_record_utils::UtilError> {
/// let opts = SearchOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     parallel_threshold: Some(2),
///     ..Default::default()
/// };
///
/// let hits = search_with_options(r#"[{"name":"Ada"},{"name":"Grace"}]"#, "ada", &opts)?;
/// assert_eq!(hits.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Same as [`super::search()`].
pub fn search_with_options(
    json_text: &str,
    term: &str,
    options: &SearchOptions,
) -> UtilResult<Vec<Record>> {
    let ctx = OperationContext::search(term, None);
    let result = run_search(json_text, term, options);
    report(options, &ctx, &result);
    result.map(|(records, _)| records)
}

/// Read `path` as UTF-8 text and search it for `term`.
///
/// # Errors
///
/// [`UtilError::Io`] if the file cannot be read (reported with [`Severity::Critical`]),
/// otherwise the same as [`super::search()`].
pub fn search_from_path(
    path: impl AsRef<Path>,
    term: &str,
    options: &SearchOptions,
) -> UtilResult<Vec<Record>> {
    let path = path.as_ref();
    let ctx = OperationContext::search(term, Some(path));

    let result = fs::read_to_string(path)
        .map_err(UtilError::from)
        .and_then(|text| run_search(&text, term, options));

    report(options, &ctx, &result);
    result.map(|(records, _)| records)
}

fn run_search(
    json_text: &str,
    term: &str,
    options: &SearchOptions,
) -> UtilResult<(Vec<Record>, SearchStats)> {
    let needle = lowered_term(term)?;
    let items = parse_array(json_text)?;
    let scanned = items.len();

    let records = match options.parallel_threshold {
        Some(threshold) if scanned >= threshold && scanned > 0 => {
            filter_parallel(items, &needle, options.num_threads)
        }
        _ => filter_sequential(items, &needle),
    };

    let stats = SearchStats {
        scanned,
        matched: records.len(),
    };
    Ok((records, stats))
}

fn report(
    options: &SearchOptions,
    ctx: &OperationContext,
    result: &UtilResult<(Vec<Record>, SearchStats)>,
) {
    if let Some(obs) = options.observer.as_deref() {
        let outcome = result.as_ref().map(|(_, stats)| Outcome::Searched(*stats));
        report_outcome(obs, ctx, outcome, options.alert_at_or_above);
    }
}

/// Where a [`SearchRequest`] reads its JSON text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSource {
    /// In-memory JSON text.
    Text(String),
    /// A file containing JSON text.
    Path(PathBuf),
}

/// An owned search request.
///
/// Useful when searches are queued or built up before running.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Input to search. A request without a source fails with
    /// [`UtilError::InvalidArgument`].
    pub source: Option<SearchSource>,
    /// Term to look for.
    pub term: String,
    /// Options controlling the search.
    pub options: SearchOptions,
}

impl SearchRequest {
    /// Request a search of in-memory text.
    pub fn text(json_text: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            source: Some(SearchSource::Text(json_text.into())),
            term: term.into(),
            options: SearchOptions::default(),
        }
    }

    /// Request a search of a file.
    pub fn path(path: impl Into<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            source: Some(SearchSource::Path(path.into())),
            term: term.into(),
            options: SearchOptions::default(),
        }
    }

    /// Replace the request options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request.
    pub fn run(&self) -> UtilResult<Vec<Record>> {
        match &self.source {
            Some(SearchSource::Text(text)) => search_with_options(text, &self.term, &self.options),
            Some(SearchSource::Path(path)) => search_from_path(path, &self.term, &self.options),
            None => {
                let err = UtilError::invalid_argument("json_text", "must be a valid JSON string");
                if let Some(obs) = self.options.observer.as_deref() {
                    let ctx = OperationContext::search(&self.term, None);
                    report_outcome(obs, &ctx, Err(&err), self.options.alert_at_or_above);
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run_search, SearchOptions, SearchRequest};
    use crate::error::ErrorKind;

    #[test]
    fn stats_count_scanned_and_matched() {
        let opts = SearchOptions::default();
        let (records, stats) = run_search(r#"[{"a":"x"},{"a":"y"},3]"#, "X", &opts).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(stats.scanned, 3);
        assert_eq!(stats.matched, 1);
    }

    #[test]
    fn parallel_threshold_does_not_change_results() {
        let text = r#"[{"a":"xa"},{"a":"b"},{"a":"ax"}]"#;
        let seq = SearchOptions {
            parallel_threshold: None,
            ..Default::default()
        };
        let par = SearchOptions {
            parallel_threshold: Some(1),
            num_threads: Some(2),
            ..Default::default()
        };
        assert_eq!(
            run_search(text, "x", &seq).unwrap().0,
            run_search(text, "x", &par).unwrap().0
        );
    }

    #[test]
    fn request_without_source_is_invalid_argument() {
        let req = SearchRequest {
            term: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(req.run().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn text_request_runs() {
        let hits = SearchRequest::text(r#"[{"n":"Ada"}]"#, "ad").run().unwrap();
        assert_eq!(hits.len(), 1);
    }
}
