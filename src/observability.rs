//! Outcome reporting for the options-driven entrypoints.
//!
//! [`crate::number::abbreviate()`] and [`crate::search::search()`] never report anything. The
//! `*_with_options` variants (and [`crate::search::search_from_path`]) report every outcome to
//! an optional [`Observer`]:
//!
//! - `on_success` with an [`Outcome`]
//! - `on_failure` with a [`Severity`] computed from the error
//! - `on_alert` when that severity is at or above the configured threshold

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::UtilError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Caller supplied an unusable value (bad number, empty term).
    Warning,
    /// Input data could not be used (malformed or non-array JSON).
    Error,
    /// Infrastructure failure (I/O).
    Critical,
}

/// Which operation produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Abbreviate,
    Search,
}

/// Context about a single operation.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// The operation being reported.
    pub operation: Operation,
    /// Input file, for path-based searches.
    pub path: Option<PathBuf>,
    /// Search term, for searches.
    pub term: Option<String>,
}

impl OperationContext {
    pub(crate) fn abbreviate() -> Self {
        Self {
            operation: Operation::Abbreviate,
            path: None,
            term: None,
        }
    }

    pub(crate) fn search(term: &str, path: Option<&Path>) -> Self {
        Self {
            operation: Operation::Search,
            path: path.map(Path::to_path_buf),
            term: Some(term.to_string()),
        }
    }
}

impl fmt::Display for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op={:?}", self.operation)?;
        if let Some(term) = &self.term {
            write!(f, " term={term:?}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " path={}", path.display())?;
        }
        Ok(())
    }
}

/// Minimal stats reported on a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of array elements examined.
    pub scanned: usize,
    /// Number of records returned.
    pub matched: usize,
}

/// What a successful operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Abbreviated { output: &'a str },
    Searched(SearchStats),
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Abbreviated { output } => write!(f, "output={output}"),
            Outcome::Searched(stats) => {
                write!(f, "scanned={} matched={}", stats.scanned, stats.matched)
            }
        }
    }
}

/// Observer interface for operation outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait Observer: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &OperationContext, _outcome: &Outcome<'_>) {}

    /// Called when an operation fails.
    fn on_failure(&self, _ctx: &OperationContext, _severity: Severity, _error: &UtilError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Severity assigned to each error kind.
pub fn severity_for_error(e: &UtilError) -> Severity {
    match e {
        UtilError::InvalidInput { .. } | UtilError::InvalidArgument { .. } => Severity::Warning,
        UtilError::Parse { .. } => Severity::Error,
        UtilError::Io(_) => Severity::Critical,
    }
}

pub(crate) fn report_outcome(
    observer: &dyn Observer,
    ctx: &OperationContext,
    result: Result<Outcome<'_>, &UtilError>,
    alert_at_or_above: Severity,
) {
    match result {
        Ok(outcome) => observer.on_success(ctx, &outcome),
        Err(e) => {
            let sev = severity_for_error(e);
            observer.on_failure(ctx, sev, e);
            if sev >= alert_at_or_above {
                observer.on_alert(ctx, sev, e);
            }
        }
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn Observer>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn Observer>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl Observer for CompositeObserver {
    fn on_success(&self, ctx: &OperationContext, outcome: &Outcome<'_>) {
        for o in &self.observers {
            o.on_success(ctx, outcome);
        }
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl Observer for StdErrObserver {
    fn on_success(&self, ctx: &OperationContext, outcome: &Outcome<'_>) {
        eprintln!("[record-utils][ok] {ctx} {outcome}");
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        eprintln!("[record-utils][{severity:?}] {ctx} err={error}");
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        eprintln!("[ALERT][record-utils][{severity:?}] {ctx} err={error}");
    }
}

/// Emits events through `tracing` (target `rust_record_utils::observability`).
///
/// Successes are `debug`, warnings `warn`, everything worse `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_success(&self, ctx: &OperationContext, outcome: &Outcome<'_>) {
        tracing::debug!(
            operation = ?ctx.operation,
            term = ctx.term.as_deref(),
            path = ?ctx.path,
            %outcome,
            "operation succeeded"
        );
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        if severity <= Severity::Warning {
            tracing::warn!(
                operation = ?ctx.operation,
                ?severity,
                error = %error,
                "operation failed"
            );
        } else {
            tracing::error!(
                operation = ?ctx.operation,
                path = ?ctx.path,
                ?severity,
                error = %error,
                "operation failed"
            );
        }
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        tracing::error!(
            alert = true,
            operation = ?ctx.operation,
            path = ?ctx.path,
            ?severity,
            error = %error,
            "operation failure reached alert threshold"
        );
    }
}

/// Appends events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl Observer for FileObserver {
    fn on_success(&self, ctx: &OperationContext, outcome: &Outcome<'_>) {
        self.append_line(&format!("{} ok {ctx} {outcome}", unix_ts()));
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        self.append_line(&format!(
            "{} fail severity={severity:?} {ctx} err={error}",
            unix_ts()
        ));
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &UtilError) {
        self.append_line(&format!(
            "{} ALERT severity={severity:?} {ctx} err={error}",
            unix_ts()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
