use std::sync::{Arc, Mutex};

use rust_record_utils::number::{abbreviate_with_options, AbbreviateOptions};
use rust_record_utils::observability::{
    CompositeObserver, Observer, Operation, OperationContext, Outcome, Severity, TracingObserver,
};
use rust_record_utils::search::{search_from_path, search_with_options, SearchOptions};
use rust_record_utils::UtilError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<String>>,
    failures: Mutex<Vec<(Operation, Severity)>>,
    alerts: Mutex<Vec<Severity>>,
}

impl Observer for RecordingObserver {
    fn on_success(&self, _ctx: &OperationContext, outcome: &Outcome<'_>) {
        self.successes.lock().unwrap().push(outcome.to_string());
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, _error: &UtilError) {
        self.failures.lock().unwrap().push((ctx.operation, severity));
    }

    fn on_alert(&self, _ctx: &OperationContext, severity: Severity, _error: &UtilError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn search_opts(obs: Arc<RecordingObserver>, alert_at_or_above: Severity) -> SearchOptions {
    SearchOptions {
        observer: Some(obs),
        alert_at_or_above,
        ..Default::default()
    }
}

#[test]
fn observer_receives_search_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = search_opts(obs.clone(), Severity::Critical);

    let text = r#"[{"n":"Ada"},{"n":"Grace"},{"n":"adam"}]"#;
    let hits = search_with_options(text, "ADA", &opts).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(*obs.successes.lock().unwrap(), vec!["scanned=3 matched=2"]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn missing_file_is_critical_and_alerts() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = search_opts(obs.clone(), Severity::Critical);

    let _ = search_from_path("tests/fixtures/does_not_exist.json", "x", &opts).unwrap_err();

    assert_eq!(
        *obs.failures.lock().unwrap(),
        vec![(Operation::Search, Severity::Critical)]
    );
    assert_eq!(*obs.alerts.lock().unwrap(), vec![Severity::Critical]);
}

#[test]
fn parse_failure_is_error_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = search_opts(obs.clone(), Severity::Critical);

    let _ = search_with_options("not json", "x", &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![(Operation::Search, Severity::Error)]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn abbreviation_outcomes_are_reported() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = AbbreviateOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Warning,
    };

    assert_eq!(abbreviate_with_options(1_500_000, &opts).unwrap(), "1.5M");
    let _ = abbreviate_with_options("nope", &opts).unwrap_err();

    assert_eq!(*obs.successes.lock().unwrap(), vec!["output=1.5M"]);
    assert_eq!(
        *obs.failures.lock().unwrap(),
        vec![(Operation::Abbreviate, Severity::Warning)]
    );
    assert_eq!(*obs.alerts.lock().unwrap(), vec![Severity::Warning]);
}

#[test]
fn composite_with_tracing_observer_does_not_change_results() {
    let recording = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        recording.clone() as Arc<dyn Observer>,
        Arc::new(TracingObserver),
    ]);
    let opts = SearchOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    let hits = search_with_options(r#"[{"n":"x"}]"#, "x", &opts).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(recording.successes.lock().unwrap().len(), 1);
}
