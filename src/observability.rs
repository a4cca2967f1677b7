//! Observer hooks for path-level reads and writes.
//!
//! [`crate::ingestion::read_from_path`] and [`crate::output::write_to_path`] report every outcome
//! to the observer configured in [`crate::options::ArffOptions`], if any.

use std::path::PathBuf;

use crate::error::{ArffError, ArffResult};
use crate::options::{ArffFormat, ArffOptions};

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Direction of a path-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Parsing a file into a dataset.
    Read,
    /// Serializing a dataset to a file.
    Write,
}

/// Context about a read or write attempt.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// The file path involved.
    pub path: PathBuf,
    /// Encoding used.
    pub format: ArffFormat,
    /// Read or write.
    pub operation: Operation,
}

/// Minimal stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    /// Number of data rows.
    pub rows: usize,
    /// Number of declared attributes.
    pub attributes: usize,
}

/// Observer interface for read/write outcomes.
///
/// [`TracingObserver`] is the stock implementation; anything else (metrics, alert hooks) is left
/// to callers.
pub trait ArffObserver: Send + Sync {
    /// Called when the operation succeeds.
    fn on_success(&self, _ctx: &OperationContext, _stats: OperationStats) {}

    /// Called when the operation fails.
    fn on_failure(&self, _ctx: &OperationContext, _severity: Severity, _error: &ArffError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &ArffError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards events to `tracing` (info on success, warn/error on failure).
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ArffObserver for TracingObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        tracing::info!(
            operation = ?ctx.operation,
            format = ?ctx.format,
            path = %ctx.path.display(),
            attributes = stats.attributes,
            rows = stats.rows,
            "arff operation succeeded"
        );
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &ArffError) {
        tracing::warn!(
            operation = ?ctx.operation,
            format = ?ctx.format,
            path = %ctx.path.display(),
            ?severity,
            %error,
            "arff operation failed"
        );
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &ArffError) {
        tracing::error!(
            operation = ?ctx.operation,
            format = ?ctx.format,
            path = %ctx.path.display(),
            ?severity,
            %error,
            "arff alert"
        );
    }
}

/// I/O problems are critical; anything about the content of the relation is an error.
pub fn severity_for_error(e: &ArffError) -> Severity {
    match e {
        ArffError::Io(_) => Severity::Critical,
        ArffError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        ArffError::UnknownFormat { .. }
        | ArffError::UnsupportedDeclaration { .. }
        | ArffError::MissingDataSection
        | ArffError::TruncatedRow { .. }
        | ArffError::Validation(_) => Severity::Error,
    }
}

/// Report `result` to the observer configured in `options`, if any.
pub(crate) fn report<T>(
    options: &ArffOptions,
    ctx: &OperationContext,
    result: &ArffResult<T>,
    stats: impl FnOnce(&T) -> OperationStats,
) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(value) => obs.on_success(ctx, stats(value)),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}
