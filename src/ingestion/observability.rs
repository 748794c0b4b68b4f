use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::ImportError;

use super::normalize::SkipReason;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal, e.g. a dropped row).
    Warning,
    /// Error-level event (import failed).
    Error,
    /// Critical error (the source could not be read).
    Critical,
}

/// Where the imported text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// A file on disk.
    Path(PathBuf),
    /// Text handed over directly (e.g. pasted or already read by the caller).
    Inline,
}

impl fmt::Display for ImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportSource::Path(p) => write!(f, "{}", p.display()),
            ImportSource::Inline => f.write_str("<inline>"),
        }
    }
}

/// Context about an import attempt.
#[derive(Debug, Clone)]
pub struct ImportContext {
    /// The source being imported.
    pub source: ImportSource,
}

/// Stats reported on a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Non-blank data lines that were processed.
    pub rows_read: usize,
    /// Leads produced.
    pub records: usize,
    /// Rows dropped (empty company name).
    pub rows_skipped: usize,
}

/// Observer interface for import outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ImportObserver: Send + Sync {
    /// Called when an import produces a preview.
    fn on_success(&self, _ctx: &ImportContext, _stats: ImportStats) {}

    /// Called when an import fails.
    fn on_failure(&self, _ctx: &ImportContext, _severity: ImportSeverity, _error: &ImportError) {}

    /// Called when an import failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.on_failure(ctx, severity, error)
    }

    /// Called for each data row dropped during normalization. `line` is 1-based (header = 1).
    fn on_row_skipped(&self, _ctx: &ImportContext, _line: usize, _reason: &SkipReason) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ImportObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ImportObserver>>) -> Self {
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

impl ImportObserver for CompositeObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }

    fn on_row_skipped(&self, ctx: &ImportContext, line: usize, reason: &SkipReason) {
        for o in &self.observers {
            o.on_row_skipped(ctx, line, reason);
        }
    }
}

/// Forwards import events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ImportObserver for LogObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        log::info!(
            "[import][ok] source={} rows={} leads={} skipped={}",
            ctx.source,
            stats.rows_read,
            stats.records,
            stats.rows_skipped
        );
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        log::warn!(
            "[import][{:?}] source={} err={}",
            severity,
            ctx.source,
            error
        );
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        log::error!(
            "[ALERT][import][{:?}] source={} err={}",
            severity,
            ctx.source,
            error
        );
    }

    fn on_row_skipped(&self, ctx: &ImportContext, line: usize, reason: &SkipReason) {
        log::debug!("[import][skip] source={} line={} reason={}", ctx.source, line, reason);
    }
}

/// Appends import events to a local log file.
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
            let _ = writeln!(f, "{} {line}", Utc::now().to_rfc3339());
        }
    }
}

impl ImportObserver for FileObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        self.append_line(&format!(
            "ok source={} rows={} leads={} skipped={}",
            ctx.source, stats.rows_read, stats.records, stats.rows_skipped
        ));
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.append_line(&format!(
            "fail severity={:?} source={} err={}",
            severity, ctx.source, error
        ));
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.append_line(&format!(
            "ALERT severity={:?} source={} err={}",
            severity, ctx.source, error
        ));
    }

    fn on_row_skipped(&self, ctx: &ImportContext, line: usize, reason: &SkipReason) {
        self.append_line(&format!(
            "skip source={} line={} reason={}",
            ctx.source, line, reason
        ));
    }
}
