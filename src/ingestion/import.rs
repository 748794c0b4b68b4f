//! Import entrypoints.
//!
//! Most callers should use [`import_leads_from_path`] or [`import_leads_from_str`], which run the
//! full pipeline (header resolution, tokenizing, normalization) and return an [`ImportPreview`].
//! Nothing is added to a [`LeadCollection`] until the preview is explicitly committed.
//!
//! If an [`ImportObserver`] is configured in [`ImportOptions`], success/failure/alerts and
//! dropped rows are reported to it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::collection::LeadCollection;
use crate::error::{ImportError, ImportResult};
use crate::types::Lead;

use super::header::resolve_header;
use super::normalize::{normalize_row, SkipReason};
use super::observability::{ImportContext, ImportObserver, ImportSeverity, ImportSource, ImportStats};
use super::tokenizer::tokenize_line;

/// Options controlling import behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ImportOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ImportObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ImportSeverity,
}

impl fmt::Debug for ImportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: ImportSeverity::Critical,
        }
    }
}

/// A data row that did not become a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source (the header is line 1).
    pub line: usize,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

/// The fully computed result of an import, awaiting confirmation.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    leads: Vec<Lead>,
    skipped: Vec<SkippedRow>,
    rows_read: usize,
}

impl ImportPreview {
    /// Parsed leads, in input order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Rows that were dropped, in input order.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Number of leads in the preview (always at least one).
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Always `false`: an import with no leads fails with [`ImportError::EmptyImport`] instead.
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Summary counts for this preview.
    pub fn stats(&self) -> ImportStats {
        ImportStats {
            rows_read: self.rows_read,
            records: self.leads.len(),
            rows_skipped: self.skipped.len(),
        }
    }

    /// Discard the diagnostics and take the leads.
    pub fn into_leads(self) -> Vec<Lead> {
        self.leads
    }

    /// Confirm the import: append every lead to `collection` as one batch.
    ///
    /// Returns the number of leads added. Leads whose id is already in `collection` (e.g. from
    /// committing a clone of this preview earlier) are not added again.
    pub fn commit_into(self, collection: &mut LeadCollection) -> usize {
        collection.append_batch(self.leads)
    }
}

/// Import leads from CSV text already in memory.
///
/// # Errors
///
/// - [`ImportError::MissingRequiredColumn`] if the header has no company name column
/// - [`ImportError::EmptyImport`] if there is no data row or no row has a company name
///
/// # Examples
///
/// ```rust
/// use lead_intake::ingestion::{import_leads_from_str, ImportOptions};
/// use lead_intake::types::{Niche, Stage};
///
/// let text = "Business,Industry,Pipeline\nAcme Heating,heat pumps,Demo Sent\n";
/// let preview = import_leads_from_str(text, &ImportOptions::default()).unwrap();
/// assert_eq!(preview.leads()[0].niche, Niche::Hvac);
/// assert_eq!(preview.leads()[0].stage, Stage::DemoSent);
/// ```
pub fn import_leads_from_str(text: &str, options: &ImportOptions) -> ImportResult<ImportPreview> {
    let ctx = ImportContext {
        source: ImportSource::Inline,
    };
    let result = parse_leads(&ctx, text, options.observer.as_deref());
    report(&ctx, options, &result);
    result
}

/// Read a CSV file and import its leads.
///
/// The file is read in one go; a read failure is reported as
/// [`ImportError::UnreadableSource`] with [`ImportSeverity::Critical`].
///
/// ```no_run
/// use std::sync::Arc;
///
/// use lead_intake::collection::LeadCollection;
/// use lead_intake::ingestion::{import_leads_from_path, ImportOptions, LogObserver};
///
/// # fn main() -> Result<(), lead_intake::ImportError> {
/// let opts = ImportOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let preview = import_leads_from_path("leads.csv", &opts)?;
/// println!("{} leads, {} rows skipped", preview.len(), preview.skipped_rows().len());
///
/// let mut collection = LeadCollection::default();
/// preview.commit_into(&mut collection);
/// # Ok(())
/// # }
/// ```
pub fn import_leads_from_path(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> ImportResult<ImportPreview> {
    let path = path.as_ref();
    let ctx = ImportContext {
        source: ImportSource::Path(path.to_path_buf()),
    };

    let result = fs::read_to_string(path)
        .map_err(ImportError::from)
        .and_then(|text| parse_leads(&ctx, &text, options.observer.as_deref()));
    report(&ctx, options, &result);
    result
}

fn parse_leads(
    ctx: &ImportContext,
    text: &str,
    observer: Option<&dyn ImportObserver>,
) -> ImportResult<ImportPreview> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyImport {
            reason: "the file is empty".to_string(),
        });
    }

    let mut lines = text.lines();
    let header = lines.next().unwrap_or("");
    let columns = resolve_header(header)?;

    if text.lines().count() < 2 {
        return Err(ImportError::EmptyImport {
            reason: "the file has a header but no data rows".to_string(),
        });
    }

    let created_at = Utc::now();
    let mut leads = Vec::new();
    let mut skipped = Vec::new();
    let mut rows_read = 0usize;

    for (idx0, line) in lines.enumerate() {
        // 1-based, plus one for the header line.
        let line_no = idx0 + 2;
        if line.trim().is_empty() {
            continue;
        }
        rows_read += 1;

        let fields = tokenize_line(line);
        match normalize_row(&fields, &columns, created_at) {
            Ok(lead) => leads.push(lead),
            Err(reason) => {
                log::warn!("skipping line {line_no}: {reason}");
                if let Some(obs) = observer {
                    obs.on_row_skipped(ctx, line_no, &reason);
                }
                skipped.push(SkippedRow {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    if leads.is_empty() {
        return Err(ImportError::EmptyImport {
            reason: format!("none of the {rows_read} data rows had a company name"),
        });
    }

    Ok(ImportPreview {
        leads,
        skipped,
        rows_read,
    })
}

fn report(ctx: &ImportContext, options: &ImportOptions, result: &ImportResult<ImportPreview>) {
    if let Some(obs) = options.observer.as_ref() {
        match result {
            Ok(preview) => obs.on_success(ctx, preview.stats()),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }
}

fn severity_for_error(e: &ImportError) -> ImportSeverity {
    match e {
        ImportError::UnreadableSource(_) => ImportSeverity::Critical,
        ImportError::MissingRequiredColumn { .. } => ImportSeverity::Error,
        ImportError::EmptyImport { .. } => ImportSeverity::Error,
        ImportError::Export(_) => ImportSeverity::Error,
    }
}

/// Convenience helper for callers that want an owned request object.
#[derive(Clone)]
pub struct ImportRequest {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Options controlling the import.
    pub options: ImportOptions,
}

impl fmt::Debug for ImportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl ImportRequest {
    /// Execute the request by calling [`import_leads_from_path`].
    pub fn run(&self) -> ImportResult<ImportPreview> {
        import_leads_from_path(&self.path, &self.options)
    }
}
