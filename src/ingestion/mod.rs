//! CSV import pipeline.
//!
//! Most callers should use [`import_leads_from_path`] or [`import_leads_from_str`] (from
//! [`import`]) which:
//!
//! - resolve the header line into a column map ([`header`])
//! - split each data line with a permissive quote-aware tokenizer ([`tokenizer`])
//! - canonicalize every row into a [`crate::types::Lead`] ([`normalize`])
//! - optionally report success/failure/alerts to an [`ImportObserver`]
//!
//! The result is an [`ImportPreview`]; nothing is persisted until it is committed.

pub mod header;
pub mod import;
pub mod normalize;
pub mod observability;
pub mod template;
pub mod tokenizer;

pub use import::{
    import_leads_from_path, import_leads_from_str, ImportOptions, ImportPreview, ImportRequest,
    SkippedRow,
};
pub use normalize::SkipReason;
pub use observability::{
    CompositeObserver, FileObserver, ImportContext, ImportObserver, ImportSeverity, ImportSource,
    ImportStats, LogObserver,
};
pub use template::{export_leads_csv, TEMPLATE_CSV, TEMPLATE_HEADERS};
