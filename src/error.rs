use thiserror::Error;

/// Convenience result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience result type for lead collection and store operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Error type returned by the CSV import pipeline.
///
/// Every variant is fatal to the import it came from. Per-row problems (empty company name,
/// unrecognized enum values) are never reported here; they are dropped or defaulted instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The header line has no column that resolves to the company name.
    #[error("missing required column: no company name column found. headers={headers:?}")]
    MissingRequiredColumn { headers: Vec<String> },

    /// Nothing usable was found in the input.
    #[error("no leads to import: {reason}")]
    EmptyImport { reason: String },

    /// The source could not be read at all.
    #[error("failed to read import source: {0}")]
    UnreadableSource(#[from] std::io::Error),

    /// Writing the template/export CSV failed.
    #[error("csv export error: {0}")]
    Export(#[from] csv::Error),
}

/// Error type returned by [`crate::collection::LeadCollection`] and the lead stores.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A lead must always carry a non-empty company name.
    #[error("company name is required")]
    MissingCompanyName,

    /// No lead with the given id exists in the collection.
    #[error("unknown lead id '{id}'")]
    UnknownLead { id: String },

    /// Underlying I/O error while loading or saving the collection.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored collection could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
