//! `lead-intake` is the core of a small lead tracker: it turns loosely structured spreadsheet
//! exports into validated [`types::Lead`] records, and keeps those records in an explicit
//! [`collection::LeadCollection`] that is loaded from and saved to a [`collection::LeadStore`].
//!
//! The primary entrypoint is [`ingestion::import_leads_from_path`] (or
//! [`ingestion::import_leads_from_str`] for text already in memory). It returns an
//! [`ingestion::ImportPreview`]; nothing is added to a collection until the preview is
//! committed.
//!
//! ## What the importer accepts
//!
//! - UTF-8 text, comma separated, first line is the header.
//! - Any column order and naming: headers are classified by keyword (`"Company Name"`,
//!   `"Business"`, `"Mobile"`, `"Industry"`, `"Pipeline"`, ...). Only a company name column is
//!   required.
//! - Loose quoting: `"` and `'` both toggle a quoted run and unterminated quotes are tolerated
//!   (see [`ingestion::tokenizer`]).
//! - Free-form categorical values: `"heat pumps"` becomes [`types::Niche::Hvac`], `"simple wix
//!   site"` becomes [`types::WebsiteStatus::Basic`], `"Demo Sent"` becomes
//!   [`types::Stage::DemoSent`]. Unrecognized values fall back to defaults.
//!
//! Rows with an empty company name are dropped and reported in
//! [`ingestion::ImportPreview::skipped_rows`]. The import as a whole only fails when the header
//! has no company column ([`ImportError::MissingRequiredColumn`]), when no lead survives
//! ([`ImportError::EmptyImport`]), or when the file cannot be read
//! ([`ImportError::UnreadableSource`]).
//!
//! ## Quick example: import and commit
//!
//! ```rust
//! use lead_intake::collection::{LeadCollection, LeadStore, MemoryStore};
//! use lead_intake::ingestion::{import_leads_from_str, ImportOptions};
//! use lead_intake::types::{Niche, Stage};
//!
//! let text = "\
//! Company Name,Owner Name,Phone,Niche,Website Status,Notes,Stage
//! ABC Plumbing,John Smith,5551234567,Plumbing,Basic,Called last week,cold
//! Cool Air HVAC,Jane Doe,5559876543,HVAC,None,Interested in demo,contacted
//! ";
//!
//! let store = MemoryStore::default();
//! let mut leads = LeadCollection::load(&store).unwrap();
//!
//! let preview = import_leads_from_str(text, &ImportOptions::default()).unwrap();
//! assert_eq!(preview.leads()[0].niche, Niche::Plumbing);
//! assert_eq!(preview.leads()[1].stage, Stage::Contacted);
//!
//! preview.commit_into(&mut leads);
//! leads.save(&store).unwrap();
//! assert_eq!(store.load_all().unwrap().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: header resolution, tokenizer, normalization, import entrypoints, template
//! - [`types`]: lead model and closed enums
//! - [`collection`]: explicit lead collection plus load-all/save-all stores
//! - [`processing`]: filtering, per-stage counts, phone display helpers
//! - [`error`]: error types

pub mod collection;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{CollectionError, CollectionResult, ImportError, ImportResult};
