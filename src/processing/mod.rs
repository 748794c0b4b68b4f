//! Read-only views over a lead list.
//!
//! Currently implemented:
//!
//! - [`filter()`]: search text plus optional niche/stage filters
//! - [`stage_counts()`]: number of leads per pipeline stage
//! - [`format_phone()`] / [`dial_digits()`]: phone display helpers
//!
//! ## Example: filter → count
//!
//! ```rust
//! use lead_intake::collection::LeadCollection;
//! use lead_intake::processing::{filter, stage_counts, LeadFilter};
//! use lead_intake::types::{LeadDraft, Niche, Stage};
//!
//! let mut leads = LeadCollection::default();
//! leads.add(LeadDraft { niche: Niche::Plumbing, ..LeadDraft::new("ABC Plumbing") }).unwrap();
//! leads.add(LeadDraft { stage: Stage::Contacted, ..LeadDraft::new("Cool Air") }).unwrap();
//!
//! let plumbers = filter(leads.leads(), &LeadFilter::default().with_niche(Niche::Plumbing));
//! assert_eq!(plumbers.len(), 1);
//!
//! let counts = stage_counts(leads.leads());
//! assert_eq!(counts[0], (Stage::Cold, 1));
//! assert_eq!(counts[1], (Stage::Contacted, 1));
//! ```

pub mod counts;
pub mod filter;
pub mod phone;

pub use counts::stage_counts;
pub use filter::{filter, LeadFilter};
pub use phone::{dial_digits, format_phone};
