//! Per-field canonicalization of tokenized rows into [`Lead`]s.
//!
//! Rows are never rejected for bad categorical values; those fall back to defaults. The only
//! row-level rejection is an empty company name, which drops the row.

use chrono::{DateTime, Utc};

use crate::types::{ColumnMap, Lead, LeadDraft, LeadField, Niche, Stage, WebsiteStatus};

/// Map a free-form niche value onto a [`Niche`].
///
/// Keyword checks run on the uppercased value; anything unrecognized becomes HVAC.
pub fn normalize_niche(raw: &str) -> Niche {
    let upper = raw.to_uppercase();
    if ["HVAC", "HEAT", "AIR", "AC"].iter().any(|k| upper.contains(k)) {
        Niche::Hvac
    } else if upper.contains("PLUMB") {
        Niche::Plumbing
    } else {
        Niche::from_canonical(raw).unwrap_or(Niche::Hvac)
    }
}

/// Map a free-form website status onto a [`WebsiteStatus`].
pub fn normalize_website_status(raw: &str) -> WebsiteStatus {
    if let Some(status) = WebsiteStatus::from_canonical(raw) {
        return status;
    }

    let lower = raw.to_lowercase();
    if lower.is_empty() || lower.contains("none") {
        WebsiteStatus::None
    } else if lower.contains("basic") || lower.contains("simple") {
        WebsiteStatus::Basic
    } else if lower.contains("pro") || lower.contains("good") {
        WebsiteStatus::Professional
    } else {
        WebsiteStatus::Unknown
    }
}

/// Map a stage identifier or label (any case) onto a [`Stage`]; unmatched input is the initial
/// stage.
pub fn normalize_stage(raw: &str) -> Stage {
    let lower = raw.to_lowercase();
    Stage::ALL
        .into_iter()
        .find(|s| s.id() == lower || s.label().to_lowercase() == lower)
        .unwrap_or_else(Stage::initial)
}

/// Why a data row did not become a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The company name cell was missing or empty.
    MissingCompanyName,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingCompanyName => f.write_str("empty company name"),
        }
    }
}

/// Canonicalize one tokenized row into a draft.
///
/// Missing columns read as empty strings.
pub fn normalize_fields(fields: &[String], columns: &ColumnMap) -> Result<LeadDraft, SkipReason> {
    let cell = |field: LeadField| cell_value(fields, columns, field);

    let company_name = cell(LeadField::CompanyName);
    if company_name.is_empty() {
        return Err(SkipReason::MissingCompanyName);
    }

    Ok(LeadDraft {
        company_name: company_name.to_string(),
        owner_name: cell(LeadField::OwnerName).to_string(),
        phone: cell(LeadField::Phone).to_string(),
        niche: normalize_niche(cell(LeadField::Niche)),
        website_status: normalize_website_status(cell(LeadField::WebsiteStatus)),
        notes: cell(LeadField::Notes).to_string(),
        stage: normalize_stage(cell(LeadField::Stage)),
    })
}

fn cell_value<'a>(fields: &'a [String], columns: &ColumnMap, field: LeadField) -> &'a str {
    columns
        .get(field)
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

/// Canonicalize one tokenized row into a fresh [`Lead`] created at `created_at`.
pub fn normalize_row(
    fields: &[String],
    columns: &ColumnMap,
    created_at: DateTime<Utc>,
) -> Result<Lead, SkipReason> {
    normalize_fields(fields, columns).map(|draft| Lead::from_draft(draft, created_at))
}
