//! Header resolution: map free-form CSV column names onto [`LeadField`]s.
//!
//! Each header token is trimmed, lowercased and stripped of surrounding quotes, then tested
//! against the keyword table below, top to bottom. The first matching row classifies the token.
//! If two columns classify as the same field, the later column wins.
//!
//! | field           | token matches if it                                   |
//! |-----------------|-------------------------------------------------------|
//! | `companyName`   | contains `company`, equals `name`, or contains `business` |
//! | `ownerName`     | contains `owner` or `contact`, or equals `person`     |
//! | `phone`         | contains `phone`, `tel` or `mobile`                   |
//! | `niche`         | contains `niche`, `industry`, `type` or `category`    |
//! | `websiteStatus` | contains `website`, `web`, `site` or `status`         |
//! | `notes`         | contains `note`, `comment` or `description`           |
//! | `stage`         | contains `stage` or `pipeline`                        |
//!
//! The order of this table is part of the contract: `"Business Type"` is a company column, not a
//! niche column, because the company row is tested first.

use crate::error::{ImportError, ImportResult};
use crate::types::{ColumnMap, LeadField};

/// Classify a single normalized (trimmed, lowercased, unquoted) header token.
pub fn classify_header(token: &str) -> Option<LeadField> {
    let has = |needle: &str| token.contains(needle);

    if has("company") || token == "name" || has("business") {
        Some(LeadField::CompanyName)
    } else if has("owner") || has("contact") || token == "person" {
        Some(LeadField::OwnerName)
    } else if has("phone") || has("tel") || has("mobile") {
        Some(LeadField::Phone)
    } else if has("niche") || has("industry") || has("type") || has("category") {
        Some(LeadField::Niche)
    } else if has("website") || has("web") || has("site") || has("status") {
        Some(LeadField::WebsiteStatus)
    } else if has("note") || has("comment") || has("description") {
        Some(LeadField::Notes)
    } else if has("stage") || has("pipeline") {
        Some(LeadField::Stage)
    } else {
        None
    }
}

/// Normalize a raw header cell: trim, lowercase and strip surrounding quotes.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// Resolve the header line into a [`ColumnMap`].
///
/// Header lines are assumed unquoted and are split on every comma.
///
/// # Errors
///
/// Returns [`ImportError::MissingRequiredColumn`] if no column resolves to the company name.
pub fn resolve_header(line: &str) -> ImportResult<ColumnMap> {
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let tokens: Vec<String> = line.split(',').map(normalize_header).collect();

    let mut map = ColumnMap::new();
    for (idx, token) in tokens.iter().enumerate() {
        if let Some(field) = classify_header(token) {
            map.set(field, idx);
        }
    }

    if map.get(LeadField::CompanyName).is_none() {
        return Err(ImportError::MissingRequiredColumn { headers: tokens });
    }

    log::debug!(
        "resolved header columns: {}",
        map.iter()
            .map(|(field, idx)| format!("{field}={idx}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(map)
}
