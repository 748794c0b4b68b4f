//! Core data model types.
//!
//! A [`Lead`] is the only persisted entity. Its categorical fields are closed enums
//! ([`Niche`], [`WebsiteStatus`], [`Stage`]), so a normalized lead can never carry an arbitrary
//! string in those slots.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business category a lead belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Niche {
    /// Heating, ventilation and air conditioning.
    #[default]
    #[serde(rename = "HVAC")]
    Hvac,
    /// Plumbing.
    Plumbing,
}

impl Niche {
    /// All niches, in display order.
    pub const ALL: [Niche; 2] = [Niche::Hvac, Niche::Plumbing];

    /// Canonical display name (also the serialized form).
    pub fn as_str(self) -> &'static str {
        match self {
            Niche::Hvac => "HVAC",
            Niche::Plumbing => "Plumbing",
        }
    }

    /// Returns the niche whose canonical name is exactly `s` (case-sensitive).
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == s)
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative assessment of a lead's web presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WebsiteStatus {
    /// No website at all.
    None,
    /// A basic/simple site.
    Basic,
    /// A professional site.
    Professional,
    /// Not assessed yet.
    #[default]
    Unknown,
}

impl WebsiteStatus {
    /// All statuses, in display order.
    pub const ALL: [WebsiteStatus; 4] = [
        WebsiteStatus::None,
        WebsiteStatus::Basic,
        WebsiteStatus::Professional,
        WebsiteStatus::Unknown,
    ];

    /// Canonical display name (also the serialized form).
    pub fn as_str(self) -> &'static str {
        match self {
            WebsiteStatus::None => "None",
            WebsiteStatus::Basic => "Basic",
            WebsiteStatus::Professional => "Professional",
            WebsiteStatus::Unknown => "Unknown",
        }
    }

    /// Returns the status whose canonical name is exactly `s` (case-sensitive).
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == s)
    }
}

impl fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a lead in the sales pipeline.
///
/// Variants are declared in pipeline order; [`Stage::Lost`] is terminal and reachable from any
/// other stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Cold,
    Contacted,
    DemoSent,
    Closed,
    Lost,
}

impl Stage {
    /// All stages, in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::Cold,
        Stage::Contacted,
        Stage::DemoSent,
        Stage::Closed,
        Stage::Lost,
    ];

    /// Stable identifier (also the serialized form).
    pub fn id(self) -> &'static str {
        match self {
            Stage::Cold => "cold",
            Stage::Contacted => "contacted",
            Stage::DemoSent => "demo_sent",
            Stage::Closed => "closed",
            Stage::Lost => "lost",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Cold => "Cold",
            Stage::Contacted => "Contacted",
            Stage::DemoSent => "Demo Sent",
            Stage::Closed => "Closed",
            Stage::Lost => "Lost",
        }
    }

    /// The stage every new lead starts in.
    pub fn initial() -> Self {
        Stage::Cold
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The editable part of a lead, used for manual entry and edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub company_name: String,
    pub owner_name: String,
    pub phone: String,
    pub niche: Niche,
    pub website_status: WebsiteStatus,
    pub notes: String,
    pub stage: Stage,
}

impl LeadDraft {
    /// Create a draft with the given company name and default values everywhere else.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

/// A single prospective-customer contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Never empty for a stored lead.
    pub company_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub niche: Niche,
    #[serde(default)]
    pub website_status: WebsiteStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub stage: Stage,
    /// Creation timestamp, set once.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Build a lead from a draft, assigning a fresh id.
    ///
    /// Callers are responsible for rejecting drafts with an empty company name.
    pub fn from_draft(draft: LeadDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: generate_lead_id(),
            company_name: draft.company_name,
            owner_name: draft.owner_name,
            phone: draft.phone,
            niche: draft.niche,
            website_status: draft.website_status,
            notes: draft.notes,
            stage: draft.stage,
            created_at,
        }
    }

    /// Copy of the editable fields.
    pub fn to_draft(&self) -> LeadDraft {
        LeadDraft {
            company_name: self.company_name.clone(),
            owner_name: self.owner_name.clone(),
            phone: self.phone.clone(),
            niche: self.niche,
            website_status: self.website_status,
            notes: self.notes.clone(),
            stage: self.stage,
        }
    }
}

/// Generate a new lead id: creation time in milliseconds plus a random v4 uuid suffix.
pub fn generate_lead_id() -> String {
    format!(
        "lead_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Logical lead fields a CSV column can be mapped to.
///
/// Declaration order is the header classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    CompanyName,
    OwnerName,
    Phone,
    Niche,
    WebsiteStatus,
    Notes,
    Stage,
}

impl LeadField {
    /// All fields, in classification priority order.
    pub const ALL: [LeadField; 7] = [
        LeadField::CompanyName,
        LeadField::OwnerName,
        LeadField::Phone,
        LeadField::Niche,
        LeadField::WebsiteStatus,
        LeadField::Notes,
        LeadField::Stage,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadField::CompanyName => "companyName",
            LeadField::OwnerName => "ownerName",
            LeadField::Phone => "phone",
            LeadField::Niche => "niche",
            LeadField::WebsiteStatus => "websiteStatus",
            LeadField::Notes => "notes",
            LeadField::Stage => "stage",
        };
        f.write_str(name)
    }
}

/// Mapping from logical [`LeadField`] to CSV column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    slots: [Option<usize>; 7],
}

impl ColumnMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `field` to column `idx`, replacing any earlier mapping for that field.
    pub fn set(&mut self, field: LeadField, idx: usize) {
        self.slots[field.slot()] = Some(idx);
    }

    /// Column index for `field`, if one was resolved.
    pub fn get(&self, field: LeadField) -> Option<usize> {
        self.slots[field.slot()]
    }

    /// Iterate resolved `(field, column)` pairs in field priority order.
    pub fn iter(&self) -> impl Iterator<Item = (LeadField, usize)> + '_ {
        LeadField::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|idx| (f, idx)))
    }
}
