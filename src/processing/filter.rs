//! Lead filtering for list views.

use crate::types::{Lead, Niche, Stage};

/// Search and filter criteria. The default matches every lead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Free-text search. Matches company or owner name case-insensitively, or a raw substring
    /// of the phone number. Empty matches everything.
    pub query: String,
    /// Only leads in this niche, if set.
    pub niche: Option<Niche>,
    /// Only leads in this stage, if set.
    pub stage: Option<Stage>,
}

impl LeadFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_niche(mut self, niche: Niche) -> Self {
        self.niche = Some(niche);
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Returns `true` if `lead` satisfies every criterion.
    pub fn matches(&self, lead: &Lead) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = lead.company_name.to_lowercase().contains(&query)
            || lead.owner_name.to_lowercase().contains(&query)
            || lead.phone.contains(&self.query);

        matches_search
            && self.niche.is_none_or(|n| lead.niche == n)
            && self.stage.is_none_or(|s| lead.stage == s)
    }
}

/// Returns the leads matching `criteria`, in their original order.
pub fn filter<'a>(leads: &'a [Lead], criteria: &LeadFilter) -> Vec<&'a Lead> {
    leads.iter().filter(|l| criteria.matches(l)).collect()
}
