//! The in-memory lead collection and its persistence.
//!
//! [`LeadCollection`] is an explicit value: callers load it from a [`LeadStore`], mutate it, and
//! save it back as a whole. There is no shared global state.

pub mod store;

use std::collections::HashSet;

use chrono::Utc;

use crate::error::{CollectionError, CollectionResult};
use crate::types::{Lead, LeadDraft, Stage};

pub use store::{JsonFileStore, LeadStore, MemoryStore};

/// Ordered collection of leads with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCollection {
    leads: Vec<Lead>,
}

impl LeadCollection {
    /// Wrap an existing list of leads (e.g. from [`LeadStore::load_all`]).
    ///
    /// Only the first lead with a given id is kept.
    pub fn new(leads: Vec<Lead>) -> Self {
        let mut collection = Self::default();
        collection.append_batch(leads);
        collection
    }

    /// Load the full collection from `store`.
    pub fn load(store: &dyn LeadStore) -> CollectionResult<Self> {
        store.load_all().map(Self::new)
    }

    /// Replace the stored collection with this one.
    pub fn save(&self, store: &dyn LeadStore) -> CollectionResult<()> {
        store.save_all(&self.leads)
    }

    /// All leads, in collection order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Look up a lead by id.
    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Create a lead from `draft` and put it at the front (newest first).
    ///
    /// The company name is trimmed; a blank one is rejected.
    pub fn add(&mut self, mut draft: LeadDraft) -> CollectionResult<&Lead> {
        draft.company_name = validated_company_name(&draft.company_name)?;
        let lead = Lead::from_draft(draft, Utc::now());
        self.leads.insert(0, lead);
        Ok(&self.leads[0])
    }

    /// Replace the editable fields of lead `id`. Its id and creation time are kept.
    pub fn edit(&mut self, id: &str, mut draft: LeadDraft) -> CollectionResult<&Lead> {
        draft.company_name = validated_company_name(&draft.company_name)?;
        let lead = self.get_mut(id)?;
        lead.company_name = draft.company_name;
        lead.owner_name = draft.owner_name;
        lead.phone = draft.phone;
        lead.niche = draft.niche;
        lead.website_status = draft.website_status;
        lead.notes = draft.notes;
        lead.stage = draft.stage;
        Ok(&*lead)
    }

    /// Move lead `id` to `stage`. Any stage can be reached from any other.
    pub fn set_stage(&mut self, id: &str, stage: Stage) -> CollectionResult<()> {
        self.get_mut(id)?.stage = stage;
        Ok(())
    }

    /// Delete lead `id`, returning it.
    pub fn remove(&mut self, id: &str) -> CollectionResult<Lead> {
        let pos = self
            .leads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| CollectionError::UnknownLead { id: id.to_string() })?;
        Ok(self.leads.remove(pos))
    }

    /// Append a batch of already-validated leads at the end, in order.
    ///
    /// Leads whose id is already present (in the collection or earlier in the batch) are
    /// ignored, so ids stay unique. Returns the number of leads actually added.
    pub fn append_batch(&mut self, batch: Vec<Lead>) -> usize {
        let mut seen: HashSet<String> = self.leads.iter().map(|l| l.id.clone()).collect();
        let before = self.leads.len();
        for lead in batch {
            if !seen.insert(lead.id.clone()) {
                log::warn!("ignoring lead with duplicate id '{}'", lead.id);
                continue;
            }
            self.leads.push(lead);
        }
        self.leads.len() - before
    }

    fn get_mut(&mut self, id: &str) -> CollectionResult<&mut Lead> {
        self.leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| CollectionError::UnknownLead { id: id.to_string() })
    }
}

fn validated_company_name(raw: &str) -> CollectionResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CollectionError::MissingCompanyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::LeadCollection;
    use crate::error::CollectionError;
    use crate::types::{LeadDraft, Niche, Stage};

    #[test]
    fn add_puts_newest_first() {
        let mut c = LeadCollection::default();
        c.add(LeadDraft::new("First")).unwrap();
        c.add(LeadDraft::new("Second")).unwrap();
        assert_eq!(c.leads()[0].company_name, "Second");
        assert_eq!(c.leads()[1].company_name, "First");
    }

    #[test]
    fn add_rejects_blank_company_name() {
        let mut c = LeadCollection::default();
        let err = c.add(LeadDraft::new("   ")).unwrap_err();
        assert!(matches!(err, CollectionError::MissingCompanyName));
        assert!(c.is_empty());
    }

    #[test]
    fn edit_keeps_id_and_created_at() {
        let mut c = LeadCollection::default();
        let (id, created_at) = {
            let lead = c.add(LeadDraft::new("Acme")).unwrap();
            (lead.id.clone(), lead.created_at)
        };

        let mut draft = c.get(&id).unwrap().to_draft();
        draft.company_name = "Acme Heating".to_string();
        draft.niche = Niche::Plumbing;
        let edited = c.edit(&id, draft).unwrap();

        assert_eq!(edited.id, id);
        assert_eq!(edited.created_at, created_at);
        assert_eq!(edited.company_name, "Acme Heating");
        assert_eq!(edited.niche, Niche::Plumbing);
    }

    #[test]
    fn edit_rejects_blank_company_name() {
        let mut c = LeadCollection::default();
        let id = c.add(LeadDraft::new("Acme")).unwrap().id.clone();
        assert!(c.edit(&id, LeadDraft::new("")).is_err());
        assert_eq!(c.get(&id).unwrap().company_name, "Acme");
    }

    #[test]
    fn set_stage_and_remove() {
        let mut c = LeadCollection::default();
        let id = c.add(LeadDraft::new("Acme")).unwrap().id.clone();

        c.set_stage(&id, Stage::Lost).unwrap();
        assert_eq!(c.get(&id).unwrap().stage, Stage::Lost);

        let removed = c.remove(&id).unwrap();
        assert_eq!(removed.company_name, "Acme");
        assert!(c.is_empty());
        assert!(matches!(
            c.remove(&id),
            Err(CollectionError::UnknownLead { .. })
        ));
    }

    #[test]
    fn append_batch_preserves_order_and_skips_duplicate_ids() {
        let mut c = LeadCollection::default();
        let existing = c.add(LeadDraft::new("Existing")).unwrap().clone();

        let mut other = LeadCollection::default();
        other.add(LeadDraft::new("B")).unwrap();
        other.add(LeadDraft::new("A")).unwrap();
        let mut batch = other.leads().to_vec();
        batch.push(existing);

        assert_eq!(c.append_batch(batch), 2);
        let names: Vec<&str> = c.leads().iter().map(|l| l.company_name.as_str()).collect();
        assert_eq!(names, vec!["Existing", "A", "B"]);
    }

    #[test]
    fn append_batch_skips_duplicates_within_the_batch() {
        let mut other = LeadCollection::default();
        let lead = other.add(LeadDraft::new("Twice")).unwrap().clone();

        let mut c = LeadCollection::default();
        assert_eq!(c.append_batch(vec![lead.clone(), lead]), 1);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn new_keeps_first_lead_per_id() {
        let mut other = LeadCollection::default();
        let first = other.add(LeadDraft::new("Original")).unwrap().clone();
        let mut copy = first.clone();
        copy.company_name = "Stale Copy".to_string();

        let c = LeadCollection::new(vec![first.clone(), copy]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(&first.id).unwrap().company_name, "Original");
    }
}
