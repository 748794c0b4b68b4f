//! Per-stage lead counts for the pipeline summary.

use crate::types::{Lead, Stage};

/// Count leads per stage.
///
/// Always returns every stage, in pipeline order, including stages with zero leads.
pub fn stage_counts(leads: &[Lead]) -> Vec<(Stage, usize)> {
    Stage::ALL
        .into_iter()
        .map(|stage| (stage, leads.iter().filter(|l| l.stage == stage).count()))
        .collect()
}
