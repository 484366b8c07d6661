use super::{keywords::is_massive, scoring::ScoredPair};
use crate::{Institution, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Minimum outgoing edges per institution (or every pair when fewer employers exist).
    pub min_matches: usize,
    /// Acceptance threshold for R1 or >25,000-student institutions.
    pub massive_threshold: u8,
    pub standard_threshold: u8,
    /// Fallback matches scoring below this get the exploratory narrative.
    pub exploratory_narrative_below: u8,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_matches: 8,
            massive_threshold: 75,
            standard_threshold: 60,
            exploratory_narrative_below: 65,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPair {
    pub pair: ScoredPair,
    pub selection: Selection,
}

impl SelectedPair {
    pub fn needs_exploratory_narrative(&self, policy: &SelectionPolicy) -> bool {
        self.selection == Selection::Fallback
            && self.pair.total < policy.exploratory_narrative_below
    }
}

impl SelectionPolicy {
    pub fn threshold_for(&self, institution: &Institution) -> u8 {
        if is_massive(institution) {
            self.massive_threshold
        } else {
            self.standard_threshold
        }
    }

    /// Ranks one institution's candidates and applies threshold + fallback.
    ///
    /// Sorting is stable, so equal totals keep the employer input order.
    pub fn select(
        &self,
        institution: &Institution,
        mut candidates: Vec<ScoredPair>,
    ) -> Vec<SelectedPair> {
        candidates.sort_by(|a, b| b.total.cmp(&a.total));

        let threshold = self.threshold_for(institution);
        let accepted = candidates.iter().filter(|c| c.total >= threshold).count();

        let keep = if accepted >= self.min_matches {
            accepted
        } else {
            self.min_matches.min(candidates.len())
        };
        candidates.truncate(keep);

        let selected: Vec<_> = candidates
            .into_iter()
            .map(|pair| {
                let selection = if pair.total >= threshold {
                    Selection::Organic
                } else {
                    Selection::Fallback
                };
                SelectedPair { pair, selection }
            })
            .collect();

        tracing::debug!(
            institution_id = %institution.id,
            threshold,
            accepted,
            kept = selected.len(),
            fallback = accepted < self.min_matches,
            "applied selection policy"
        );

        selected
    }
}
