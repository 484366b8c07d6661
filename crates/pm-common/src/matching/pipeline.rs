use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    config::MatchingConfig,
    narrative::{exploratory_reasoning, organic_reasoning},
    noise::{NoiseSource, RandomNoise},
    pathway::PathwayCategory,
    scoring::{PairScorer, ScoredPair},
    selection::SelectedPair,
};
use crate::{Employer, Institution, Match, Selection, match_id};

impl Match {
    /// Edge that stands on its own score.
    pub fn organic(
        pair: &ScoredPair,
        institution: &Institution,
        employer: &Employer,
        pathway: &str,
    ) -> Self {
        Self::assemble(
            pair,
            organic_reasoning(institution, employer, &pair.overlap.matched_majors),
            pathway,
            Selection::Organic,
        )
    }

    /// Edge kept for minimum connectivity. `exploratory` selects the stretch
    /// narrative; the score is carried over untouched either way.
    pub fn fallback(
        pair: &ScoredPair,
        institution: &Institution,
        employer: &Employer,
        pathway: &str,
        exploratory: bool,
    ) -> Self {
        let reasoning = if exploratory {
            exploratory_reasoning(institution, employer)
        } else {
            organic_reasoning(institution, employer, &pair.overlap.matched_majors)
        };
        Self::assemble(pair, reasoning, pathway, Selection::Fallback)
    }

    fn assemble(
        pair: &ScoredPair,
        ai_reasoning: String,
        pathway: &str,
        selection: Selection,
    ) -> Self {
        Self {
            id: match_id(&pair.institution_id, &pair.employer_id),
            source_id: pair.institution_id.clone(),
            target_id: pair.employer_id.clone(),
            match_strength_score: pair.total,
            score_breakdown: pair.breakdown(),
            ai_reasoning,
            recommended_pathway: pathway.to_string(),
            selection,
        }
    }
}

/// Scores institution × employer pairs and applies the per-institution selection policy.
pub struct InsightEngine<N> {
    config: MatchingConfig,
    scorer: PairScorer,
    noise: N,
}

impl InsightEngine<RandomNoise<StdRng>> {
    pub fn with_entropy(config: MatchingConfig) -> Self {
        Self::new(config, RandomNoise::from_entropy())
    }

    pub fn seeded(config: MatchingConfig, seed: u64) -> Self {
        Self::new(config, RandomNoise::seeded(seed))
    }
}

impl<N: NoiseSource> InsightEngine<N> {
    pub fn new(config: MatchingConfig, noise: N) -> Self {
        Self {
            scorer: PairScorer::new(config.bonuses),
            config,
            noise,
        }
    }

    /// Full run: every institution gets its threshold-accepted edges, or its
    /// top `min_matches` edges when too few pass.
    ///
    /// Output is grouped by institution in input order, each group sorted by
    /// descending score. Inputs are not modified.
    pub fn compute_matches(
        &mut self,
        institutions: &[Institution],
        employers: &[Employer],
    ) -> Vec<Match> {
        info!(
            institutions = institutions.len(),
            employers = employers.len(),
            "computing partnership matches"
        );

        if institutions.is_empty() || employers.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut fallback_count = 0usize;

        for institution in institutions {
            // phase 1: immutable candidates
            let candidates: Vec<ScoredPair> = employers
                .iter()
                .enumerate()
                .map(|(employer_index, employer)| ScoredPair {
                    employer_index,
                    ..self.scorer.score(institution, employer, &mut self.noise)
                })
                .collect();

            // phase 2: selection and construction
            let selected = self.config.selection.select(institution, candidates);
            for entry in selected {
                let Some(employer) = employers.get(entry.pair.employer_index) else {
                    continue;
                };
                if entry.selection == Selection::Fallback {
                    fallback_count += 1;
                }
                matches.push(self.build_match(&entry, institution, employer));
            }
        }

        info!(
            matches = matches.len(),
            fallback = fallback_count,
            "partnership matches computed"
        );
        matches
    }

    /// Single pair without the selection policy (always treated as organic).
    pub fn evaluate_pair(&mut self, institution: &Institution, employer: &Employer) -> Match {
        let pair = self.scorer.score(institution, employer, &mut self.noise);
        let pathway = PathwayCategory::for_pair(&pair).recommend(&mut self.noise);
        debug!(
            institution_id = %institution.id,
            employer_id = %employer.id,
            score = pair.total,
            "evaluated single pair"
        );
        Match::organic(&pair, institution, employer, pathway)
    }

    fn build_match(
        &mut self,
        entry: &SelectedPair,
        institution: &Institution,
        employer: &Employer,
    ) -> Match {
        let pathway = PathwayCategory::for_pair(&entry.pair).recommend(&mut self.noise);

        match entry.selection {
            Selection::Organic => Match::organic(&entry.pair, institution, employer, pathway),
            Selection::Fallback => Match::fallback(
                &entry.pair,
                institution,
                employer,
                pathway,
                entry.needs_exploratory_narrative(&self.config.selection),
            ),
        }
    }
}

/// Reference policy with entropy-seeded variance.
pub fn compute_matches(institutions: &[Institution], employers: &[Employer]) -> Vec<Match> {
    InsightEngine::with_entropy(MatchingConfig::default()).compute_matches(institutions, employers)
}
