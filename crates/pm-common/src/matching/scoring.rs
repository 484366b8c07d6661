use super::{
    keywords::{
        is_liberal_arts, is_research_intensive, is_stem_heavy, is_tech_industry, values_humanities,
    },
    noise::NoiseSource,
    overlap::{OverlapResult, employer_terms, keyword_overlap},
    weights::BonusTable,
};
use crate::{Employer, Institution, ScoreItem};

pub const BASELINE_LABEL: &str = "Baseline Regional Alignment";
pub const GRADUATION_LABEL: &str = "Graduate Outcomes (IPEDS Six-Year Rate)";
pub const STEM_LABEL: &str = "STEM Pipeline Alignment";
pub const ENDOWMENT_LABEL: &str = "Institutional Endowment Capacity";
pub const RESEARCH_LABEL: &str = "R1 Research Capacity";
pub const ENROLLMENT_LABEL: &str = "Enrollment Scale";
pub const LIBERAL_ARTS_ALIGNED_LABEL: &str = "Connective Labor & Evaluative Judgement";
pub const LIBERAL_ARTS_FLEXIBILITY_LABEL: &str = "Cognitive Flexibility (Liberal Arts)";
pub const VARIANCE_LABEL: &str = "Discovery Variance";
pub const CAP_ADJUSTMENT_LABEL: &str = "Score Cap Adjustment";

pub fn keyword_label(count: usize) -> String {
    format!("Keyword Overlap ({count} matched)")
}

/// One unrounded term of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub category: String,
    pub value: f64,
}

/// Immutable result of scoring a single institution/employer pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPair {
    pub institution_id: String,
    pub employer_id: String,
    /// Position of the employer in the slice it was scored from; 0 for a standalone pair.
    pub employer_index: usize,
    pub overlap: OverlapResult,
    /// Non-zero terms in computation order, variance next, then a negative
    /// cap adjustment when the factors overshoot the cap.
    pub contributions: Vec<Contribution>,
    /// Sum of the factor terms before the cap adjustment.
    pub raw_total: f64,
    /// round(raw_total) clamped to the score cap.
    pub total: u8,
    pub liberal_arts: bool,
    pub stem_heavy: bool,
    pub tech_industry: bool,
}

impl ScoredPair {
    /// Display breakdown; each line is rounded on its own, so the sum may
    /// drift from `total` by at most one point per line.
    pub fn breakdown(&self) -> Vec<ScoreItem> {
        self.contributions
            .iter()
            .map(|c| ScoreItem {
                category: c.category.clone(),
                score: c.value.round() as i32,
            })
            .collect()
    }

    pub fn contribution(&self, category: &str) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairScorer {
    bonuses: BonusTable,
}

impl PairScorer {
    pub fn new(bonuses: BonusTable) -> Self {
        Self { bonuses }
    }

    /// Multi-factor score for one pair. Draws exactly one variance value from `noise`.
    pub fn score<N: NoiseSource + ?Sized>(
        &self,
        institution: &Institution,
        employer: &Employer,
        noise: &mut N,
    ) -> ScoredPair {
        let table = &self.bonuses;
        let terms = employer_terms(employer);
        let overlap = keyword_overlap(&institution.top_majors, &terms);

        let liberal_arts = is_liberal_arts(institution);
        let stem_heavy = is_stem_heavy(institution);
        let tech_industry = is_tech_industry(employer);

        let mut contributions = Vec::with_capacity(10);
        let mut push = |category: &str, value: f64| {
            if value != 0.0 {
                contributions.push(Contribution {
                    category: category.to_string(),
                    value,
                });
            }
        };

        push(BASELINE_LABEL, table.base_score);
        push(
            &keyword_label(overlap.count()),
            table.keyword_bonus(overlap.count()),
        );

        // IPEDS terms
        push(
            GRADUATION_LABEL,
            table.graduation_bonus(institution.graduation_rate()),
        );
        push(
            STEM_LABEL,
            table.stem_bonus(institution.stem_percentage(), tech_industry),
        );
        push(
            ENDOWMENT_LABEL,
            table.endowment_bonus(institution.endowment_million()),
        );

        // Scale terms
        if is_research_intensive(institution) {
            push(RESEARCH_LABEL, table.research_intensive_bonus);
        }
        push(
            ENROLLMENT_LABEL,
            table.enrollment_bonus(institution.total_students()),
        );

        if liberal_arts {
            if values_humanities(&terms) {
                push(LIBERAL_ARTS_ALIGNED_LABEL, table.liberal_arts_aligned_bonus);
            } else {
                push(
                    LIBERAL_ARTS_FLEXIBILITY_LABEL,
                    table.liberal_arts_flexibility_bonus,
                );
            }
        }

        push(
            VARIANCE_LABEL,
            f64::from(noise.variance(table.variance_upper)),
        );

        let raw_total: f64 = contributions.iter().map(|c| c.value).sum();
        let cap = f64::from(table.score_cap);
        if raw_total > cap {
            contributions.push(Contribution {
                category: CAP_ADJUSTMENT_LABEL.to_string(),
                value: cap - raw_total,
            });
        }
        let total = raw_total.round().clamp(0.0, cap) as u8;

        tracing::trace!(
            institution_id = %institution.id,
            employer_id = %employer.id,
            overlap = %overlap.reason,
            raw_total,
            total,
            "scored pair"
        );

        ScoredPair {
            institution_id: institution.id.clone(),
            employer_id: employer.id.clone(),
            employer_index: 0,
            overlap,
            contributions,
            raw_total,
            total,
            liberal_arts,
            stem_heavy,
            tech_industry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::noise::FixedNoise;
    use crate::{IpedsMetrics, StudentDemographics};

    fn research_university() -> Institution {
        Institution {
            id: "inst-r1".into(),
            name: "Flagship University".into(),
            region: "Great Lakes".into(),
            top_majors: vec!["Engineering".into(), "Computer Science".into()],
            student_demographics: StudentDemographics {
                total_students: 50_000,
                ..Default::default()
            },
            kind: "R1: Doctoral Universities - Very High Research Activity".into(),
            ipeds_metrics: None,
        }
    }

    fn software_employer() -> Employer {
        Employer {
            id: "emp-soft".into(),
            name: "Lakeside Software".into(),
            industry: "Software".into(),
            location: "Chicago, IL".into(),
            hiring_needs: vec!["Software Engineering".into()],
            required_skills: vec!["react".into(), "software engineering".into()],
        }
    }

    fn humanities_college() -> Institution {
        Institution {
            id: "inst-hum".into(),
            name: "Hillside College".into(),
            region: "New England".into(),
            top_majors: vec!["History".into(), "Philosophy".into()],
            student_demographics: StudentDemographics {
                total_students: 1_500,
                ..Default::default()
            },
            kind: "Master's Colleges & Universities".into(),
            ipeds_metrics: None,
        }
    }

    #[test]
    fn research_university_scores_overlap_and_scale() {
        let scorer = PairScorer::default();
        let scored = scorer.score(
            &research_university(),
            &software_employer(),
            &mut FixedNoise::zero(),
        );

        assert_eq!(scored.overlap.matched_majors, vec!["engineering"]);
        assert_eq!(scored.contribution(&keyword_label(1)), Some(15.0));
        assert_eq!(scored.contribution(RESEARCH_LABEL), Some(12.0));
        assert_eq!(scored.contribution(ENROLLMENT_LABEL), Some(8.0));
        assert_eq!(scored.contribution(VARIANCE_LABEL), None);
        assert_eq!(scored.total, 65);
    }

    #[test]
    fn humanities_college_gets_connective_labor_bonus() {
        let employer = Employer {
            id: "emp-consult".into(),
            name: "Northbridge Consulting".into(),
            industry: "Professional Services".into(),
            required_skills: vec!["communication".into(), "strategy".into()],
            ..Employer::default()
        };

        let scored = PairScorer::default().score(
            &humanities_college(),
            &employer,
            &mut FixedNoise::zero(),
        );

        assert!(scored.liberal_arts);
        assert_eq!(scored.contribution(LIBERAL_ARTS_ALIGNED_LABEL), Some(15.0));
        assert!(
            scored
                .breakdown()
                .iter()
                .any(|item| item.category == "Connective Labor & Evaluative Judgement")
        );
        assert_eq!(scored.total, 45);
    }

    #[test]
    fn liberal_arts_without_humanities_skills_gets_flexibility_bonus() {
        let employer = Employer {
            id: "emp-logistics".into(),
            required_skills: vec!["forklift certification".into()],
            ..Employer::default()
        };

        let scored = PairScorer::default().score(
            &humanities_college(),
            &employer,
            &mut FixedNoise::zero(),
        );

        assert_eq!(scored.contribution(LIBERAL_ARTS_ALIGNED_LABEL), None);
        assert_eq!(scored.contribution(LIBERAL_ARTS_FLEXIBILITY_LABEL), Some(7.0));
    }

    #[test]
    fn bare_pair_scores_base_plus_variance() {
        let institution = Institution {
            id: "inst-bare".into(),
            top_majors: vec!["Nursing".into()],
            ..Institution::default()
        };
        let employer = Employer {
            id: "emp-bare".into(),
            industry: "Retail".into(),
            required_skills: vec!["merchandising".into()],
            ..Employer::default()
        };

        let scorer = PairScorer::default();
        for variance in 0..4 {
            let mut noise = FixedNoise {
                variance,
                label_index: 0,
            };
            let scored = scorer.score(&institution, &employer, &mut noise);
            assert_eq!(u32::from(scored.total), 30 + variance);
        }
    }

    #[test]
    fn ipeds_terms_stack_for_stem_heavy_institution_and_tech_employer() {
        let mut institution = research_university();
        institution.ipeds_metrics = Some(IpedsMetrics {
            six_year_graduation_rate: Some(83.0),
            stem_degree_percentage: Some(21.0),
            institutional_endowment_million: Some(1_250.0),
        });

        let scored = PairScorer::default().score(
            &institution,
            &software_employer(),
            &mut FixedNoise::zero(),
        );

        assert_eq!(scored.contribution(GRADUATION_LABEL), Some(8.0));
        assert_eq!(scored.contribution(STEM_LABEL), Some(3.0));
        assert_eq!(scored.contribution(ENDOWMENT_LABEL), Some(4.0));
        assert!(scored.stem_heavy && scored.tech_industry);
        assert_eq!(scored.total, 80);
    }

    #[test]
    fn rounds_total_once_and_lines_independently() {
        let mut institution = humanities_college();
        institution.top_majors = vec!["Nursing".into()];
        institution.ipeds_metrics = Some(IpedsMetrics {
            six_year_graduation_rate: Some(58.0),
            ..Default::default()
        });
        let employer = Employer {
            id: "emp".into(),
            ..Employer::default()
        };

        let scored = PairScorer::default().score(&institution, &employer, &mut FixedNoise::zero());

        // 30 + 2.0
        assert_eq!(scored.raw_total, 32.0);
        assert_eq!(scored.total, 32);
        let sum: i32 = scored.breakdown().iter().map(|i| i.score).sum();
        assert!((sum - i32::from(scored.total)).abs() <= scored.contributions.len() as i32);
    }

    #[test]
    fn total_is_clamped_to_cap() {
        let mut institution = research_university();
        institution.top_majors = vec![
            "Software".into(),
            "Engineering".into(),
            "Design".into(),
            "Communications".into(),
        ];
        institution.ipeds_metrics = Some(IpedsMetrics {
            six_year_graduation_rate: Some(95.0),
            stem_degree_percentage: Some(60.0),
            institutional_endowment_million: Some(9_000.0),
        });
        let mut employer = software_employer();
        employer.required_skills.extend([
            "product design".into(),
            "communications".into(),
            "strategy".into(),
        ]);

        let scored = PairScorer::default().score(
            &institution,
            &employer,
            &mut FixedNoise {
                variance: 3,
                label_index: 0,
            },
        );

        assert!(scored.raw_total > 99.0);
        assert_eq!(scored.total, 99);
        assert_eq!(
            scored.contribution(CAP_ADJUSTMENT_LABEL),
            Some(99.0 - scored.raw_total)
        );
    }

    #[test]
    fn capped_breakdown_still_sums_to_score() {
        let mut institution = research_university();
        institution.top_majors.push("Data Science".into());
        institution.ipeds_metrics = Some(IpedsMetrics {
            six_year_graduation_rate: Some(92.0),
            stem_degree_percentage: Some(45.0),
            institutional_endowment_million: Some(800.0),
        });
        let mut employer = software_employer();
        employer.required_skills.extend(["computer science".into(), "data science".into()]);

        let scored = PairScorer::default().score(&institution, &employer, &mut FixedNoise::zero());
        assert_eq!(scored.total, 99);

        let breakdown = scored.breakdown();
        let sum: i32 = breakdown.iter().map(|item| item.score).sum();
        assert!(
            (sum - 99).abs() <= breakdown.len() as i32,
            "breakdown sums to {sum} over {} lines",
            breakdown.len()
        );
        assert_eq!(
            breakdown.last().map(|item| item.category.as_str()),
            Some(CAP_ADJUSTMENT_LABEL)
        );
    }

    #[test]
    fn uncapped_pair_has_no_adjustment_line() {
        let scored = PairScorer::default().score(
            &research_university(),
            &software_employer(),
            &mut FixedNoise::zero(),
        );
        assert_eq!(scored.contribution(CAP_ADJUSTMENT_LABEL), None);
    }
}
