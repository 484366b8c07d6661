//! Keyword tables behind the classification heuristics.
//!
//! Every lookup is a case-insensitive substring check. The tables are kept
//! separate from the scoring code so they can be swapped for a real taxonomy
//! (e.g. O*NET) without touching the bonus arithmetic.

use crate::{Employer, Institution};

/// Majors that mark an institution as liberal-arts oriented.
pub const LIBERAL_ARTS_MAJOR_KEYWORDS: &[&str] = &[
    "english",
    "history",
    "philosophy",
    "sociology",
    "psychology",
    "political",
    "anthropology",
    "communications",
    "liberal arts",
    "humanities",
    "theology",
    "fine arts",
    "music",
    "literature",
    "design",
];

/// Employer skill/need vocabulary that rewards humanities training.
pub const HUMANITIES_VALUED_SKILLS: &[&str] = &[
    "communication",
    "writing",
    "critical thinking",
    "analysis",
    "management",
    "design",
    "strategy",
];

/// Industry vocabulary for the tech / manufacturing / engineering sector.
pub const TECH_INDUSTRY_KEYWORDS: &[&str] = &[
    "technology",
    "tech",
    "software",
    "manufacturing",
    "engineering",
    "semiconductor",
    "aerospace",
    "electronics",
    "automotive",
];

/// Carnegie label fragment for R1 institutions.
pub const RESEARCH_INTENSIVE_MARKER: &str = "very high research";

/// Carnegie label fragment for baccalaureate colleges.
pub const BACCALAUREATE_MARKER: &str = "baccalaureate";

pub const MASSIVE_ENROLLMENT: u64 = 25_000;

pub const STEM_HEAVY_PERCENTAGE: f64 = 15.0;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

pub fn is_research_intensive(institution: &Institution) -> bool {
    institution
        .kind
        .to_lowercase()
        .contains(RESEARCH_INTENSIVE_MARKER)
}

/// R1 or more than 25,000 students.
pub fn is_massive(institution: &Institution) -> bool {
    is_research_intensive(institution) || institution.total_students() > MASSIVE_ENROLLMENT
}

/// Absent STEM percentage never counts as STEM heavy.
pub fn is_stem_heavy(institution: &Institution) -> bool {
    institution
        .stem_percentage()
        .is_some_and(|pct| pct > STEM_HEAVY_PERCENTAGE)
}

pub fn is_liberal_arts(institution: &Institution) -> bool {
    institution
        .top_majors
        .iter()
        .any(|major| contains_any(major, LIBERAL_ARTS_MAJOR_KEYWORDS))
        || institution
            .kind
            .to_lowercase()
            .contains(BACCALAUREATE_MARKER)
}

pub fn is_tech_industry(employer: &Employer) -> bool {
    contains_any(&employer.industry, TECH_INDUSTRY_KEYWORDS)
}

/// `terms` are the employer's lower-cased needs and skills.
pub fn values_humanities(terms: &[String]) -> bool {
    terms
        .iter()
        .any(|term| HUMANITIES_VALUED_SKILLS.iter().any(|skill| term.contains(skill)))
}
