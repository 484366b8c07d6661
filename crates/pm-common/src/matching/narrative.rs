//! Templated "AI reasoning" text. Wording is cosmetic; the numbers are not.

use crate::{Employer, Institution};

pub fn organic_reasoning(
    institution: &Institution,
    employer: &Employer,
    matched_majors: &[String],
) -> String {
    if matched_majors.is_empty() {
        return format!(
            "The Insight Engine found no direct program overlap between {} and {}, \
             but institutional strengths and regional proximity still suggest a viable \
             partnership with {}'s {} operations.",
            institution.name,
            employer.name,
            employer.name,
            display_industry(employer),
        );
    }

    let programs = matched_majors
        .iter()
        .map(|m| m.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "The Insight Engine detected strong alignment between {}'s talent pool in {} \
         and {}'s critical hiring needs. The geographical proximity and shared strategic \
         focus make this a high-yield opportunity.",
        institution.name, programs, employer.name,
    )
}

/// Narrative for edges kept only for minimum connectivity.
///
/// Always names the employer and cites up to two of its required skills.
pub fn exploratory_reasoning(institution: &Institution, employer: &Employer) -> String {
    let skills: Vec<&str> = employer
        .required_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(2)
        .collect();

    let cited = match skills.as_slice() {
        [] => "its core competencies".to_string(),
        [only] => only.to_string(),
        [first, second, ..] => format!("{first} and {second}"),
    };

    format!(
        "Exploratory connection: {} shows limited direct curricular overlap with {}. \
         This stretch pathway would build student readiness in {} through targeted \
         pilot engagements before a deeper partnership is considered.",
        institution.name, employer.name, cited,
    )
}

fn display_industry(employer: &Employer) -> &str {
    let industry = employer.industry.trim();
    if industry.is_empty() {
        "regional"
    } else {
        industry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution() -> Institution {
        Institution {
            name: "Riverbend University".into(),
            ..Institution::default()
        }
    }

    fn employer(skills: &[&str]) -> Employer {
        Employer {
            name: "Acme Robotics".into(),
            industry: "Manufacturing".into(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Employer::default()
        }
    }

    #[test]
    fn organic_reasoning_lists_matched_programs() {
        let text = organic_reasoning(
            &institution(),
            &employer(&[]),
            &["engineering".to_string(), "data science".to_string()],
        );
        assert!(text.contains("ENGINEERING, DATA SCIENCE"));
        assert!(text.contains("Riverbend University"));
        assert!(text.contains("Acme Robotics"));
    }

    #[test]
    fn organic_reasoning_without_overlap_mentions_industry() {
        let text = organic_reasoning(&institution(), &employer(&[]), &[]);
        assert!(text.contains("no direct program overlap"));
        assert!(text.contains("Manufacturing"));
    }

    #[test]
    fn exploratory_reasoning_cites_top_two_skills() {
        let text = exploratory_reasoning(
            &institution(),
            &employer(&["PLC programming", "CAD", "Six Sigma"]),
        );
        assert!(text.contains("Acme Robotics"));
        assert!(text.contains("PLC programming and CAD"));
        assert!(!text.contains("Six Sigma"));
    }

    #[test]
    fn exploratory_reasoning_degrades_with_few_skills() {
        let one = exploratory_reasoning(&institution(), &employer(&["welding"]));
        assert!(one.contains("readiness in welding through"));

        let none = exploratory_reasoning(&institution(), &employer(&[]));
        assert!(none.contains("its core competencies"));
    }
}
