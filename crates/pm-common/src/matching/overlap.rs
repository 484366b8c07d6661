use crate::Employer;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    /// Lower-cased majors that matched, in the institution's order.
    pub matched_majors: Vec<String>,
    pub reason: String,
}

impl OverlapResult {
    pub fn count(&self) -> usize {
        self.matched_majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_majors.is_empty()
    }
}

/// Lower-cased `hiring_needs` followed by `required_skills`.
pub fn employer_terms(employer: &Employer) -> Vec<String> {
    employer
        .hiring_needs
        .iter()
        .chain(employer.required_skills.iter())
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Majors found in the employer vocabulary by bidirectional substring containment.
///
/// "computer science" matches "computer science and data structures" and
/// "data" matches "data science"; no stemming or tokenization beyond that.
pub fn keyword_overlap(majors: &[String], employer_terms: &[String]) -> OverlapResult {
    let matched_majors: Vec<String> = majors
        .iter()
        .map(|major| major.trim().to_lowercase())
        .filter(|major| !major.is_empty())
        .filter(|major| {
            employer_terms
                .iter()
                .any(|term| term.contains(major.as_str()) || major.contains(term.as_str()))
        })
        .collect();

    let reason = if matched_majors.is_empty() {
        "no major overlaps the hiring vocabulary".to_string()
    } else {
        format!(
            "{} major(s) matched ({})",
            matched_majors.len(),
            matched_majors.join(", ")
        )
    };

    OverlapResult {
        matched_majors,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_lowercase()).collect()
    }

    fn majors(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn major_contained_in_longer_skill_matches() {
        let result = keyword_overlap(
            &majors(&["Computer Science"]),
            &terms(&["computer science and data structures"]),
        );
        assert_eq!(result.matched_majors, vec!["computer science"]);
    }

    #[test]
    fn skill_contained_in_longer_major_matches() {
        let result = keyword_overlap(&majors(&["Data Science"]), &terms(&["Data"]));
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn unrelated_majors_do_not_match() {
        let result = keyword_overlap(
            &majors(&["Nursing", "History"]),
            &terms(&["react", "kubernetes"]),
        );
        assert!(result.is_empty());
        assert!(result.reason.contains("no major"));
    }

    #[test]
    fn blank_entries_never_match() {
        let result = keyword_overlap(&majors(&["", "  "]), &terms(&["engineering"]));
        assert!(result.is_empty());

        let employer = Employer {
            hiring_needs: vec!["".into(), "Software Engineering".into()],
            required_skills: vec!["React".into()],
            ..Employer::default()
        };
        assert_eq!(
            employer_terms(&employer),
            vec!["software engineering", "react"]
        );
    }

    #[test]
    fn preserves_institution_major_order() {
        let result = keyword_overlap(
            &majors(&["Engineering", "Accounting", "Finance"]),
            &terms(&["financial analysis", "accounting", "mechanical engineering"]),
        );
        assert_eq!(result.matched_majors, vec!["engineering", "accounting"]);
    }
}
