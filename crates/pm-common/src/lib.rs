pub mod graph;
pub mod ingest;
pub mod logging;
pub mod matching;
pub mod report;
pub mod run_id;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub top_majors: Vec<String>,
    #[serde(default)]
    pub student_demographics: StudentDemographics,
    /// Carnegie classification label, e.g. "R1: Doctoral Universities - Very High Research Activity"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipeds_metrics: Option<IpedsMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDemographics {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underrepresented_minority_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_generation_percentage: Option<f64>,
}

/// IPEDS outcome metrics. Every field is optional; an absent value skips its bonus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpedsMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub six_year_graduation_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem_degree_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institutional_endowment_million: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: String,
    pub name: String,
    /// Free text; several sectors may be comma separated.
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub hiring_needs: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl Institution {
    pub fn total_students(&self) -> u64 {
        self.student_demographics.total_students
    }

    pub fn graduation_rate(&self) -> Option<f64> {
        self.ipeds_metrics
            .as_ref()
            .and_then(|m| m.six_year_graduation_rate)
    }

    pub fn stem_percentage(&self) -> Option<f64> {
        self.ipeds_metrics
            .as_ref()
            .and_then(|m| m.stem_degree_percentage)
    }

    pub fn endowment_million(&self) -> Option<f64> {
        self.ipeds_metrics
            .as_ref()
            .and_then(|m| m.institutional_endowment_million)
    }
}

/// One labelled line of a match's score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub category: String,
    pub score: i32,
}

/// How a match entered the final edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Selection {
    /// Passed the institution's acceptance threshold.
    Organic,
    /// Pulled in only to satisfy the minimum-connectivity guarantee.
    Fallback,
}

/// A scored, directed edge from an institution to an employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    /// 0..=99
    pub match_strength_score: u8,
    pub score_breakdown: Vec<ScoreItem>,
    pub ai_reasoning: String,
    pub recommended_pathway: String,
    pub selection: Selection,
}

/// Deterministic edge identity for an institution/employer pair.
pub fn match_id(institution_id: &str, employer_id: &str) -> String {
    format!("match-{institution_id}-{employer_id}")
}
