//! Dataset loading: raw JSON arrays into `Institution` / `Employer` records.
//!
//! Crawled and LLM-enriched files are loose, so every record is mapped field
//! by field with defaults instead of failing the whole file on one bad entry.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::{Employer, Institution, IpedsMetrics, StudentDemographics};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset root must be a JSON array")]
    NotAnArray,
}

pub fn parse_institutions(raw: &str) -> Result<Vec<Institution>, IngestError> {
    let items = parse_array(raw)?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| institution_from_value(index, item))
        .collect())
}

pub fn parse_employers(raw: &str) -> Result<Vec<Employer>, IngestError> {
    let items = parse_array(raw)?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| employer_from_value(index, item))
        .collect())
}

#[instrument]
pub fn load_institutions(path: &Path) -> Result<Vec<Institution>, IngestError> {
    let institutions = parse_institutions(&read(path)?)?;
    info!(count = institutions.len(), "loaded institutions");
    Ok(institutions)
}

#[instrument]
pub fn load_employers(path: &Path) -> Result<Vec<Employer>, IngestError> {
    let employers = parse_employers(&read(path)?)?;
    info!(count = employers.len(), "loaded employers");
    Ok(employers)
}

/// Drops schools and education-sector organisations that crawlers pick up as employers.
pub fn exclude_academic_employers(employers: Vec<Employer>) -> Vec<Employer> {
    const ACADEMIC_NAME_MARKERS: &[&str] = &["university", "college", "institute"];

    let before = employers.len();
    let kept: Vec<Employer> = employers
        .into_iter()
        .filter(|employer| {
            let name = employer.name.to_lowercase();
            let industry = employer.industry.to_lowercase();
            !industry.contains("education")
                && !ACADEMIC_NAME_MARKERS
                    .iter()
                    .any(|marker| name.contains(marker))
        })
        .collect();

    if kept.len() < before {
        info!(
            removed = before - kept.len(),
            kept = kept.len(),
            "excluded academic employers"
        );
    }
    kept
}

fn read(path: &Path) -> Result<String, IngestError> {
    std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_array(raw: &str) -> Result<Vec<Value>, IngestError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(items),
        _ => Err(IngestError::NotAnArray),
    }
}

fn institution_from_value(index: usize, item: &Value) -> Institution {
    let empty = Map::new();
    let obj = item.as_object().unwrap_or_else(|| {
        warn!(index, "institution record is not an object; using defaults");
        &empty
    });

    Institution {
        id: text(obj, "id").unwrap_or_else(|| format!("inst-crawled-{index}")),
        name: text(obj, "name").unwrap_or_else(|| "Unknown Institution".into()),
        region: text(obj, "region").unwrap_or_else(|| "Unknown Region".into()),
        top_majors: strings(obj, "topMajors"),
        student_demographics: obj
            .get("studentDemographics")
            .and_then(Value::as_object)
            .map(demographics)
            .unwrap_or_default(),
        kind: text(obj, "type").unwrap_or_else(|| "Other".into()),
        ipeds_metrics: obj
            .get("ipedsMetrics")
            .and_then(Value::as_object)
            .map(ipeds),
    }
}

fn employer_from_value(index: usize, item: &Value) -> Employer {
    let empty = Map::new();
    let obj = item.as_object().unwrap_or_else(|| {
        warn!(index, "employer record is not an object; using defaults");
        &empty
    });

    Employer {
        id: text(obj, "id").unwrap_or_else(|| format!("emp-crawled-{index}")),
        name: text(obj, "name").unwrap_or_else(|| "Unknown Employer".into()),
        industry: text(obj, "industry").unwrap_or_else(|| "Unknown Industry".into()),
        location: text(obj, "location").unwrap_or_else(|| "Unknown Location".into()),
        hiring_needs: strings(obj, "hiringNeeds"),
        required_skills: strings(obj, "requiredSkills"),
    }
}

fn demographics(obj: &Map<String, Value>) -> StudentDemographics {
    StudentDemographics {
        total_students: number(obj, "totalStudents")
            .filter(|n| *n >= 0.0)
            .map(|n| n.round() as u64)
            .unwrap_or(0),
        underrepresented_minority_percentage: number(obj, "underrepresentedMinorityPercentage"),
        first_generation_percentage: number(obj, "firstGenerationPercentage"),
    }
}

fn ipeds(obj: &Map<String, Value>) -> IpedsMetrics {
    IpedsMetrics {
        six_year_graduation_rate: number(obj, "sixYearGraduationRate"),
        stem_degree_percentage: number(obj, "stemDegreePercentage"),
        institutional_endowment_million: number(obj, "institutionalEndowmentMillion"),
    }
}

/// Non-empty string field.
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// String array field; a non-array value reads as empty and non-string entries are skipped.
fn strings(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Numbers, or numeric strings such as "71.5"; anything else is absent.
fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|n| n.is_finite())
}
