use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::{noise::NoiseSource, scoring::ScoredPair};

pub const TECHNICAL_APPRENTICESHIP: &[&str] = &[
    "Establish Specialized Tech Apprenticeship",
    "Co-Design an Engineering Co-op Rotation",
    "Launch a Registered Technical Apprenticeship",
];

pub const HIGH_INTENSITY: &[&str] = &[
    "Direct Hiring Pipeline",
    "Strategic Talent Partnership Agreement",
    "Sponsored Capstone & Early Recruiting Program",
];

pub const LIBERAL_ARTS_FOCUSED: &[&str] = &[
    "Humanities-to-Industry Fellowship",
    "Communication & Strategy Internship Track",
    "Cross-Disciplinary Leadership Cohort",
];

pub const MODERATE_DEVELOPMENT: &[&str] = &[
    "Develop Joint Upskilling Curriculum",
    "Guest Lecture & Mentorship Series",
    "Project-Based Learning Partnership",
];

pub const EXPLORATORY: &[&str] = &[
    "Exploratory Networking Event",
    "Informational Interview Program",
    "Pilot Micro-Internship",
];

pub const HIGH_INTENSITY_FLOOR: u8 = 70;
pub const MODERATE_FLOOR: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PathwayCategory {
    TechnicalApprenticeship,
    HighIntensity,
    LiberalArtsFocused,
    ModerateDevelopment,
    Exploratory,
}

impl PathwayCategory {
    /// Decision table over the score and the pair's classification flags.
    pub fn classify(score: u8, stem_heavy: bool, tech_industry: bool, liberal_arts: bool) -> Self {
        if score >= HIGH_INTENSITY_FLOOR {
            if stem_heavy && tech_industry {
                Self::TechnicalApprenticeship
            } else {
                Self::HighIntensity
            }
        } else if score >= MODERATE_FLOOR {
            if liberal_arts && !stem_heavy {
                Self::LiberalArtsFocused
            } else {
                Self::ModerateDevelopment
            }
        } else {
            Self::Exploratory
        }
    }

    pub fn for_pair(pair: &ScoredPair) -> Self {
        Self::classify(
            pair.total,
            pair.stem_heavy,
            pair.tech_industry,
            pair.liberal_arts,
        )
    }

    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::TechnicalApprenticeship => TECHNICAL_APPRENTICESHIP,
            Self::HighIntensity => HIGH_INTENSITY,
            Self::LiberalArtsFocused => LIBERAL_ARTS_FOCUSED,
            Self::ModerateDevelopment => MODERATE_DEVELOPMENT,
            Self::Exploratory => EXPLORATORY,
        }
    }

    pub fn recommend<N: NoiseSource + ?Sized>(self, noise: &mut N) -> &'static str {
        let labels = self.labels();
        labels[noise.pick(labels.len()).min(labels.len() - 1)]
    }
}
