use super::{selection::SelectionPolicy, weights::BonusTable};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingConfig {
    pub bonuses: BonusTable,
    pub selection: SelectionPolicy,
}

impl MatchingConfig {
    /// Reference policy with environment overrides.
    ///
    /// Unset or unparsable variables keep the reference value.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bonuses: BonusTable {
                base_score: env_or("PM_BASE_SCORE", defaults.bonuses.base_score),
                ..defaults.bonuses
            },
            selection: SelectionPolicy {
                min_matches: env_or("PM_MIN_MATCHES", defaults.selection.min_matches),
                massive_threshold: env_or(
                    "PM_MASSIVE_THRESHOLD",
                    defaults.selection.massive_threshold,
                ),
                standard_threshold: env_or(
                    "PM_STANDARD_THRESHOLD",
                    defaults.selection.standard_threshold,
                ),
                exploratory_narrative_below: env_or(
                    "PM_EXPLORATORY_BELOW",
                    defaults.selection.exploratory_narrative_below,
                ),
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
