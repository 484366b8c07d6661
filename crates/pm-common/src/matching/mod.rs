pub mod config;
pub mod keywords;
pub mod narrative;
pub mod noise;
pub mod overlap;
pub mod pathway;
pub mod pipeline;
pub mod scoring;
pub mod selection;
pub mod weights;

pub use config::MatchingConfig;
pub use noise::{FixedNoise, NoiseSource, RandomNoise};
pub use pathway::PathwayCategory;
pub use pipeline::{InsightEngine, compute_matches};
pub use scoring::{PairScorer, ScoredPair};
pub use selection::{SelectedPair, SelectionPolicy};
pub use weights::{BonusTable, REFERENCE_BONUSES};
