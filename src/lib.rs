//! rigcheck library
//!
//! Estimates whether a hardware profile can run a game, and at which
//! settings tier, from minimum and recommended requirement scores.

pub mod error;
pub mod data;
pub mod scores;
pub mod evaluator;
pub mod input;
pub mod title;
pub mod collectors;
pub mod utils;
pub mod config;

pub use error::{RigcheckError, Result};
pub use data::{
    CpuComponent, EvaluationDetails, EvaluationResult, GpuComponent, RequirementTier,
    RequirementsProfile, ThresholdFlags, Tier, UserProfile, UserScores,
};
pub use evaluator::{evaluate, evaluate_batch, evaluate_with};
pub use scores::{ScoreResolver, ScoreTables};
