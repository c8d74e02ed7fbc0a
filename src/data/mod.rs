//! Data structures for hardware profiles, requirements and evaluation results

pub mod hardware;
pub mod requirements;
pub mod result;

pub use hardware::{
    Component, ComponentScore, CpuAttributes, CpuComponent, GpuAttributes, GpuComponent,
    UserProfile,
};
pub use requirements::{RequirementTier, RequirementsProfile};
pub use result::{EvaluationDetails, EvaluationResult, ThresholdFlags, Tier, UserScores};
