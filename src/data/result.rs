//! Evaluation result structures

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Expected playability, ordered `CannotRun < Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Cannot Run")]
    CannotRun,
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::CannotRun => "Cannot Run",
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }

    pub fn can_run(&self) -> bool {
        !matches!(self, Tier::CannotRun)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved user scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserScores {
    pub cpu: u32,
    pub gpu: u32,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub ram: f64,
}

// `16` stays `16` in the output instead of becoming `16.0`
fn serialize_whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && *value >= 0.0 && *value <= u64::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Per-dimension satisfaction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThresholdFlags {
    pub cpu_meets_min: bool,
    pub cpu_meets_rec: bool,
    pub gpu_meets_min: bool,
    pub gpu_meets_rec: bool,
    pub ram_meets_min: bool,
    pub ram_meets_rec: bool,
}

impl ThresholdFlags {
    pub fn meets_minimum(&self) -> bool {
        self.cpu_meets_min && self.gpu_meets_min && self.ram_meets_min
    }

    pub fn meets_recommended(&self) -> bool {
        self.cpu_meets_rec && self.gpu_meets_rec && self.ram_meets_rec
    }
}

/// Diagnostic surface carried by every result, whichever tier was chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDetails {
    #[serde(flatten)]
    pub flags: ThresholdFlags,
    pub user_scores: UserScores,
}

/// Outcome of one compatibility evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub can_run: bool,
    pub settings: Tier,
    pub notes: String,
    pub details: EvaluationDetails,
}
