//! Threshold comparison of resolved user scores against a requirements profile

use crate::data::{RequirementsProfile, ThresholdFlags, UserScores};

/// Compare each dimension against both tiers (non-strict `>=`)
pub fn evaluate_thresholds(scores: &UserScores, reqs: &RequirementsProfile) -> ThresholdFlags {
    let min = &reqs.minimum;
    let rec = &reqs.recommended;

    ThresholdFlags {
        cpu_meets_min: scores.cpu >= min.cpu_score,
        cpu_meets_rec: scores.cpu >= rec.cpu_score,
        gpu_meets_min: scores.gpu >= min.gpu_score,
        gpu_meets_rec: scores.gpu >= rec.gpu_score,
        ram_meets_min: scores.ram >= min.ram_gb,
        ram_meets_rec: scores.ram >= rec.ram_gb,
    }
}
