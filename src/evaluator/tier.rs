//! Tier classification from threshold flags

use crate::data::{
    EvaluationDetails, EvaluationResult, RequirementsProfile, ThresholdFlags, Tier, UserScores,
};

/// `avg_gap` at or above this picks Medium over Low
pub const MEDIUM_GAP_THRESHOLD: f64 = 0.5;

const HIGH_NOTES: &str =
    "Your hardware meets or exceeds recommended requirements. Enjoy high settings!";
const MEDIUM_NOTES: &str =
    "Your hardware is between minimum and recommended. Expect medium settings.";
const LOW_NOTES: &str =
    "Your hardware meets minimum requirements. Expect low settings for smooth gameplay.";

/// Position of `user` between `min` and `rec`.
///
/// When `rec <= min` there is no range to sit in; a user who meets the
/// minimum on such a dimension is fully satisfied and the gap is 1.0.
/// Otherwise the ratio is not clamped.
pub fn normalized_gap(user: f64, min: f64, rec: f64) -> f64 {
    let span = rec - min;
    if span <= 0.0 {
        return 1.0;
    }
    (user - min) / span
}

/// Mean gap over CPU, GPU and RAM
pub fn average_gap(scores: &UserScores, reqs: &RequirementsProfile) -> f64 {
    let min = &reqs.minimum;
    let rec = &reqs.recommended;

    let cpu_gap = normalized_gap(scores.cpu as f64, min.cpu_score as f64, rec.cpu_score as f64);
    let gpu_gap = normalized_gap(scores.gpu as f64, min.gpu_score as f64, rec.gpu_score as f64);
    let ram_gap = normalized_gap(scores.ram, min.ram_gb, rec.ram_gb);

    (cpu_gap + gpu_gap + ram_gap) / 3.0
}

/// List every dimension that misses its minimum, with literal values
pub fn bottlenecks(
    scores: &UserScores,
    flags: &ThresholdFlags,
    reqs: &RequirementsProfile,
) -> Vec<String> {
    let min = &reqs.minimum;
    let mut found = Vec::new();

    if !flags.cpu_meets_min {
        found.push(format!("CPU (yours: {}, need: {})", scores.cpu, min.cpu_score));
    }
    if !flags.gpu_meets_min {
        found.push(format!("GPU (yours: {}, need: {})", scores.gpu, min.gpu_score));
    }
    if !flags.ram_meets_min {
        found.push(format!("RAM (yours: {}GB, need: {}GB)", scores.ram, min.ram_gb));
    }
    found
}

/// Build the final result. `details` is filled the same way on every branch.
pub fn classify(
    scores: UserScores,
    flags: ThresholdFlags,
    reqs: &RequirementsProfile,
) -> EvaluationResult {
    let (settings, notes) = if !flags.meets_minimum() {
        let notes = format!(
            "Hardware below minimum requirements. Bottlenecks: {}",
            bottlenecks(&scores, &flags, reqs).join(", ")
        );
        (Tier::CannotRun, notes)
    } else if flags.meets_recommended() {
        (Tier::High, HIGH_NOTES.to_string())
    } else {
        let avg_gap = average_gap(&scores, reqs);
        tracing::debug!(avg_gap, "between minimum and recommended");
        if avg_gap >= MEDIUM_GAP_THRESHOLD {
            (Tier::Medium, MEDIUM_NOTES.to_string())
        } else {
            (Tier::Low, LOW_NOTES.to_string())
        }
    };

    EvaluationResult {
        can_run: settings.can_run(),
        settings,
        notes,
        details: EvaluationDetails {
            flags,
            user_scores: scores,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RequirementTier;
    use crate::evaluator::thresholds::evaluate_thresholds;

    fn reqs() -> RequirementsProfile {
        RequirementsProfile::new(
            RequirementTier::new(16000, 9000, 8.0),
            RequirementTier::new(25000, 18000, 16.0),
        )
    }

    fn run(cpu: u32, gpu: u32, ram: f64, reqs: &RequirementsProfile) -> EvaluationResult {
        let scores = UserScores { cpu, gpu, ram };
        classify(scores, evaluate_thresholds(&scores, reqs), reqs)
    }

    #[test]
    fn test_gap_midpoint() {
        assert_eq!(normalized_gap(15.0, 10.0, 20.0), 0.5);
        assert_eq!(normalized_gap(10.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_gap_zero_span_is_full() {
        assert_eq!(normalized_gap(8.0, 8.0, 8.0), 1.0);
        assert_eq!(normalized_gap(12.0, 16.0, 8.0), 1.0);
    }

    #[test]
    fn test_medium_between_tiers() {
        let result = run(22000, 18000, 16.0, &reqs());
        assert_eq!(result.settings, Tier::Medium);
        assert!(result.can_run);
        assert_eq!(result.notes, MEDIUM_NOTES);
    }

    #[test]
    fn test_low_near_minimum() {
        let result = run(16000, 9000, 8.0, &reqs());
        assert_eq!(result.settings, Tier::Low);
        assert!(result.can_run);
        assert_eq!(result.notes, LOW_NOTES);
    }

    #[test]
    fn test_exactly_half_is_medium() {
        // cpu 0.5, gpu 0.5, ram 0.5
        let result = run(20500, 13500, 12.0, &reqs());
        assert_eq!(result.settings, Tier::Medium);
    }

    #[test]
    fn test_cannot_run_lists_only_failing_dimensions() {
        let result = run(12000, 20000, 16.0, &reqs());
        assert_eq!(result.settings, Tier::CannotRun);
        assert!(!result.can_run);
        assert_eq!(
            result.notes,
            "Hardware below minimum requirements. Bottlenecks: CPU (yours: 12000, need: 16000)"
        );
    }

    #[test]
    fn test_ram_bottleneck_formats_gb() {
        let result = run(30000, 30000, 7.5, &reqs());
        assert!(result.notes.ends_with("RAM (yours: 7.5GB, need: 8GB)"));
    }

    #[test]
    fn test_details_present_on_high() {
        let result = run(30000, 30000, 32.0, &reqs());
        assert_eq!(result.settings, Tier::High);
        assert!(result.details.flags.meets_recommended());
        assert_eq!(result.details.user_scores.cpu, 30000);
        assert_eq!(result.details.user_scores.ram, 32.0);
    }
}
