//! Compatibility evaluation: resolve scores, compare thresholds, pick a tier

pub mod thresholds;
pub mod tier;

use rayon::prelude::*;

use crate::data::{EvaluationResult, RequirementsProfile, UserProfile, UserScores};
use crate::error::Result;
use crate::scores::{ScoreResolver, ScoreTables};

pub use thresholds::evaluate_thresholds;
pub use tier::{average_gap, classify, normalized_gap, MEDIUM_GAP_THRESHOLD};

/// Resolve the three user scores that feed the threshold comparison
pub fn resolve_scores(tables: &ScoreTables, user: &UserProfile) -> UserScores {
    let resolver = ScoreResolver::new(tables);
    UserScores {
        cpu: resolver.resolve_cpu(&user.cpu),
        gpu: resolver.resolve_gpu(&user.gpu),
        ram: user.ram_gb,
    }
}

/// Evaluate against the bundled score tables
pub fn evaluate(user: &UserProfile, reqs: &RequirementsProfile) -> Result<EvaluationResult> {
    evaluate_with(ScoreTables::builtin(), user, reqs)
}

/// Evaluate against the given score tables
pub fn evaluate_with(
    tables: &ScoreTables,
    user: &UserProfile,
    reqs: &RequirementsProfile,
) -> Result<EvaluationResult> {
    user.validate()?;
    reqs.validate()?;

    let scores = resolve_scores(tables, user);
    let flags = evaluate_thresholds(&scores, reqs);
    let result = classify(scores, flags, reqs);

    tracing::debug!(
        cpu = scores.cpu,
        gpu = scores.gpu,
        ram = scores.ram,
        settings = %result.settings,
        "evaluated hardware profile"
    );
    Ok(result)
}

/// Evaluate many profiles against one requirements profile in parallel.
/// Results come back in input order.
pub fn evaluate_batch(
    tables: &ScoreTables,
    users: &[UserProfile],
    reqs: &RequirementsProfile,
) -> Vec<Result<EvaluationResult>> {
    users
        .par_iter()
        .map(|user| evaluate_with(tables, user, reqs))
        .collect()
}
