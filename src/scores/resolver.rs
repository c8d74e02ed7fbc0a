//! Turns named components into comparable scores.
//!
//! Resolution order: a pre-supplied score, then an exact table match, then an
//! estimate from secondary attributes, then a fixed mid-range default. Unknown
//! hardware never fails an evaluation.

use super::table::{ScoreTable, ScoreTables};
use crate::data::{ComponentScore, CpuAttributes, CpuComponent, GpuAttributes, GpuComponent};

/// Assumed score for an unidentifiable CPU
pub const DEFAULT_CPU_SCORE: u32 = 10000;
/// Assumed score for an unidentifiable GPU
pub const DEFAULT_GPU_SCORE: u32 = 8000;

/// Look up a CPU by name, estimating from cores and clock when unknown
pub fn cpu_score(table: &ScoreTable, name: &str, attrs: Option<&CpuAttributes>) -> u32 {
    if let Some(score) = table.get(name) {
        tracing::trace!(name, score, "cpu table hit");
        return score;
    }

    if let Some(attrs) = attrs.filter(|a| a.cores > 0 && a.clock_speed > 0.0) {
        let score = estimate_cpu_score(attrs);
        tracing::debug!(name, cores = attrs.cores, clock_speed = attrs.clock_speed, score, "estimated cpu score");
        return score;
    }

    tracing::debug!(name, score = DEFAULT_CPU_SCORE, "unknown cpu, using default score");
    DEFAULT_CPU_SCORE
}

/// Look up a GPU by name, estimating from VRAM when unknown
pub fn gpu_score(table: &ScoreTable, name: &str, attrs: Option<&GpuAttributes>) -> u32 {
    if let Some(score) = table.get(name) {
        tracing::trace!(name, score, "gpu table hit");
        return score;
    }

    if let Some(attrs) = attrs.filter(|a| a.vram_gb > 0.0) {
        let score = estimate_gpu_score(attrs.vram_gb);
        tracing::debug!(name, vram_gb = attrs.vram_gb, score, "estimated gpu score");
        return score;
    }

    tracing::debug!(name, score = DEFAULT_GPU_SCORE, "unknown gpu, using default score");
    DEFAULT_GPU_SCORE
}

/// `cores * GHz * 1000`, truncated
pub fn estimate_cpu_score(attrs: &CpuAttributes) -> u32 {
    // `as` saturates, so absurd inputs clamp instead of wrapping
    (attrs.cores as f64 * attrs.clock_speed * 1000.0) as u32
}

/// Band VRAM capacity into a rough score
pub fn estimate_gpu_score(vram_gb: f64) -> u32 {
    if vram_gb >= 16.0 {
        20000
    } else if vram_gb >= 12.0 {
        15000
    } else if vram_gb >= 8.0 {
        12000
    } else if vram_gb >= 6.0 {
        9000
    } else if vram_gb >= 4.0 {
        6000
    } else {
        3000
    }
}

/// Score resolution against one set of tables
#[derive(Debug, Clone, Copy)]
pub struct ScoreResolver<'a> {
    tables: &'a ScoreTables,
}

impl<'a> ScoreResolver<'a> {
    pub fn new(tables: &'a ScoreTables) -> Self {
        Self { tables }
    }

    pub fn resolve_cpu(&self, cpu: &CpuComponent) -> u32 {
        match &cpu.score {
            ComponentScore::Known(score) => *score,
            ComponentScore::Lookup(attrs) => cpu_score(&self.tables.cpu, &cpu.name, attrs.as_ref()),
        }
    }

    pub fn resolve_gpu(&self, gpu: &GpuComponent) -> u32 {
        match &gpu.score {
            ComponentScore::Known(score) => *score,
            ComponentScore::Lookup(attrs) => gpu_score(&self.tables.gpu, &gpu.name, attrs.as_ref()),
        }
    }
}

impl Default for ScoreResolver<'static> {
    fn default() -> Self {
        Self::new(ScoreTables::builtin())
    }
}
