//! Requirement thresholds a title defines

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigcheckError};

/// One threshold record (minimum or recommended)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementTier {
    pub cpu_score: u32,
    pub gpu_score: u32,
    pub ram_gb: f64,
}

/// Minimum and recommended thresholds.
/// `minimum <= recommended` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementsProfile {
    pub minimum: RequirementTier,
    pub recommended: RequirementTier,
}

impl RequirementTier {
    pub fn new(cpu_score: u32, gpu_score: u32, ram_gb: f64) -> Self {
        Self {
            cpu_score,
            gpu_score,
            ram_gb,
        }
    }
}

impl RequirementsProfile {
    pub fn new(minimum: RequirementTier, recommended: RequirementTier) -> Self {
        Self {
            minimum,
            recommended,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (label, tier) in [("minimum", &self.minimum), ("recommended", &self.recommended)] {
            if !tier.ram_gb.is_finite() || tier.ram_gb < 0.0 {
                return Err(RigcheckError::InvalidInput(format!(
                    "{}.ram_gb must be a non-negative number, got {}",
                    label, tier.ram_gb
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_inverted_tiers() {
        let reqs = RequirementsProfile::new(
            RequirementTier::new(20000, 9000, 16.0),
            RequirementTier::new(10000, 9000, 8.0),
        );
        assert!(reqs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_ram() {
        let reqs = RequirementsProfile::new(
            RequirementTier::new(1, 1, -1.0),
            RequirementTier::new(1, 1, 8.0),
        );
        let err = reqs.validate().unwrap_err();
        assert!(err.to_string().contains("minimum.ram_gb"));
    }
}
