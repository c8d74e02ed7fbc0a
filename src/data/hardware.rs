//! Hardware-specific information structures

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RigcheckError};

/// Where a component's score comes from.
///
/// A `Known` score is taken verbatim; a `Lookup` goes through the score
/// tables and, failing an exact match, the estimation fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentScore<A> {
    Known(u32),
    Lookup(Option<A>),
}

/// A CPU or GPU instance identified by name
#[derive(Debug, Clone, PartialEq)]
pub struct Component<A> {
    pub name: String,
    pub score: ComponentScore<A>,
}

impl<A> Component<A> {
    /// Component resolved by name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: ComponentScore::Lookup(None),
        }
    }

    /// Component resolved by name, with attributes for estimation
    pub fn with_attributes(name: impl Into<String>, attributes: A) -> Self {
        Self {
            name: name.into(),
            score: ComponentScore::Lookup(Some(attributes)),
        }
    }

    /// Component whose score is already known
    pub fn with_score(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score: ComponentScore::Known(score),
        }
    }

    fn attributes(&self) -> Option<&A> {
        match &self.score {
            ComponentScore::Lookup(attrs) => attrs.as_ref(),
            ComponentScore::Known(_) => None,
        }
    }

    fn known_score(&self) -> Option<u32> {
        match self.score {
            ComponentScore::Known(score) => Some(score),
            ComponentScore::Lookup(_) => None,
        }
    }
}

/// Secondary CPU attributes used when the name is not in the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuAttributes {
    pub cores: u32,
    /// Clock speed in GHz
    pub clock_speed: f64,
}

/// Secondary GPU attributes used when the name is not in the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuAttributes {
    /// Video memory in GB; fractional capacities are allowed
    pub vram_gb: f64,
}

pub type CpuComponent = Component<CpuAttributes>;
pub type GpuComponent = Component<GpuAttributes>;

/// The hardware a user brings to an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub cpu: CpuComponent,
    pub gpu: GpuComponent,
    pub ram_gb: f64,
}

impl UserProfile {
    pub fn new(cpu: CpuComponent, gpu: GpuComponent, ram_gb: f64) -> Self {
        Self { cpu, gpu, ram_gb }
    }

    /// Reject values no real machine can have
    pub fn validate(&self) -> Result<()> {
        if !self.ram_gb.is_finite() || self.ram_gb <= 0.0 {
            return Err(RigcheckError::InvalidInput(format!(
                "ram_gb must be a positive number, got {}",
                self.ram_gb
            )));
        }
        if let Some(attrs) = self.cpu.attributes() {
            if !attrs.clock_speed.is_finite() || attrs.clock_speed < 0.0 {
                return Err(RigcheckError::InvalidInput(format!(
                    "cpu clock_speed must be a non-negative number, got {}",
                    attrs.clock_speed
                )));
            }
        }
        if let Some(attrs) = self.gpu.attributes() {
            if !attrs.vram_gb.is_finite() || attrs.vram_gb < 0.0 {
                return Err(RigcheckError::InvalidInput(format!(
                    "gpu vram_gb must be a non-negative number, got {}",
                    attrs.vram_gb
                )));
            }
        }
        Ok(())
    }
}

// JSON shape: {"name": .., "cores": .., "clock_speed": .., "score": ..}
#[derive(Serialize, Deserialize)]
struct RawCpu {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cores: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    clock_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
}

// JSON shape: {"name": .., "vram_gb": .., "score": ..}
#[derive(Serialize, Deserialize)]
struct RawGpu {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vram_gb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
}

impl From<RawCpu> for CpuComponent {
    fn from(raw: RawCpu) -> Self {
        let score = match (raw.score, raw.cores, raw.clock_speed) {
            (Some(score), _, _) => ComponentScore::Known(score),
            (None, Some(cores), Some(clock_speed)) => {
                ComponentScore::Lookup(Some(CpuAttributes { cores, clock_speed }))
            }
            (None, _, _) => ComponentScore::Lookup(None),
        };
        Component {
            name: raw.name,
            score,
        }
    }
}

impl From<&CpuComponent> for RawCpu {
    fn from(cpu: &CpuComponent) -> Self {
        let attrs = cpu.attributes();
        RawCpu {
            name: cpu.name.clone(),
            cores: attrs.map(|a| a.cores),
            clock_speed: attrs.map(|a| a.clock_speed),
            score: cpu.known_score(),
        }
    }
}

impl From<RawGpu> for GpuComponent {
    fn from(raw: RawGpu) -> Self {
        let score = match (raw.score, raw.vram_gb) {
            (Some(score), _) => ComponentScore::Known(score),
            (None, vram) => ComponentScore::Lookup(vram.map(|vram_gb| GpuAttributes { vram_gb })),
        };
        Component {
            name: raw.name,
            score,
        }
    }
}

impl From<&GpuComponent> for RawGpu {
    fn from(gpu: &GpuComponent) -> Self {
        RawGpu {
            name: gpu.name.clone(),
            vram_gb: gpu.attributes().map(|a| a.vram_gb),
            score: gpu.known_score(),
        }
    }
}

impl<'de> Deserialize<'de> for CpuComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawCpu::deserialize(deserializer).map(Into::into)
    }
}

impl Serialize for CpuComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawCpu::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GpuComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawGpu::deserialize(deserializer).map(Into::into)
    }
}

impl Serialize for GpuComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawGpu::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_field_becomes_known() {
        let cpu: CpuComponent =
            serde_json::from_str(r#"{"name": "X", "cores": 8, "clock_speed": 4.0, "score": 0}"#)
                .unwrap();
        assert_eq!(cpu.score, ComponentScore::Known(0));
    }

    #[test]
    fn test_partial_cpu_attributes_are_dropped() {
        let cpu: CpuComponent = serde_json::from_str(r#"{"name": "X", "cores": 8}"#).unwrap();
        assert_eq!(cpu.score, ComponentScore::Lookup(None));
    }

    #[test]
    fn test_gpu_vram_becomes_attributes() {
        let gpu: GpuComponent = serde_json::from_str(r#"{"name": "Y", "vram_gb": 12}"#).unwrap();
        assert_eq!(
            gpu.score,
            ComponentScore::Lookup(Some(GpuAttributes { vram_gb: 12.0 }))
        );
    }

    #[test]
    fn test_fractional_vram_parses() {
        let gpu: GpuComponent =
            serde_json::from_str(r#"{"name": "GeForce GTX 970", "vram_gb": 3.5}"#).unwrap();
        assert_eq!(
            gpu.score,
            ComponentScore::Lookup(Some(GpuAttributes { vram_gb: 3.5 }))
        );
    }

    #[test]
    fn test_validate_rejects_negative_vram() {
        let gpu = GpuComponent::with_attributes("b", GpuAttributes { vram_gb: -1.0 });
        let profile = UserProfile::new(CpuComponent::named("a"), gpu, 8.0);
        assert!(matches!(
            profile.validate(),
            Err(RigcheckError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let gpu = GpuComponent::with_score("Y", 9000);
        let json = serde_json::to_value(&gpu).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Y", "score": 9000}));
    }

    #[test]
    fn test_validate_rejects_non_positive_ram() {
        let profile = UserProfile::new(CpuComponent::named("a"), GpuComponent::named("b"), 0.0);
        assert!(matches!(
            profile.validate(),
            Err(RigcheckError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan_clock() {
        let cpu = CpuComponent::with_attributes(
            "a",
            CpuAttributes {
                cores: 4,
                clock_speed: f64::NAN,
            },
        );
        let profile = UserProfile::new(cpu, GpuComponent::named("b"), 8.0);
        assert!(profile.validate().is_err());
    }
}
