//! Score tables: exact-match, case-sensitive name to score lookups

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::builtin::{CPU_SCORES, GPU_SCORES};
use crate::error::Result;

static BUILTIN: LazyLock<ScoreTables> = LazyLock::new(|| ScoreTables {
    cpu: ScoreTable::from_entries(CPU_SCORES),
    gpu: ScoreTable::from_entries(GPU_SCORES),
});

/// Read-only mapping from canonical component name to score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: HashMap<String, u32>,
}

impl ScoreTable {
    pub fn from_entries(entries: &[(&str, u32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `other` replace entries of the same name in `self`
    fn merge(&mut self, other: ScoreTable) {
        self.entries.extend(other.entries);
    }
}

impl From<HashMap<String, u32>> for ScoreTable {
    fn from(entries: HashMap<String, u32>) -> Self {
        Self { entries }
    }
}

/// The CPU and GPU tables used for one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTables {
    pub cpu: ScoreTable,
    pub gpu: ScoreTable,
}

#[derive(Deserialize)]
struct TableFile {
    #[serde(default)]
    cpu: HashMap<String, u32>,
    #[serde(default)]
    gpu: HashMap<String, u32>,
}

impl ScoreTables {
    /// Bundled tables, built on first use
    pub fn builtin() -> &'static ScoreTables {
        &BUILTIN
    }

    /// Parse a table file with `[cpu]` and `[gpu]` sections
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(content)?;
        Ok(Self {
            cpu: file.cpu.into(),
            gpu: file.gpu.into(),
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let tables = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            cpu_entries = tables.cpu.len(),
            gpu_entries = tables.gpu.len(),
            "loaded score tables"
        );
        Ok(tables)
    }

    /// Layer these tables on top of the bundled ones
    pub fn merged_over_builtin(self) -> Self {
        let mut merged = Self::builtin().clone();
        merged.cpu.merge(self.cpu);
        merged.gpu.merge(self.gpu);
        merged
    }
}
