use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use dirs::config_dir;

use crate::error::{Result, RigcheckError};
use crate::scores::ScoreTables;
use crate::title::CommandTitleLookup;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// `tracing` filter directive, e.g. "info" or "rigcheck=debug"
    pub log_level: Option<String>,
    #[serde(default)]
    pub tables: TablesConfig,
    pub title_lookup: Option<TitleLookupConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TablesConfig {
    /// Score table file; `~` is expanded
    pub path: Option<String>,
    /// Use only the file's entries instead of layering them over the bundled tables
    #[serde(default)]
    pub replace_builtin: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TitleLookupConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("rigcheck/config.toml"))
}

/// Load the user config; a missing file means defaults
pub fn load_config() -> Result<Config> {
    match user_config_path() {
        Some(path) if path.exists() => Config::load(&path),
        _ => Ok(Config::default()),
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let config_data = fs::read_to_string(path)?;
        Config::from_toml_str(&config_data)
    }

    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::de::from_str(content)?)
    }

    /// The score tables this config selects
    pub fn score_tables(&self) -> Result<ScoreTables> {
        let Some(path) = self.tables.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(ScoreTables::builtin().clone());
        };

        let expanded = shellexpand::tilde(path).to_string();
        if !Path::new(&expanded).exists() {
            return Err(RigcheckError::Config(format!(
                "score table file not found: {}",
                expanded
            )));
        }

        let tables = ScoreTables::load(&expanded)?;
        if self.tables.replace_builtin {
            Ok(tables)
        } else {
            Ok(tables.merged_over_builtin())
        }
    }

    pub fn title_lookup(&self) -> Option<CommandTitleLookup> {
        self.title_lookup
            .as_ref()
            .map(|c| CommandTitleLookup::new(c.program.clone(), c.args.clone()))
    }

    /// Like `title_lookup`, for callers that cannot go on without one
    pub fn require_title_lookup(&self) -> Result<CommandTitleLookup> {
        self.title_lookup()
            .ok_or_else(|| RigcheckError::Config("no [title_lookup] program configured".to_string()))
    }
}
