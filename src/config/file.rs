use crate::domain::model::{OnFetchFailure, SortOrder};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML config file. Every field is optional; anything unset
/// falls back to the built-in defaults, and CLI flags win over the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub steam: SteamSection,
    pub compare: CompareSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamSection {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSection {
    pub minimum_owners: Option<usize>,
    pub sort: Option<SortOrder>,
    pub on_fetch_failure: Option<OnFetchFailure>,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }
}
