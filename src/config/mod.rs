pub mod cli;
pub mod file;

use crate::adapters::steam::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECONDS};
use crate::config::cli::Cli;
use crate::config::file::FileConfig;
use crate::core::compare::CompareOptions;
use crate::utils::error::{OverlapError, Result};
use crate::utils::validation::validate_url;
use std::path::Path;
use std::time::Duration;

pub const API_KEY_ENV: &str = "STEAM_API_KEY";
pub const DEFAULT_CONFIG_FILE: &str = "overlap.toml";

/// Fully resolved runtime settings: defaults < config file < CLI flags.
/// The API key only ever comes from the environment; a missing key is
/// fatal before any network work starts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
    pub api_key: String,
    pub timeout: Duration,
    pub compare: CompareOptions,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OverlapError::ConfigError {
                message: format!("{} environment variable is not set", API_KEY_ENV),
            })?;

        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                FileConfig::load(DEFAULT_CONFIG_FILE)?
            }
            None => FileConfig::default(),
        };

        Self::merge(cli, file, api_key)
    }

    fn merge(cli: &Cli, file: FileConfig, api_key: String) -> Result<Self> {
        let api_base = cli
            .api_base
            .clone()
            .or(file.steam.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        validate_url("api_base", &api_base)?;

        let timeout_seconds = cli
            .timeout_seconds
            .or(file.steam.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let defaults = CompareOptions::default();
        let compare = CompareOptions {
            minimum_owners: cli
                .min_owners
                .or(file.compare.minimum_owners)
                .unwrap_or(defaults.minimum_owners),
            sort: cli.sort.or(file.compare.sort).unwrap_or(defaults.sort),
            on_fetch_failure: cli
                .on_fetch_failure
                .or(file.compare.on_fetch_failure)
                .unwrap_or(defaults.on_fetch_failure),
        };

        if compare.minimum_owners < 1 {
            return Err(OverlapError::ConfigError {
                message: "min_owners must be at least 1".to_string(),
            });
        }

        Ok(Self {
            api_base,
            api_key,
            timeout: Duration::from_secs(timeout_seconds),
            compare,
        })
    }
}
