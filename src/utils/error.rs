use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("Steam API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("could not resolve vanity name '{identifier}'")]
    ResolutionError { identifier: String },

    #[error("could not fetch owned games for '{account}': {reason}")]
    FetchError { account: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Background task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl OverlapError {
    /// Short message safe to show across the service boundary.
    /// No internal detail (URLs, paths, task context) crosses here.
    pub fn user_message(&self) -> String {
        match self {
            OverlapError::ApiError(_) => "Steam API request failed".to_string(),
            OverlapError::ResolutionError { identifier } => {
                format!("Could not resolve '{}' to a Steam ID", identifier)
            }
            OverlapError::FetchError { account, .. } => {
                format!("Could not read the game library of '{}'", account)
            }
            OverlapError::ConfigError { message } => message.clone(),
            OverlapError::ValidationError { message } => message.clone(),
            _ => "Internal error".to_string(),
        }
    }

    /// Exit code for the CLI. Config problems are distinguished from
    /// comparison failures so scripts can react to a missing API key.
    pub fn exit_code(&self) -> i32 {
        match self {
            OverlapError::ConfigError { .. } => 3,
            OverlapError::ValidationError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlapError>;
