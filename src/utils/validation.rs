use crate::utils::error::{OverlapError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A canonical SteamID64 is purely numeric. Anything else is a vanity
/// name that has to go through ResolveVanityURL first.
pub fn is_canonical_id(identifier: &str) -> bool {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    let re = NUMERIC.get_or_init(|| Regex::new(r"^\d+$").expect("static pattern"));
    re.is_match(identifier)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(OverlapError::ConfigError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(OverlapError::ConfigError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(OverlapError::ConfigError {
            message: format!("{}: invalid URL '{}': {}", field_name, url_str, e),
        }),
    }
}

/// A comparison needs at least two accounts to be meaningful.
pub fn validate_account_count(count: usize) -> Result<()> {
    if count < 2 {
        return Err(OverlapError::ValidationError {
            message: format!("at least 2 accounts are required to compare, got {}", count),
        });
    }
    Ok(())
}

pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(OverlapError::ValidationError {
            message: "account identifier cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical_id() {
        assert!(is_canonical_id("76561198000000000"));
        assert!(is_canonical_id("123456789"));
        assert!(!is_canonical_id("gabelogannewell"));
        assert!(!is_canonical_id("76561198abc"));
        assert!(!is_canonical_id(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "https://api.steampowered.com").is_ok());
        assert!(validate_url("api_base", "http://localhost:8080").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "not-a-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_account_count() {
        assert!(validate_account_count(2).is_ok());
        assert!(validate_account_count(5).is_ok());
        assert!(validate_account_count(1).is_err());
        assert!(validate_account_count(0).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("fizz").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
    }
}
