use crate::core::compare::CompareEngine;
use crate::domain::model::{Account, OverlapEntry};
use crate::domain::ports::SteamApi;
use crate::utils::error::{OverlapError, Result};
use serde::{Deserialize, Serialize};

/// Wire shape of the comparison boundary consumed by the presentation
/// layer. Identifiers and display names are parallel arrays, matching
/// the JSON the UI already sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub account_identifiers: Vec<String>,
    pub display_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub games: Vec<OverlapEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&OverlapError> for ErrorResponse {
    fn from(err: &OverlapError) -> Self {
        Self {
            error: err.user_message(),
        }
    }
}

impl CompareRequest {
    pub fn into_accounts(self) -> Result<Vec<Account>> {
        if self.account_identifiers.len() != self.display_names.len() {
            return Err(OverlapError::ValidationError {
                message: format!(
                    "got {} identifiers but {} display names",
                    self.account_identifiers.len(),
                    self.display_names.len()
                ),
            });
        }

        Ok(self
            .account_identifiers
            .into_iter()
            .zip(self.display_names)
            .map(|(id, name)| Account::new(id, name))
            .collect())
    }
}

/// Run one comparison for the presentation layer. Errors come back as
/// the `{ error }` payload with the short user message only.
pub async fn handle_compare<A: SteamApi + 'static>(
    engine: &CompareEngine<A>,
    request: CompareRequest,
) -> std::result::Result<CompareResponse, ErrorResponse> {
    let accounts = request.into_accounts().map_err(|e| {
        tracing::warn!("rejected comparison request: {}", e);
        ErrorResponse::from(&e)
    })?;

    match engine.run(&accounts).await {
        Ok(games) => Ok(CompareResponse { games }),
        Err(e) => {
            tracing::error!("comparison failed: {}", e);
            Err(ErrorResponse::from(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let json = r#"{
            "accountIdentifiers": ["123", "fizz"],
            "displayNames": ["Alice", "Bob"]
        }"#;

        let request: CompareRequest = serde_json::from_str(json).unwrap();
        let accounts = request.into_accounts().unwrap();
        assert_eq!(accounts[0], Account::new("123", "Alice"));
        assert_eq!(accounts[1], Account::new("fizz", "Bob"));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let request = CompareRequest {
            account_identifiers: vec!["123".to_string()],
            display_names: vec!["Alice".to_string(), "Bob".to_string()],
        };
        assert!(request.into_accounts().is_err());
    }

    #[test]
    fn test_error_response_hides_internals() {
        let err = OverlapError::FetchError {
            account: "Bob".to_string(),
            reason: "HTTP 500 from https://api.steampowered.com/...".to_string(),
        };
        let response = ErrorResponse::from(&err);
        assert!(response.error.contains("Bob"));
        assert!(!response.error.contains("api.steampowered.com"));
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        use crate::domain::model::Game;
        let entry = OverlapEntry {
            game: Game::new(440, "Team Fortress 2"),
            owners: vec!["A".to_string(), "B".to_string()],
            owner_count: 2,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["ownerCount"], 2);
        assert_eq!(value["game"]["appid"], 440);
    }
}
