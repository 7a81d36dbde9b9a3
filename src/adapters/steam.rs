use crate::domain::model::Game;
use crate::domain::ports::SteamApi;
use crate::utils::error::{OverlapError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Steam Web API client. Holds the key and a bounded-timeout reqwest
/// client; both endpoints are simple keyed GETs.
pub struct SteamClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl SteamClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ResolveEnvelope {
    response: ResolveBody,
}

#[derive(Debug, Deserialize)]
struct ResolveBody {
    success: i64,
    steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesEnvelope {
    response: OwnedGamesBody,
}

// A private profile comes back as an empty `response` object, so
// `games` has to be optional rather than defaulted.
#[derive(Debug, Deserialize)]
struct OwnedGamesBody {
    games: Option<Vec<Game>>,
}

#[async_trait]
impl SteamApi for SteamClient {
    async fn resolve_vanity(&self, vanity: &str) -> Result<String> {
        let url = format!("{}/ISteamUser/ResolveVanityURL/v0001/", self.api_base);
        let envelope: ResolveEnvelope = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("vanityurl", vanity)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match envelope.response {
            ResolveBody {
                success: 1,
                steamid: Some(steamid),
            } => Ok(steamid),
            _ => Err(OverlapError::ResolutionError {
                identifier: vanity.to_string(),
            }),
        }
    }

    async fn owned_games(&self, steam_id: &str) -> Result<Vec<Game>> {
        let url = format!("{}/IPlayerService/GetOwnedGames/v0001/", self.api_base);
        let envelope: OwnedGamesEnvelope = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        envelope
            .response
            .games
            .ok_or_else(|| OverlapError::FetchError {
                account: steam_id.to_string(),
                reason: "library is private or unreadable".to_string(),
            })
    }
}
