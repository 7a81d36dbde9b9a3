use crate::domain::model::{Account, Game};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream Steam Web API surface the comparison engine depends on.
#[async_trait]
pub trait SteamApi: Send + Sync {
    /// Resolve a vanity name to a canonical SteamID64.
    async fn resolve_vanity(&self, vanity: &str) -> Result<String>;

    /// Fetch the owned-games list for a canonical SteamID64.
    async fn owned_games(&self, steam_id: &str) -> Result<Vec<Game>>;
}

/// Persisted registered-account list. The presentation layer reads it on
/// startup and writes it on every mutation; the aggregator never sees it.
pub trait AccountStore {
    fn load(&self) -> Result<Vec<Account>>;
    fn save(&self, accounts: &[Account]) -> Result<()>;
}
