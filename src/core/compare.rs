use crate::core::overlap::{aggregate_overlap, sort_entries};
use crate::domain::model::{Account, Game, OnFetchFailure, OverlapEntry, OwnedLibrary, SortOrder};
use crate::domain::ports::SteamApi;
use crate::utils::error::{OverlapError, Result};
use crate::utils::validation::{is_canonical_id, validate_account_count, validate_identifier};
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    /// Minimum distinct owners for an entry to be kept. 2 is the
    /// strict-common contract; 1 annotates every game and leaves the
    /// threshold to the presentation layer.
    pub minimum_owners: usize,
    pub on_fetch_failure: OnFetchFailure,
    pub sort: SortOrder,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            minimum_owners: 2,
            on_fetch_failure: OnFetchFailure::default(),
            sort: SortOrder::default(),
        }
    }
}

/// Orchestrates one comparison run: validate, fan out one task per
/// account (resolve + fetch), fan in preserving input order, aggregate.
pub struct CompareEngine<A: SteamApi + 'static> {
    api: Arc<A>,
    options: CompareOptions,
}

impl<A: SteamApi + 'static> CompareEngine<A> {
    pub fn new(api: A, options: CompareOptions) -> Self {
        Self {
            api: Arc::new(api),
            options,
        }
    }

    pub fn with_defaults(api: A) -> Self {
        Self::new(api, CompareOptions::default())
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub async fn run(&self, accounts: &[Account]) -> Result<Vec<OverlapEntry>> {
        validate_account_count(accounts.len())?;
        for account in accounts {
            validate_identifier(&account.id)?;
        }

        tracing::info!("comparing libraries of {} accounts", accounts.len());
        let libraries = self.fetch_all(accounts).await?;

        let mut entries = aggregate_overlap(&libraries, self.options.minimum_owners);
        sort_entries(&mut entries, self.options.sort);
        tracing::info!("{} games matched the owner threshold", entries.len());
        Ok(entries)
    }

    /// Fetches are independent, so each account gets its own task. The
    /// aggregator needs libraries in input order; tasks report their
    /// index and results are reordered after the join.
    async fn fetch_all(&self, accounts: &[Account]) -> Result<Vec<OwnedLibrary>> {
        let mut tasks = JoinSet::new();
        for (index, account) in accounts.iter().enumerate() {
            let api = Arc::clone(&self.api);
            let account = account.clone();
            let policy = self.options.on_fetch_failure;
            tasks.spawn(async move {
                let games = fetch_library(api.as_ref(), &account, policy).await?;
                Ok::<_, OverlapError>((index, OwnedLibrary { account, games }))
            });
        }

        let mut indexed = Vec::with_capacity(accounts.len());
        while let Some(joined) = tasks.join_next().await {
            // Dropping the JoinSet on the first error aborts the
            // remaining in-flight fetches.
            indexed.push(joined??);
        }
        indexed.sort_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, library)| library).collect())
    }
}

/// Resolve one account and fetch its library. A purely numeric
/// identifier is already canonical and skips the resolution call.
/// Resolution failure always aborts; fetch failure obeys the policy.
async fn fetch_library<A: SteamApi + ?Sized>(
    api: &A,
    account: &Account,
    policy: OnFetchFailure,
) -> Result<Vec<Game>> {
    let steam_id = if is_canonical_id(&account.id) {
        account.id.clone()
    } else {
        tracing::debug!("resolving vanity name '{}'", account.id);
        api.resolve_vanity(&account.id).await?
    };

    match api.owned_games(&steam_id).await {
        Ok(games) => {
            tracing::debug!("'{}' owns {} games", account.name, games.len());
            Ok(games)
        }
        Err(err) => match policy {
            OnFetchFailure::AbortAll => Err(err),
            OnFetchFailure::TreatAsEmpty => {
                tracing::warn!(
                    "library of '{}' is unreadable ({}), treating as empty",
                    account.name,
                    err.user_message()
                );
                Ok(Vec::new())
            }
        },
    }
}
