use crate::adapters::store::DEFAULT_STORE_FILE;
use crate::domain::model::{Account, OnFetchFailure, SortOrder};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "steam-overlap")]
#[command(about = "Compare Steam libraries across accounts and find the games everyone owns")]
pub struct Cli {
    /// Accounts to compare, as `ID` or `ID=DisplayName` (SteamID64 or
    /// vanity name). With none given, the stored list is used.
    pub accounts: Vec<String>,

    /// Config file path (defaults to ./overlap.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Steam Web API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Minimum owners for a game to appear (1 keeps everything)
    #[arg(long)]
    pub min_owners: Option<usize>,

    /// Sort direction for the owner count
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// What to do when one account's library cannot be read
    #[arg(long, value_enum)]
    pub on_fetch_failure: Option<OnFetchFailure>,

    /// Registered-account list file
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Persist the accounts given on the command line to the store
    #[arg(long)]
    pub save: bool,

    /// Write the comparison result as CSV to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// `ID=DisplayName` splits into identifier and name; a bare `ID` doubles
/// as its own display name.
pub fn parse_account_arg(arg: &str) -> Account {
    if let Some((id, name)) = arg.split_once('=') {
        let id = id.trim();
        let name = name.trim();
        if !name.is_empty() {
            return Account::new(id, name);
        }
        return Account::new(id, id);
    }
    let id = arg.trim();
    Account::new(id, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_with_name() {
        assert_eq!(
            parse_account_arg("76561198000000000=Alice"),
            Account::new("76561198000000000", "Alice")
        );
    }

    #[test]
    fn test_parse_bare_account() {
        assert_eq!(parse_account_arg("fizz"), Account::new("fizz", "fizz"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_account_arg(" fizz = Fizz Buzz "),
            Account::new("fizz", "Fizz Buzz")
        );
    }

    #[test]
    fn test_parse_empty_name_falls_back_to_id() {
        assert_eq!(parse_account_arg("fizz="), Account::new("fizz", "fizz"));
    }
}
