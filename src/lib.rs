pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::steam::SteamClient;
pub use adapters::store::JsonAccountStore;
pub use config::Settings;
pub use core::compare::{CompareEngine, CompareOptions};
pub use core::overlap::{aggregate_overlap, sort_entries};
pub use core::service::{handle_compare, CompareRequest, CompareResponse, ErrorResponse};
pub use domain::model::{Account, Game, OnFetchFailure, OverlapEntry, OwnedLibrary, SortOrder};
pub use domain::ports::{AccountStore, SteamApi};
pub use utils::error::{OverlapError, Result};
