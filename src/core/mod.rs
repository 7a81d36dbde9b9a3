pub mod compare;
pub mod overlap;
pub mod report;
pub mod service;

pub use crate::domain::model::{
    Account, Game, OnFetchFailure, OverlapEntry, OwnedLibrary, SortOrder,
};
pub use crate::domain::ports::{AccountStore, SteamApi};
pub use crate::utils::error::Result;
