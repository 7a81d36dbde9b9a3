use serde::{Deserialize, Serialize};

/// A registered identity whose library takes part in a comparison.
/// `id` is either a canonical numeric SteamID64 or a vanity name that
/// still needs resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One owned game as returned by GetOwnedGames. Identity is `appid`.
/// Every field besides `appid` and `name` is optional upstream; unknown
/// fields in the raw record are discarded by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub appid: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    /// Total playtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_forever: Option<u64>,
    /// Unix timestamp of the last session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtime_last_played: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_community_visible_stats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_windows_forever: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_mac_forever: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_linux_forever: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_deck_forever: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_disconnected: Option<u64>,
}

impl Game {
    pub fn new(appid: u32, name: impl Into<String>) -> Self {
        Self {
            appid,
            name: name.into(),
            img_icon_url: None,
            playtime_forever: None,
            rtime_last_played: None,
            has_community_visible_stats: None,
            playtime_windows_forever: None,
            playtime_mac_forever: None,
            playtime_linux_forever: None,
            playtime_deck_forever: None,
            playtime_disconnected: None,
        }
    }
}

/// One account's fetched library, in upstream order.
#[derive(Debug, Clone)]
pub struct OwnedLibrary {
    pub account: Account,
    pub games: Vec<Game>,
}

/// A game together with the display names of the accounts owning it.
/// `owner_count == owners.len()` always; owners appear once each, in
/// account-processing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapEntry {
    pub game: Game,
    pub owners: Vec<String>,
    pub owner_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// What to do when one account's library cannot be read (private
/// profile, upstream error). Resolution failures are not covered by
/// this policy; they always abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OnFetchFailure {
    #[default]
    AbortAll,
    TreatAsEmpty,
}
