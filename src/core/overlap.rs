use crate::domain::model::{OverlapEntry, OwnedLibrary, SortOrder};
use std::collections::{HashMap, HashSet};

/// Fold all fetched libraries into one entry per game, annotated with the
/// owning accounts' display names, keeping only entries owned by at least
/// `minimum_owners` accounts. `minimum_owners = 2` is the "common games"
/// contract; `1` keeps everything and defers filtering to the caller.
///
/// Pure function: no IO, no shared state. The accumulator preserves item
/// encounter order, so ties after sorting stay in that order.
pub fn aggregate_overlap(libraries: &[OwnedLibrary], minimum_owners: usize) -> Vec<OverlapEntry> {
    let mut entries: Vec<OverlapEntry> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for library in libraries {
        // An account credits each appid at most once, even if its raw
        // list contains duplicates.
        let mut seen: HashSet<u32> = HashSet::new();

        for game in &library.games {
            if !seen.insert(game.appid) {
                continue;
            }

            match index.get(&game.appid) {
                Some(&slot) => {
                    let entry = &mut entries[slot];
                    entry.owners.push(library.account.name.clone());
                    entry.owner_count += 1;
                }
                None => {
                    index.insert(game.appid, entries.len());
                    entries.push(OverlapEntry {
                        game: game.clone(),
                        owners: vec![library.account.name.clone()],
                        owner_count: 1,
                    });
                }
            }
        }
    }

    entries.retain(|entry| entry.owner_count >= minimum_owners);
    sort_entries(&mut entries, SortOrder::Desc);
    entries
}

/// Stable sort by owner count; equal counts keep encounter order.
pub fn sort_entries(entries: &mut [OverlapEntry], order: SortOrder) {
    match order {
        SortOrder::Asc => entries.sort_by(|a, b| a.owner_count.cmp(&b.owner_count)),
        SortOrder::Desc => entries.sort_by(|a, b| b.owner_count.cmp(&a.owner_count)),
    }
}
