use crate::domain::model::OverlapEntry;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Plain-text report grouped under "owned by N" headings, the same
/// grouping the UI renders. Entries are assumed already sorted.
pub fn render_text(entries: &[OverlapEntry]) -> String {
    if entries.is_empty() {
        return "No games matched the owner threshold.\n".to_string();
    }

    let mut out = String::new();
    let mut current_count: Option<usize> = None;

    for entry in entries {
        if current_count != Some(entry.owner_count) {
            let group_size = entries
                .iter()
                .filter(|e| e.owner_count == entry.owner_count)
                .count();
            out.push_str(&format!(
                "\nOwned by {} account{} ({} game{})\n",
                entry.owner_count,
                if entry.owner_count == 1 { "" } else { "s" },
                group_size,
                if group_size == 1 { "" } else { "s" },
            ));
            current_count = Some(entry.owner_count);
        }
        out.push_str(&format!(
            "  {} [{}]\n",
            entry.game.name,
            entry.owners.join(", ")
        ));
    }
    out
}

/// CSV export of a comparison result.
pub fn render_csv(entries: &[OverlapEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "appid",
        "name",
        "owner_count",
        "owners",
        "playtime_hours",
        "last_played",
    ])?;

    for entry in entries {
        let playtime_hours = entry
            .game
            .playtime_forever
            .map(|minutes| format!("{:.1}", minutes as f64 / 60.0))
            .unwrap_or_default();
        let last_played = entry
            .game
            .rtime_last_played
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        writer.write_record([
            entry.game.appid.to_string(),
            entry.game.name.clone(),
            entry.owner_count.to_string(),
            entry.owners.join("; "),
            playtime_hours,
            last_played,
        ])?;
    }

    let data = writer.into_inner().map_err(std::io::Error::other)?;
    Ok(String::from_utf8(data).map_err(std::io::Error::other)?)
}
