use std::{fmt::Display, io::Write};

use serde::Serialize;

/// Writes one line per group: the item left-aligned, its session count right-aligned.
pub fn write_table<T: Display>(mut out: impl Write, listing: &[(T, u32)]) -> std::io::Result<()> {
    let titles: Vec<String> = listing.iter().map(|(item, _)| item.to_string()).collect();
    let title_width = titles
        .iter()
        .map(|title| title.chars().count())
        .max()
        .unwrap_or(0);
    let count_width = listing
        .iter()
        .map(|(_, sessions)| sessions.to_string().len())
        .max()
        .unwrap_or(0);

    for (title, (_, sessions)) in titles.iter().zip(listing) {
        writeln!(out, "{title:<title_width$} {sessions:>count_width$}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Entry<'a, T> {
    item: &'a T,
    sessions: u32,
}

/// Writes the listing as a JSON array of `{ "item": ..., "sessions": n }` objects.
pub fn write_json<T: Serialize>(mut out: impl Write, listing: &[(T, u32)]) -> anyhow::Result<()> {
    let entries: Vec<_> = listing
        .iter()
        .map(|(item, sessions)| Entry {
            item,
            sessions: *sessions,
        })
        .collect();
    serde_json::to_writer_pretty(&mut out, &entries)?;
    writeln!(out)?;
    Ok(())
}
