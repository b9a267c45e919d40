use super::ast::{Clause, Field, FilterExpr};
use crate::catalog::ShowRecord;

pub fn matches(show: &ShowRecord, expr: &FilterExpr) -> bool {
    expr.clauses()
        .iter()
        .all(|clause| matches_clause(show, clause))
}

fn matches_clause(show: &ShowRecord, clause: &Clause) -> bool {
    match clause {
        Clause::Field { field, value } => matches_field(show, *field, value),
        Clause::FreeText(value) => {
            let needle_lc = value.trim().to_lowercase();
            searchable_text(show).any(|text| contains_lc(text, &needle_lc))
        }
    }
}

fn matches_field(show: &ShowRecord, field: Field, value: &str) -> bool {
    let needle_lc = value.trim().to_lowercase();
    match field {
        Field::Artist => contains_lc(&show.artist, &needle_lc),
        Field::Song => show.songs.iter().any(|song| contains_lc(song, &needle_lc)),
        Field::Type => optional_contains(show.recording_type.as_deref(), &needle_lc),
        Field::Country => optional_contains(show.country.as_deref(), &needle_lc),
        Field::Year => match (needle_lc.parse::<u32>(), show.year()) {
            (Ok(wanted), Some(year)) => wanted == year,
            _ => false,
        },
    }
}

/// Every attribute an unqualified term is checked against.
fn searchable_text(show: &ShowRecord) -> impl Iterator<Item = &str> {
    [
        Some(show.artist.as_str()),
        show.venue_name.as_deref(),
        show.city.as_deref(),
        show.country.as_deref(),
        show.event_or_festival.as_deref(),
        show.recording_type.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(show.songs.iter().map(String::as_str))
}

fn optional_contains(value: Option<&str>, needle_lc: &str) -> bool {
    value.is_some_and(|v| contains_lc(v, needle_lc))
}

fn contains_lc(value: &str, needle_lc: &str) -> bool {
    value.to_lowercase().contains(needle_lc)
}
