use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::ShowRecord;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Artist,
    Venue,
    Duration,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Asc,
        }
    }
}

/// Missing values go last regardless of direction.
fn cmp_opt<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(la), Some(lb)) => {
            let ord = la.cmp(&lb);
            if direction == SortDirection::Desc {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum DateKey<'a> {
    Parsed(NaiveDate),
    Raw(&'a str),
}

fn date_key(show: &ShowRecord) -> Option<DateKey<'_>> {
    match show.date() {
        Some(date) => Some(DateKey::Parsed(date)),
        None => show.show_date.as_deref().map(DateKey::Raw),
    }
}

fn lowercase(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

pub fn sort_shows(shows: &mut [&ShowRecord], spec: Option<SortSpec>) {
    let spec = spec.unwrap_or_default();

    shows.sort_by(|a, b| {
        let ord = match spec.field {
            SortField::Date => cmp_opt(date_key(a), date_key(b), spec.direction),
            SortField::Artist => cmp_opt(
                Some(a.artist.to_lowercase()),
                Some(b.artist.to_lowercase()),
                spec.direction,
            ),
            SortField::Venue => cmp_opt(
                lowercase(a.venue_name.as_deref()),
                lowercase(b.venue_name.as_deref()),
                spec.direction,
            ),
            SortField::Duration => cmp_opt(a.duration_sec, b.duration_sec, spec.direction),
        };

        if ord == Ordering::Equal {
            a.artist.to_lowercase().cmp(&b.artist.to_lowercase())
        } else {
            ord
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(artist: &str, date: Option<&str>, secs: Option<u64>) -> ShowRecord {
        ShowRecord {
            show_date: date.map(str::to_string),
            duration_sec: secs,
            ..ShowRecord::new(artist)
        }
    }

    fn artists(shows: &[&ShowRecord]) -> Vec<String> {
        shows.iter().map(|s| s.artist.clone()).collect()
    }

    #[test]
    fn sorts_by_date_with_missing_dates_last() {
        let a = show("A", Some("1999-07-05"), None);
        let b = show("B", None, None);
        let c = show("C", Some("1991-08-23"), None);
        let d = show("D", Some("1995-unknown"), None);
        let mut shows = vec![&a, &b, &c, &d];

        sort_shows(&mut shows, None);
        assert_eq!(artists(&shows), vec!["C", "A", "D", "B"]);

        sort_shows(
            &mut shows,
            Some(SortSpec {
                field: SortField::Date,
                direction: SortDirection::Desc,
            }),
        );
        assert_eq!(artists(&shows), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn sorts_by_duration_and_breaks_ties_by_artist() {
        let a = show("b-side", None, Some(3600));
        let b = show("A-side", None, Some(3600));
        let c = show("Short", None, Some(60));
        let mut shows = vec![&a, &b, &c];
        sort_shows(
            &mut shows,
            Some(SortSpec {
                field: SortField::Duration,
                direction: SortDirection::Asc,
            }),
        );
        assert_eq!(artists(&shows), vec!["Short", "A-side", "b-side"]);
    }

    #[test]
    fn parses_sort_spec_from_json() {
        let spec: SortSpec = serde_json::from_str(r#"{"field": "venue"}"#).unwrap();
        assert_eq!(spec.field, SortField::Venue);
        assert_eq!(spec.direction, SortDirection::Asc);
    }
}
