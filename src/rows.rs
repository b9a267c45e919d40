//! Shows grouped into one horizontal row per artist.

use serde::Serialize;
use std::collections::HashMap;

use crate::artwork::AssetResolver;
use crate::card::ShowCard;
use crate::catalog::ShowRecord;
use crate::sorting::{sort_shows, SortSpec};

#[derive(Debug, Clone)]
pub struct ArtistRow<'a> {
    pub artist: &'a str,
    pub shows: Vec<&'a ShowRecord>,
}

impl<'a> ArtistRow<'a> {
    pub fn anchor(&self) -> String {
        artist_anchor(self.artist)
    }

    pub fn sort(&mut self, spec: Option<SortSpec>) {
        sort_shows(&mut self.shows, spec);
    }

    pub fn view(&self, resolver: &dyn AssetResolver) -> RowView {
        RowView {
            artist: self.artist.to_string(),
            anchor: self.anchor(),
            cards: self
                .shows
                .iter()
                .map(|show| ShowCard::build(show, resolver))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub artist: String,
    pub anchor: String,
    pub cards: Vec<ShowCard>,
}

/// Rows appear in the order each artist is first seen; shows keep input order.
pub fn group_by_artist<'a>(shows: impl IntoIterator<Item = &'a ShowRecord>) -> Vec<ArtistRow<'a>> {
    let mut rows: Vec<ArtistRow<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for show in shows {
        let artist = show.artist.as_str();
        match index.get(artist) {
            Some(&pos) => rows[pos].shows.push(show),
            None => {
                index.insert(artist, rows.len());
                rows.push(ArtistRow {
                    artist,
                    shows: vec![show],
                });
            }
        }
    }

    rows
}

/// Element id of an artist row: `artist-` plus the name with whitespace runs dashed.
pub fn artist_anchor(artist: &str) -> String {
    let mut out = String::from("artist-");
    out.push_str(&artist.split_whitespace().collect::<Vec<_>>().join("-"));
    out
}

/// Names for the artist dropdown, in row order.
pub fn artist_names<'a>(rows: &[ArtistRow<'a>]) -> Vec<&'a str> {
    rows.iter().map(|row| row.artist).collect()
}

pub fn position_of(rows: &[ArtistRow<'_>], artist: &str) -> Option<usize> {
    rows.iter().position(|row| row.artist == artist)
}
