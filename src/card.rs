//! Display-ready data for one show card.

use serde::Serialize;

use crate::artwork::{AssetResolver, Placeholder};
use crate::catalog::ShowRecord;
use crate::config::CARD_IMAGE_INDEX;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    pub artist: String,
    pub year_label: String,
    pub has_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_type: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
}

impl ShowCard {
    pub fn build(show: &ShowRecord, resolver: &dyn AssetResolver) -> Self {
        let image_url = show
            .checksum_sha1
            .as_deref()
            .and_then(|checksum| resolver.resolve(checksum, CARD_IMAGE_INDEX));
        let placeholder = match image_url {
            Some(_) => None,
            None => Some(Placeholder::for_artist(&show.artist)),
        };

        Self {
            element_id: show.show_id.as_ref().map(|id| format!("show-{id}")),
            artist: show.artist.clone(),
            year_label: year_label(show),
            has_date: show.show_date.is_some(),
            recording_type: show.recording_type.clone(),
            location: location(show),
            venue: show.venue_name.clone(),
            event: show.event_or_festival.clone(),
            duration: show.duration_sec.and_then(duration_text),
            resolution: resolution(show),
            image_url,
            placeholder,
        }
    }
}

/// Date segment before the first dash, as printed on the badge.
pub fn year_label(show: &ShowRecord) -> String {
    match show.show_date.as_deref() {
        Some(date) => date.split('-').next().unwrap_or(date).to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// `2h 5m` or `45m`; `None` below one minute.
pub fn duration_text(seconds: u64) -> Option<String> {
    let minutes = seconds / 60;
    if minutes == 0 {
        return None;
    }
    let (hours, rest) = (minutes / 60, minutes % 60);
    Some(if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    })
}

pub fn location(show: &ShowRecord) -> String {
    let parts: Vec<&str> = [show.city.as_deref(), show.country.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !parts.is_empty() {
        return parts.join(", ");
    }
    show.venue_name
        .clone()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn resolution(show: &ShowRecord) -> Option<String> {
    match (show.width, show.height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some(format!("{w}x{h}")),
        _ => None,
    }
}
