//! Card artwork: image lookup by checksum and the placeholder shown when a
//! show has no image.

use serde::Serialize;

use crate::config::{DEFAULT_IMAGE_BASE, PLACEHOLDER_PALETTE};

/// Maps a media checksum and image index to a displayable URL.
pub trait AssetResolver {
    fn resolve(&self, checksum: &str, index: u32) -> Option<String>;
}

impl<F> AssetResolver for F
where
    F: Fn(&str, u32) -> Option<String>,
{
    fn resolve(&self, checksum: &str, index: u32) -> Option<String> {
        self(checksum, index)
    }
}

/// `{base}/{checksum}_{index:02}.jpg`
#[derive(Debug, Clone)]
pub struct ChecksumPathResolver {
    base: String,
}

impl ChecksumPathResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ChecksumPathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl AssetResolver for ChecksumPathResolver {
    fn resolve(&self, checksum: &str, index: u32) -> Option<String> {
        let checksum = checksum.trim();
        if checksum.is_empty() {
            return None;
        }
        Some(format!("{}/{}_{:02}.jpg", self.base, checksum, index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub initials: String,
    pub color: &'static str,
}

impl Placeholder {
    pub fn for_artist(artist: &str) -> Self {
        Self {
            initials: artist_initials(artist),
            color: placeholder_color(artist),
        }
    }
}

/// First letter of the first two words, upper-cased.
pub fn artist_initials(artist: &str) -> String {
    artist
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Stable palette pick for an artist name.
pub fn placeholder_color(artist: &str) -> &'static str {
    let idx = fnv1a_32(artist.as_bytes()) as usize % PLACEHOLDER_PALETTE.len();
    PLACEHOLDER_PALETTE[idx]
}

fn fnv1a_32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(PRIME)
    })
}
