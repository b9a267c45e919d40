//! Defaults and run-time settings.

use std::path::PathBuf;

use crate::artwork::ChecksumPathResolver;
use crate::sorting::SortSpec;

pub const APP_NAME: &str = "showshelf";

pub const DEFAULT_CATALOG_PATH: &str = "shows.json";

pub const DEFAULT_IMAGE_BASE: &str = "/images";

/// Cards show the first image of a recording.
pub const CARD_IMAGE_INDEX: u32 = 1;

pub const LOG_FILE_NAME: &str = "showshelf.log";

pub const PLACEHOLDER_PALETTE: [&str; 8] = [
    "bg-red-900",
    "bg-blue-900",
    "bg-green-900",
    "bg-purple-900",
    "bg-pink-900",
    "bg-indigo-900",
    "bg-yellow-900",
    "bg-teal-900",
];

#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub image_base: String,
    pub sort: Option<SortSpec>,
    pub json: bool,
}

impl Settings {
    pub fn resolver(&self) -> ChecksumPathResolver {
        ChecksumPathResolver::new(self.image_base.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            sort: None,
            json: false,
        }
    }
}
