//! Catalog records and the sources they are loaded from.

mod error;
mod record;

pub use error::{CatalogError, CatalogErrorCode, CatalogResult};
pub use record::ShowRecord;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Anything that can hand over the full set of shows to browse.
pub trait RecordSource {
    fn load(&self) -> CatalogResult<Vec<ShowRecord>>;
}

/// Catalog stored as JSON: either a bare array of shows or `{ "shows": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<ShowRecord>),
    Wrapped { shows: Vec<ShowRecord> },
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> CatalogResult<Vec<ShowRecord>> {
        let context = format!("catalog {}", self.path.display());
        let raw = fs::read_to_string(&self.path)
            .map_err(|error| CatalogError::from_io_error(&context, error))?;
        let shows =
            parse_catalog(&raw).map_err(|error| CatalogError::from_json_error(&context, error))?;
        debug!(path = %self.path.display(), count = shows.len(), "catalog loaded");
        Ok(shows)
    }
}

pub fn parse_catalog(raw: &str) -> Result<Vec<ShowRecord>, serde_json::Error> {
    let shows = match serde_json::from_str::<CatalogDocument>(raw)? {
        CatalogDocument::Bare(shows) | CatalogDocument::Wrapped { shows } => shows,
    };
    Ok(drop_unnamed(shows))
}

fn drop_unnamed(shows: Vec<ShowRecord>) -> Vec<ShowRecord> {
    let total = shows.len();
    let kept: Vec<ShowRecord> = shows
        .into_iter()
        .filter(|show| !show.artist.trim().is_empty())
        .collect();
    if kept.len() != total {
        warn!(skipped = total - kept.len(), "skipping shows without an artist");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::{CatalogErrorCode, JsonFileSource, RecordSource};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn uniq_path(label: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_nanos();
        std::env::temp_dir().join(format!("showshelf-catalog-test-{label}-{ts}.json"))
    }

    #[test]
    fn loads_bare_array() {
        let path = uniq_path("bare");
        fs::write(
            &path,
            r#"[{"Artist": "Pearl Jam", "Songs": ["Alive"]}, {"Artist": "Nirvana"}]"#,
        )
        .unwrap();
        let shows = JsonFileSource::new(&path).load().unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].artist, "Pearl Jam");
        assert_eq!(shows[1].artist, "Nirvana");
    }

    #[test]
    fn loads_wrapped_document_and_skips_blank_artists() {
        let path = uniq_path("wrapped");
        fs::write(
            &path,
            r#"{"shows": [{"Artist": "  "}, {"Artist": "Phish", "ShowDate": "1997-11-22"}]}"#,
        )
        .unwrap();
        let shows = JsonFileSource::new(&path).load().unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].artist, "Phish");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = JsonFileSource::new(uniq_path("missing")).load().unwrap_err();
        assert_eq!(err.code(), CatalogErrorCode::NotFound);
    }

    #[test]
    fn malformed_json_is_parse_failure() {
        let path = uniq_path("broken");
        fs::write(&path, "[{\"Artist\": ").unwrap();
        let err = JsonFileSource::new(&path).load().unwrap_err();
        let _ = fs::remove_file(&path);
        assert_eq!(err.code(), CatalogErrorCode::ParseFailed);
        assert!(err.to_string().contains("catalog"));
    }
}
