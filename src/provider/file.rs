use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use super::{EditionSource, FetchError};
use crate::edition::Edition;

/// Serves one edition from a local JSON file, whatever region or date is asked for.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditionSource for FileSource {
    fn fetch(&self, region_id: &str, date: NaiveDate) -> Result<Edition, FetchError> {
        debug!(path = %self.path.display(), region_id, %date, "reading edition file");
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FetchError::NotFound
            } else {
                FetchError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        Ok(Edition::from_json(&content)?)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().to_string())
    }

    fn watch_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn any_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    #[test]
    fn test_reads_edition_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edition.json");
        std::fs::write(
            &path,
            r#"{"title": "Local", "main_story": {"headline": "H", "body": "B"}}"#,
        )
        .unwrap();

        let source = FileSource::new(&path);
        let edition = source.fetch("7", any_date()).unwrap();
        assert_eq!(edition.title, "Local");
        assert_eq!(source.describe(), "edition.json");
        assert_eq!(source.watch_path(), Some(path.as_path()));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.fetch("7", any_date()),
            Err(FetchError::NotFound)
        ));
    }

    #[test]
    fn test_malformed_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileSource::new(&path).fetch("7", any_date()),
            Err(FetchError::Decode(_))
        ));
    }
}
