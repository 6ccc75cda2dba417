use std::fs;
use std::path::Path;

use crate::recitation::domain::verse_source::{VerseSource, VerseSourceError};
use crate::recitation::domain::verse_target::VerseTarget;

/// Reads a JSON array of `{"verse": n, "text": "..."}` objects.
pub struct JsonVerseReader;

impl JsonVerseReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonVerseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VerseSource for JsonVerseReader {
    fn load(&self, path: &Path) -> Result<Vec<VerseTarget>, VerseSourceError> {
        let json = fs::read_to_string(path).map_err(|source| VerseSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let verses: Vec<VerseTarget> =
            serde_json::from_str(&json).map_err(|source| VerseSourceError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if verses.is_empty() {
            return Err(VerseSourceError::Empty {
                path: path.to_path_buf(),
            });
        }
        log::debug!("Loaded {} verses from {}", verses.len(), path.display());
        Ok(verses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("verses.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"verse": 2, "text": "that he gave his only son"},
                {"verse": 1, "text": "for God so loved the world"}
            ]"#,
        );
        let verses = JsonVerseReader::new().load(&path).unwrap();
        assert_eq!(
            verses,
            vec![
                VerseTarget::new(2, "that he gave his only son"),
                VerseTarget::new(1, "for God so loved the world"),
            ]
        );
    }

    #[test]
    fn test_accepts_verse_number_key() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"[{"verseNumber": 5, "text": "God is light"}]"#);
        let verses = JsonVerseReader::new().load(&path).unwrap();
        assert_eq!(verses[0].verse_number, 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonVerseReader::new()
            .load(&dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, VerseSourceError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{"verse": 1}"#);
        let err = JsonVerseReader::new().load(&path).unwrap_err();
        assert!(matches!(err, VerseSourceError::Json { .. }));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "[]");
        let err = JsonVerseReader::new().load(&path).unwrap_err();
        assert!(matches!(err, VerseSourceError::Empty { .. }));
    }
}
