use std::fs;
use std::path::Path;

use crate::recitation::domain::verse_source::{VerseSource, VerseSourceError};
use crate::recitation::domain::verse_target::VerseTarget;

const COMMENT_PREFIX: char = '#';

/// Reads one verse per line: a verse number, a separator (whitespace, `.`,
/// `:` or `)`), then the verse text. Blank lines and `#` comments are skipped.
pub struct PlainTextVerseReader;

impl PlainTextVerseReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses a single non-comment line, or `None` if it has no leading
    /// verse number.
    pub fn parse_line(line: &str) -> Option<VerseTarget> {
        let line = line.trim();
        let digits_end = line
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(line.len());
        if digits_end == 0 {
            return None;
        }
        let verse_number = line[..digits_end].parse().ok()?;
        let rest = &line[digits_end..];
        let text = rest
            .strip_prefix(|c: char| matches!(c, '.' | ':' | ')'))
            .unwrap_or(rest);
        if text.len() == rest.len() && !text.starts_with(char::is_whitespace) {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(VerseTarget::new(verse_number, text))
    }
}

impl Default for PlainTextVerseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VerseSource for PlainTextVerseReader {
    fn load(&self, path: &Path) -> Result<Vec<VerseTarget>, VerseSourceError> {
        let contents = fs::read_to_string(path).map_err(|source| VerseSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut verses = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let verse = Self::parse_line(trimmed).ok_or_else(|| VerseSourceError::MalformedLine {
                path: path.to_path_buf(),
                line: index + 1,
                content: trimmed.to_string(),
            })?;
            verses.push(verse);
        }

        if verses.is_empty() {
            return Err(VerseSourceError::Empty {
                path: path.to_path_buf(),
            });
        }
        log::debug!("Loaded {} verses from {}", verses.len(), path.display());
        Ok(verses)
    }
}
