pub mod json_verse_reader;
pub mod plain_text_verse_reader;

use std::path::Path;

use crate::recitation::domain::verse_source::VerseSource;
use crate::shared::constants::VERSE_FILE_JSON_EXTENSION;
use json_verse_reader::JsonVerseReader;
use plain_text_verse_reader::PlainTextVerseReader;

/// Picks a verse reader from the file extension. Anything that isn't
/// `.json` is read as numbered plain-text lines.
pub fn reader_for(path: &Path) -> Box<dyn VerseSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(VERSE_FILE_JSON_EXTENSION));
    if is_json {
        Box::new(JsonVerseReader::new())
    } else {
        Box::new(PlainTextVerseReader::new())
    }
}
