use serde::{Deserialize, Serialize};

/// One canonical verse a participant is expected to recite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseTarget {
    #[serde(rename = "verse", alias = "verseNumber")]
    pub verse_number: u32,
    pub text: String,
}

impl VerseTarget {
    pub fn new(verse_number: u32, text: impl Into<String>) -> Self {
        Self {
            verse_number,
            text: text.into(),
        }
    }
}
