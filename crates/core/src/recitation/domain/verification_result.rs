use serde::Serialize;

/// Outcome of scoring one spoken transcript against one master text.
///
/// Carries the normalized strings that were actually compared so a
/// word diff can be rendered consistently with the score.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub score: f64,
    pub passed: bool,
    pub normalized_spoken: String,
    pub normalized_master: String,
    pub distance: usize,
}

/// One verse's share of a multi-verse transcript and its score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerseSegmentResult {
    pub verse: u32,
    pub segment: String,
    pub score: f64,
    pub passed: bool,
}

impl VerseSegmentResult {
    /// Result for a verse reached after the transcript ran out of words.
    pub fn unmatched(verse: u32) -> Self {
        Self {
            verse,
            segment: String::new(),
            score: 0.0,
            passed: false,
        }
    }
}
