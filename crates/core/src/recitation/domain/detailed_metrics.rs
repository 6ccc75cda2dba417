use serde::Serialize;

use crate::recitation::domain::recitation_verifier::verify_recitation;
use crate::recitation::domain::verification_result::VerificationResult;

/// A verification result plus the length bookkeeping used when explaining
/// a score: word counts after normalization and character counts before
/// and after it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedMetrics {
    #[serde(flatten)]
    pub result: VerificationResult,
    pub spoken_word_count: usize,
    pub master_word_count: usize,
    pub original_spoken_length: usize,
    pub original_master_length: usize,
    pub normalized_spoken_length: usize,
    pub normalized_master_length: usize,
}

pub fn detailed_metrics(spoken_text: &str, master_text: &str, pass_threshold: f64) -> DetailedMetrics {
    let result = verify_recitation(spoken_text, master_text, pass_threshold);

    DetailedMetrics {
        spoken_word_count: result.normalized_spoken.split_whitespace().count(),
        master_word_count: result.normalized_master.split_whitespace().count(),
        original_spoken_length: spoken_text.chars().count(),
        original_master_length: master_text.chars().count(),
        normalized_spoken_length: result.normalized_spoken.chars().count(),
        normalized_master_length: result.normalized_master.chars().count(),
        result,
    }
}
