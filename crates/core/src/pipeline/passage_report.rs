use serde::Serialize;

use crate::recitation::domain::verification_result::VerseSegmentResult;
use crate::scoring::domain::similarity_scorer::round_hundredths;

/// Per-verse results of one multi-verse recitation, with totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageReport {
    pub results: Vec<VerseSegmentResult>,
    pub passed_count: usize,
    pub total_count: usize,
    pub average_score: f64,
}

impl PassageReport {
    pub fn from_results(results: Vec<VerseSegmentResult>) -> Self {
        let total_count = results.len();
        let passed_count = results.iter().filter(|r| r.passed).count();
        let average_score = if total_count == 0 {
            0.0
        } else {
            round_hundredths(results.iter().map(|r| r.score).sum::<f64>() / total_count as f64)
        };
        Self {
            results,
            passed_count,
            total_count,
            average_score,
        }
    }

    /// Verse numbers that met the threshold, in recitation order.
    pub fn passed_verses(&self) -> Vec<u32> {
        self.results
            .iter()
            .filter(|r| r.passed)
            .map(|r| r.verse)
            .collect()
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count == self.total_count
    }
}
