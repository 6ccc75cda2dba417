use std::path::Path;

use crate::pipeline::passage_report::PassageReport;
use crate::recitation::domain::verse_segmenter::segment_and_verify;
use crate::recitation::domain::verse_source::{VerseSource, VerseSourceError};

/// Loads a passage and scores one continuous recitation of it verse by verse.
pub struct VerifyPassageUseCase {
    source: Box<dyn VerseSource>,
    pass_threshold: f64,
}

impl VerifyPassageUseCase {
    pub fn new(source: Box<dyn VerseSource>, pass_threshold: f64) -> Self {
        Self {
            source,
            pass_threshold,
        }
    }

    pub fn run(
        &self,
        verses_path: &Path,
        spoken_text: &str,
    ) -> Result<PassageReport, VerseSourceError> {
        let verses = self.source.load(verses_path)?;
        let report =
            PassageReport::from_results(segment_and_verify(spoken_text, &verses, self.pass_threshold));

        log::info!(
            "Passed {}/{} verses from {} (average {:.2}, threshold {:.2})",
            report.passed_count,
            report.total_count,
            verses_path.display(),
            report.average_score,
            self.pass_threshold
        );
        Ok(report)
    }
}
