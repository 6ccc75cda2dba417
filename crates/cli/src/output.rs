use std::fmt::Write;

use versecheck_core::pipeline::passage_report::PassageReport;
use versecheck_core::recitation::domain::detailed_metrics::DetailedMetrics;
use versecheck_core::recitation::domain::word_diff::{DiffStatus, DiffToken};

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

pub fn format_verification(metrics: &DetailedMetrics, threshold: f64) -> String {
    let r = &metrics.result;
    let mut out = String::new();
    let _ = writeln!(out, "{} {:.2}% (threshold {:.2}%)", verdict(r.passed), r.score, threshold);
    let _ = writeln!(
        out,
        "  edit distance {} over {} chars",
        r.distance,
        metrics
            .normalized_spoken_length
            .max(metrics.normalized_master_length)
    );
    let _ = writeln!(
        out,
        "  words spoken {} / expected {}",
        metrics.spoken_word_count, metrics.master_word_count
    );
    let _ = writeln!(out, "  spoken: {}", r.normalized_spoken);
    let _ = writeln!(out, "  master: {}", r.normalized_master);
    out
}

/// Renders a diff inline: missing words as `[-word]`, extra words as `{+word}`.
pub fn format_diff(tokens: &[DiffToken]) -> String {
    tokens
        .iter()
        .map(|t| match t.status {
            DiffStatus::Match => t.word.clone(),
            DiffStatus::Missing => format!("[-{}]", t.word),
            DiffStatus::Extra => format!("{{+{}}}", t.word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_passage(report: &PassageReport, threshold: f64) -> String {
    let mut out = String::new();
    for r in &report.results {
        let segment = if r.segment.is_empty() {
            "(not reached)"
        } else {
            r.segment.as_str()
        };
        let _ = writeln!(
            out,
            "{:>4}  {}  {:>6.2}%  {}",
            r.verse,
            verdict(r.passed),
            r.score,
            segment
        );
    }
    let _ = writeln!(
        out,
        "Passed {}/{} verses, average {:.2}% (threshold {:.2}%)",
        report.passed_count, report.total_count, report.average_score, threshold
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use versecheck_core::recitation::domain::detailed_metrics::detailed_metrics;
    use versecheck_core::recitation::domain::verification_result::VerseSegmentResult;
    use versecheck_core::recitation::domain::word_diff::diff_words;

    #[test]
    fn test_format_diff_marks_missing_and_extra() {
        let tokens = diff_words("for truly loved the world", "for god loved the world");
        assert_eq!(format_diff(&tokens), "for [-god] {+truly} loved the world");
    }

    #[test]
    fn test_format_verification_shows_verdict() {
        let m = detailed_metrics("for so loved the world", "for God so loved the world", 90.0);
        let text = format_verification(&m, 90.0);
        assert!(text.starts_with("FAIL 82.61%"));
        assert!(text.contains("edit distance 4 over 23 chars"));
    }

    #[test]
    fn test_format_passage_marks_unreached_verses() {
        let report = PassageReport::from_results(vec![
            VerseSegmentResult {
                verse: 1,
                segment: "god is love".to_string(),
                score: 100.0,
                passed: true,
            },
            VerseSegmentResult::unmatched(2),
        ]);
        let text = format_passage(&report, 80.0);
        assert!(text.contains("   1  PASS  100.00%  god is love"));
        assert!(text.contains("(not reached)"));
        assert!(text.contains("Passed 1/2 verses"));
    }
}
