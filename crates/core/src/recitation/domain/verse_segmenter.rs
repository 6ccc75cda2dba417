use crate::recitation::domain::recitation_verifier::verify_recitation;
use crate::recitation::domain::verification_result::VerseSegmentResult;
use crate::recitation::domain::verse_target::VerseTarget;
use crate::scoring::domain::similarity_scorer::round_hundredths;
use crate::shared::constants::{MAX_WINDOW_RATIO, MIN_WINDOW_RATIO};
use crate::text::domain::normalizer::tokenize;

/// Inclusive range of candidate window sizes, in words, for one verse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowBounds {
    pub min: usize,
    pub max: usize,
}

impl WindowBounds {
    /// Bounds for a verse of `master_len` words with `remaining` spoken words
    /// left. Both must be at least 1.
    ///
    /// When the tail of the transcript is shorter than the smallest window,
    /// the range collapses to the whole tail.
    pub fn for_verse(master_len: usize, remaining: usize) -> Self {
        let master_len = master_len.max(1) as f64;
        let max = remaining.min((master_len * MAX_WINDOW_RATIO).ceil() as usize);
        let min = ((master_len * MIN_WINDOW_RATIO).floor() as usize).max(1);
        Self {
            min: min.min(max),
            max,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct WindowMatch {
    len: usize,
    score: f64,
}

/// Splits one continuous transcript into per-verse segments and scores each.
///
/// Greedy and forward-only: for each verse in order, every window size in
/// [`WindowBounds`] is scored from the cursor, the best window is kept
/// (ties go to the shorter window), and the cursor moves past it. Earlier
/// boundaries are never revisited, so one misheard verse can shift every
/// verse after it.
///
/// Always returns one result per target, in order. Verses reached after the
/// transcript is used up get an empty segment with score 0.
pub fn segment_and_verify(
    spoken_text: &str,
    verse_sequence: &[VerseTarget],
    pass_threshold: f64,
) -> Vec<VerseSegmentResult> {
    let spoken_words = tokenize(spoken_text);
    let mut results = Vec::with_capacity(verse_sequence.len());
    let mut cursor = 0;

    for target in verse_sequence {
        let remaining = spoken_words.len() - cursor;
        if remaining == 0 {
            results.push(VerseSegmentResult::unmatched(target.verse_number));
            continue;
        }

        let master_len = tokenize(&target.text).len().max(1);
        let bounds = WindowBounds::for_verse(master_len, remaining);
        let best = best_window(&spoken_words[cursor..], &target.text, bounds, pass_threshold);

        let end = cursor + best.len;
        let segment = spoken_words[cursor..end].join(" ");
        log::debug!(
            "Verse {}: words {}..{} of {} (windows {}..={}) scored {:.2}",
            target.verse_number,
            cursor,
            end,
            spoken_words.len(),
            bounds.min,
            bounds.max,
            best.score
        );
        cursor = end;

        results.push(VerseSegmentResult {
            verse: target.verse_number,
            segment,
            score: round_hundredths(best.score),
            passed: best.score >= pass_threshold,
        });
    }

    results
}

/// Scans window sizes in ascending order; only a strictly higher score
/// replaces the current best.
fn best_window(
    words: &[String],
    master_text: &str,
    bounds: WindowBounds,
    pass_threshold: f64,
) -> WindowMatch {
    let mut best = WindowMatch {
        len: bounds.min,
        score: window_score(&words[..bounds.min], master_text, pass_threshold),
    };
    for len in bounds.min + 1..=bounds.max {
        let score = window_score(&words[..len], master_text, pass_threshold);
        if score > best.score {
            best = WindowMatch { len, score };
        }
    }
    best
}

/// Scores a candidate slice against the raw master text, so the master goes
/// through the same normalization as a single-verse recitation.
fn window_score(words: &[String], master_text: &str, pass_threshold: f64) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    verify_recitation(&words.join(" "), master_text, pass_threshold).score
}
