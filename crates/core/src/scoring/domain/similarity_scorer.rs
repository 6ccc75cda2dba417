use super::edit_distance::levenshtein;
use crate::shared::constants::SCORE_MAX;

/// Edit distance between two normalized strings and the score derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity {
    pub distance: usize,
    pub score: f64,
}

/// Scores two already-normalized strings with the grace formula:
/// `max(0, (1 - distance / max_len) * 100)`, rounded to hundredths.
///
/// Two empty strings are a perfect match. Swapping the arguments never
/// changes the result.
pub fn score(normalized_a: &str, normalized_b: &str) -> Similarity {
    let distance = levenshtein(normalized_a, normalized_b);
    let max_length = normalized_a
        .chars()
        .count()
        .max(normalized_b.chars().count());

    let raw = if max_length == 0 {
        SCORE_MAX
    } else {
        ((1.0 - distance as f64 / max_length as f64) * SCORE_MAX).max(0.0)
    };

    Similarity {
        distance,
        score: round_hundredths(raw),
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
