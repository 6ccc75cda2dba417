use crate::recitation::domain::verification_result::VerificationResult;
use crate::scoring::domain::similarity_scorer;
use crate::text::domain::normalizer::normalize;

/// Scores a spoken transcript against a verse's master text.
///
/// Both inputs are normalized independently before scoring. Passing means
/// `score >= pass_threshold`; the threshold is always the caller's choice.
pub fn verify_recitation(
    spoken_text: &str,
    master_text: &str,
    pass_threshold: f64,
) -> VerificationResult {
    let normalized_spoken = normalize(spoken_text);
    let normalized_master = normalize(master_text);
    let similarity = similarity_scorer::score(&normalized_spoken, &normalized_master);

    log::debug!(
        "Recitation scored {:.2} (distance {}) against {:?}",
        similarity.score,
        similarity.distance,
        normalized_master
    );

    VerificationResult {
        score: similarity.score,
        passed: similarity.score >= pass_threshold,
        normalized_spoken,
        normalized_master,
        distance: similarity.distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{MULTI_VERSE_PASS_THRESHOLD, SINGLE_VERSE_PASS_THRESHOLD};
    use approx::assert_relative_eq;
    use rstest::rstest;

    const VERSE: &str = "If we confess our sins, He is faithful and just to forgive us our sins.";

    #[test]
    fn test_identical_text_scores_perfect() {
        let r = verify_recitation(VERSE, VERSE, SINGLE_VERSE_PASS_THRESHOLD);
        assert_relative_eq!(r.score, 100.0);
        assert_eq!(r.distance, 0);
        assert!(r.passed);
    }

    #[rstest]
    #[case("if we confess our sins he is faithful and just to forgive us our sins")]
    #[case("IF WE CONFESS OUR SINS HE IS FAITHFUL AND JUST TO FORGIVE US OUR SINS")]
    #[case("If we   confess our sins... he is faithful; and just -- to forgive us our sins!")]
    #[case("um if we confess our sins uh he is faithful and just to forgive us our sins")]
    fn test_normalization_invariance(#[case] spoken: &str) {
        let r = verify_recitation(spoken, VERSE, SINGLE_VERSE_PASS_THRESHOLD);
        assert_relative_eq!(r.score, 100.0);
        assert!(r.passed);
    }

    #[test]
    fn test_empty_against_empty_passes() {
        let r = verify_recitation("", "", 100.0);
        assert_relative_eq!(r.score, 100.0);
        assert!(r.passed);
    }

    #[test]
    fn test_empty_against_verse_fails() {
        let r = verify_recitation("", "God is love", SINGLE_VERSE_PASS_THRESHOLD);
        assert_relative_eq!(r.score, 0.0);
        assert!(!r.passed);
    }

    #[test]
    fn test_dropped_word() {
        let r = verify_recitation(
            "for so loved the world",
            "for God so loved the world",
            SINGLE_VERSE_PASS_THRESHOLD,
        );
        assert_eq!(r.distance, 4);
        assert!(r.score < 100.0);
        assert!(r.score > 70.0);
        assert!(!r.passed);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let r = verify_recitation("for so loved the world", "for God so loved the world", 82.61);
        assert!(r.passed);
        let r = verify_recitation(
            "for so loved the world",
            "for God so loved the world",
            MULTI_VERSE_PASS_THRESHOLD,
        );
        assert!(r.passed);
    }

    #[test]
    fn test_exposes_normalized_strings() {
        let r = verify_recitation("Um, God is LOVE!", "God is love.", SINGLE_VERSE_PASS_THRESHOLD);
        assert_eq!(r.normalized_spoken, "god is love");
        assert_eq!(r.normalized_master, "god is love");
    }

    #[test]
    fn test_unrelated_text_is_bounded() {
        let r = verify_recitation("xyzzy", VERSE, SINGLE_VERSE_PASS_THRESHOLD);
        assert!(r.score >= 0.0 && r.score <= 100.0);
        assert!(!r.passed);
    }

    #[test]
    fn test_deterministic() {
        let a = verify_recitation("he is faithful", VERSE, SINGLE_VERSE_PASS_THRESHOLD);
        let b = verify_recitation("he is faithful", VERSE, SINGLE_VERSE_PASS_THRESHOLD);
        assert_eq!(a, b);
    }
}
