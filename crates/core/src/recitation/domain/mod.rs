pub mod detailed_metrics;
pub mod recitation_verifier;
pub mod verification_result;
pub mod verse_segmenter;
pub mod verse_source;
pub mod verse_target;
pub mod word_diff;
