/// Score a single recitation needs to count as memorized.
pub const SINGLE_VERSE_PASS_THRESHOLD: f64 = 90.0;

/// Score each segment of a multi-verse recitation needs to count as memorized.
pub const MULTI_VERSE_PASS_THRESHOLD: f64 = 80.0;

/// Smallest candidate window, as a fraction of the verse's word count.
pub const MIN_WINDOW_RATIO: f64 = 0.55;

/// Largest candidate window, as a fraction of the verse's word count.
pub const MAX_WINDOW_RATIO: f64 = 1.8;

/// Characters replaced by a space before tokenizing.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '-', '—', '"', '(', ')', '[', ']', '{', '}',
];

/// Tokens dropped from every transcript and master text.
///
/// Matched against single tokens after splitting, so "you" and "know" are
/// removed wherever they appear, not only as the phrase "you know".
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "uhh", "umm", "like", "you", "know", "youknow", "basically", "literally", "so",
    "huh", "uhhuh", "er", "erm", "ah", "hmm", "well",
];

pub const SCORE_MAX: f64 = 100.0;

pub const VERSE_FILE_JSON_EXTENSION: &str = "json";
