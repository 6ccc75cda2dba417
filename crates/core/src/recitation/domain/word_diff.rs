use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Spoken and expected.
    Match,
    /// Expected but not spoken.
    Missing,
    /// Spoken but not expected.
    Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffToken {
    pub word: String,
    pub status: DiffStatus,
}

impl DiffToken {
    fn new(word: &str, status: DiffStatus) -> Self {
        Self {
            word: word.to_string(),
            status,
        }
    }
}

/// Word-level alignment of a recitation against its master text.
///
/// Takes the normalized strings from a verification result so the diff
/// agrees with what was scored. Uses a longest-common-subsequence table;
/// when both directions are equally good, the missing master word is
/// reported before the extra spoken word.
pub fn diff_words(normalized_spoken: &str, normalized_master: &str) -> Vec<DiffToken> {
    let spoken: Vec<&str> = normalized_spoken.split_whitespace().collect();
    let master: Vec<&str> = normalized_master.split_whitespace().collect();
    let (m, n) = (spoken.len(), master.len());

    // lcs[i][j] = LCS length of spoken[i..] and master[j..]
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if spoken[i] == master[j] {
                1 + lcs[i + 1][j + 1]
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut tokens = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (0, 0);
    while i < m || j < n {
        if i < m && j < n && spoken[i] == master[j] {
            tokens.push(DiffToken::new(master[j], DiffStatus::Match));
            i += 1;
            j += 1;
        } else if j < n && (i >= m || lcs[i][j + 1] >= lcs[i + 1][j]) {
            tokens.push(DiffToken::new(master[j], DiffStatus::Missing));
            j += 1;
        } else {
            tokens.push(DiffToken::new(spoken[i], DiffStatus::Extra));
            i += 1;
        }
    }
    tokens
}
