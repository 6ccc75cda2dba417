/// Levenshtein distance between two strings, counted in `char`s.
///
/// Unit cost for insertion, deletion and substitution. Builds the full
/// `(len(b) + 1) x (len(a) + 1)` table; inputs are single verses, so the
/// quadratic footprint stays small.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut track = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, cell) in track[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in track.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let indicator = usize::from(a[i - 1] != b[j - 1]);
            track[j][i] = (track[j][i - 1] + 1)
                .min(track[j - 1][i] + 1)
                .min(track[j - 1][i - 1] + indicator);
        }
    }

    track[b.len()][a.len()]
}
