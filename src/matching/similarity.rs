//! Normalized string similarity used for fuzzy lexicon matching.
//!
//! Both measures operate on Unicode code points, never bytes.

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    // Single-row DP; prev_diag carries the value row[j] held before this
    // iteration overwrote it.
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let current = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = current;
        }
    }
    row[b.len()]
}

/// Similarity ratio in [0, 1]: `2 * LCS(a, b) / (|a| + |b|)`.
///
/// This matches the "ratio" semantics of longest-matching-block diff
/// implementations: 1.0 only for identical strings, 0.0 for strings with no
/// characters in common. Equivalently `1 - indel_distance / (|a| + |b|)`.
/// Two empty strings are considered identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_len(&a, &b)) as f64 / total as f64
}

/// Levenshtein edit distance (insert, delete, substitute).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let current = row[j + 1];
            let substitute = if ca == cb { prev_diag } else { prev_diag + 1 };
            row[j + 1] = substitute.min(row[j] + 1).min(current + 1);
            prev_diag = current;
        }
    }
    row[b.len()]
}
