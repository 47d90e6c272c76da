//! String similarity scoring
//!
//! Ratcliff/Obershelp ratio: twice the number of matched characters over
//! the combined length, where matches are the maximal common blocks found
//! by greedy longest-common-substring decomposition of the unmatched
//! segments on either side. Callers case-fold before scoring; no further
//! normalization is applied.

/// Similarity of two strings in `[0, 1]`. Symmetric, and `1.0` iff the
/// strings are equal (two empty strings score `1.0`).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block, earliest occurrence winning ties.
/// Returns `(start in a, start in b, length)`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                cur[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = cur;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        for s in ["a", "iphone 13", "galaxy s21 ultra", "x"] {
            assert_eq!(similarity(s, s), 1.0);
        }
    }

    #[test]
    fn empty_strings_score_one() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("iphone", "ifone"),
            ("galaxy s21", "galaxi s21"),
            ("redmi note", "note redmi"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn classic_ratio() {
        // blocks: "ple" + "a" -> 2 * 4 / (5 + 4)
        assert!((similarity("apple", "aple") - 8.0 / 9.0).abs() < 1e-9);
        // "abcd" vs "bcde": block "bcd" -> 2 * 3 / 8
        assert!((similarity("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn typo_scores_above_threshold() {
        assert!(similarity("galaxy s21", "galxy s21") > 0.9);
        assert!(similarity("iphone 13", "ifone 13") > 0.8);
    }
}
