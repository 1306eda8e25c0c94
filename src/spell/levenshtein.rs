//! Bounded Levenshtein edit distance.

/// Computes the Levenshtein distance between `a` and `b`, giving up early when
/// it provably exceeds `max`.
///
/// Returns `Some(distance)` when the distance is at most `max`, `None`
/// otherwise. Operates on Unicode scalar values. The usual single-row DP with
/// an early exit when the row minimum passes the bound.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() {
        return Some(b.len());
    }
    if b.is_empty() {
        return Some(a.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words_are_distance_zero() {
        assert_eq!(bounded_levenshtein("hello", "hello", 2), Some(0));
    }

    #[test]
    fn single_edits() {
        assert_eq!(bounded_levenshtein("helo", "hello", 2), Some(1));
        assert_eq!(bounded_levenshtein("hella", "hello", 2), Some(1));
        assert_eq!(bounded_levenshtein("hhello", "hello", 2), Some(1));
    }

    #[test]
    fn exceeding_the_bound_returns_none() {
        assert_eq!(bounded_levenshtein("abcdef", "xyz", 2), None);
        assert_eq!(bounded_levenshtein("kitten", "sitting", 2), None);
        assert_eq!(bounded_levenshtein("kitten", "sitting", 3), Some(3));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(bounded_levenshtein("", "", 2), Some(0));
        assert_eq!(bounded_levenshtein("", "ab", 2), Some(2));
        assert_eq!(bounded_levenshtein("ab", "", 2), Some(2));
        assert_eq!(bounded_levenshtein("", "abc", 2), None);
    }
}
