//! Generic string-similarity primitives shared by the extractors and the
//! scorer: Levenshtein distance, fuzzy containment, and set overlap.

use std::collections::HashSet;

/// Classic Levenshtein distance (insert/delete/substitute, cost 1 each),
/// computed on chars over the full strings. Quadratic; inputs here are
/// short skill tokens, not documents.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (j, bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, ac) in a.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[i + 1] = (curr[i] + 1).min(prev[i + 1] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[a.len()]
}

/// Approximate string equality, tolerant of phrasing variance between a
/// resume skill and a required skill. Containment either way short-circuits;
/// otherwise normalized similarity against the longer string must reach the
/// threshold. Callers are expected to lower-case both sides.
pub fn fuzzy_match(a: &str, b: &str, threshold: f64) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }

    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return true;
    }

    let similarity = (longer_len - levenshtein(longer, shorter)) as f64 / longer_len as f64;
    similarity >= threshold
}

/// Jaccard-style overlap of two keyword lists on a 0-100 scale.
/// Zero if either side is empty.
pub fn keyword_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_levenshtein_known_distance() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_empty_side() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_levenshtein_identical_is_zero() {
        assert_eq!(levenshtein("postgresql", "postgresql"), 0);
    }

    #[test]
    fn test_fuzzy_match_reflexive() {
        for s in ["python", "node.js", "a"] {
            assert!(fuzzy_match(s, s, 0.8), "{s} must match itself");
        }
    }

    #[test]
    fn test_fuzzy_match_containment() {
        assert!(fuzzy_match("react", "reactjs", 0.8));
        assert!(fuzzy_match("node.js", "node", 0.8));
    }

    #[test]
    fn test_fuzzy_match_near_threshold() {
        // "pythn" vs "python": distance 1 over length 6 -> 0.833
        assert!(fuzzy_match("pythn", "python", 0.8));
        // "jva" vs "java": distance 1 over length 4 -> 0.75
        assert!(!fuzzy_match("jva", "java", 0.8));
    }

    #[test]
    fn test_fuzzy_match_rejects_unrelated() {
        assert!(!fuzzy_match("java", "ruby", 0.8));
    }

    #[test]
    fn test_keyword_similarity_identical_is_100() {
        let a = keywords(&["rust", "tokio", "serde"]);
        assert_eq!(keyword_similarity(&a, &a), 100.0);
    }

    #[test]
    fn test_keyword_similarity_empty_is_zero() {
        let a = keywords(&["rust"]);
        assert_eq!(keyword_similarity(&a, &[]), 0.0);
        assert_eq!(keyword_similarity(&[], &a), 0.0);
    }

    #[test]
    fn test_keyword_similarity_disjoint_is_zero() {
        let a = keywords(&["rust"]);
        let b = keywords(&["java"]);
        assert_eq!(keyword_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_keyword_similarity_partial_overlap() {
        let a = keywords(&["rust", "tokio"]);
        let b = keywords(&["rust"]);
        // intersection 1, union 2
        assert!((keyword_similarity(&a, &b) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_similarity_ignores_duplicates() {
        let a = keywords(&["rust", "rust", "tokio"]);
        let b = keywords(&["rust", "tokio"]);
        assert_eq!(keyword_similarity(&a, &b), 100.0);
    }
}
