// src/analysis/matching.rs
// Substring matching and winner selection shared by the scorers

use std::collections::BTreeMap;

/// Triggers found anywhere in `haystack`, each reported once, in lexicon order
pub(crate) fn matched_terms<'a>(haystack: &str, terms: &'a [String]) -> Vec<&'a str> {
    terms
        .iter()
        .map(String::as_str)
        .filter(|term| !term.is_empty() && haystack.contains(term))
        .collect()
}

/// Category with the strictly highest non-zero score. Ties go to whichever
/// category comes first in `order`.
pub(crate) fn strict_winner<K>(scores: &BTreeMap<K, u32>, order: &[K]) -> Option<(K, u32)>
where
    K: Copy + Ord,
{
    let mut best: Option<(K, u32)> = None;
    for key in order {
        let score = scores.get(key).copied().unwrap_or(0);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((*key, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_terms_counts_each_once() {
        let list = terms(&["sad", "grief", "miserable"]);
        let found = matched_terms("sad sad sad, pure grief", &list);
        assert_eq!(found, vec!["sad", "grief"]);
    }

    #[test]
    fn test_matched_terms_is_substring_based() {
        let list = terms(&["hi"]);
        assert_eq!(matched_terms("this", &list), vec!["hi"]);
        assert!(matched_terms("hello", &list).is_empty());
    }

    #[test]
    fn test_strict_winner_tie_goes_to_first() {
        let scores = BTreeMap::from([('a', 2), ('b', 2), ('c', 1)]);
        assert_eq!(strict_winner(&scores, &['a', 'b', 'c']), Some(('a', 2)));
        assert_eq!(strict_winner(&scores, &['b', 'a', 'c']), Some(('b', 2)));
    }

    #[test]
    fn test_strict_winner_all_zero() {
        let scores = BTreeMap::from([('a', 0), ('b', 0)]);
        assert_eq!(strict_winner(&scores, &['a', 'b']), None);
        assert_eq!(strict_winner::<char>(&BTreeMap::new(), &[]), None);
    }
}
