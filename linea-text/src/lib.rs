//! String utilities built on two-pointer scans and hashing.
//!
//! All functions work on Unicode scalar values (`char`), not bytes and not
//! grapheme clusters.

use std::collections::HashMap;

/// Reverses `s` by swapping characters inward from both ends.
///
/// ```
/// assert_eq!(linea_text::reverse_string("hello"), "olleh");
/// ```
pub fn reverse_string(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let (mut left, mut right) = (0, chars.len());
    while left + 1 < right {
        right -= 1;
        chars.swap(left, right);
        left += 1;
    }
    chars.into_iter().collect()
}

/// Returns `true` if `s` reads the same both ways once everything but
/// letters and digits is dropped and letters are lowercased.
///
/// ```
/// assert!(linea_text::is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!linea_text::is_palindrome("race a car"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    let (mut left, mut right) = (0, cleaned.len());
    while left + 1 < right {
        right -= 1;
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
    }
    true
}

/// Longest prefix shared by every string, borrowed from the first one.
///
/// Scans column by column and stops at the first mismatch or at the end of
/// the shortest string. An empty input yields `""`.
///
/// ```
/// assert_eq!(linea_text::longest_common_prefix(&["flower", "flow", "flight"]), "fl");
/// ```
pub fn longest_common_prefix<S: AsRef<str>>(strs: &[S]) -> &str {
    let Some((first, rest)) = strs.split_first() else {
        return "";
    };
    let first = first.as_ref();
    let mut others: Vec<_> = rest.iter().map(|s| s.as_ref().chars()).collect();

    for (end, c) in first.char_indices() {
        if others.iter_mut().any(|chars| chars.next() != Some(c)) {
            return &first[..end];
        }
    }
    first
}

/// Groups words that are permutations of each other.
///
/// Groups appear in order of their first member; words keep their input
/// order within a group.
///
/// ```
/// let groups = linea_text::group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups, vec![vec!["eat", "tea", "ate"], vec!["tan", "nat"], vec!["bat"]]);
/// ```
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<&str>> {
    let mut slot_of: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&str>> = Vec::new();

    for word in words {
        let word = word.as_ref();
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();

        let slot = *slot_of.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word);
    }
    groups
}
