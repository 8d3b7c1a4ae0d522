//! Case-folding string helpers shared by the engine and the store

use std::cmp::Ordering;

/// Case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive lexicographic ordering
///
/// Compares character by character after lowercasing, without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// True if `haystack` contains any of `needles`
///
/// `haystack` must already be lowercased; needles are declared lowercase.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Lowercase the whole input, then uppercase the first character of every
/// space-separated word
///
/// Runs of spaces are preserved as empty words, so the output always has the
/// same number of separators as the input.
pub fn to_title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
