/// Checks if `s` is the empty string.
pub const fn is_empty_string(s: &str) -> bool {
    s.is_empty()
}

/// Concatenates two strings into a new [`String`].
pub fn concat(a: &str, b: &str) -> String {
    [a, b].concat()
}

/// Counts the whitespace-delimited words in `s`. Leading, trailing and repeated whitespace don't
/// produce empty words, so a blank string has no words.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Checks if `s` reads the same forwards and backwards. The comparison is case-sensitive.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Checks if `needle` occurs anywhere in `haystack`. The empty string contains only the empty
/// string.
pub fn contains_substring(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
