#![forbid(unsafe_code)]

//! Query tokenization.
//!
//! Splits a raw query on single-space boundaries and drops tokens that
//! are empty after trimming. The empty-query special case ("show all")
//! is owned by the filter controller, not the tokenizer.

use smallvec::SmallVec;

/// Inline capacity for token lists; queries are short in practice.
pub type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Split `query` into non-empty words.
///
/// Splitting happens on single spaces only; a token containing other
/// whitespace is kept verbatim as long as it is non-empty after trimming.
/// Repeated words are kept (no deduplication).
///
/// ```rust
/// use infowall_core::query::tokenize;
///
/// let words = tokenize("red  banana ");
/// assert_eq!(words.as_slice(), ["red", "banana"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(query: &str) -> Tokens<'_> {
    query
        .split(' ')
        .filter(|word| !word.trim().is_empty())
        .collect()
}
