#![forbid(unsafe_code)]

//! Fuzzy-match capability.
//!
//! The host platform owns the approximate matching algorithm; the engine
//! consumes it only through the boolean [`FuzzyMatch`] contract. A
//! characters-in-order [`SubsequenceFuzzy`] default keeps the engine
//! usable standalone, and [`NoFuzzy`] degrades to exact-substring-only
//! matching for hosts without the capability.

/// Approximate containment test, injected by the host.
///
/// Implementations must be pure: the same `(word, corpus)` pair always
/// yields the same answer within one filter pass.
pub trait FuzzyMatch {
    /// Whether `word` approximately matches `corpus`.
    ///
    /// Both arguments arrive lower-cased; the corpus is the panel's
    /// cached searchable text.
    fn fuzzy_contains(&self, word: &str, corpus: &str) -> bool;
}

/// Closures work directly as fuzzy matchers, which keeps test stubbing
/// boilerplate-free.
impl<F> FuzzyMatch for F
where
    F: Fn(&str, &str) -> bool,
{
    fn fuzzy_contains(&self, word: &str, corpus: &str) -> bool {
        self(word, corpus)
    }
}

/// Default matcher: the word's characters must appear in the corpus in
/// order, gaps allowed.
///
/// An empty word matches everything, mirroring the vacuous case of
/// subsequence containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsequenceFuzzy;

impl FuzzyMatch for SubsequenceFuzzy {
    fn fuzzy_contains(&self, word: &str, corpus: &str) -> bool {
        let mut word_chars = word.chars().peekable();
        for c in corpus.chars() {
            if let Some(&wc) = word_chars.peek()
                && c == wc
            {
                word_chars.next();
            }
        }
        word_chars.peek().is_none()
    }
}

/// Exact-only stand-in: never reports a fuzzy match.
///
/// With this matcher the engine still functions on exact substrings
/// alone; fuzzy matching only ever adds recall.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFuzzy;

impl FuzzyMatch for NoFuzzy {
    fn fuzzy_contains(&self, _word: &str, _corpus: &str) -> bool {
        false
    }
}
