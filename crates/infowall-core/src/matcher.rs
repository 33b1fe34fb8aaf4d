#![forbid(unsafe_code)]

//! Match evaluation and word aggregation.
//!
//! One query word is *satisfied* against a panel when the panel's cached
//! corpus contains the lower-cased word as a contiguous substring, or
//! failing that, when the injected [`FuzzyMatch`] capability reports an
//! approximate match. [`FilterMode`] decides how per-word results combine
//! into a single per-panel boolean.

use std::str::FromStr;

use crate::fuzzy::FuzzyMatch;
use crate::model::Panel;

/// Aggregation policy across query words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Every word must be satisfied ("and").
    All,
    /// At least one word must be satisfied ("or").
    #[default]
    Any,
}

/// Error for unrecognized filter-mode configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterModeError(String);

impl std::fmt::Display for ParseFilterModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown filter mode {:?}, expected \"and\" or \"or\"", self.0)
    }
}

impl std::error::Error for ParseFilterModeError {}

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    /// Editor configuration stores the mode as `"and"` / `"or"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::All),
            "or" => Ok(Self::Any),
            other => Err(ParseFilterModeError(other.to_string())),
        }
    }
}

/// Whether one lower-cased word is satisfied against a corpus.
fn word_satisfied<F: FuzzyMatch + ?Sized>(corpus: &str, word: &str, fuzzy: &F) -> bool {
    corpus.contains(word) || fuzzy.fuzzy_contains(word, corpus)
}

/// Evaluate all `words` against `panel` under `mode`.
///
/// Words are compared case-insensitively against the panel's cached
/// lower-cased corpus; punctuation is not stripped and repeated words are
/// evaluated once per occurrence. An empty word list is vacuously true
/// under [`FilterMode::All`] and false under [`FilterMode::Any`] — the
/// controller's empty-query short-circuit means this cannot arise in
/// normal operation.
pub fn panel_matches<F: FuzzyMatch + ?Sized>(
    panel: &Panel,
    words: &[&str],
    mode: FilterMode,
    fuzzy: &F,
) -> bool {
    let corpus = panel.corpus();
    match mode {
        FilterMode::All => words
            .iter()
            .all(|word| word_satisfied(corpus, &word.to_lowercase(), fuzzy)),
        FilterMode::Any => words
            .iter()
            .any(|word| word_satisfied(corpus, &word.to_lowercase(), fuzzy)),
    }
}
