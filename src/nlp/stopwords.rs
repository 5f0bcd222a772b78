//! Stop-word filtering
//!
//! The default filter carries a fixed, curated list of common English
//! function words plus the filler and domain terms that would otherwise
//! dominate course-feedback keyword output. ISO language lists from the
//! `stop-words` crate are available as an alternative base for non-English
//! deployments.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The built-in stop-word list.
///
/// Membership is an implementation constant: common English function words
/// (articles, pronouns, auxiliaries, conjunctions) plus filler answers
/// ("none", "really") and course-domain words ("class", "teacher") that
/// carry no signal in feedback text. All entries are lowercase.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // articles, demonstratives
    "a", "an", "the", "this", "that", "these", "those", "there", "here",
    // pronouns
    "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she",
    "her", "it", "its", "they", "them", "their", "who", "what", "which",
    // auxiliaries and copulas
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should", "can",
    "must",
    // conjunctions, prepositions, common adverbs
    "and", "or", "but", "if", "then", "than", "because", "while", "about",
    "into", "from", "with", "for", "not", "only", "also", "just", "very",
    "too", "more", "most", "some", "such", "each", "all", "when", "where",
    "how", "why",
    // filler answers and course-domain words
    "none", "using", "really", "class", "course", "subject", "teacher",
];

/// A stop-word filter backed by a lowercase word set.
///
/// Lookups are exact: the pipeline only ever passes lowercase tokens, and
/// every constructor lowercases the words it ingests.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in curated list.
    pub fn new() -> Self {
        Self::from_list(DEFAULT_STOP_WORDS)
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Create a filter from an ISO language list.
    ///
    /// Only Latin-script languages are meaningful here — the tokenizer
    /// discards non-ASCII characters. Unrecognized languages fall back to
    /// the ISO English list.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        let words = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    /// Add words to the filter.
    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_words<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check whether a (lowercase) word is a stop word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
