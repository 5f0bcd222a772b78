//! Lexicon-based sentiment classification
//!
//! A [`SentimentLexicon`] is a pair of lowercase word sets. Classification
//! is a set-membership check with a fixed precedence: a token found in the
//! positive set is positive even if it also appears in the negative set.
//! That precedence matches the behavior the rendering components were built
//! against and must not be reordered.

use rustc_hash::FxHashSet;

use crate::types::Sentiment;

/// Full built-in positive word list, tuned to course-feedback vocabulary.
pub const BUILTIN_POSITIVE: &[&str] = &[
    "good", "great", "best", "excellent", "amazing", "awesome", "wonderful",
    "fantastic", "outstanding", "helpful", "clear", "engaging", "interesting",
    "enjoyable", "effective", "organized", "knowledgeable", "patient",
    "approachable", "supportive", "encouraging", "fair", "friendly",
    "passionate", "dedicated", "thorough", "responsive", "informative",
    "enthusiastic", "interactive", "understandable", "love", "loved", "like",
    "liked", "easy", "enjoy", "enjoyed", "appreciate", "appreciated",
    "comfortable", "creative", "inspiring", "motivating", "respectful",
    "attentive", "accommodating",
];

/// Full built-in negative word list.
pub const BUILTIN_NEGATIVE: &[&str] = &[
    "bad", "worst", "poor", "boring", "confusing", "unclear", "difficult",
    "hard", "slow", "late", "unfair", "disorganized", "monotonous",
    "stressful", "overwhelming", "hate", "hated", "dislike", "disliked",
    "terrible", "horrible", "awful", "useless", "waste", "wasted", "lacking",
    "strict", "rushed", "complicated", "tedious", "repetitive", "dull",
    "frustrating", "frustrated", "outdated", "inconsistent", "unprepared",
    "unhelpful", "harsh", "noisy", "distracting", "biased", "intimidating",
];

/// Reduced positive list used when the remote lexicon is unavailable.
pub const FALLBACK_POSITIVE: &[&str] = &[
    "good", "great", "best", "excellent", "helpful", "clear", "interesting",
    "engaging", "enjoyable", "organized", "knowledgeable", "effective",
];

/// Reduced negative list used when the remote lexicon is unavailable.
pub const FALLBACK_NEGATIVE: &[&str] = &[
    "bad", "worst", "poor", "boring", "confusing", "unclear", "difficult",
    "slow", "unfair", "disorganized", "stressful", "frustrating",
];

/// Two word sets used to label tokens positive or negative.
///
/// Immutable once built; the pipeline receives it as an explicit value
/// rather than reading hidden global state, so classification is testable
/// without any network involvement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentLexicon {
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SentimentLexicon {
    /// The full built-in lexicon.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_POSITIVE, BUILTIN_NEGATIVE)
    }

    /// The reduced fallback lexicon the dynamic path degrades to.
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_POSITIVE, FALLBACK_NEGATIVE)
    }

    /// Build a lexicon from two word slices. Words are lowercased.
    pub fn from_words(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Build a lexicon from owned word lists (e.g., a decoded remote
    /// payload). Words are lowercased.
    pub fn from_word_lists(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self {
            positive: positive.into_iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Label a (lowercase) token.
    ///
    /// The positive set is checked first; a token present in both sets is
    /// positive. Tokens in neither set are neutral.
    pub fn classify(&self, token: &str) -> Sentiment {
        if self.positive.contains(token) {
            Sentiment::Positive
        } else if self.negative.contains(token) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Number of positive words.
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Number of negative words.
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Whether both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
