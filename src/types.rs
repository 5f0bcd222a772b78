//! Core data types for keyword extraction
//!
//! This module defines the input record ([`Comment`]), the output record
//! ([`WordStat`]), the sentiment label ([`Sentiment`]), and the pipeline
//! configuration ([`KeywordConfig`]).

use serde::{Deserialize, Serialize};

/// Default minimum retained token length (tokens shorter than this are dropped).
pub const DEFAULT_MIN_TOKEN_LEN: usize = 4;

/// Default result size for flat selection.
pub const DEFAULT_FLAT_LIMIT: usize = 30;

/// Default per-sentiment quotas for stratified selection.
pub const DEFAULT_STRATA_POSITIVE: usize = 15;
pub const DEFAULT_STRATA_NEGATIVE: usize = 15;
pub const DEFAULT_STRATA_NEUTRAL: usize = 20;

/// One student feedback record.
///
/// All four free-text fields are optional; records arriving from the
/// analytics endpoint are frequently partial. Missing, empty, and
/// `"none"`-valued fields are skipped during aggregation — they are never
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub suggested_changes: Option<String>,

    #[serde(default)]
    pub best_teaching_aspect: Option<String>,

    #[serde(default)]
    pub least_teaching_aspect: Option<String>,

    #[serde(default)]
    pub further_comments: Option<String>,
}

impl Comment {
    /// Create an empty comment record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the "suggested changes" field.
    pub fn with_suggested_changes(mut self, text: impl Into<String>) -> Self {
        self.suggested_changes = Some(text.into());
        self
    }

    /// Set the "best teaching aspect" field.
    pub fn with_best_aspect(mut self, text: impl Into<String>) -> Self {
        self.best_teaching_aspect = Some(text.into());
        self
    }

    /// Set the "least teaching aspect" field.
    pub fn with_least_aspect(mut self, text: impl Into<String>) -> Self {
        self.least_teaching_aspect = Some(text.into());
        self
    }

    /// Set the "further comments" field.
    pub fn with_further_comments(mut self, text: impl Into<String>) -> Self {
        self.further_comments = Some(text.into());
        self
    }

    /// The four free-text fields in their fixed aggregation order.
    pub fn text_fields(&self) -> [Option<&str>; 4] {
        [
            self.suggested_changes.as_deref(),
            self.best_teaching_aspect.as_deref(),
            self.least_teaching_aspect.as_deref(),
            self.further_comments.as_deref(),
        ]
    }
}

/// Sentiment label for a keyword.
///
/// Serializes to the lowercase strings (`"positive"`, `"negative"`,
/// `"neutral"`) consumed by the word-cloud and badge-list renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Returns the wire name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One ranked keyword: its text, occurrence count, and sentiment label.
///
/// Produced fresh on every pipeline run; `count` is the exact number of
/// occurrences of `text` as a maximal lowercase alphabetic run across the
/// aggregated comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStat {
    pub text: String,
    pub count: u32,
    pub sentiment: Sentiment,
}

impl WordStat {
    pub fn new(text: impl Into<String>, count: u32, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            count,
            sentiment,
        }
    }
}

/// Output selection mode.
///
/// Flat selection takes the global top `limit` regardless of sentiment.
/// Stratified selection reserves per-sentiment quotas before merging, so
/// minority-sentiment words are not crowded out by a numerically dominant
/// neutral vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CapMode {
    Flat {
        limit: usize,
    },
    Stratified {
        positive: usize,
        negative: usize,
        neutral: usize,
    },
}

impl Default for CapMode {
    fn default() -> Self {
        Self::Flat {
            limit: DEFAULT_FLAT_LIMIT,
        }
    }
}

impl CapMode {
    /// Flat selection with the given result size.
    pub fn flat(limit: usize) -> Self {
        Self::Flat { limit }
    }

    /// Stratified selection with the default 15/15/20 quotas.
    pub fn stratified() -> Self {
        Self::Stratified {
            positive: DEFAULT_STRATA_POSITIVE,
            negative: DEFAULT_STRATA_NEGATIVE,
            neutral: DEFAULT_STRATA_NEUTRAL,
        }
    }

    /// Upper bound on the output length this mode can produce.
    pub fn max_len(&self) -> usize {
        match *self {
            Self::Flat { limit } => limit,
            Self::Stratified {
                positive,
                negative,
                neutral,
            } => positive + negative + neutral,
        }
    }
}

/// Configuration for one keyword pipeline.
///
/// A single parameterized pipeline replaces the per-renderer variants the
/// original application duplicated. Deployments can ship this as JSON; all
/// fields default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Minimum retained token length (shorter tokens are dropped).
    pub min_token_len: usize,

    /// ISO language for the stop-word list. `None` uses the built-in
    /// curated English list.
    pub stop_words_language: Option<String>,

    /// Stop words added on top of the selected base list.
    pub extra_stop_words: Vec<String>,

    /// Deployment-specific exclusions (e.g., person names that would
    /// otherwise dominate the output). Matched after lowercasing.
    pub exclusions: Vec<String>,

    /// Output selection mode and size.
    pub cap: CapMode,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stop_words_language: None,
            extra_stop_words: Vec::new(),
            exclusions: Vec::new(),
            cap: CapMode::default(),
        }
    }
}

impl KeywordConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum retained token length.
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Use an ISO language stop-word list instead of the built-in one.
    pub fn with_stop_words_language(mut self, language: impl Into<String>) -> Self {
        self.stop_words_language = Some(language.into());
        self
    }

    /// Add stop words on top of the selected base list.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the deployment-specific exclusion list.
    pub fn with_exclusions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the output selection mode.
    pub fn with_cap(mut self, cap: CapMode) -> Self {
        self.cap = cap;
        self
    }
}
