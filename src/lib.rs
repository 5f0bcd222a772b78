//! Keyword frequency and sentiment extraction for course-feedback comments.
//!
//! Students answer four optional free-text questions per course; this crate
//! turns a batch of those answers into the ranked, sentiment-tagged keyword
//! list consumed by word-cloud and badge-list renderers. The pipeline:
//!
//! 1. aggregate the recognized fields into one lowercase blob
//! 2. tokenize into maximal ASCII-letter runs
//! 3. drop short tokens, stop words, and configured exclusions
//! 4. count occurrences, preserving first-seen order
//! 5. classify each distinct token against a sentiment lexicon
//! 6. rank by count descending and cap the result (flat or stratified)
//!
//! The lexicon is compiled in by default; with the `remote-lexicon` feature
//! (on by default) it can instead be fetched once per session from a lookup
//! service, falling back to a built-in pair on any failure.
//!
//! # Example
//!
//! ```
//! use feedback_keywords::{extract_keywords, Comment, KeywordConfig, SentimentLexicon};
//!
//! let comments = vec![
//!     Comment::new().with_best_aspect("Great labs"),
//!     Comment::new().with_least_aspect("confusing homework"),
//! ];
//!
//! let keywords = extract_keywords(
//!     &comments,
//!     &KeywordConfig::default(),
//!     &SentimentLexicon::builtin(),
//! );
//!
//! assert_eq!(keywords[0].text, "great");
//! assert_eq!(keywords[0].count, 1);
//! ```

pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod types;

pub use nlp::stopwords::StopwordFilter;
pub use pipeline::runner::{extract_keywords, KeywordPipeline};
pub use sentiment::lexicon::SentimentLexicon;
pub use types::{CapMode, Comment, KeywordConfig, Sentiment, WordStat};

#[cfg(feature = "remote-lexicon")]
pub use sentiment::remote::{LexiconLoader, LexiconState, RemoteLexicon};
