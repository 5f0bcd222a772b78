//! Sentiment classification
//!
//! Tokens are labeled positive, negative, or neutral by membership in a
//! [`lexicon::SentimentLexicon`]. The lexicon is either compiled in
//! ([`lexicon::SentimentLexicon::builtin`]) or fetched once per session
//! from a lookup service (the `remote-lexicon` feature).

pub mod lexicon;

#[cfg(feature = "remote-lexicon")]
pub mod remote;
