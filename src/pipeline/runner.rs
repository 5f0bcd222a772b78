//! Pipeline runner — orchestrates stage execution.
//!
//! [`KeywordPipeline`] owns the resolved filtering state (stop words,
//! exclusions, minimum length) and threads a comment batch through the six
//! stages in order: aggregate → tokenize → filter → count → classify →
//! select. The lexicon is passed in per run so the same pipeline serves
//! both the static and the remotely-loaded variants.
//!
//! The pipeline is total: empty input, all-empty comments, and an empty
//! lexicon all produce a (possibly empty) result, never an error.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{aggregate_comments, tokenize};
use crate::pipeline::counter::FrequencyCounter;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_AGGREGATE, STAGE_CLASSIFY,
    STAGE_COUNT, STAGE_FILTER, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::pipeline::selector::rank_and_select;
use crate::sentiment::lexicon::SentimentLexicon;
use crate::types::{Comment, KeywordConfig, WordStat};

/// The configured keyword extraction pipeline.
///
/// Construction resolves the config once (stop-word set, lowercased
/// exclusions); each [`run`](Self::run) is then a pure function of the
/// comment batch and the lexicon.
#[derive(Debug, Clone)]
pub struct KeywordPipeline {
    config: KeywordConfig,
    stopwords: StopwordFilter,
    exclusions: FxHashSet<String>,
}

impl Default for KeywordPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordPipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::with_config(KeywordConfig::default())
    }

    /// Create a pipeline from a configuration.
    pub fn with_config(config: KeywordConfig) -> Self {
        let mut stopwords = match &config.stop_words_language {
            Some(language) => StopwordFilter::for_language(language),
            None => StopwordFilter::new(),
        };
        if !config.extra_stop_words.is_empty() {
            stopwords.add_words(&config.extra_stop_words);
        }

        let exclusions = config
            .exclusions
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        Self {
            config,
            stopwords,
            exclusions,
        }
    }

    /// The configuration this pipeline was built from.
    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// The per-token retention predicate.
    fn keep(&self, token: &str) -> bool {
        token.len() >= self.config.min_token_len
            && !self.stopwords.is_stopword(token)
            && !self.exclusions.contains(token)
    }

    /// Run the pipeline without observation.
    pub fn run(&self, comments: &[Comment], lexicon: &SentimentLexicon) -> Vec<WordStat> {
        self.run_with_observer(comments, lexicon, &mut NoopObserver)
    }

    /// Run the pipeline, notifying `observer` at each stage boundary.
    pub fn run_with_observer(
        &self,
        comments: &[Comment],
        lexicon: &SentimentLexicon,
        observer: &mut impl PipelineObserver,
    ) -> Vec<WordStat> {
        // Stage 1: aggregate comments into one normalized blob
        observer.on_stage_start(STAGE_AGGREGATE);
        let clock = StageClock::start();
        let blob = aggregate_comments(comments);
        observer.on_stage_end(STAGE_AGGREGATE, &StageReport::new(clock.elapsed()));
        observer.on_blob(&blob);

        // Stage 2: extract tokens
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = tokenize(&blob);
        observer.on_stage_end(
            STAGE_TOKENIZE,
            &StageReport::new(clock.elapsed()).with_items(tokens.len()),
        );

        // Stage 3: stop-word / exclusion / length filter
        observer.on_stage_start(STAGE_FILTER);
        let clock = StageClock::start();
        let kept: Vec<&str> = tokens.iter().copied().filter(|t| self.keep(t)).collect();
        observer.on_stage_end(
            STAGE_FILTER,
            &StageReport::new(clock.elapsed()).with_items(kept.len()),
        );
        observer.on_tokens(&kept);

        // Stage 4: count occurrences
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let counter = FrequencyCounter::count_all(kept.iter().copied());
        observer.on_stage_end(
            STAGE_COUNT,
            &StageReport::new(clock.elapsed()).with_items(counter.len()),
        );
        observer.on_counts(counter.entries());

        // Stage 5: classify distinct tokens
        observer.on_stage_start(STAGE_CLASSIFY);
        let clock = StageClock::start();
        let stats: Vec<WordStat> = counter
            .into_entries()
            .into_iter()
            .map(|entry| {
                let sentiment = lexicon.classify(&entry.text);
                WordStat {
                    text: entry.text,
                    count: entry.count,
                    sentiment,
                }
            })
            .collect();
        observer.on_stage_end(STAGE_CLASSIFY, &StageReport::new(clock.elapsed()));

        // Stage 6: rank and cap
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let result = rank_and_select(stats, self.config.cap);
        observer.on_stage_end(
            STAGE_SELECT,
            &StageReport::new(clock.elapsed()).with_items(result.len()),
        );
        observer.on_result(&result);

        debug!(
            "Keyword pipeline completed - comments={}, keywords={}",
            comments.len(),
            result.len()
        );

        result
    }
}

/// Extract keywords from a comment batch in one call.
pub fn extract_keywords(
    comments: &[Comment],
    config: &KeywordConfig,
    lexicon: &SentimentLexicon,
) -> Vec<WordStat> {
    KeywordPipeline::with_config(config.clone()).run(comments, lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::types::{CapMode, Sentiment};

    fn make_comments() -> Vec<Comment> {
        vec![
            Comment::new()
                .with_best_aspect("Great labs and great slides")
                .with_least_aspect("confusing homework"),
            Comment::new().with_further_comments("The labs were great"),
        ]
    }

    #[test]
    fn test_run_counts_and_classifies() {
        let pipeline = KeywordPipeline::new();
        let result = pipeline.run(&make_comments(), &SentimentLexicon::builtin());

        let great = result.iter().find(|s| s.text == "great").unwrap();
        assert_eq!(great.count, 3);
        assert_eq!(great.sentiment, Sentiment::Positive);

        let confusing = result.iter().find(|s| s.text == "confusing").unwrap();
        assert_eq!(confusing.count, 1);
        assert_eq!(confusing.sentiment, Sentiment::Negative);

        let labs = result.iter().find(|s| s.text == "labs").unwrap();
        assert_eq!(labs.sentiment, Sentiment::Neutral);

        // "the"/"and"/"were" are stop words.
        assert!(!result.iter().any(|s| s.text == "the"));
        assert!(!result.iter().any(|s| s.text == "and"));
    }

    #[test]
    fn test_exclusion_list_suppresses_tokens() {
        let config = KeywordConfig::new().with_exclusions(["labs"]);
        let pipeline = KeywordPipeline::with_config(config);
        let result = pipeline.run(&make_comments(), &SentimentLexicon::builtin());

        assert!(!result.iter().any(|s| s.text == "labs"));
        assert!(result.iter().any(|s| s.text == "great"));
    }

    #[test]
    fn test_min_token_len_is_configurable() {
        let comments = vec![Comment::new().with_further_comments("lab lab lab gym")];

        let default_pipeline = KeywordPipeline::new();
        let result = default_pipeline.run(&comments, &SentimentLexicon::builtin());
        assert!(result.is_empty());

        let short_config = KeywordConfig::new().with_min_token_len(3);
        let short_pipeline = KeywordPipeline::with_config(short_config);
        let result = short_pipeline.run(&comments, &SentimentLexicon::builtin());
        assert_eq!(result[0].text, "lab");
        assert_eq!(result[0].count, 3);
    }

    #[test]
    fn test_observer_sees_all_six_stages() {
        let pipeline = KeywordPipeline::new();
        let mut obs = StageTimingObserver::new();
        pipeline.run_with_observer(&make_comments(), &SentimentLexicon::builtin(), &mut obs);

        let stages: Vec<&str> = obs.reports().iter().map(|(stage, _)| *stage).collect();
        assert_eq!(
            stages,
            vec![
                STAGE_AGGREGATE,
                STAGE_TOKENIZE,
                STAGE_FILTER,
                STAGE_COUNT,
                STAGE_CLASSIFY,
                STAGE_SELECT,
            ]
        );
    }

    #[test]
    fn test_empty_batch_is_empty_output() {
        let pipeline = KeywordPipeline::new();
        assert!(pipeline.run(&[], &SentimentLexicon::builtin()).is_empty());
    }

    #[test]
    fn test_extract_keywords_convenience() {
        let config = KeywordConfig::new().with_cap(CapMode::flat(1));
        let result = extract_keywords(&make_comments(), &config, &SentimentLexicon::builtin());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "great");
    }
}
