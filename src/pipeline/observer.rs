//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::counter::TokenCount;
use crate::types::WordStat;

pub const STAGE_AGGREGATE: &str = "aggregate";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_FILTER: &str = "filter";
pub const STAGE_COUNT: &str = "count";
pub const STAGE_CLASSIFY: &str = "classify";
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for one stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics reported when a stage finishes.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach an item count (tokens kept, keywords produced, ...).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Stage-boundary callbacks. All methods default to no-ops, so observers
/// implement only what they care about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The normalized text blob after aggregation.
    fn on_blob(&mut self, _blob: &str) {}

    /// Tokens surviving the stop-word/exclusion filter, in input order.
    fn on_tokens(&mut self, _tokens: &[&str]) {}

    /// Distinct token counts in first-seen order.
    fn on_counts(&mut self, _counts: &[TokenCount]) {}

    /// The final ranked, capped output.
    fn on_result(&mut self, _stats: &[WordStat]) {}
}

/// Observer that ignores everything. Zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records `(stage, report)` pairs in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected reports in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_items() {
        let report = StageReport::new(Duration::from_millis(1)).with_items(42);
        assert_eq!(report.items(), Some(42));
        assert_eq!(report.elapsed(), Duration::from_millis(1));
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_AGGREGATE, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::ZERO));

        let stages: Vec<&str> = obs.reports().iter().map(|(stage, _)| *stage).collect();
        assert_eq!(stages, vec![STAGE_AGGREGATE, STAGE_TOKENIZE]);
    }

    #[test]
    fn test_noop_observer_accepts_all_callbacks() {
        let mut obs = NoopObserver;
        obs.on_stage_start(STAGE_FILTER);
        obs.on_blob("good labs");
        obs.on_tokens(&["good", "labs"]);
        obs.on_result(&[]);
    }
}
