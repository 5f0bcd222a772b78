//! Ranking and selection
//!
//! Sorts word statistics by count descending — ties broken by first-seen
//! order — and bounds the result per the configured [`CapMode`]. Stratified
//! selection fills a per-sentiment quota while walking the ranked list, so
//! the merged output stays in global rank order and minority-sentiment
//! words survive a numerically dominant neutral vocabulary.

use crate::types::{CapMode, Sentiment, WordStat};

/// Rank `stats` (given in first-seen order) and apply the cap.
///
/// The output is non-increasing by count; equal counts keep the order in
/// which their tokens first appeared. Output length never exceeds
/// [`CapMode::max_len`].
pub fn rank_and_select(stats: Vec<WordStat>, cap: CapMode) -> Vec<WordStat> {
    // Enumerate before sorting: the index is the global first-seen rank and
    // stays the tie-break key through the stratified merge.
    let mut indexed: Vec<(usize, WordStat)> = stats.into_iter().enumerate().collect();
    indexed.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));

    let selected: Vec<(usize, WordStat)> = match cap {
        CapMode::Flat { limit } => indexed.into_iter().take(limit).collect(),
        CapMode::Stratified {
            mut positive,
            mut negative,
            mut neutral,
        } => indexed
            .into_iter()
            .filter(|(_, stat)| {
                let quota = match stat.sentiment {
                    Sentiment::Positive => &mut positive,
                    Sentiment::Negative => &mut negative,
                    Sentiment::Neutral => &mut neutral,
                };
                if *quota > 0 {
                    *quota -= 1;
                    true
                } else {
                    false
                }
            })
            .collect(),
    };

    selected.into_iter().map(|(_, stat)| stat).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(text: &str, count: u32, sentiment: Sentiment) -> WordStat {
        WordStat::new(text, count, sentiment)
    }

    #[test]
    fn test_sorts_by_count_descending() {
        let stats = vec![
            stat("pace", 1, Sentiment::Neutral),
            stat("labs", 5, Sentiment::Neutral),
            stat("slides", 3, Sentiment::Neutral),
        ];

        let ranked = rank_and_select(stats, CapMode::flat(10));
        let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["labs", "slides", "pace"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let stats = vec![
            stat("zeta", 2, Sentiment::Neutral),
            stat("alpha", 2, Sentiment::Neutral),
            stat("mid", 3, Sentiment::Neutral),
        ];

        let ranked = rank_and_select(stats, CapMode::flat(10));
        let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
        // "zeta" was seen before "alpha"; alphabetical order is irrelevant.
        assert_eq!(texts, vec!["mid", "zeta", "alpha"]);
    }

    #[test]
    fn test_flat_truncates_to_limit() {
        let stats: Vec<WordStat> = (0..10)
            .map(|i| stat(&format!("word{i}"), 10 - i as u32, Sentiment::Neutral))
            .collect();

        let ranked = rank_and_select(stats, CapMode::flat(4));
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].count, 10);
        assert_eq!(ranked[3].count, 7);
    }

    #[test]
    fn test_stratified_quotas() {
        let mut stats = Vec::new();
        for i in 0..5 {
            stats.push(stat(&format!("pos{i}"), 100 - i as u32, Sentiment::Positive));
        }
        for i in 0..5 {
            stats.push(stat(&format!("neg{i}"), 50 - i as u32, Sentiment::Negative));
        }
        for i in 0..5 {
            stats.push(stat(&format!("neu{i}"), 200 - i as u32, Sentiment::Neutral));
        }

        let ranked = rank_and_select(
            stats,
            CapMode::Stratified {
                positive: 2,
                negative: 2,
                neutral: 3,
            },
        );

        assert_eq!(ranked.len(), 7);
        let positives = ranked
            .iter()
            .filter(|s| s.sentiment == Sentiment::Positive)
            .count();
        let negatives = ranked
            .iter()
            .filter(|s| s.sentiment == Sentiment::Negative)
            .count();
        assert_eq!(positives, 2);
        assert_eq!(negatives, 2);

        // Highest-count members of each class survive.
        assert!(ranked.iter().any(|s| s.text == "pos0"));
        assert!(ranked.iter().any(|s| s.text == "neg0"));
        assert!(!ranked.iter().any(|s| s.text == "pos2"));

        // Merged output stays globally sorted.
        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_stratified_preserves_minority_sentiment() {
        // 30 high-count neutral words would crowd out the lone negative
        // word under flat selection at the same total size.
        let mut stats = Vec::new();
        for i in 0..30 {
            stats.push(stat(&format!("neu{i}"), 1000, Sentiment::Neutral));
        }
        stats.push(stat("confusing", 2, Sentiment::Negative));

        let flat = rank_and_select(stats.clone(), CapMode::flat(30));
        assert!(!flat.iter().any(|s| s.text == "confusing"));

        let stratified = rank_and_select(
            stats,
            CapMode::Stratified {
                positive: 15,
                negative: 15,
                neutral: 20,
            },
        );
        assert!(stratified.iter().any(|s| s.text == "confusing"));
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_and_select(Vec::new(), CapMode::flat(30)).is_empty());
    }

    #[test]
    fn test_zero_cap() {
        let stats = vec![stat("good", 1, Sentiment::Positive)];
        assert!(rank_and_select(stats, CapMode::flat(0)).is_empty());
    }
}
