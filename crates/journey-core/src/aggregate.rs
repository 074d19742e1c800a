//! Weighted aggregation engine
//!
//! Provides [`Aggregator`], which turns a dataset plus per-request
//! [`AggregationParams`] into an [`AggregationResult`]: weighted sentiment,
//! mention totals, coverage, low-confidence share, per-stage and per-persona
//! rollups, and the ranked wins and risks.
//!
//! The engine holds only borrowed, read-only inputs. Every call recomputes
//! from scratch and never touches the dataset.

use crate::config::AggregationParams;
use crate::config::WeightingMode;
use crate::error::AggregateError;
use indexmap::IndexMap;
use journey_model::{demo, Dataset, Touchpoint, Vocabulary};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Number of touchpoints kept as wins
pub const WIN_COUNT: usize = 2;

/// Number of touchpoints kept as risks
pub const RISK_COUNT: usize = 3;

/// Weighted rollup for one stage or persona
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    /// Stage or persona name as it appears in the data
    pub key: String,
    pub weighted_sum: f64,
    pub weight_sum: f64,
    pub avg_sentiment: f64,
    pub total_mentions: u64,
    pub touchpoints: usize,
}

/// Everything the summary panel derives from one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub weighting: WeightingMode,
    pub low_confidence_threshold: f64,
    /// One weight per touchpoint, in dataset order
    pub weights: Vec<f64>,
    pub avg_sentiment: f64,
    pub total_mentions: u64,
    /// Distinct (stage, persona) pairs observed
    pub observed_pairs: usize,
    pub coverage: f64,
    pub low_confidence_share: f64,
    /// In order of first appearance
    pub by_stage: Vec<GroupStats>,
    /// In order of first appearance
    pub by_persona: Vec<GroupStats>,
    /// Highest `sentiment × frequency` first
    pub wins: Vec<Touchpoint>,
    /// Worst sentiment first, louder first on ties
    pub risks: Vec<Touchpoint>,
}

impl AggregationResult {
    /// Rollup row for a stage
    #[must_use]
    pub fn stage(&self, stage: &str) -> Option<&GroupStats> {
        self.by_stage.iter().find(|g| g.key == stage)
    }

    /// Rollup row for a persona
    #[must_use]
    pub fn persona(&self, persona: &str) -> Option<&GroupStats> {
        self.by_persona.iter().find(|g| g.key == persona)
    }
}

/// Aggregation engine over a dataset and its swim-lane axes
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    dataset: &'a Dataset,
    stages: &'a Vocabulary,
    personas: &'a Vocabulary,
}

impl<'a> Aggregator<'a> {
    #[inline]
    #[must_use]
    pub fn new(dataset: &'a Dataset, stages: &'a Vocabulary, personas: &'a Vocabulary) -> Self {
        Self {
            dataset,
            stages,
            personas,
        }
    }

    #[inline]
    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    #[inline]
    #[must_use]
    pub fn stages(&self) -> &'a Vocabulary {
        self.stages
    }

    #[inline]
    #[must_use]
    pub fn personas(&self) -> &'a Vocabulary {
        self.personas
    }

    /// Compute the aggregation result for one request
    ///
    /// # Errors
    /// - [`AggregateError::InvalidThreshold`] if the threshold is not in [0, 1]
    /// - [`AggregateError::EmptyDataset`] if there are no touchpoints
    pub fn aggregate(&self, params: AggregationParams) -> Result<AggregationResult, AggregateError> {
        let threshold = params.low_confidence_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(AggregateError::InvalidThreshold(threshold));
        }
        if self.dataset.is_empty() {
            return Err(AggregateError::EmptyDataset);
        }

        let touchpoints = self.dataset.touchpoints();
        tracing::debug!(
            weighting = %params.weighting,
            threshold,
            rows = touchpoints.len(),
            "aggregating touchpoints"
        );

        let weights: Vec<f64> = touchpoints
            .iter()
            .map(|tp| params.weighting.weight(tp))
            .collect();

        let (weighted_sum, weight_sum) = touchpoints
            .iter()
            .zip(&weights)
            .fold((0.0, 0.0), |(ws, w), (tp, weight)| {
                (ws + tp.sentiment * weight, w + weight)
            });

        let total_mentions = touchpoints.iter().map(|tp| u64::from(tp.frequency)).sum();

        let low_confidence = touchpoints
            .iter()
            .filter(|tp| tp.confidence < threshold)
            .count();

        let (observed_pairs, coverage) = self.coverage();

        Ok(AggregationResult {
            weighting: params.weighting,
            low_confidence_threshold: threshold,
            avg_sentiment: weighted_sum / weight_sum,
            total_mentions,
            observed_pairs,
            coverage,
            low_confidence_share: ratio(low_confidence, touchpoints.len()),
            by_stage: group_by(touchpoints, &weights, |tp| &tp.stage),
            by_persona: group_by(touchpoints, &weights, |tp| &tp.persona),
            wins: rank_wins(touchpoints),
            risks: rank_risks(touchpoints),
            weights,
        })
    }

    /// Distinct observed pairs and their share of the stage × persona grid
    fn coverage(&self) -> (usize, f64) {
        let pairs: HashSet<(&str, &str)> = self
            .dataset
            .iter()
            .map(|tp| (tp.stage.as_str(), tp.persona.as_str()))
            .collect();

        let off_axis = self
            .dataset
            .iter()
            .filter(|tp| !self.stages.contains(&tp.stage) || !self.personas.contains(&tp.persona))
            .count();
        if off_axis > 0 {
            tracing::warn!(off_axis, "touchpoints outside the stage/persona vocabularies");
        }

        let grid = self.stages.len() * self.personas.len();
        let coverage = if grid == 0 {
            0.0
        } else {
            ratio(pairs.len(), grid).min(1.0)
        };
        (pairs.len(), coverage)
    }
}

impl Aggregator<'static> {
    /// Engine over the embedded demo study
    #[must_use]
    pub fn demo() -> Self {
        Self::new(&demo::DATASET, &demo::STAGES, &demo::PERSONAS)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(count: usize, total: usize) -> f64 {
    count as f64 / total as f64
}

/// Group into (weighted-sum, weight-sum) per key, then divide
fn group_by<F>(touchpoints: &[Touchpoint], weights: &[f64], key: F) -> Vec<GroupStats>
where
    F: Fn(&Touchpoint) -> &String,
{
    let mut groups: IndexMap<&str, GroupStats> = IndexMap::new();
    for (tp, weight) in touchpoints.iter().zip(weights) {
        let name = key(tp);
        let entry = groups.entry(name.as_str()).or_insert_with(|| GroupStats {
            key: name.clone(),
            weighted_sum: 0.0,
            weight_sum: 0.0,
            avg_sentiment: 0.0,
            total_mentions: 0,
            touchpoints: 0,
        });
        entry.weighted_sum += tp.sentiment * weight;
        entry.weight_sum += weight;
        entry.total_mentions += u64::from(tp.frequency);
        entry.touchpoints += 1;
    }

    groups
        .into_values()
        .map(|mut g| {
            g.avg_sentiment = g.weighted_sum / g.weight_sum;
            g
        })
        .collect()
}

/// Top wins by impact, descending; ties keep dataset order
fn rank_wins(touchpoints: &[Touchpoint]) -> Vec<Touchpoint> {
    let mut ranked: Vec<&Touchpoint> = touchpoints.iter().collect();
    ranked.sort_by(|a, b| b.impact().partial_cmp(&a.impact()).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(WIN_COUNT).cloned().collect()
}

/// Worst sentiment first, higher frequency first on ties
fn rank_risks(touchpoints: &[Touchpoint]) -> Vec<Touchpoint> {
    let mut ranked: Vec<&Touchpoint> = touchpoints.iter().collect();
    ranked.sort_by(|a, b| risk_order(a, b));
    ranked.into_iter().take(RISK_COUNT).cloned().collect()
}

/// Signed zeros compare equal; the dataset has no NaN
fn risk_order(a: &Touchpoint, b: &Touchpoint) -> Ordering {
    a.sentiment
        .partial_cmp(&b.sentiment)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.frequency.cmp(&a.frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(stage: &str, persona: &str, label: &str, s: f64, f: u32, c: f64) -> Touchpoint {
        Touchpoint::new(stage, persona, label).with_scores(s, f, c)
    }

    fn axes() -> (Vocabulary, Vocabulary) {
        (Vocabulary::new(["S1", "S2"]), Vocabulary::new(["P1", "P2"]))
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let (stages, personas) = axes();
        let ds = Dataset::empty();
        let err = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap_err();
        assert_eq!(err, AggregateError::EmptyDataset);
    }

    #[test]
    fn invalid_threshold_is_an_error() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![tp("S1", "P1", "a", 0.1, 1, 0.5)]).unwrap();
        let engine = Aggregator::new(&ds, &stages, &personas);
        for bad in [-0.1, 1.01, f64::NAN] {
            let params = AggregationParams::new(WeightingMode::Equal, bad);
            assert!(matches!(
                engine.aggregate(params),
                Err(AggregateError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn zero_weight_touchpoints_do_not_divide_by_zero() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "a", 0.4, 0, 0.0),
            tp("S2", "P1", "b", -0.2, 0, 0.0),
        ])
        .unwrap();
        let engine = Aggregator::new(&ds, &stages, &personas);
        for mode in [WeightingMode::Confidence, WeightingMode::Frequency] {
            let result = engine.aggregate(AggregationParams::new(mode, 0.5)).unwrap();
            assert!((result.avg_sentiment - 0.1).abs() < 1e-12);
            assert!(result.by_stage.iter().all(|g| g.avg_sentiment.is_finite()));
        }
    }

    #[test]
    fn weighted_average_by_frequency() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "a", 1.0, 3, 0.9),
            tp("S1", "P2", "b", 0.0, 1, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Frequency, 0.5))
            .unwrap();
        assert!((result.avg_sentiment - 0.75).abs() < 1e-12);
        assert_eq!(result.total_mentions, 4);
        assert_eq!(result.weights, vec![3.0, 1.0]);
    }

    #[test]
    fn groups_only_cover_present_values() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S2", "P1", "a", 0.2, 2, 0.9),
            tp("S2", "P2", "b", 0.4, 2, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Equal, 0.5))
            .unwrap();
        assert_eq!(result.by_stage.len(), 1);
        let s2 = result.stage("S2").unwrap();
        assert!((s2.avg_sentiment - 0.3).abs() < 1e-12);
        assert_eq!(s2.total_mentions, 4);
        assert_eq!(s2.touchpoints, 2);
        assert!(result.stage("S1").is_none());
        assert_eq!(result.by_persona.len(), 2);
    }

    #[test]
    fn coverage_counts_distinct_pairs() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "a", 0.2, 2, 0.9),
            tp("S1", "P1", "b", 0.4, 2, 0.9),
            tp("S2", "P2", "c", 0.4, 2, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        assert_eq!(result.observed_pairs, 2);
        assert!((result.coverage - 0.5).abs() < 1e-12);
    }

    #[test]
    fn off_axis_touchpoints_count_globally() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "a", 0.2, 2, 0.9),
            tp("Elsewhere", "P1", "b", 0.6, 2, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Equal, 0.5))
            .unwrap();
        assert!((result.avg_sentiment - 0.4).abs() < 1e-12);
        assert!(result.stage("Elsewhere").is_some());
        assert_eq!(result.observed_pairs, 2);
        assert!((result.coverage - 0.5).abs() < 1e-12);
    }

    #[test]
    fn coverage_clamps_when_off_axis_pairs_overflow_the_grid() {
        let stages = Vocabulary::new(["S1"]);
        let personas = Vocabulary::new(["P1"]);
        let ds = Dataset::new(vec![
            tp("S1", "P1", "a", 0.2, 2, 0.9),
            tp("X", "P1", "b", 0.2, 2, 0.9),
            tp("S1", "Y", "c", 0.2, 2, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        assert_eq!(result.observed_pairs, 3);
        assert!((result.coverage - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn signed_zero_sentiments_tie_on_frequency() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "quiet", -0.0, 1, 0.9),
            tp("S1", "P1", "loud", 0.0, 50, 0.9),
            tp("S1", "P1", "worst", -0.5, 5, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Equal, 0.5))
            .unwrap();
        let risks: Vec<&str> = result.risks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(risks, vec!["worst", "loud", "quiet"]);
    }

    #[test]
    fn signed_zero_impacts_keep_dataset_order() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "negative", -0.4, 0, 0.9),
            tp("S1", "P1", "neutral", 0.0, 3, 0.9),
            tp("S1", "P1", "sour", -0.2, 4, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        let wins: Vec<&str> = result.wins.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(wins, vec!["negative", "neutral"]);
    }

    #[test]
    fn risks_sorted_by_sentiment_then_frequency() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "C", 0.18, 10, 0.9),
            tp("S1", "P1", "B", 0.18, 24, 0.9),
            tp("S1", "P1", "A", -0.1, 31, 0.9),
            tp("S1", "P1", "D", 0.9, 99, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        let labels: Vec<&str> = result.risks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn wins_ties_keep_dataset_order() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![
            tp("S1", "P1", "first", 0.5, 10, 0.9),
            tp("S1", "P1", "second", 0.5, 10, 0.9),
            tp("S1", "P1", "third", 0.5, 10, 0.9),
        ])
        .unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        let labels: Vec<&str> = result.wins.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn short_dataset_yields_short_rankings() {
        let (stages, personas) = axes();
        let ds = Dataset::new(vec![tp("S1", "P1", "only", 0.5, 10, 0.9)]).unwrap();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::default())
            .unwrap();
        assert_eq!(result.wins.len(), 1);
        assert_eq!(result.risks.len(), 1);
    }

    #[test]
    fn empty_vocabulary_has_zero_coverage() {
        let empty = Vocabulary::default();
        let ds = Dataset::new(vec![tp("S1", "P1", "a", 0.5, 10, 0.9)]).unwrap();
        let result = Aggregator::new(&ds, &empty, &empty)
            .aggregate(AggregationParams::default())
            .unwrap();
        assert_eq!(result.coverage, 0.0);
    }
}
