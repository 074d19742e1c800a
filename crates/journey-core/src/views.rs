//! Derived summary views
//!
//! Read-only projections of an [`AggregationResult`] and its dataset:
//! - stage health (weakest stage first)
//! - persona engagement (quietest persona first)
//! - opportunity quadrant (mentions vs sentiment)
//! - swim-lane placement (stage × persona grid positions)

use crate::aggregate::{AggregationResult, GroupStats};
use journey_model::{Dataset, Vocabulary};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// One bar of the stage health chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageHealth {
    pub stage: String,
    pub avg_sentiment: f64,
    pub total_mentions: u64,
    /// Average sits under the health target line
    pub below_target: bool,
}

/// Stages sorted by weighted sentiment, ascending
#[must_use]
pub fn stage_health(result: &AggregationResult, target: f64) -> Vec<StageHealth> {
    let mut rows: Vec<StageHealth> = result
        .by_stage
        .iter()
        .map(|g| StageHealth {
            stage: g.key.clone(),
            avg_sentiment: g.avg_sentiment,
            total_mentions: g.total_mentions,
            below_target: g.avg_sentiment < target,
        })
        .collect();
    rows.sort_by(|a, b| a.avg_sentiment.total_cmp(&b.avg_sentiment));
    rows
}

/// One bar of the persona engagement chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaEngagement {
    pub persona: String,
    pub total_mentions: u64,
    pub avg_sentiment: f64,
}

impl From<&GroupStats> for PersonaEngagement {
    fn from(g: &GroupStats) -> Self {
        Self {
            persona: g.key.clone(),
            total_mentions: g.total_mentions,
            avg_sentiment: g.avg_sentiment,
        }
    }
}

/// Personas sorted by total mentions, ascending
#[must_use]
pub fn persona_engagement(result: &AggregationResult) -> Vec<PersonaEngagement> {
    let mut rows: Vec<PersonaEngagement> =
        result.by_persona.iter().map(PersonaEngagement::from).collect();
    rows.sort_by_key(|r| r.total_mentions);
    rows
}

/// Opportunity quadrant cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Positive but rarely mentioned
    Leverage,
    /// Negative and rarely mentioned
    FixFirst,
    /// Positive and frequently mentioned
    Activate,
    /// Negative but frequently mentioned
    LowImpact,
}

impl Quadrant {
    /// Classify a point against the split lines
    ///
    /// Sentiment on the line counts as high; frequency on the line counts as
    /// low.
    #[must_use]
    pub fn classify(frequency: f64, sentiment: f64, median_frequency: f64, threshold: f64) -> Self {
        let high_sentiment = sentiment >= threshold;
        let high_frequency = frequency > median_frequency;
        match (high_frequency, high_sentiment) {
            (false, true) => Self::Leverage,
            (false, false) => Self::FixFirst,
            (true, true) => Self::Activate,
            (true, false) => Self::LowImpact,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leverage => "Leverage",
            Self::FixFirst => "Fix first",
            Self::Activate => "Activate",
            Self::LowImpact => "Low impact",
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One touchpoint on the quadrant chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantPoint {
    pub label: String,
    pub persona: String,
    pub frequency: u32,
    pub sentiment: f64,
    pub quadrant: Quadrant,
}

/// Mentions vs sentiment, split at the median frequency and a sentiment line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityQuadrant {
    pub median_frequency: f64,
    pub sentiment_threshold: f64,
    pub points: Vec<QuadrantPoint>,
}

impl OpportunityQuadrant {
    /// Place every touchpoint; an empty dataset has median 0 and no points
    #[must_use]
    pub fn build(dataset: &Dataset, sentiment_threshold: f64) -> Self {
        let median_frequency = median(dataset.iter().map(|tp| f64::from(tp.frequency)).collect());
        let points = dataset
            .iter()
            .map(|tp| QuadrantPoint {
                label: tp.label.clone(),
                persona: tp.persona.clone(),
                frequency: tp.frequency,
                sentiment: tp.sentiment,
                quadrant: Quadrant::classify(
                    f64::from(tp.frequency),
                    tp.sentiment,
                    median_frequency,
                    sentiment_threshold,
                ),
            })
            .collect();
        Self {
            median_frequency,
            sentiment_threshold,
            points,
        }
    }

    /// Points in one quadrant, dataset order
    pub fn in_quadrant(&self, quadrant: Quadrant) -> impl Iterator<Item = &QuadrantPoint> {
        self.points.iter().filter(move |p| p.quadrant == quadrant)
    }
}

/// Median, averaging the middle pair for even counts
fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// A touchpoint placed in the swim-lane grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanePosition {
    pub label: String,
    /// Stage index
    pub x: usize,
    /// Persona index
    pub y: usize,
    pub frequency: u32,
    pub sentiment: f64,
    pub emoji: String,
}

/// Swim-lane placement of every touchpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwimLanes {
    pub stages: Vec<String>,
    pub personas: Vec<String>,
    pub positions: Vec<LanePosition>,
    /// Labels whose stage or persona is not on an axis
    pub unplaced: Vec<String>,
}

impl SwimLanes {
    /// Place touchpoints at (stage index, persona index)
    #[must_use]
    pub fn build(dataset: &Dataset, stages: &Vocabulary, personas: &Vocabulary) -> Self {
        let mut positions = Vec::with_capacity(dataset.len());
        let mut unplaced = Vec::new();
        for tp in dataset {
            match (stages.position(&tp.stage), personas.position(&tp.persona)) {
                (Some(x), Some(y)) => positions.push(LanePosition {
                    label: tp.label.clone(),
                    x,
                    y,
                    frequency: tp.frequency,
                    sentiment: tp.sentiment,
                    emoji: tp.emoji.clone(),
                }),
                _ => {
                    tracing::warn!(label = %tp.label, stage = %tp.stage, persona = %tp.persona, "touchpoint has no swim-lane position");
                    unplaced.push(tp.label.clone());
                }
            }
        }
        Self {
            stages: stages.as_slice().to_vec(),
            personas: personas.as_slice().to_vec(),
            positions,
            unplaced,
        }
    }

    /// Position of a touchpoint by label
    #[must_use]
    pub fn position(&self, label: &str) -> Option<&LanePosition> {
        self.positions.iter().find(|p| p.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::config::{AggregationParams, WeightingMode};
    use journey_model::Touchpoint;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Touchpoint::new("S1", "P1", "low-low").with_scores(0.1, 5, 0.9),
            Touchpoint::new("S1", "P2", "low-high").with_scores(0.6, 8, 0.9),
            Touchpoint::new("S2", "P1", "high-low").with_scores(-0.2, 40, 0.9),
            Touchpoint::new("S3", "P2", "high-high").with_scores(0.7, 50, 0.9),
        ])
        .unwrap()
    }

    #[test]
    fn median_of_even_and_odd() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(Vec::new()), 0.0);
    }

    #[test]
    fn quadrant_classification() {
        let q = OpportunityQuadrant::build(&dataset(), 0.3);
        assert_eq!(q.median_frequency, 24.0);
        let by_label = |l: &str| q.points.iter().find(|p| p.label == l).unwrap().quadrant;
        assert_eq!(by_label("low-low"), Quadrant::FixFirst);
        assert_eq!(by_label("low-high"), Quadrant::Leverage);
        assert_eq!(by_label("high-low"), Quadrant::LowImpact);
        assert_eq!(by_label("high-high"), Quadrant::Activate);
        assert_eq!(q.in_quadrant(Quadrant::Activate).count(), 1);
    }

    #[test]
    fn quadrant_boundaries() {
        assert_eq!(Quadrant::classify(10.0, 0.3, 10.0, 0.3), Quadrant::Leverage);
        assert_eq!(Quadrant::classify(10.1, 0.29, 10.0, 0.3), Quadrant::LowImpact);
    }

    #[test]
    fn stage_health_sorted_and_flagged() {
        let stages = Vocabulary::new(["S1", "S2", "S3"]);
        let personas = Vocabulary::new(["P1", "P2"]);
        let ds = dataset();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Equal, 0.5))
            .unwrap();
        let rows = stage_health(&result, 0.4);
        let order: Vec<&str> = rows.iter().map(|r| r.stage.as_str()).collect();
        assert_eq!(order, vec!["S2", "S1", "S3"]);
        assert!(rows[0].below_target);
        assert!(rows[1].below_target);
        assert!(!rows[2].below_target);
    }

    #[test]
    fn persona_engagement_sorted_by_mentions() {
        let stages = Vocabulary::new(["S1", "S2", "S3"]);
        let personas = Vocabulary::new(["P1", "P2"]);
        let ds = dataset();
        let result = Aggregator::new(&ds, &stages, &personas)
            .aggregate(AggregationParams::new(WeightingMode::Equal, 0.5))
            .unwrap();
        let rows = persona_engagement(&result);
        assert_eq!(rows[0].persona, "P1");
        assert_eq!(rows[0].total_mentions, 45);
        assert_eq!(rows[1].total_mentions, 58);
    }

    #[test]
    fn swim_lanes_place_known_axes_only() {
        let stages = Vocabulary::new(["S1", "S2"]);
        let personas = Vocabulary::new(["P1", "P2"]);
        let lanes = SwimLanes::build(&dataset(), &stages, &personas);
        assert_eq!(lanes.positions.len(), 3);
        assert_eq!(lanes.unplaced, vec!["high-high".to_string()]);
        let p = lanes.position("high-low").unwrap();
        assert_eq!((p.x, p.y), (1, 0));
    }
}
