//! Summary panel snapshot
//!
//! Bundles every summary-panel output for one request so the presentation
//! layer gets a single value.

use crate::aggregate::{AggregationResult, Aggregator};
use crate::brief::ExecutiveBrief;
use crate::config::SummaryConfig;
use crate::error::CoreError;
use crate::views::{
    persona_engagement, stage_health, OpportunityQuadrant, PersonaEngagement, StageHealth,
};
use serde::Serialize;

/// Headline numbers for the KPI cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub avg_sentiment: f64,
    pub total_mentions: u64,
    pub coverage: f64,
    pub low_confidence_share: f64,
    /// Touchpoints in the aggregated dataset
    pub touchpoints: usize,
}

impl From<&AggregationResult> for Kpis {
    fn from(r: &AggregationResult) -> Self {
        Self {
            avg_sentiment: r.avg_sentiment,
            total_mentions: r.total_mentions,
            coverage: r.coverage,
            low_confidence_share: r.low_confidence_share,
            touchpoints: r.weights.len(),
        }
    }
}

/// Everything on the summary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySnapshot {
    pub config: SummaryConfig,
    pub kpis: Kpis,
    pub stage_health: Vec<StageHealth>,
    pub persona_engagement: Vec<PersonaEngagement>,
    pub quadrant: OpportunityQuadrant,
    pub brief: ExecutiveBrief,
    pub result: AggregationResult,
}

impl SummarySnapshot {
    /// Compute the panel for one configuration
    ///
    /// # Errors
    /// Propagates aggregation and brief errors
    pub fn build(engine: &Aggregator<'_>, config: SummaryConfig) -> Result<Self, CoreError> {
        let result = engine.aggregate(config.params())?;
        let brief = ExecutiveBrief::from_result(&result)?;
        let snapshot = Self {
            config,
            kpis: Kpis::from(&result),
            stage_health: stage_health(&result, config.stage_health_target),
            persona_engagement: persona_engagement(&result),
            quadrant: OpportunityQuadrant::build(
                engine.dataset(),
                config.quadrant_sentiment_threshold,
            ),
            brief,
            result,
        };
        tracing::info!(
            weighting = %config.weighting,
            avg_sentiment = snapshot.kpis.avg_sentiment,
            "summary computed"
        );
        Ok(snapshot)
    }
}
