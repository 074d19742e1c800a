//! Executive brief generation
//!
//! Formats an [`AggregationResult`] into the copy-ready narrative shown next
//! to the opportunity quadrant. Formatting only: no value computed upstream
//! is re-ranked or rounded before it is printed.

use crate::aggregate::{AggregationResult, RISK_COUNT, WIN_COUNT};
use crate::error::{BriefError, Ranking};
use journey_model::Touchpoint;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A ranked touchpoint as quoted in the brief
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefEntry {
    pub label: String,
    pub sentiment: f64,
    pub stage: String,
    pub persona: String,
}

impl From<&Touchpoint> for BriefEntry {
    fn from(tp: &Touchpoint) -> Self {
        Self {
            label: tp.label.clone(),
            sentiment: tp.sentiment,
            stage: tp.stage.clone(),
            persona: tp.persona.clone(),
        }
    }
}

impl Display for BriefEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.label, self.sentiment)
    }
}

/// Structured executive brief
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveBrief {
    pub avg_sentiment: f64,
    pub total_mentions: u64,
    pub coverage: f64,
    pub wins: Vec<BriefEntry>,
    pub risks: Vec<BriefEntry>,
    pub next_moves: Vec<String>,
}

impl ExecutiveBrief {
    /// Build the brief from an aggregation result
    ///
    /// # Errors
    /// Returns [`BriefError::InsufficientRankingData`] when fewer than two wins
    /// or three risks are available
    pub fn from_result(result: &AggregationResult) -> Result<Self, BriefError> {
        require(Ranking::Wins, WIN_COUNT, result.wins.len())?;
        require(Ranking::Risks, RISK_COUNT, result.risks.len())?;

        let wins: Vec<BriefEntry> = result.wins.iter().map(BriefEntry::from).collect();
        let risks: Vec<BriefEntry> = result.risks.iter().map(BriefEntry::from).collect();

        let next_moves = vec![
            format!("Investigate '{}' in {}", risks[0].label, risks[0].stage),
            format!("accelerate adoption with {}", wins[0].persona),
            format!("standardize reporting in {}", wins[1].stage),
        ];

        Ok(Self {
            avg_sentiment: result.avg_sentiment,
            total_mentions: result.total_mentions,
            coverage: result.coverage,
            wins,
            risks,
            next_moves,
        })
    }

    /// Opening sentence with the headline KPIs
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Overall sentiment is **{:.2}** across **{}** mentions with **{}** coverage.",
            self.avg_sentiment,
            self.total_mentions,
            percent(self.coverage)
        )
    }

    /// Full narrative as one paragraph
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for ExecutiveBrief {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} **Wins:** {}. **Risks:** {}. **Next moves:** {}.",
            self.headline(),
            join(&self.wins),
            join(&self.risks),
            self.next_moves.join("; ")
        )
    }
}

/// Generate the narrative string for a result
///
/// # Errors
/// See [`ExecutiveBrief::from_result`]
pub fn generate_brief(result: &AggregationResult) -> Result<String, BriefError> {
    ExecutiveBrief::from_result(result).map(|b| b.render())
}

fn require(ranking: Ranking, needed: usize, available: usize) -> Result<(), BriefError> {
    if available < needed {
        return Err(BriefError::InsufficientRankingData {
            ranking,
            needed,
            available,
        });
    }
    Ok(())
}

fn join(entries: &[BriefEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whole-number percentage, e.g. `0.142` → `"14%"`
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
