//! Plain-text rendering of dashboard views

use journey_core::{percent, SummarySnapshot, SwimLanes, ThemeMatrix};
use journey_model::EvidenceDetail;
use std::fmt::Write;

const SENTIMENT_LEGEND: &str = "Sentiment: 😡 -1.0 … 😕 … 😐 0.0 … 🙂 … 😄 +1.0";

/// Summary panel: KPI cards, charts as tables, brief
#[must_use]
pub fn summary(snapshot: &SummarySnapshot, show_legend: bool) -> String {
    let mut out = String::new();
    let k = &snapshot.kpis;

    let _ = writeln!(out, "Summary ({} weighting)", snapshot.config.weighting);
    let _ = writeln!(out, "  Avg Sentiment:         {:.2}", k.avg_sentiment);
    let _ = writeln!(out, "  Total Mentions:        {}", k.total_mentions);
    let _ = writeln!(out, "  Coverage:              {}", percent(k.coverage));
    let _ = writeln!(
        out,
        "  Low-confidence Share:  {} (< {:.2})",
        percent(k.low_confidence_share),
        snapshot.config.low_confidence_threshold
    );
    let _ = writeln!(out, "  Touchpoints:           {}", k.touchpoints);
    if show_legend {
        let _ = writeln!(out, "  {SENTIMENT_LEGEND}");
    }

    let _ = writeln!(
        out,
        "\nStage Health (target {:.2})",
        snapshot.config.stage_health_target
    );
    for row in &snapshot.stage_health {
        let flag = if row.below_target { " !" } else { "" };
        let _ = writeln!(out, "  {:>6.2}  {}{flag}", row.avg_sentiment, row.stage);
    }

    let _ = writeln!(out, "\nPersona Engagement");
    for row in &snapshot.persona_engagement {
        let _ = writeln!(
            out,
            "  {:>5}  {:>6.2}  {}",
            row.total_mentions, row.avg_sentiment, row.persona
        );
    }

    let q = &snapshot.quadrant;
    let _ = writeln!(
        out,
        "\nOpportunities Quadrant (median mentions {:.1}, sentiment line {:.2})",
        q.median_frequency, q.sentiment_threshold
    );
    for point in &q.points {
        let _ = writeln!(
            out,
            "  {:<10}  {:>4}  {:>6.2}  {}",
            point.quadrant.label(),
            point.frequency,
            point.sentiment,
            point.label
        );
    }

    let _ = writeln!(out, "\nExecutive Brief\n{}", snapshot.brief);
    out
}

/// Theme × stage grid with numbered columns
#[must_use]
pub fn theme_matrix(matrix: &ThemeMatrix) -> String {
    let mut out = String::new();
    let width = matrix.themes.iter().map(|t| t.chars().count()).max().unwrap_or(0);

    let _ = write!(out, "{:width$}", "");
    for col in 0..matrix.stages.len() {
        let _ = write!(out, " {:>5}", format!("[{}]", col + 1));
    }
    out.push('\n');

    for (theme, row) in matrix.themes.iter().zip(&matrix.cells) {
        let _ = write!(out, "{theme:width$}");
        for value in row {
            let _ = write!(out, " {value:>5}");
        }
        out.push('\n');
    }

    out.push('\n');
    for (col, stage) in matrix.stages.iter().enumerate() {
        let _ = writeln!(out, "[{}] {stage}", col + 1);
    }
    let _ = writeln!(out, "Max mentions per cell: {}", matrix.max_cell());
    if matrix.unplaced_mentions > 0 {
        let _ = writeln!(out, "Mentions outside the grid: {}", matrix.unplaced_mentions);
    }
    out
}

/// Evidence selector options
#[must_use]
pub fn evidence_options(options: &[String]) -> String {
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "{option}");
    }
    out
}

/// Evidence detail card
#[must_use]
pub fn evidence(detail: &EvidenceDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### {}", detail.touchpoint.label);
    let _ = writeln!(out, "Sentiment: {}", detail.sentiment);
    let _ = writeln!(out, "Frequency: {}", detail.frequency);
    let _ = writeln!(out, "Themes: {}", detail.themes.join(", "));
    let _ = writeln!(out, "Quote: \"{}\"", detail.quote);
    let _ = writeln!(out, "Suggested Actions:");
    for action in &detail.actions {
        let _ = writeln!(out, "• {action}");
    }
    out
}

/// Swim lanes, one lane per persona when aggregated, flat otherwise
#[must_use]
pub fn swim_lanes(lanes: &SwimLanes, aggregate: bool) -> String {
    let mut out = String::new();
    if aggregate {
        for (y, persona) in lanes.personas.iter().enumerate() {
            let _ = writeln!(out, "{persona}");
            for p in lanes.positions.iter().filter(|p| p.y == y) {
                let stage = &lanes.stages[p.x];
                let _ = writeln!(
                    out,
                    "  {} {} ({:.2}, {} mentions) @ {stage}",
                    p.emoji, p.label, p.sentiment, p.frequency
                );
            }
        }
    } else {
        for p in &lanes.positions {
            let _ = writeln!(out, "({}, {}) {} {}", p.x, p.y, p.emoji, p.label);
        }
    }
    for label in &lanes.unplaced {
        let _ = writeln!(out, "unplaced: {label}");
    }
    out
}
