//! Subcommand dispatch
//!
//! Each command resolves its settings (config file, then flags), computes the
//! view through `journey-core` and returns the rendered output.

use crate::render;
use anyhow::{Context, Result};
use clap::ArgMatches;
use journey_core::{
    Aggregator, DashboardConfig, ExecutiveBrief, SummaryConfig, SummarySnapshot, SwimLanes,
    ThemeMatrix, WeightingMode,
};
use journey_model::{demo, TaxonomyKind};
use serde::Serialize;
use std::path::PathBuf;

/// Run the selected subcommand and return its output
///
/// # Errors
/// Fails on unreadable/invalid configuration, invalid overrides, or when a
/// view cannot be computed for the data
pub fn run(matches: &ArgMatches) -> Result<String> {
    let config = load_config(matches)?;
    config.warn_placeholders();

    match matches.subcommand() {
        Some(("summary", args)) => summary(&config, args),
        Some(("brief", args)) => brief(&config, args),
        Some(("themes", args)) => themes(&config, args),
        Some(("evidence", args)) => evidence(args),
        Some(("journey", args)) => journey(&config, args),
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<DashboardConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

/// Summary settings with command-line overrides applied
fn summary_config(config: &DashboardConfig, args: &ArgMatches) -> Result<SummaryConfig> {
    let mut summary = config.summary;
    if let Some(mode) = args.get_one::<String>("weighting") {
        let mode: WeightingMode = mode.parse().map_err(anyhow::Error::msg)?;
        summary = summary.with_weighting(mode);
    }
    if let Some(threshold) = args.get_one::<f64>("threshold") {
        summary = summary.with_threshold(*threshold);
    }
    tracing::debug!(weighting = %summary.weighting, threshold = summary.low_confidence_threshold, "summary settings");
    Ok(summary)
}

fn summary(config: &DashboardConfig, args: &ArgMatches) -> Result<String> {
    let summary = summary_config(config, args)?;
    let snapshot = SummarySnapshot::build(&Aggregator::demo(), summary)
        .context("computing summary")?;
    if args.get_flag("json") {
        return to_json(&snapshot);
    }
    Ok(render::summary(&snapshot, config.display.show_sentiment_legend))
}

fn brief(config: &DashboardConfig, args: &ArgMatches) -> Result<String> {
    let summary = summary_config(config, args)?;
    let result = Aggregator::demo()
        .aggregate(summary.params())
        .context("aggregating touchpoints")?;
    let brief = ExecutiveBrief::from_result(&result).context("writing brief")?;
    Ok(brief.render())
}

fn themes(config: &DashboardConfig, args: &ArgMatches) -> Result<String> {
    let kind = match args.get_one::<String>("taxonomy") {
        Some(name) => name.parse::<TaxonomyKind>().map_err(anyhow::Error::msg)?,
        None => config.display.taxonomy,
    };
    let matrix = ThemeMatrix::build(&demo::DATASET, demo::taxonomy(kind));
    if args.get_flag("json") {
        return to_json(&matrix);
    }
    Ok(render::theme_matrix(&matrix))
}

fn evidence(args: &ArgMatches) -> Result<String> {
    let json = args.get_flag("json");
    let Some(key) = args.get_one::<String>("label") else {
        let options = demo::DATASET.display_keys();
        return if json {
            to_json(&options)
        } else {
            Ok(render::evidence_options(&options))
        };
    };

    let detail = demo::EVIDENCE
        .lookup(&demo::DATASET, key)
        .with_context(|| format!("looking up evidence for '{key}'"))?;
    if json {
        return to_json(&detail);
    }
    Ok(render::evidence(&detail))
}

fn journey(config: &DashboardConfig, args: &ArgMatches) -> Result<String> {
    let lanes = SwimLanes::build(&demo::DATASET, &demo::STAGES, &demo::PERSONAS);
    if args.get_flag("json") {
        return to_json(&lanes);
    }
    Ok(render::swim_lanes(&lanes, config.display.aggregate_touchpoints))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}
