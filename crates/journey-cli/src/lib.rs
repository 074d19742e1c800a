//! Journey map command-line front end
//!
//! Builds the `journey-map` command tree, resolves configuration and renders
//! each dashboard view as text or JSON.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod render;

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use commands::run;

fn weighting_arg() -> Arg {
    Arg::new("weighting")
        .long("weighting")
        .value_parser(["confidence", "frequency", "equal"])
        .ignore_case(true)
        .help("Sentiment weighting mode (overrides config)")
}

fn threshold_arg() -> Arg {
    Arg::new("threshold")
        .long("threshold")
        .value_parser(value_parser!(f64))
        .help("Low-confidence threshold in [0, 1] (overrides config)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// The `journey-map` command tree
#[must_use]
pub fn cli() -> Command {
    Command::new("journey-map")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Customer journey map analytics over the embedded study")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Dashboard configuration file (TOML)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .subcommand(
            Command::new("summary")
                .about("KPIs, stage health, persona engagement, quadrant and brief")
                .arg(weighting_arg())
                .arg(threshold_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("brief")
                .about("Copy-ready executive brief")
                .arg(weighting_arg())
                .arg(threshold_arg()),
        )
        .subcommand(
            Command::new("themes")
                .about("Theme × stage mention matrix")
                .arg(
                    Arg::new("taxonomy")
                        .long("taxonomy")
                        .value_parser(["heatmap", "legacy"])
                        .help("Theme taxonomy (overrides config)"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("evidence")
                .about("Evidence detail for a touchpoint; lists touchpoints without a label")
                .arg(Arg::new("label").help("Touchpoint label or \"label — persona\" key"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("journey")
                .about("Swim-lane placement of every touchpoint")
                .arg(json_arg()),
        )
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v`
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
