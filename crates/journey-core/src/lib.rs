//! Journey Core - summary analytics for the journey map
//!
//! Turns the static touchpoint study into the numbers behind the dashboard:
//! - Weighted sentiment, coverage and low-confidence share
//! - Per-stage and per-persona rollups
//! - Ranked wins and risks, and the executive brief built from them
//! - The theme × stage mention matrix
//! - Stage health, persona engagement, opportunity quadrant, swim lanes
//!
//! # Example
//!
//! ```rust
//! use journey_core::{generate_brief, AggregationParams, Aggregator, WeightingMode};
//!
//! let engine = Aggregator::demo();
//! let result = engine
//!     .aggregate(AggregationParams::new(WeightingMode::Equal, 0.75))
//!     .unwrap();
//! assert_eq!(result.total_mentions, 398);
//!
//! let brief = generate_brief(&result).unwrap();
//! assert!(brief.starts_with("Overall sentiment is **0.39**"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod aggregate;
pub mod brief;
pub mod config;
pub mod error;
pub mod heatmap;
pub mod summary;
pub mod views;

// Re-exports for convenience
pub use aggregate::{AggregationResult, Aggregator, GroupStats, RISK_COUNT, WIN_COUNT};
pub use brief::{generate_brief, percent, BriefEntry, ExecutiveBrief};
pub use config::{
    AggregationParams, DashboardConfig, DemoControls, DisplayConfig, SummaryConfig,
    WeightingMode, MIN_WEIGHT,
};
pub use error::{AggregateError, BriefError, ConfigError, CoreError, Ranking};
pub use heatmap::ThemeMatrix;
pub use summary::{Kpis, SummarySnapshot};
pub use views::{
    persona_engagement, stage_health, LanePosition, OpportunityQuadrant, PersonaEngagement,
    Quadrant, QuadrantPoint, StageHealth, SwimLanes,
};

pub use journey_model as model;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Journey Core
    pub use crate::{
        AggregationParams, AggregationResult, Aggregator, DashboardConfig, ExecutiveBrief,
        SummaryConfig, SummarySnapshot, ThemeMatrix, WeightingMode,
    };
    pub use journey_model::{demo, Dataset, TaxonomyKind, Touchpoint, Vocabulary};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
