//! Dashboard configuration
//!
//! [`DashboardConfig`] is read from TOML. Every field has a default, so an
//! empty document (or no file at all) yields the stock dashboard: confidence
//! weighting with a 0.75 low-confidence threshold.

use crate::error::ConfigError;
use journey_model::{TaxonomyKind, Touchpoint};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Floor applied to confidence/frequency weights
pub const MIN_WEIGHT: f64 = 0.001;

/// How touchpoints are weighted in sentiment averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingMode {
    /// Weight by extraction confidence
    #[default]
    Confidence,
    /// Weight by mention count
    Frequency,
    /// Every touchpoint counts once
    Equal,
}

impl WeightingMode {
    /// Weight of one touchpoint, always positive
    #[inline]
    #[must_use]
    pub fn weight(&self, touchpoint: &Touchpoint) -> f64 {
        match self {
            Self::Confidence => touchpoint.confidence.max(MIN_WEIGHT),
            Self::Frequency => f64::from(touchpoint.frequency).max(MIN_WEIGHT),
            Self::Equal => 1.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confidence => "confidence",
            Self::Frequency => "frequency",
            Self::Equal => "equal",
        }
    }
}

impl Display for WeightingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "confidence" => Ok(Self::Confidence),
            "frequency" => Ok(Self::Frequency),
            "equal" => Ok(Self::Equal),
            other => Err(format!("unknown weighting mode: {other}")),
        }
    }
}

/// Per-request aggregation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationParams {
    pub weighting: WeightingMode,
    /// Touchpoints with confidence strictly below this are "low confidence"
    pub low_confidence_threshold: f64,
}

impl AggregationParams {
    #[inline]
    #[must_use]
    pub fn new(weighting: WeightingMode, low_confidence_threshold: f64) -> Self {
        Self {
            weighting,
            low_confidence_threshold,
        }
    }
}

impl Default for AggregationParams {
    fn default() -> Self {
        Self::new(WeightingMode::Confidence, 0.75)
    }
}

/// Summary panel settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub weighting: WeightingMode,
    pub low_confidence_threshold: f64,
    /// Stages averaging below this are flagged in stage health
    pub stage_health_target: f64,
    /// Horizontal split of the opportunity quadrant
    pub quadrant_sentiment_threshold: f64,
}

impl SummaryConfig {
    /// Aggregation parameters for this panel
    #[inline]
    #[must_use]
    pub fn params(&self) -> AggregationParams {
        AggregationParams::new(self.weighting, self.low_confidence_threshold)
    }

    /// With weighting mode
    #[inline]
    #[must_use]
    pub fn with_weighting(mut self, weighting: WeightingMode) -> Self {
        self.weighting = weighting;
        self
    }

    /// With low-confidence threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.low_confidence_threshold = threshold;
        self
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            weighting: WeightingMode::Confidence,
            low_confidence_threshold: 0.75,
            stage_health_target: 0.40,
            quadrant_sentiment_threshold: 0.30,
        }
    }
}

/// Working display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_sentiment_legend: bool,
    pub aggregate_touchpoints: bool,
    pub taxonomy: TaxonomyKind,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_sentiment_legend: false,
            aggregate_touchpoints: true,
            taxonomy: TaxonomyKind::Heatmap,
        }
    }
}

/// Placeholder controls that exist only to show the intended interface
///
/// None of these change any computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoControls {
    pub file_upload: bool,
    pub persona_filter: bool,
    pub stage_focus: bool,
    pub min_confidence_filter: bool,
    pub date_range: bool,
    pub compare: bool,
    pub export: bool,
}

impl DemoControls {
    /// Names of the placeholder controls switched on
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("file_upload", self.file_upload),
            ("persona_filter", self.persona_filter),
            ("stage_focus", self.stage_focus),
            ("min_confidence_filter", self.min_confidence_filter),
            ("date_range", self.date_range),
            ("compare", self.compare),
            ("export", self.export),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Full dashboard configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub summary: SummaryConfig,
    pub display: DisplayConfig,
    pub demo: DemoControls,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::OutOfRange`] for invalid values
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`DashboardConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns the first out-of-range field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.summary;
        check_range("summary.low_confidence_threshold", s.low_confidence_threshold, 0.0, 1.0)?;
        check_range("summary.stage_health_target", s.stage_health_target, -1.0, 1.0)?;
        check_range(
            "summary.quadrant_sentiment_threshold",
            s.quadrant_sentiment_threshold,
            -1.0,
            1.0,
        )?;
        Ok(())
    }

    /// Log a warning for each placeholder control switched on
    pub fn warn_placeholders(&self) {
        for name in self.demo.enabled() {
            tracing::warn!(control = name, "demo control is a placeholder and has no effect");
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_floored() {
        let zero = Touchpoint::new("s", "p", "l").with_scores(0.2, 0, 0.0);
        assert_eq!(WeightingMode::Confidence.weight(&zero), MIN_WEIGHT);
        assert_eq!(WeightingMode::Frequency.weight(&zero), MIN_WEIGHT);
        assert_eq!(WeightingMode::Equal.weight(&zero), 1.0);
    }

    #[test]
    fn weighting_mode_parse() {
        assert_eq!("Confidence".parse::<WeightingMode>(), Ok(WeightingMode::Confidence));
        assert_eq!("EQUAL".parse::<WeightingMode>(), Ok(WeightingMode::Equal));
        assert!("median".parse::<WeightingMode>().is_err());
    }

    #[test]
    fn empty_document_is_default() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.summary.params(), AggregationParams::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = DashboardConfig::from_toml_str(
            "[summary]\nweighting = \"frequency\"\n\n[display]\ntaxonomy = \"legacy\"\n",
        )
        .unwrap();
        assert_eq!(config.summary.weighting, WeightingMode::Frequency);
        assert_eq!(config.summary.low_confidence_threshold, 0.75);
        assert_eq!(config.display.taxonomy, TaxonomyKind::Legacy);
        assert!(config.display.aggregate_touchpoints);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let err = DashboardConfig::from_toml_str("[summary]\nlow_confidence_threshold = 1.5\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "summary.low_confidence_threshold",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = DashboardConfig::from_toml_str("[summary\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn demo_controls_enabled() {
        let demo = DemoControls {
            export: true,
            compare: true,
            ..DemoControls::default()
        };
        assert_eq!(demo.enabled(), vec!["compare", "export"]);
        assert!(DemoControls::default().enabled().is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = DashboardConfig::new();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(DashboardConfig::from_toml_str(&text).unwrap(), config);
    }
}
