//! Error types for Journey Core
//!
//! Provides error handling for:
//! - Aggregation over unusable input (empty dataset, bad threshold)
//! - Brief generation without enough ranked touchpoints
//! - Configuration loading and validation

use journey_model::{DatasetError, LookupError};

/// Main journey core error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Aggregation failed
    #[error("aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),

    /// Brief generation failed
    #[error("brief failed: {0}")]
    Brief(#[from] BriefError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dataset construction failed
    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Evidence lookup failed
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl CoreError {
    /// Check if the error was caused by caller input rather than data
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::Aggregate(AggregateError::InvalidThreshold(_)) | Self::Config(_) => true,
            Self::Lookup(e) => e.is_caller_error(),
            _ => false,
        }
    }
}

/// Aggregation engine errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Nothing to aggregate over (weight sum would be zero)
    #[error("cannot aggregate an empty dataset")]
    EmptyDataset,

    /// Threshold outside [0, 1] or not finite
    #[error("confidence threshold {0} out of range [0, 1]")]
    InvalidThreshold(f64),
}

/// Which ranking ran short
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Wins,
    Risks,
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wins => f.write_str("wins"),
            Self::Risks => f.write_str("risks"),
        }
    }
}

/// Brief generator errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BriefError {
    /// Too few touchpoints to fill a ranking
    #[error("insufficient ranking data: need {needed} {ranking}, have {available}")]
    InsufficientRankingData {
        ranking: Ranking,
        needed: usize,
        available: usize,
    },

    /// Upstream aggregation failed
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Value outside its allowed range
    #[error("{field} = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Malformed TOML
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file unreadable
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_error_display() {
        let err = BriefError::InsufficientRankingData {
            ranking: Ranking::Risks,
            needed: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient ranking data: need 3 risks, have 1"
        );
    }

    #[test]
    fn caller_errors() {
        assert!(CoreError::from(AggregateError::InvalidThreshold(2.0)).is_caller_error());
        assert!(!CoreError::from(AggregateError::EmptyDataset).is_caller_error());
        assert!(CoreError::from(LookupError::UnknownTouchpoint("x".into())).is_caller_error());
        assert!(!CoreError::from(LookupError::NoEvidence("x".into())).is_caller_error());
    }
}
