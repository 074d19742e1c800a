//! Error types for the journey data model
//!
//! - Dataset construction failures (invariant violations)
//! - Lookup failures for evidence detail

/// Touchpoint dataset construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Two touchpoints share a label
    #[error("duplicate touchpoint label: {label}")]
    DuplicateLabel { label: String },

    /// Sentiment outside [-1, 1]
    #[error("sentiment {value} out of range [-1, 1] for '{label}'")]
    SentimentOutOfRange { label: String, value: f64 },

    /// Confidence outside [0, 1]
    #[error("confidence {value} out of range [0, 1] for '{label}'")]
    ConfidenceOutOfRange { label: String, value: f64 },

    /// NaN or infinite score
    #[error("non-finite {field} for '{label}'")]
    NonFinite { label: String, field: &'static str },
}

/// Evidence/detail lookup errors
///
/// An unknown touchpoint is a caller-input error; a known touchpoint without
/// recorded evidence is a genuine "no data" case. The two are kept apart so
/// callers can report them differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Label (or display key) matches no touchpoint in the dataset
    #[error("unknown touchpoint: {0}")]
    UnknownTouchpoint(String),

    /// Touchpoint exists but has no evidence record
    #[error("no evidence recorded for touchpoint: {0}")]
    NoEvidence(String),
}

impl LookupError {
    /// Check if the error was caused by caller input
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownTouchpoint(_))
    }
}
