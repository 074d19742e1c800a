//! Immutable touchpoint dataset
//!
//! Provides [`Dataset`], an ordered, validated collection of touchpoints.
//! Once built a dataset is never mutated.

use crate::error::DatasetError;
use crate::touchpoint::Touchpoint;
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, validated touchpoint collection
///
/// Invariants (checked by [`Dataset::new`]):
/// - labels are unique
/// - sentiment is finite and in [-1, 1]
/// - confidence is finite and in [0, 1]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    touchpoints: Vec<Touchpoint>,
}

impl Dataset {
    /// Build dataset, validating every row
    ///
    /// # Errors
    /// Returns the first invariant violation found, in row order
    pub fn new(touchpoints: Vec<Touchpoint>) -> Result<Self, DatasetError> {
        validate(&touchpoints)?;
        tracing::debug!(rows = touchpoints.len(), "dataset built");
        Ok(Self { touchpoints })
    }

    /// Empty dataset
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from embedded rows without re-checking them
    ///
    /// Only used for tables compiled into the binary, which are covered by
    /// tests.
    pub(crate) fn from_static(touchpoints: Vec<Touchpoint>) -> Self {
        debug_assert!(validate(&touchpoints).is_ok());
        Self { touchpoints }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.touchpoints.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touchpoints.is_empty()
    }

    /// Touchpoints in dataset order
    #[inline]
    #[must_use]
    pub fn touchpoints(&self) -> &[Touchpoint] {
        &self.touchpoints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Touchpoint> {
        self.touchpoints.iter()
    }

    /// Find touchpoint by label
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Touchpoint> {
        self.touchpoints.iter().find(|tp| tp.label == label)
    }

    /// Find touchpoint by label or by `"{label} — {persona}"` display key
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Touchpoint> {
        self.get(key)
            .or_else(|| self.touchpoints.iter().find(|tp| tp.display_key() == key))
    }

    /// Display keys in dataset order
    #[must_use]
    pub fn display_keys(&self) -> Vec<String> {
        self.touchpoints.iter().map(Touchpoint::display_key).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Touchpoint;
    type IntoIter = std::slice::Iter<'a, Touchpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.touchpoints.iter()
    }
}

fn validate(touchpoints: &[Touchpoint]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(touchpoints.len());
    for tp in touchpoints {
        if !tp.sentiment.is_finite() {
            return Err(DatasetError::NonFinite {
                label: tp.label.clone(),
                field: "sentiment",
            });
        }
        if !tp.confidence.is_finite() {
            return Err(DatasetError::NonFinite {
                label: tp.label.clone(),
                field: "confidence",
            });
        }
        if !(-1.0..=1.0).contains(&tp.sentiment) {
            return Err(DatasetError::SentimentOutOfRange {
                label: tp.label.clone(),
                value: tp.sentiment,
            });
        }
        if !(0.0..=1.0).contains(&tp.confidence) {
            return Err(DatasetError::ConfidenceOutOfRange {
                label: tp.label.clone(),
                value: tp.confidence,
            });
        }
        if !seen.insert(tp.label.as_str()) {
            return Err(DatasetError::DuplicateLabel {
                label: tp.label.clone(),
            });
        }
    }
    Ok(())
}
