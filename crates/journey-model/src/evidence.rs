//! Evidence catalog
//!
//! Provides [`EvidenceCatalog`], the per-touchpoint quote, theme summary and
//! suggested actions behind the evidence detail view.

use crate::dataset::Dataset;
use crate::error::LookupError;
use crate::touchpoint::Touchpoint;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supporting evidence for one touchpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Representative customer quote
    pub quote: String,
    /// Human-readable theme phrases
    pub themes: Vec<String>,
    /// Suggested follow-up actions
    pub actions: Vec<String>,
}

impl EvidenceRecord {
    #[must_use]
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            themes: Vec::new(),
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }
}

/// Resolved evidence detail, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceDetail {
    pub display_key: String,
    pub touchpoint: Touchpoint,
    /// e.g. `"0.18 🙂"`
    pub sentiment: String,
    /// e.g. `"24 mentions"`
    pub frequency: String,
    pub quote: String,
    pub themes: Vec<String>,
    pub actions: Vec<String>,
}

/// Label → evidence record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceCatalog(IndexMap<String, EvidenceRecord>);

impl EvidenceCatalog {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, label: impl Into<String>, record: EvidenceRecord) -> Self {
        self.0.insert(label.into(), record);
        self
    }

    /// Raw record for a label
    #[inline]
    #[must_use]
    pub fn record(&self, label: &str) -> Option<&EvidenceRecord> {
        self.0.get(label)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a label or display key against the dataset
    ///
    /// # Errors
    /// - [`LookupError::UnknownTouchpoint`] if no touchpoint matches `key`
    /// - [`LookupError::NoEvidence`] if the touchpoint has no record
    pub fn lookup(&self, dataset: &Dataset, key: &str) -> Result<EvidenceDetail, LookupError> {
        let touchpoint = dataset
            .find(key)
            .ok_or_else(|| LookupError::UnknownTouchpoint(key.to_string()))?;
        let record = self
            .record(&touchpoint.label)
            .ok_or_else(|| LookupError::NoEvidence(touchpoint.label.clone()))?;

        Ok(EvidenceDetail {
            display_key: touchpoint.display_key(),
            sentiment: touchpoint.sentiment_display(),
            frequency: touchpoint.frequency_display(),
            quote: record.quote.clone(),
            themes: record.themes.clone(),
            actions: record.actions.clone(),
            touchpoint: touchpoint.clone(),
        })
    }
}
