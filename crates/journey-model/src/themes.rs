//! Theme index and taxonomies
//!
//! Provides [`ThemeMapping`] (label → tags) and [`ThemeTaxonomy`], which pairs
//! a mapping with the row/column vocabularies of the theme × stage matrix.

use crate::vocab::Vocabulary;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Label → ordered theme tags
///
/// Labels absent from the mapping have zero tags; a lookup never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeMapping(IndexMap<String, Vec<String>>);

impl ThemeMapping {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tags for a label (replaces any previous tags)
    #[must_use]
    pub fn with<I, S>(mut self, label: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(label, tags);
        self
    }

    /// Set tags for a label
    pub fn insert<I, S>(&mut self, label: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(label.into(), tags.into_iter().map(Into::into).collect());
    }

    /// Tags for a label, empty if unmapped
    #[must_use]
    pub fn tags(&self, label: &str) -> &[String] {
        self.0.get(label).map_or(&[], Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
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
}

/// Which shipped taxonomy to use for the theme matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    /// Lower-case themes over alphabetical heatmap stages
    #[default]
    Heatmap,
    /// Title-case themes over the swim-lane stages
    Legacy,
}

impl TaxonomyKind {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heatmap => "heatmap",
            Self::Legacy => "legacy",
        }
    }
}

impl Display for TaxonomyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heatmap" | "blue" => Ok(Self::Heatmap),
            "legacy" | "green" => Ok(Self::Legacy),
            other => Err(format!("unknown taxonomy: {other}")),
        }
    }
}

/// Theme vocabulary, stage columns, mapping and stage renames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTaxonomy {
    pub kind: TaxonomyKind,
    /// Matrix rows
    pub themes: Vocabulary,
    /// Matrix columns
    pub stages: Vocabulary,
    pub mapping: ThemeMapping,
    /// Dataset stage name → column name
    #[serde(default)]
    pub stage_aliases: IndexMap<String, String>,
}

impl ThemeTaxonomy {
    #[must_use]
    pub fn new(
        kind: TaxonomyKind,
        themes: Vocabulary,
        stages: Vocabulary,
        mapping: ThemeMapping,
    ) -> Self {
        Self {
            kind,
            themes,
            stages,
            mapping,
            stage_aliases: IndexMap::new(),
        }
    }

    /// With a stage rename applied before column lookup
    #[must_use]
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.stage_aliases.insert(from.into(), to.into());
        self
    }

    /// Column name for a dataset stage
    #[must_use]
    pub fn column_for<'a>(&'a self, stage: &'a str) -> &'a str {
        self.stage_aliases.get(stage).map_or(stage, String::as_str)
    }

    /// Tags for a label, empty if unmapped
    #[inline]
    #[must_use]
    pub fn tags(&self, label: &str) -> &[String] {
        self.mapping.tags(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_label_has_no_tags() {
        let m = ThemeMapping::new().with("a", ["x", "y"]);
        assert_eq!(m.tags("a"), &["x", "y"]);
        assert!(m.tags("missing").is_empty());
    }

    #[test]
    fn taxonomy_alias() {
        let t = ThemeTaxonomy::new(
            TaxonomyKind::Heatmap,
            Vocabulary::new(["t"]),
            Vocabulary::new(["B (renamed)"]),
            ThemeMapping::new(),
        )
        .with_alias("B", "B (renamed)");
        assert_eq!(t.column_for("B"), "B (renamed)");
        assert_eq!(t.column_for("C"), "C");
    }

    #[test]
    fn taxonomy_kind_parse() {
        assert_eq!("Heatmap".parse::<TaxonomyKind>(), Ok(TaxonomyKind::Heatmap));
        assert_eq!("legacy".parse::<TaxonomyKind>(), Ok(TaxonomyKind::Legacy));
        assert!("other".parse::<TaxonomyKind>().is_err());
    }
}
