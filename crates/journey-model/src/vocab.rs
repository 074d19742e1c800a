//! Ordered vocabularies
//!
//! Provides [`Vocabulary`], the fixed ordered list of names that defines an
//! axis (stages, personas, themes).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Fixed, ordered set of axis names
///
/// Order is significant: it defines lane/column positions. Membership is
/// never enforced on touchpoints; a value outside the vocabulary simply has
/// no position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(Vec<String>);

impl Vocabulary {
    /// Create vocabulary from entries, dropping repeated names
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.into();
            if !out.contains(&entry) {
                out.push(entry);
            }
        }
        Self(out)
    }

    /// Position of a name on the axis
    #[inline]
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|e| e == name)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
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

    /// Entry at position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate entries in axis order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Entries as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Display for Vocabulary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_positions() {
        let v = Vocabulary::new(["a", "b", "c"]);
        assert_eq!(v.position("b"), Some(1));
        assert_eq!(v.position("z"), None);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(2), Some("c"));
    }

    #[test]
    fn vocabulary_drops_repeats() {
        let v = Vocabulary::new(["a", "b", "a"]);
        assert_eq!(v.as_slice(), &["a", "b"]);
    }

    #[test]
    fn vocabulary_display() {
        let v = Vocabulary::new(["x", "y"]);
        assert_eq!(v.to_string(), "x | y");
    }
}
