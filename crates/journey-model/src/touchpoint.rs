//! Touchpoint records
//!
//! A [`Touchpoint`] is one observation on the customer journey: where it
//! happened (stage), who said it (persona), and how it scored.

use serde::{Deserialize, Serialize};

/// One customer-journey observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Touchpoint {
    /// Journey stage name
    pub stage: String,
    /// Persona name
    pub persona: String,
    /// Unique human-readable description, used as lookup key
    pub label: String,
    /// Sentiment score in [-1, 1]
    pub sentiment: f64,
    /// Mention count
    pub frequency: u32,
    /// Extraction confidence in [0, 1]
    pub confidence: f64,
    /// Display glyph for the sentiment bucket
    pub emoji: String,
}

impl Touchpoint {
    /// Create touchpoint with neutral scores
    #[must_use]
    pub fn new(
        stage: impl Into<String>,
        persona: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            stage: stage.into(),
            persona: persona.into(),
            label: label.into(),
            sentiment: 0.0,
            frequency: 0,
            confidence: 1.0,
            emoji: String::new(),
        }
    }

    /// With sentiment, frequency and confidence
    #[inline]
    #[must_use]
    pub fn with_scores(mut self, sentiment: f64, frequency: u32, confidence: f64) -> Self {
        self.sentiment = sentiment;
        self.frequency = frequency;
        self.confidence = confidence;
        self
    }

    /// With display glyph
    #[inline]
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Positive impact score used to rank wins
    #[inline]
    #[must_use]
    pub fn impact(&self) -> f64 {
        self.sentiment * f64::from(self.frequency)
    }

    /// Key shown in the evidence selector: `"{label} — {persona}"`
    #[must_use]
    pub fn display_key(&self) -> String {
        format!("{} — {}", self.label, self.persona)
    }

    /// Sentiment with glyph, e.g. `"0.18 🙂"`
    #[must_use]
    pub fn sentiment_display(&self) -> String {
        if self.emoji.is_empty() {
            format!("{:.2}", self.sentiment)
        } else {
            format!("{:.2} {}", self.sentiment, self.emoji)
        }
    }

    /// Frequency as a mention count, e.g. `"24 mentions"`
    #[must_use]
    pub fn frequency_display(&self) -> String {
        format!("{} mentions", self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touchpoint_builder() {
        let tp = Touchpoint::new("Discover", "CFO", "Budget")
            .with_scores(0.5, 10, 0.9)
            .with_emoji("😄");
        assert_eq!(tp.stage, "Discover");
        assert_eq!(tp.frequency, 10);
        assert!((tp.impact() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn touchpoint_display_helpers() {
        let tp = Touchpoint::new("s", "CRO / ERM", "Board pressure")
            .with_scores(0.18, 24, 0.8)
            .with_emoji("🙂");
        assert_eq!(tp.display_key(), "Board pressure — CRO / ERM");
        assert_eq!(tp.sentiment_display(), "0.18 🙂");
        assert_eq!(tp.frequency_display(), "24 mentions");
    }

    #[test]
    fn negative_sentiment_display() {
        let tp = Touchpoint::new("s", "p", "l").with_scores(-0.1, 1, 0.5);
        assert_eq!(tp.sentiment_display(), "-0.10");
    }
}
