//! Testing utilities for the journey-map workspace
//!
//! Shared touchpoint builders, small datasets and axes.

#![allow(missing_docs)]

use journey_model::{Dataset, Touchpoint, Vocabulary};

pub fn touchpoint(
    stage: &str,
    persona: &str,
    label: &str,
    sentiment: f64,
    frequency: u32,
    confidence: f64,
) -> Touchpoint {
    Touchpoint::new(stage, persona, label).with_scores(sentiment, frequency, confidence)
}

pub fn dataset(rows: Vec<Touchpoint>) -> Dataset {
    Dataset::new(rows).unwrap()
}

/// Two stages × two personas
pub fn small_axes() -> (Vocabulary, Vocabulary) {
    (Vocabulary::new(["S1", "S2"]), Vocabulary::new(["P1", "P2"]))
}

/// A(-0.10, 31), B(0.18, 24), C(0.18, 10), inserted out of risk order
pub fn create_risk_example() -> Dataset {
    dataset(vec![
        touchpoint("S1", "P1", "C", 0.18, 10, 0.9),
        touchpoint("S1", "P2", "B", 0.18, 24, 0.9),
        touchpoint("S2", "P1", "A", -0.10, 31, 0.9),
    ])
}

pub fn create_single_touchpoint() -> Dataset {
    dataset(vec![touchpoint("S1", "P1", "only", 0.3, 12, 0.8)])
}

/// One touchpoint per sentiment, all with the same frequency
pub fn create_uniform_frequency(sentiments: &[f64], frequency: u32) -> Dataset {
    let rows = sentiments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let stage = if i % 2 == 0 { "S1" } else { "S2" };
            touchpoint(stage, "P1", &format!("tp-{i}"), *s, frequency, 0.5)
        })
        .collect();
    dataset(rows)
}
