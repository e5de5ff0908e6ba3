// src/analysis/emotion.rs
// Emotion scorer - keyword share across the eight emotion categories

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::matching::{matched_terms, strict_winner};
use crate::categories::Emotion;
use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub primary: Emotion,
    /// Winner's share of all emotion matches, in [0, 1]
    pub confidence: f64,
    /// Distinct keyword matches per emotion
    #[serde(rename = "emotions")]
    pub scores: BTreeMap<Emotion, u32>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Score `text` against every emotion category.
///
/// Confidence is the winner's share of the total evidence, so a text that
/// fires many categories gets a low confidence even when the winner's own
/// count is high.
pub fn detect_emotions(lexicon: &Lexicon, text: &str) -> EmotionResult {
    let lower = text.to_lowercase();
    let mut scores = BTreeMap::new();
    let mut evidence = Vec::new();

    for emotion in Emotion::SCORED {
        let found = matched_terms(&lower, lexicon.emotion_keywords(emotion));
        if !found.is_empty() {
            evidence.push(format!("{}: {}", emotion, found.join(", ")));
        }
        scores.insert(emotion, found.len() as u32);
    }

    let total: u32 = scores.values().sum();
    let (primary, confidence) = match strict_winner(&scores, &Emotion::SCORED) {
        Some((emotion, max)) => (emotion, f64::from(max) / f64::from(total)),
        None => (Emotion::Neutral, 0.0),
    };

    EmotionResult {
        primary,
        confidence,
        scores,
        evidence,
    }
}
