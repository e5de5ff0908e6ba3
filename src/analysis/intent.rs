// src/analysis/intent.rs
// Intent classifier - weighted pattern matching over six intents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::matching::{matched_terms, strict_winner};
use crate::categories::Intent;
use crate::lexicon::Lexicon;

const STRONG_WEIGHT: u32 = 2;
const WEAK_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub primary: Intent,
    /// max / (max + 1); zero when nothing matched
    pub confidence: f64,
    #[serde(rename = "intents")]
    pub scores: BTreeMap<Intent, u32>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

pub fn classify_intent(lexicon: &Lexicon, text: &str) -> IntentResult {
    let lower = text.to_lowercase();
    let mut scores = BTreeMap::new();
    let mut evidence = Vec::new();

    for intent in Intent::SCORED {
        let (strong, weak) = match lexicon.intent_triggers(intent) {
            Some(triggers) => (
                matched_terms(&lower, &triggers.strong),
                matched_terms(&lower, &triggers.weak),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let score = STRONG_WEIGHT * strong.len() as u32 + WEAK_WEIGHT * weak.len() as u32;
        if score > 0 {
            evidence.push(format!(
                "{}: strong [{}], weak [{}]",
                intent,
                strong.join(", "),
                weak.join(", ")
            ));
        }
        scores.insert(intent, score);
    }

    let (primary, confidence) = match strict_winner(&scores, &Intent::SCORED) {
        Some((intent, max)) => (intent, f64::from(max) / f64::from(max + 1)),
        None => (Intent::Statement, 0.0),
    };

    IntentResult {
        primary,
        confidence,
        scores,
        evidence,
    }
}
