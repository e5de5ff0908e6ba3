// src/analysis/sarcasm.rs
// Sarcasm scorer - four indicator families summed against a fixed ceiling

use serde::{Deserialize, Serialize};

use super::matching::matched_terms;
use crate::lexicon::Lexicon;

/// Raw score that maps to full confidence
pub const SARCASM_CEILING: f64 = 5.0;
/// Confidence above which a message counts as sarcastic
pub const SARCASM_THRESHOLD: f64 = 0.3;
/// Punctuation contributes at most this much
const MAX_PUNCTUATION_SCORE: u32 = 2;
/// Shouted words shorter than this are ignored
const MIN_SHOUT_LEN: usize = 3;

/// The default value is what a disabled detector reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarcasmResult {
    pub is_sarcastic: bool,
    pub confidence: f64,
    /// Sum of the family contributions before normalization
    #[serde(default)]
    pub score: u32,
    /// One entry per contributing family
    #[serde(rename = "indicators")]
    pub evidence: Vec<String>,
}

pub fn detect_sarcasm(lexicon: &Lexicon, text: &str) -> SarcasmResult {
    let indicators = &lexicon.sarcasm;
    let lower = text.to_lowercase();
    let mut score = 0;
    let mut evidence = Vec::new();

    // Distinct punctuation runs in the raw text
    let punctuation = matched_terms(text, &indicators.punctuation);
    if !punctuation.is_empty() {
        evidence.push(format!(
            "Excessive punctuation ({}): {}",
            punctuation.len(),
            punctuation.join(" ")
        ));
        score += (punctuation.len() as u32).min(MAX_PUNCTUATION_SCORE);
    }

    let phrases = matched_terms(&lower, &indicators.phrases);
    if !phrases.is_empty() {
        evidence.push(format!("Sarcastic phrases: {}", phrases.join(", ")));
        score += phrases.len() as u32;
    }

    let patterns = matched_terms(&lower, &indicators.patterns);
    if !patterns.is_empty() {
        evidence.push(format!("Sarcastic patterns: {}", patterns.join(", ")));
        score += patterns.len() as u32;
    }

    // Space-separated words only; "WOW!" does not count as "WOW"
    let shouted: Vec<&str> = text
        .split(' ')
        .filter(|word| {
            word.chars().count() >= MIN_SHOUT_LEN
                && *word == word.to_uppercase()
                && indicators.shout_words.iter().any(|w| w == word)
        })
        .collect();
    if !shouted.is_empty() {
        evidence.push(format!("Excessive capitalization: {}", shouted.join(", ")));
        score += shouted.len() as u32;
    }

    let confidence = (f64::from(score) / SARCASM_CEILING).min(1.0);

    SarcasmResult {
        is_sarcastic: confidence > SARCASM_THRESHOLD,
        confidence,
        score,
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> SarcasmResult {
        detect_sarcasm(&Lexicon::builtin(), text)
    }

    #[test]
    fn test_oh_great_is_sarcastic() {
        let result = detect("Oh great, another meeting!");
        assert!(result.is_sarcastic);
        assert_eq!(result.score, 2);
        assert!((result.confidence - 0.4).abs() < 1e-9);
        assert_eq!(
            result.evidence,
            vec!["Excessive punctuation (1): !", "Sarcastic phrases: oh great"]
        );
    }

    #[test]
    fn test_sincere_message() {
        let result = detect("This is actually really good");
        assert!(!result.is_sarcastic);
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
    }

    #[test]
    fn test_single_indicator_stays_below_threshold() {
        // one "!" scores 1 -> 0.2
        let result = detect("I'm genuinely happy about this!");
        assert!(!result.is_sarcastic);
        assert!((result.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_capped_at_two() {
        // "!", "...", "?!" and "!?" are all present
        let result = detect("what... no?!?");
        assert_eq!(result.score, 2);
        assert!(result.evidence[0].starts_with("Excessive punctuation (4)"));
    }

    #[test]
    fn test_shout_words_need_exact_upper_case_word() {
        let result = detect("WOW that is REALLY Really something WOW!");
        assert_eq!(result.evidence.last().unwrap(), "Excessive capitalization: WOW, REALLY");
        // "!" + 2 shouted words; "really" is not a listed phrase
        assert_eq!(result.score, 3);
        assert!(result.is_sarcastic);
    }

    #[test]
    fn test_lower_case_shout_word_ignored() {
        let result = detect("wow amazing");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_confidence_saturates() {
        let result = detect("Oh great, yeah right, whatever... obviously FANTASTIC!!");
        assert_eq!(result.confidence, 1.0);
        assert!(result.is_sarcastic);
    }

    #[test]
    fn test_disabled_result() {
        let result = SarcasmResult::default();
        assert!(!result.is_sarcastic);
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
    }
}
