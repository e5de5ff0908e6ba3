// src/analysis/subjectivity.rs
// Subjectivity analyzer - opinion vs. factual markers

use serde::{Deserialize, Serialize};

use super::matching::matched_terms;
use crate::lexicon::Lexicon;

/// Raw score that maps to full confidence
pub const SUBJECTIVITY_CEILING: f64 = 10.0;
/// Confidence above which a message counts as subjective
pub const SUBJECTIVITY_THRESHOLD: f64 = 0.3;
const OPINION_WEIGHT: u32 = 2;
const VERB_WEIGHT: u32 = 1;

/// The default value is what a disabled analyzer reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectivityResult {
    pub is_subjective: bool,
    pub confidence: f64,
    #[serde(default)]
    pub score: u32,
    #[serde(rename = "indicators")]
    pub evidence: Vec<String>,
}

pub fn analyze_subjectivity(lexicon: &Lexicon, text: &str) -> SubjectivityResult {
    let markers = &lexicon.subjectivity;
    let lower = text.to_lowercase();
    let mut score = 0u32;
    let mut evidence = Vec::new();

    let opinions = matched_terms(&lower, &markers.opinion);
    if !opinions.is_empty() {
        evidence.push(format!("Opinion words: {}", opinions.join(", ")));
        score += OPINION_WEIGHT * opinions.len() as u32;
    }

    let verbs = matched_terms(&lower, &markers.subjective_verbs);
    if !verbs.is_empty() {
        evidence.push(format!("Subjective verbs: {}", verbs.join(", ")));
        score += VERB_WEIGHT * verbs.len() as u32;
    }

    // Factual markers only pull the score down; they never show up as evidence
    let factual = matched_terms(&lower, &markers.factual);
    score = score.saturating_sub(factual.len() as u32);

    let confidence = (f64::from(score) / SUBJECTIVITY_CEILING).min(1.0);

    SubjectivityResult {
        is_subjective: confidence > SUBJECTIVITY_THRESHOLD,
        confidence,
        score,
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SubjectivityResult {
        analyze_subjectivity(&Lexicon::builtin(), text)
    }

    #[test]
    fn test_data_statement_is_objective() {
        let result = analyze("The data shows a 15% increase");
        assert!(!result.is_subjective);
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
    }

    #[test]
    fn test_opinion_and_verb() {
        // think (+2), believe (+2), love (+1)
        let result = analyze("I think and believe I love it");
        assert_eq!(result.score, 5);
        assert!(result.is_subjective);
        assert_eq!(
            result.evidence,
            vec!["Opinion words: think, believe", "Subjective verbs: love"]
        );
    }

    #[test]
    fn test_factual_markers_floor_at_zero() {
        // like (+1), then fact, data, research, evidence (-4)
        let result = analyze("I like the fact that data from research is evidence");
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.evidence, vec!["Subjective verbs: like"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // feel (+2), prefer (+1) -> 0.3, not above the threshold
        let result = analyze("I feel I prefer tea");
        assert_eq!(result.score, 3);
        assert!(!result.is_subjective);
    }

    #[test]
    fn test_confidence_capped() {
        let result = analyze(
            "I think I believe I feel, in my opinion and view, from my perspective it seems",
        );
        assert_eq!(result.confidence, 1.0);
        assert!(result.is_subjective);
    }

    #[test]
    fn test_disabled_result() {
        let result = SubjectivityResult::default();
        assert!(!result.is_subjective);
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
    }
}
