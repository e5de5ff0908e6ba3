// src/lexicon/mod.rs
// Category -> trigger tables shared read-only by every scorer

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::categories::{Emotion, Intent};
use crate::error::{MoodError, Result};

/// Sarcasm indicator families, checked in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SarcasmLexicon {
    /// Punctuation runs, matched against the raw text
    pub punctuation: Vec<String>,
    pub phrases: Vec<String>,
    /// Stock sarcastic expressions
    pub patterns: Vec<String>,
    /// Upper-case words that only count when shouted
    pub shout_words: Vec<String>,
}

/// Strong patterns weigh 2, weak keywords weigh 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentLexicon {
    pub strong: Vec<String>,
    pub weak: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectivityLexicon {
    pub opinion: Vec<String>,
    pub subjective_verbs: Vec<String>,
    /// Markers that suppress the subjectivity score
    pub factual: Vec<String>,
}

/// Immutable trigger tables. Build once, wrap in an `Arc`, and hand it to
/// the analyzer; nothing mutates a lexicon after construction.
///
/// Triggers are lower-case substrings, except shout words which are
/// compared upper-case and whole-word. Every list is an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    #[serde(default)]
    pub emotions: BTreeMap<Emotion, Vec<String>>,
    #[serde(default)]
    pub sarcasm: SarcasmLexicon,
    #[serde(default)]
    pub intents: BTreeMap<Intent, IntentLexicon>,
    #[serde(default)]
    pub subjectivity: SubjectivityLexicon,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The builtin English tables
    pub fn builtin() -> Self {
        let mut lexicon = builtin::builtin_lexicon();
        lexicon.normalize();
        lexicon
    }

    /// Parse a lexicon from JSON, normalizing and validating it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.normalize();
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            emotions = lexicon.emotions.len(),
            intents = lexicon.intents.len(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Keywords for one emotion; empty when the category is absent
    pub fn emotion_keywords(&self, emotion: Emotion) -> &[String] {
        self.emotions.get(&emotion).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn intent_triggers(&self, intent: Intent) -> Option<&IntentLexicon> {
        self.intents.get(&intent)
    }

    /// Total number of trigger strings across every table
    pub fn trigger_count(&self) -> usize {
        let emotions: usize = self.emotions.values().map(Vec::len).sum();
        let intents: usize = self.intents.values().map(|i| i.strong.len() + i.weak.len()).sum();
        let sarcasm = &self.sarcasm;
        let subjectivity = &self.subjectivity;
        emotions
            + intents
            + sarcasm.punctuation.len()
            + sarcasm.phrases.len()
            + sarcasm.patterns.len()
            + sarcasm.shout_words.len()
            + subjectivity.opinion.len()
            + subjectivity.subjective_verbs.len()
            + subjectivity.factual.len()
    }

    fn normalize(&mut self) {
        for keywords in self.emotions.values_mut() {
            normalize_terms(keywords, str::to_lowercase);
        }
        for triggers in self.intents.values_mut() {
            normalize_terms(&mut triggers.strong, str::to_lowercase);
            normalize_terms(&mut triggers.weak, str::to_lowercase);
        }

        let sarcasm = &mut self.sarcasm;
        normalize_terms(&mut sarcasm.punctuation, str::to_string);
        normalize_terms(&mut sarcasm.phrases, str::to_lowercase);
        normalize_terms(&mut sarcasm.patterns, str::to_lowercase);
        normalize_terms(&mut sarcasm.shout_words, str::to_uppercase);

        let subjectivity = &mut self.subjectivity;
        normalize_terms(&mut subjectivity.opinion, str::to_lowercase);
        normalize_terms(&mut subjectivity.subjective_verbs, str::to_lowercase);
        normalize_terms(&mut subjectivity.factual, str::to_lowercase);
    }

    fn validate(&self) -> Result<()> {
        let has_emotions = Emotion::SCORED
            .iter()
            .any(|e| !self.emotion_keywords(*e).is_empty());
        let has_intents = Intent::SCORED.iter().any(|i| {
            self.intent_triggers(*i)
                .is_some_and(|t| !t.strong.is_empty() || !t.weak.is_empty())
        });

        if !has_emotions && !has_intents {
            return Err(MoodError::Lexicon(
                "lexicon defines no emotion or intent triggers".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trim, case-fold, drop empties and duplicates while keeping first-seen order
fn normalize_terms(terms: &mut Vec<String>, fold: fn(&str) -> String) {
    let mut seen = HashSet::new();
    let folded: Vec<String> = terms
        .iter()
        .map(|t| fold(t.trim()))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect();
    *terms = folded;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_covers_every_category() {
        let lexicon = Lexicon::builtin();
        for emotion in Emotion::SCORED {
            assert!(!lexicon.emotion_keywords(emotion).is_empty(), "{emotion} empty");
        }
        for intent in Intent::SCORED {
            assert!(lexicon.intent_triggers(intent).is_some(), "{intent} missing");
        }
        assert!(lexicon.emotion_keywords(Emotion::Neutral).is_empty());
        assert!(lexicon.sarcasm.shout_words.contains(&"WOW".to_string()));
    }

    #[test]
    fn test_builtin_terms_are_distinct() {
        let lexicon = Lexicon::builtin();
        let before = lexicon.trigger_count();
        let mut again = lexicon.clone();
        again.normalize();
        assert_eq!(again.trigger_count(), before);
    }

    #[test]
    fn test_normalize_terms() {
        let mut terms = vec![
            "  Happy ".to_string(),
            "happy".to_string(),
            "".to_string(),
            "Glad".to_string(),
        ];
        normalize_terms(&mut terms, str::to_lowercase);
        assert_eq!(terms, vec!["happy", "glad"]);
    }

    #[test]
    fn test_from_json_str_normalizes() {
        let lexicon = Lexicon::from_json_str(
            r#"{
                "emotions": { "joy": ["Yay", "yay", " woohoo "] },
                "sarcasm": { "shoutWords": ["sure"] }
            }"#,
        )
        .unwrap();
        assert_eq!(lexicon.emotion_keywords(Emotion::Joy), ["yay", "woohoo"]);
        assert_eq!(lexicon.sarcasm.shout_words, ["SURE"]);
        assert!(lexicon.intents.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_empty_lexicon() {
        let err = Lexicon::from_json_str(r#"{ "sarcasm": { "phrases": ["sure"] } }"#).unwrap_err();
        assert!(matches!(err, MoodError::Lexicon(_)));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_category() {
        let err = Lexicon::from_json_str(r#"{ "emotions": { "bliss": ["yay"] } }"#).unwrap_err();
        assert!(matches!(err, MoodError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "intents": {{ "greeting": {{ "strong": ["ahoy"], "weak": [] }} }} }}"#
        )
        .unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.intent_triggers(Intent::Greeting).unwrap().strong, ["ahoy"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MoodError::Io(_)));
    }

    #[test]
    fn test_builtin_serializes_and_reloads() {
        let lexicon = Lexicon::builtin();
        let json = serde_json::to_string(&lexicon).unwrap();
        assert_eq!(Lexicon::from_json_str(&json).unwrap(), lexicon);
    }
}
