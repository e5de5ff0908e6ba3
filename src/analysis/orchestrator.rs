// src/analysis/orchestrator.rs
// Runs the enabled scorers over one text and assembles the record

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

use super::emotion::detect_emotions;
use super::intent::classify_intent;
use super::record::{AnalysisRecord, Enhancements};
use super::sarcasm::detect_sarcasm;
use super::subjectivity::analyze_subjectivity;
use super::visual::build_visuals;
use crate::config::FeatureToggles;
use crate::error::{MoodError, Result};
use crate::lexicon::Lexicon;
use crate::sentiment::{BaseSentiment, describe_score};

/// Stateless analyzer: immutable toggles plus a shared lexicon.
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    toggles: FeatureToggles,
    lexicon: Arc<Lexicon>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(FeatureToggles::default())
    }
}

impl Analyzer {
    /// Analyzer over the builtin lexicon
    pub fn new(toggles: FeatureToggles) -> Self {
        Self::with_lexicon(toggles, Arc::new(Lexicon::builtin()))
    }

    pub fn with_lexicon(toggles: FeatureToggles, lexicon: Arc<Lexicon>) -> Self {
        Self { toggles, lexicon }
    }

    pub fn toggles(&self) -> &FeatureToggles {
        &self.toggles
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze an untyped input value. Only JSON strings are accepted;
    /// anything else (null included) is `InvalidInput`.
    pub fn analyze(&self, input: &Value, base: &BaseSentiment) -> Result<AnalysisRecord> {
        match input {
            Value::String(text) => Ok(self.analyze_text(text, base)),
            other => Err(MoodError::InvalidInput(format!(
                "expected message text, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Analyze one text. Never fails; empty text yields zero/neutral results.
    pub fn analyze_text(&self, text: &str, base: &BaseSentiment) -> AnalysisRecord {
        let toggles = self.toggles;
        let lexicon = self.lexicon.as_ref();

        let mut record = AnalysisRecord {
            base: base.clone(),
            description: describe_score(base.score).to_string(),
            enhancements: Enhancements { enabled: toggles },
            emotion: toggles
                .emotion_detection
                .then(|| detect_emotions(lexicon, text)),
            sarcasm: toggles
                .sarcasm_detection
                .then(|| detect_sarcasm(lexicon, text)),
            intent: toggles
                .intent_classification
                .then(|| classify_intent(lexicon, text)),
            subjectivity: toggles
                .subjectivity_analysis
                .then(|| analyze_subjectivity(lexicon, text)),
            visuals: None,
        };

        if toggles.visual_outputs {
            record.visuals = Some(build_visuals(
                record.primary_emotion(),
                record.base.score,
                record.primary_intent(),
            ));
        }

        trace!(
            emotion = ?record.primary_emotion(),
            intent = ?record.primary_intent(),
            sarcastic = record.is_sarcastic(),
            "Analyzed message"
        );

        record
    }

    /// Analyze many texts, preserving input order
    pub fn analyze_batch(&self, items: &[(String, BaseSentiment)]) -> Vec<AnalysisRecord> {
        #[cfg(feature = "parallel")]
        let iter = items.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = items.iter();

        iter.map(|(text, base)| self.analyze_text(text, base))
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
