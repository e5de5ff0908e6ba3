// src/analysis/record.rs
// The combined analysis record returned to callers

use serde::{Deserialize, Serialize};

use super::emotion::EmotionResult;
use super::intent::IntentResult;
use super::sarcasm::SarcasmResult;
use super::subjectivity::SubjectivityResult;
use super::visual::VisualBundle;
use crate::categories::{Emotion, Intent};
use crate::config::FeatureToggles;
use crate::sentiment::BaseSentiment;

/// Which features produced this record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancements {
    pub enabled: FeatureToggles,
}

/// Base sentiment plus every enabled scorer's output.
///
/// A `None` field means the feature was never evaluated, which is not the
/// same thing as a neutral result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub base: BaseSentiment,
    pub description: String,
    pub enhancements: Enhancements,
    #[serde(rename = "emotions", default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sarcasm: Option<SarcasmResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjectivity: Option<SubjectivityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visuals: Option<VisualBundle>,
}

impl AnalysisRecord {
    pub fn score(&self) -> f64 {
        self.base.score
    }

    /// Primary emotion, if emotion detection ran
    pub fn primary_emotion(&self) -> Option<Emotion> {
        self.emotion.as_ref().map(|e| e.primary)
    }

    /// Primary intent, if intent classification ran
    pub fn primary_intent(&self) -> Option<Intent> {
        self.intent.as_ref().map(|i| i.primary)
    }

    /// False when sarcasm detection did not run
    pub fn is_sarcastic(&self) -> bool {
        self.sarcasm.as_ref().is_some_and(|s| s.is_sarcastic)
    }
}
