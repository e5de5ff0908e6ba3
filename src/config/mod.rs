// src/config/mod.rs
// Feature toggles - read once from the environment at process start

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Environment key for emotion detection
pub const ENV_EMOTION_DETECTION: &str = "ENABLE_EMOTION_DETECTION";
/// Environment key for sarcasm detection
pub const ENV_SARCASM_DETECTION: &str = "ENABLE_SARCASTIC_DETECTION";
/// Environment key for intent classification
pub const ENV_INTENT_CLASSIFICATION: &str = "ENABLE_INTENT_CLASSIFICATION";
/// Environment key for subjectivity analysis
pub const ENV_SUBJECTIVITY_ANALYSIS: &str = "ENABLE_SUBJECTIVITY_ANALYSIS";
/// Environment key for visual outputs
pub const ENV_VISUAL_OUTPUTS: &str = "ENABLE_VISUAL_OUTPUTS";

/// Which analysis features run. Built once and handed to the analyzer;
/// there is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    pub emotion_detection: bool,
    pub sarcasm_detection: bool,
    pub intent_classification: bool,
    pub subjectivity_analysis: bool,
    pub visual_outputs: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            emotion_detection: true,
            sarcasm_detection: true,
            intent_classification: true,
            subjectivity_analysis: true,
            visual_outputs: true,
        }
    }
}

impl FeatureToggles {
    /// Load toggles from the process environment. Unset keys default to enabled.
    pub fn from_env() -> Self {
        let toggles = Self::from_lookup(|key| std::env::var(key).ok());
        toggles.log_status();
        toggles
    }

    /// Load toggles through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| toggle_or_default(key, lookup(key));

        Self {
            emotion_detection: read(ENV_EMOTION_DETECTION),
            sarcasm_detection: read(ENV_SARCASM_DETECTION),
            intent_classification: read(ENV_INTENT_CLASSIFICATION),
            subjectivity_analysis: read(ENV_SUBJECTIVITY_ANALYSIS),
            visual_outputs: read(ENV_VISUAL_OUTPUTS),
        }
    }

    /// Every feature switched off
    pub fn all_disabled() -> Self {
        Self {
            emotion_detection: false,
            sarcasm_detection: false,
            intent_classification: false,
            subjectivity_analysis: false,
            visual_outputs: false,
        }
    }

    /// Names of the enabled features, in a fixed order
    pub fn enabled_features(&self) -> Vec<&'static str> {
        [
            (self.emotion_detection, "emotion detection"),
            (self.sarcasm_detection, "sarcasm detection"),
            (self.intent_classification, "intent classification"),
            (self.subjectivity_analysis, "subjectivity analysis"),
            (self.visual_outputs, "visual outputs"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    /// Get a summary of enabled features
    pub fn summary(&self) -> String {
        let enabled = self.enabled_features();
        if enabled.is_empty() {
            "None".to_string()
        } else {
            enabled.join(", ")
        }
    }

    fn log_status(&self) {
        if self.enabled_features().is_empty() {
            warn!("All analysis features disabled - records will carry base sentiment only");
        } else {
            info!(features = %self.summary(), "Analysis features loaded");
        }
        debug!(toggles = ?self, "Feature toggles");
    }
}

/// Parse a boolean toggle value. Trailing `# comments` from .env files are ignored.
fn parse_bool(value: &str) -> Option<bool> {
    let clean = value.split('#').next().unwrap_or("").trim().to_lowercase();
    match clean.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn toggle_or_default(key: &str, value: Option<String>) -> bool {
    let Some(raw) = value else {
        return true;
    };
    parse_bool(&raw).unwrap_or_else(|| {
        warn!(key, value = %raw, "Unrecognized toggle value, keeping feature enabled");
        true
    })
}
