// src/categories.rs
// Category labels produced by the scorers

use serde::{Deserialize, Serialize};

/// Emotion categories. Declaration order is the tie-break order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
    Trust,
    Anticipation,
    /// No emotional keyword matched
    #[default]
    Neutral,
}

impl Emotion {
    /// The eight scored emotions, in tie-break order
    pub const SCORED: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Trust,
        Emotion::Anticipation,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_neutral(self) -> bool {
        self == Emotion::Neutral
    }
}

/// Communicative intent. Declaration order is the tie-break order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Intent {
    Question,
    Command,
    Complaint,
    Greeting,
    Gratitude,
    Apology,
    /// No actionable intent detected
    #[default]
    Statement,
}

impl Intent {
    /// The six scored intents, in tie-break order
    pub const SCORED: [Intent; 6] = [
        Intent::Question,
        Intent::Command,
        Intent::Complaint,
        Intent::Greeting,
        Intent::Gratitude,
        Intent::Apology,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_statement(self) -> bool {
        self == Intent::Statement
    }
}
