// src/analysis/visual.rs
// Visual mapper - fixed presentation tuples for already-computed labels

use serde::{Deserialize, Serialize};

use crate::categories::{Emotion, Intent};

/// One presentation tuple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    #[serde(rename = "emoji")]
    pub symbol: String,
    /// Hex color token
    pub color: String,
    pub tag: String,
}

impl Visual {
    fn from_table((symbol, color, tag): (&str, &str, &str)) -> Self {
        Self {
            symbol: symbol.to_string(),
            color: color.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Presentation decoration for a record. A slot is empty when the feature
/// feeding it was not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Visual>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Visual>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Visual>,
}

/// Sign bucket of a base sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// NaN lands in the neutral bucket
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

const STATEMENT_VISUAL: (&str, &str, &str) = ("💬", "#9E9E9E", "STATEMENT");

fn emotion_entry(emotion: Emotion) -> (&'static str, &'static str, &'static str) {
    match emotion {
        Emotion::Joy => ("😊", "#4CAF50", "JOY"),
        Emotion::Anger => ("😠", "#F44336", "ANGER"),
        Emotion::Sadness => ("😢", "#2196F3", "SADNESS"),
        Emotion::Fear => ("😨", "#9C27B0", "FEAR"),
        Emotion::Surprise => ("😲", "#FF9800", "SURPRISE"),
        Emotion::Disgust => ("🤢", "#795548", "DISGUST"),
        Emotion::Trust => ("🤝", "#4CAF50", "TRUST"),
        Emotion::Anticipation => ("🤞", "#FFC107", "ANTICIPATION"),
        Emotion::Neutral => ("😐", "#9E9E9E", "NEUTRAL"),
    }
}

fn polarity_entry(polarity: Polarity) -> (&'static str, &'static str, &'static str) {
    match polarity {
        Polarity::Positive => ("👍", "#4CAF50", "POSITIVE"),
        Polarity::Negative => ("👎", "#F44336", "NEGATIVE"),
        Polarity::Neutral => ("🤷", "#9E9E9E", "NEUTRAL"),
    }
}

fn intent_entry(intent: Intent) -> (&'static str, &'static str, &'static str) {
    match intent {
        Intent::Question => ("❓", "#2196F3", "QUESTION"),
        Intent::Command => ("⚡", "#FF9800", "COMMAND"),
        Intent::Complaint => ("⚠️", "#F44336", "COMPLAINT"),
        Intent::Greeting => ("👋", "#4CAF50", "GREETING"),
        Intent::Gratitude => ("🙏", "#4CAF50", "GRATITUDE"),
        Intent::Apology => ("🙇", "#2196F3", "APOLOGY"),
        Intent::Statement => STATEMENT_VISUAL,
    }
}

pub fn emotion_visual(emotion: Emotion) -> Visual {
    Visual::from_table(emotion_entry(emotion))
}

pub fn sentiment_visual(score: f64) -> Visual {
    Visual::from_table(polarity_entry(Polarity::from_score(score)))
}

pub fn intent_visual(intent: Intent) -> Visual {
    Visual::from_table(intent_entry(intent))
}

/// Emotion visual from a label string; anything unrecognized maps to neutral
pub fn emotion_visual_for_label(label: &str) -> Visual {
    emotion_visual(label.parse().unwrap_or(Emotion::Neutral))
}

/// Intent visual from a label string; anything unrecognized maps to the statement tuple
pub fn intent_visual_for_label(label: &str) -> Visual {
    intent_visual(label.parse().unwrap_or(Intent::Statement))
}

/// Build the bundle from whichever labels were evaluated
pub fn build_visuals(
    emotion: Option<Emotion>,
    sentiment_score: f64,
    intent: Option<Intent>,
) -> VisualBundle {
    VisualBundle {
        emotion: emotion.map(emotion_visual),
        sentiment: Some(sentiment_visual(sentiment_score)),
        intent: intent.map(intent_visual),
    }
}
