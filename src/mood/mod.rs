// src/mood/mod.rs
// Mood fusion - one discrete avatar mood per conversational turn

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisRecord;
use crate::categories::Emotion;
use crate::sentiment::BaseSentiment;

/// Weight of the reply's own sentiment in the combined score
pub const REPLY_WEIGHT: f64 = 0.5;
/// Multiplier applied when the user message reads as sarcastic
pub const SARCASM_DAMPING: f64 = 0.5;

/// Avatar mood label
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoodLabel {
    Excited,
    Happy,
    Neutral,
    Sad,
    Angry,
}

impl MoodLabel {
    /// Strict thresholds; a score sitting exactly on a boundary takes the lower mood
    pub fn from_score(score: f64) -> Self {
        if score > 3.0 {
            MoodLabel::Excited
        } else if score > 1.0 {
            MoodLabel::Happy
        } else if score > -1.0 {
            MoodLabel::Neutral
        } else if score > -3.0 {
            MoodLabel::Sad
        } else {
            MoodLabel::Angry
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Fixed pull each emotion exerts on the combined score
pub fn emotion_adjustment(emotion: Emotion) -> f64 {
    match emotion {
        Emotion::Joy => 2.0,
        Emotion::Anger => -2.0,
        Emotion::Sadness => -1.0,
        Emotion::Fear => -1.0,
        Emotion::Surprise => 0.0,
        Emotion::Disgust => -2.0,
        Emotion::Trust => 1.0,
        Emotion::Anticipation => 1.0,
        Emotion::Neutral => 0.0,
    }
}

/// Combined score for a turn: user score, half the reply score, the
/// confidence-weighted emotion pull, then sarcasm damping.
pub fn combined_score(user: &AnalysisRecord, reply: &BaseSentiment) -> f64 {
    let mut score = user.base.score + REPLY_WEIGHT * reply.score;

    if let Some(emotion) = user.emotion.as_ref().filter(|e| !e.primary.is_neutral()) {
        score += emotion.confidence * emotion_adjustment(emotion.primary);
    }

    if user.is_sarcastic() {
        score *= SARCASM_DAMPING;
    }

    score
}

/// Fuse the user's analysis and the reply's base sentiment into a mood.
/// Pure; nothing carries over between turns.
pub fn fuse_mood(user: &AnalysisRecord, reply: &BaseSentiment) -> MoodLabel {
    MoodLabel::from_score(combined_score(user, reply))
}
